//! Novelspec - 协作小说创作的一致性后端
//!
//! - Domain: novel/, character/, narrative/, world/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use std::sync::Arc;

use novelspec::config::{load_config, print_config, LogConfig};
use novelspec::domain::PermissiveRules;
use novelspec::infrastructure::http::{AppState, HttpServer, ServerConfig};
use novelspec::infrastructure::memory::{
    InMemoryCharacterTracker, InMemoryNarrativeChecker, InMemoryNovelRepository,
    InMemoryWorldValidator,
};

/// 初始化日志，`RUST_LOG` 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},novelspec={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Novelspec - 小说一致性检查服务");
    print_config(&config);

    // 规则谓词由外部提供，默认全部放行
    let rules = Arc::new(PermissiveRules);

    let novels = Arc::new(InMemoryNovelRepository::new());
    let character_tracker = Arc::new(InMemoryCharacterTracker::new());
    let narrative_checker = Arc::new(InMemoryNarrativeChecker::new(rules.clone()));
    let world_validator = Arc::new(InMemoryWorldValidator::new(rules.clone(), rules));

    let state = AppState::new(
        novels,
        character_tracker,
        narrative_checker,
        world_validator,
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.limits.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
