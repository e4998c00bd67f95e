//! HTTP Handlers

mod character;
mod narrative;
mod novel;
mod ping;
mod world;

pub use character::*;
pub use narrative::*;
pub use novel::*;
pub use ping::*;
pub use world::*;
