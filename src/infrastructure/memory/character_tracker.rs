//! In-Memory Character Tracker Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{CharacterTrackerPort, RelationshipAnalysis};
use crate::domain::character::{
    Character, CharacterError, CharacterId, CharacterName, CharacterProfile, ProfilePatch,
    RelationshipKind,
};
use crate::domain::novel::NovelId;

/// 内存角色存储
///
/// 同一角色的写操作由 DashMap 的条目锁串行化
pub struct InMemoryCharacterTracker {
    characters: DashMap<CharacterId, Character>,
}

impl InMemoryCharacterTracker {
    pub fn new() -> Self {
        Self {
            characters: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryCharacterTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterTrackerPort for InMemoryCharacterTracker {
    fn create(&self, name: CharacterName, profile: CharacterProfile) -> Character {
        let character = Character::new(name, profile);
        self.characters.insert(*character.id(), character.clone());
        character
    }

    fn get(&self, id: &CharacterId) -> Result<Character, CharacterError> {
        self.characters
            .get(id)
            .map(|c| c.clone())
            .ok_or(CharacterError::NotFound(*id))
    }

    fn list(&self, novel_id: Option<&NovelId>) -> Vec<Character> {
        let mut characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|e| novel_id.map_or(true, |n| e.novel_id() == Some(n)))
            .map(|e| e.value().clone())
            .collect();
        characters.sort_by_key(|c| c.created_at());
        characters
    }

    fn update_profile(
        &self,
        id: &CharacterId,
        patch: ProfilePatch,
    ) -> Result<Character, CharacterError> {
        let mut character = self
            .characters
            .get_mut(id)
            .ok_or(CharacterError::NotFound(*id))?;
        character.apply_patch(patch)?;
        Ok(character.clone())
    }

    fn delete(&self, id: &CharacterId) -> Result<(), CharacterError> {
        self.characters
            .remove(id)
            .ok_or(CharacterError::NotFound(*id))?;

        // 清理其他角色指向它的关系
        let mut cleared = 0usize;
        for mut entry in self.characters.iter_mut() {
            if entry.forget(id) {
                cleared += 1;
            }
        }
        tracing::debug!(character_id = %id, cleared = cleared, "Incoming relationships cleared");
        Ok(())
    }

    fn detach_novel(&self, novel_id: &NovelId) -> usize {
        let mut detached = 0usize;
        for mut entry in self.characters.iter_mut() {
            if entry.novel_id() == Some(novel_id) {
                entry.detach_novel();
                detached += 1;
            }
        }
        detached
    }

    fn analyze(
        &self,
        id: &CharacterId,
        target: Option<&CharacterId>,
    ) -> Result<RelationshipAnalysis, CharacterError> {
        // 先复制出来，避免持有条目锁时再遍历
        let character = self.get(id)?;

        if let Some(target) = target {
            if !self.characters.contains_key(target) {
                return Err(CharacterError::NotFound(*target));
            }
            let mut analysis = RelationshipAnalysis::new();
            analysis.insert(*target, character.relationship_with(target));
            return Ok(analysis);
        }

        let analysis = self
            .characters
            .iter()
            .filter(|entry| entry.key() != id)
            .map(|entry| (*entry.key(), character.mutual_view(entry.value())))
            .collect();
        Ok(analysis)
    }

    fn update_relationship(
        &self,
        id: &CharacterId,
        target: &CharacterId,
        kind: RelationshipKind,
        value: f64,
    ) -> Result<(), CharacterError> {
        kind.check(value)?;
        if !self.characters.contains_key(target) {
            return Err(CharacterError::NotFound(*target));
        }

        {
            let mut character = self
                .characters
                .get_mut(id)
                .ok_or(CharacterError::NotFound(*id))?;
            character.set_relationship(*target, kind, value)?;
        }

        // target 在写入期间被删除时，删除方的清理可能早于本次写入
        if !self.characters.contains_key(target) {
            if let Some(mut character) = self.characters.get_mut(id) {
                character.forget(target);
            }
            return Err(CharacterError::NotFound(*target));
        }

        tracing::debug!(
            character_id = %id,
            target_id = %target,
            kind = %kind,
            value = value,
            "Relationship score stored"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(tracker: &InMemoryCharacterTracker, name: &str) -> Character {
        let name = CharacterName::new(name).unwrap();
        tracker.create(name, CharacterProfile::default())
    }

    fn create_in(tracker: &InMemoryCharacterTracker, name: &str, novel_id: NovelId) -> Character {
        let profile = CharacterProfile {
            novel_id: Some(novel_id),
            ..Default::default()
        };
        tracker.create(CharacterName::new(name).unwrap(), profile)
    }

    #[test]
    fn test_character_lifecycle() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");

        // Get
        assert_eq!(tracker.get(a.id()).unwrap().name().as_str(), "Aria");

        // Update
        let updated = tracker
            .update_profile(
                a.id(),
                ProfilePatch {
                    skills: Some(vec!["archery".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.skills(), ["archery".to_string()]);
        assert!(updated.updated_at() >= updated.created_at());

        // Delete
        tracker.delete(a.id()).unwrap();
        assert!(matches!(
            tracker.get(a.id()),
            Err(CharacterError::NotFound(_))
        ));
        assert!(tracker.delete(a.id()).is_err());
    }

    #[test]
    fn test_analyze_without_target_covers_every_other_character() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");
        let b = create(&tracker, "Bran");
        let c = create(&tracker, "Cato");

        tracker
            .update_relationship(a.id(), b.id(), RelationshipKind::Friendship, 0.8)
            .unwrap();
        tracker
            .update_relationship(b.id(), a.id(), RelationshipKind::Friendship, 0.4)
            .unwrap();
        tracker
            .update_relationship(c.id(), a.id(), RelationshipKind::Rivalry, -1.0)
            .unwrap();

        let analysis = tracker.analyze(a.id(), None).unwrap();
        assert_eq!(analysis.len(), 2);
        assert!(!analysis.contains_key(a.id()));
        for scores in analysis.values() {
            assert_eq!(scores.len(), RelationshipKind::ALL.len());
        }
        assert!((analysis[b.id()][&RelationshipKind::Friendship] - 0.6).abs() < 1e-9);
        assert!((analysis[c.id()][&RelationshipKind::Rivalry] + 0.5).abs() < 1e-9);
        assert_eq!(analysis[c.id()][&RelationshipKind::Friendship], 0.0);
    }

    #[test]
    fn test_analyze_with_target_is_one_directional() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");
        let b = create(&tracker, "Bran");
        tracker
            .update_relationship(b.id(), a.id(), RelationshipKind::Mentor, 0.9)
            .unwrap();

        let analysis = tracker.analyze(a.id(), Some(b.id())).unwrap();
        assert_eq!(analysis.len(), 1);
        let scores = &analysis[b.id()];
        assert_eq!(scores.len(), RelationshipKind::ALL.len());
        assert!(scores.values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_analyze_unknown_ids() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");

        assert!(matches!(
            tracker.analyze(&CharacterId::new(), None),
            Err(CharacterError::NotFound(_))
        ));
        assert!(matches!(
            tracker.analyze(a.id(), Some(&CharacterId::new())),
            Err(CharacterError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_relationship_refreshes_timestamp() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");
        let b = create(&tracker, "Bran");

        tracker
            .update_relationship(a.id(), b.id(), RelationshipKind::Romance, 0.3)
            .unwrap();

        let stored = tracker.get(a.id()).unwrap();
        assert!(stored.updated_at() >= a.updated_at());
        assert_eq!(
            stored.relationships()[b.id()][&RelationshipKind::Romance],
            0.3
        );
        // 对方不受影响
        assert!(tracker.get(b.id()).unwrap().relationships().is_empty());
    }

    #[test]
    fn test_delete_removes_incoming_relationships() {
        let tracker = InMemoryCharacterTracker::new();
        let a = create(&tracker, "Aria");
        let b = create(&tracker, "Bran");
        tracker
            .update_relationship(a.id(), b.id(), RelationshipKind::Family, 1.0)
            .unwrap();

        tracker.delete(b.id()).unwrap();

        assert!(tracker.get(a.id()).unwrap().relationships().is_empty());
        assert!(tracker.analyze(a.id(), None).unwrap().is_empty());
    }

    #[test]
    fn test_list_is_scoped_by_novel() {
        let tracker = InMemoryCharacterTracker::new();
        let novel = NovelId::new();
        let a = create_in(&tracker, "Aria", novel);
        create_in(&tracker, "Bran", NovelId::new());
        create(&tracker, "Cato");

        assert_eq!(tracker.list(None).len(), 3);
        let scoped = tracker.list(Some(&novel));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id(), a.id());
        assert!(tracker.list(Some(&NovelId::new())).is_empty());
    }

    #[test]
    fn test_detach_novel_keeps_characters() {
        let tracker = InMemoryCharacterTracker::new();
        let novel = NovelId::new();
        let a = create_in(&tracker, "Aria", novel);
        create_in(&tracker, "Bran", novel);

        assert_eq!(tracker.detach_novel(&novel), 2);
        assert!(tracker.list(Some(&novel)).is_empty());
        assert_eq!(tracker.get(a.id()).unwrap().novel_id(), None);
        assert_eq!(tracker.detach_novel(&novel), 0);
    }

    #[test]
    fn test_relationship_to_concurrently_deleted_character_never_dangles() {
        for _ in 0..200 {
            let tracker = Arc::new(InMemoryCharacterTracker::new());
            let a = create(&tracker, "Aria");
            let b = create(&tracker, "Bran");

            let writer = {
                let tracker = Arc::clone(&tracker);
                let (a, b) = (*a.id(), *b.id());
                std::thread::spawn(move || {
                    tracker.update_relationship(&a, &b, RelationshipKind::Rivalry, 0.5)
                })
            };
            tracker.delete(b.id()).unwrap();
            let result = writer.join().unwrap();

            let stored = tracker.get(a.id()).unwrap();
            assert!(!stored.relationships().contains_key(b.id()));
            if let Err(e) = result {
                assert!(matches!(e, CharacterError::NotFound(id) if id == *b.id()));
            }
        }
    }
}
