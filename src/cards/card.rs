//! Cards: one physical tile on the board.
//!
//! Every entity is duplicated into two cards that differ only in their
//! `CardKey`. The `matched` flag is the only field mutated during play.

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityId};
use crate::core::rng::GameRng;

/// Unique key of a card within a deck.
///
/// Formatted as `{entity}-{dup_index}-{token}` where `token` is 16 hex
/// digits drawn from the deck RNG.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(pub String);

impl CardKey {
    /// Build a key for copy `dup_index` of `entity`.
    pub fn generate(entity: EntityId, dup_index: u8, rng: &mut GameRng) -> Self {
        Self(format!("{}-{}-{}", entity.raw(), dup_index, rng.hex_token()))
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique key within the deck.
    pub key: CardKey,

    /// Entity this card shows. Shared with exactly one other card.
    pub entity_id: EntityId,

    /// Display name of the entity.
    pub name: String,

    /// Face artwork URL.
    pub image: String,

    /// Has this card been paired?
    pub matched: bool,
}

impl Card {
    /// Create copy `dup_index` of an entity.
    pub fn from_entity(entity: &Entity, dup_index: u8, rng: &mut GameRng) -> Self {
        Self {
            key: CardKey::generate(entity.id, dup_index, rng),
            entity_id: entity.id,
            name: entity.name.clone(),
            image: entity.image.clone(),
            matched: false,
        }
    }

    /// Create both copies of an entity.
    pub fn pair(entity: &Entity, rng: &mut GameRng) -> [Card; 2] {
        [Self::from_entity(entity, 0, rng), Self::from_entity(entity, 1, rng)]
    }

    /// Do two cards show the same entity?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.entity_id == other.entity_id
    }

    /// Label shown under the artwork, e.g. `#25 • 피카츄`.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{} • {}", self.entity_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_shares_entity_with_distinct_keys() {
        let mut rng = GameRng::new(42);
        let entity = Entity::new(EntityId(25), "피카츄", "25.png");

        let [a, b] = Card::pair(&entity, &mut rng);

        assert!(a.pairs_with(&b));
        assert_ne!(a.key, b.key);
        assert!(a.key.as_str().starts_with("25-0-"));
        assert!(b.key.as_str().starts_with("25-1-"));
        assert!(!a.matched && !b.matched);
    }

    #[test]
    fn test_badge() {
        let mut rng = GameRng::new(1);
        let card = Card::from_entity(&Entity::new(EntityId(7), "꼬부기", "7.png"), 0, &mut rng);
        assert_eq!(card.badge(), "#7 • 꼬부기");
    }
}
