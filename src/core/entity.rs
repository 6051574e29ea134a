//! Entities: the distinct Pokémon a deck is built from.
//!
//! An `Entity` is resolved once per game from the lookup service and is
//! immutable afterwards. Two cards in a deck share each entity.
//!
//! ```
//! use pokememo::core::{Entity, EntityId};
//!
//! let pikachu = Entity::new(EntityId(25), "피카츄", "https://img/25.png");
//! assert_eq!(pikachu.id, EntityId(25));
//! assert_eq!(pikachu.id.to_string(), "#25");
//! ```

use serde::{Deserialize, Serialize};

/// Numeric identifier of an entity in the lookup service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Display data for one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Lookup ID.
    pub id: EntityId,

    /// Display name (localized when available).
    pub name: String,

    /// Artwork URL for the card face.
    pub image: String,
}

impl Entity {
    /// Create an entity.
    pub fn new(id: EntityId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}
