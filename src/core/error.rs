//! Error types for deck construction.

use thiserror::Error;

use super::entity::EntityId;

/// A deck cannot be built from the requested shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pair count must be at least 1")]
    NoPairs,

    #[error("inverted ID range: {min} > {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("ID range holds {available} entities, {pairs} pairs requested")]
    RangeTooSmall { pairs: usize, available: u64 },
}

/// Deck construction failed. Any variant aborts the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The lookup service answered with a non-success status.
    #[error("lookup for entity {id} failed with status {status}")]
    Network { id: EntityId, status: u16 },

    /// The request never produced a status, or its payload was unreadable.
    #[error("lookup for entity {id} failed: {message}")]
    Transport { id: EntityId, message: String },

    /// No renderable image could be resolved for the entity.
    #[error("no image for entity {id}")]
    Data { id: EntityId },

    #[error("invalid deck request: {0}")]
    Config(#[from] ConfigError),
}

impl FetchError {
    /// Whether this failure came from talking to the lookup service.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::Transport { .. })
    }

    /// Entity the failure is attributed to, if any.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            FetchError::Network { id, .. }
            | FetchError::Transport { id, .. }
            | FetchError::Data { id } => Some(*id),
            FetchError::Config(_) => None,
        }
    }
}

/// One image could not be fetched into the cache.
///
/// Never fatal: the preloader logs it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreloadError {
    #[error("image {url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("image {url} could not be fetched: {message}")]
    Transport { url: String, message: String },
}
