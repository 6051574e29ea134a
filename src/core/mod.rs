//! Core types: entities, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_API_BASE, DEFAULT_BACK_IMAGE};
pub use entity::{Entity, EntityId};
pub use error::{ConfigError, FetchError, PreloadError};
pub use rng::GameRng;
