//! # pokememo
//!
//! A Pokémon memory-matching game engine.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: No rendering, no input handling. Any front end
//!    drives the game through `start`, `click`, `restart` and clock ticks,
//!    and draws from `SessionSnapshot`.
//!
//! 2. **Deterministic**: ID sampling, key tokens and the shuffle come from
//!    a seeded ChaCha8 RNG. Timers run on a virtual clock the host
//!    advances. Same seed, same lookups, same clicks: same game.
//!
//! 3. **All-or-Nothing Decks**: A board is either fully built and
//!    preloaded or not installed at all.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, RNG, configuration, errors
//! - `cards`: Cards, keys and decks
//! - `builder`: Entity lookup seam and deck construction
//! - `preload`: Best-effort image preloading
//! - `session`: The game state machine and its timers
//! - `game`: Driver tying builder, preloader and session together
//! - `pokeapi`: HTTP implementation of the lookup and cache seams

pub mod core;
pub mod cards;
pub mod builder;
pub mod preload;
pub mod session;
pub mod game;
pub mod pokeapi;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Entity, EntityId, FetchError, GameConfig, GameRng, PreloadError, DEFAULT_API_BASE,
    DEFAULT_BACK_IMAGE,
};

pub use crate::cards::{Card, CardIndex, CardKey, Deck};

pub use crate::builder::{build_deck, sample_unique_ids, EntityLookup, PokemonRecord, SpeciesRecord};

pub use crate::preload::{preload, unique_images, ImageCache, PreloadReport};

pub use crate::session::{
    CardView, ClickOutcome, GamePhase, GameSession, IgnoreReason, Scheduler, SessionSnapshot,
    Status, TimerKind,
};

pub use crate::game::MemoryGame;
pub use crate::pokeapi::PokeApi;
