//! Card system: cards, keys and decks.
//!
//! ## Key Types
//!
//! - `CardKey`: Unique key of a card within a deck
//! - `Card`: One tile, sharing its entity with exactly one other card
//! - `Deck`: Shuffled-once board order of all cards

pub mod card;
pub mod deck;

pub use card::{Card, CardKey};
pub use deck::{CardIndex, Deck};
