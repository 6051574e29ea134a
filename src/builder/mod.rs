//! Deck builder: lookup seam, payload records, deck construction.

pub mod deck_builder;
pub mod lookup;
pub mod records;

pub use deck_builder::{build_deck, sample_unique_ids};
pub use lookup::{fetch_entity, EntityLookup};
pub use records::{resolve_entity, PokemonRecord, SpeciesRecord};
