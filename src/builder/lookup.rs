//! Entity lookup seam.
//!
//! The deck builder only sees this trait. `PokeApi` implements it over
//! HTTP; tests implement it with in-memory fixtures.

use async_trait::async_trait;

use super::records::{resolve_entity, PokemonRecord, SpeciesRecord};
use crate::core::entity::{Entity, EntityId};
use crate::core::error::FetchError;

/// Key-value lookup of entity records by numeric ID.
///
/// ## Implementation Notes
///
/// - A non-success response must map to `FetchError::Network`
/// - A request that produced no usable payload maps to `FetchError::Transport`
/// - Both lookups for one ID may be in flight at the same time
#[async_trait]
pub trait EntityLookup: Send + Sync {
    /// Fetch the core record (default name, sprites).
    async fn fetch_pokemon(&self, id: EntityId) -> Result<PokemonRecord, FetchError>;

    /// Fetch the localized-name record.
    async fn fetch_species(&self, id: EntityId) -> Result<SpeciesRecord, FetchError>;
}

/// Fetch both records of one entity concurrently and join them.
pub async fn fetch_entity<L>(lookup: &L, id: EntityId, language: &str) -> Result<Entity, FetchError>
where
    L: EntityLookup + ?Sized,
{
    let (pokemon, species) =
        futures::try_join!(lookup.fetch_pokemon(id), lookup.fetch_species(id))?;
    resolve_entity(id, &pokemon, &species, language)
}
