//! Lookup payloads and the name/image resolution policy.
//!
//! Two records describe one entity:
//! - `PokemonRecord`: default name and sprite URLs
//! - `SpeciesRecord`: localized names
//!
//! Only the fields the game reads are modelled; everything else in the
//! payload is ignored. Missing fields deserialize to `None`/empty.

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityId};
use crate::core::error::FetchError;

/// Core record: `/pokemon/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonRecord {
    pub id: Option<u32>,
    /// Default identifier string, e.g. `pikachu`.
    pub name: String,
    pub sprites: Sprites,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: OtherSprites,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Artwork,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// Localized-name record: `/pokemon-species/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesRecord {
    pub names: Vec<LocalizedName>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
}

impl PokemonRecord {
    /// Build a record with the given sprites (test and fixture helper).
    pub fn new(
        id: u32,
        name: impl Into<String>,
        artwork: Option<&str>,
        sprite: Option<&str>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            sprites: Sprites {
                front_default: sprite.map(str::to_string),
                other: OtherSprites {
                    official_artwork: Artwork {
                        front_default: artwork.map(str::to_string),
                    },
                },
            },
        }
    }

    /// High-resolution artwork, else the plain sprite.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        non_empty(self.sprites.other.official_artwork.front_default.as_deref())
            .or_else(|| non_empty(self.sprites.front_default.as_deref()))
    }
}

impl SpeciesRecord {
    /// Build a record from `(language, name)` pairs.
    pub fn new<'a>(names: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|(language, name)| LocalizedName {
                    name: name.to_string(),
                    language: NamedResource { name: language.to_string() },
                })
                .collect(),
        }
    }

    /// Name of the first entry tagged `language`, if that name is non-empty.
    ///
    /// Later entries for the same language are not consulted.
    #[must_use]
    pub fn localized(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.language.name == language)
            .and_then(|n| non_empty(Some(n.name.as_str())))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Join the two records of entity `id` into display data.
///
/// The localized name wins over the default identifier. Fails with
/// `FetchError::Data` when neither image field is usable.
pub fn resolve_entity(
    id: EntityId,
    pokemon: &PokemonRecord,
    species: &SpeciesRecord,
    language: &str,
) -> Result<Entity, FetchError> {
    let image = pokemon.image().ok_or(FetchError::Data { id })?;
    let name = species.localized(language).unwrap_or(pokemon.name.as_str());
    let id = pokemon.id.map(EntityId).unwrap_or(id);

    Ok(Entity::new(id, name, image))
}
