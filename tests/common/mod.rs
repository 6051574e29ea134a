//! In-memory lookup and cache fixtures shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use pokememo::{
    CardIndex, EntityId, EntityLookup, FetchError, GameSession, ImageCache, PokemonRecord,
    PreloadError, SpeciesRecord,
};

/// Artwork URL the fixture lookup serves for `id`.
pub fn artwork(id: u32) -> String {
    format!("https://img.test/artwork/{id}.png")
}

/// Lookup serving a record for every ID, with opt-in failures.
#[derive(Default)]
pub struct FixtureLookup {
    failing: HashMap<u32, u16>,
    failing_species: HashMap<u32, u16>,
    unreachable: HashSet<u32>,
    missing_image: HashSet<u32>,
    sprite_only: HashSet<u32>,
    no_localized_name: HashSet<u32>,
    calls: AtomicUsize,
}

impl FixtureLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Core lookups for `id` answer with `status`.
    pub fn with_failure(mut self, id: u32, status: u16) -> Self {
        self.failing.insert(id, status);
        self
    }

    /// Species lookups for `id` answer with `status`.
    pub fn with_species_failure(mut self, id: u32, status: u16) -> Self {
        self.failing_species.insert(id, status);
        self
    }

    /// Core lookups for `id` never reach the service.
    pub fn with_transport_failure(mut self, id: u32) -> Self {
        self.unreachable.insert(id);
        self
    }

    /// `id` has neither artwork nor sprite.
    pub fn without_image(mut self, id: u32) -> Self {
        self.missing_image.insert(id);
        self
    }

    /// `id` has only the low-resolution sprite.
    pub fn sprite_only(mut self, id: u32) -> Self {
        self.sprite_only.insert(id);
        self
    }

    /// `id` has no name in the configured language.
    pub fn without_localized_name(mut self, id: u32) -> Self {
        self.no_localized_name.insert(id);
        self
    }

    /// Total lookups served (core + species).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityLookup for FixtureLookup {
    async fn fetch_pokemon(&self, id: EntityId) -> Result<PokemonRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(&status) = self.failing.get(&id.raw()) {
            return Err(FetchError::Network { id, status });
        }
        if self.unreachable.contains(&id.raw()) {
            return Err(FetchError::Transport {
                id,
                message: "connection refused".to_string(),
            });
        }

        let raw = id.raw();
        let art = artwork(raw);
        let sprite = format!("https://img.test/sprite/{raw}.png");
        let record = if self.missing_image.contains(&raw) {
            PokemonRecord::new(raw, format!("mon-{raw}"), None, None)
        } else if self.sprite_only.contains(&raw) {
            PokemonRecord::new(raw, format!("mon-{raw}"), None, Some(sprite.as_str()))
        } else {
            PokemonRecord::new(raw, format!("mon-{raw}"), Some(art.as_str()), Some(sprite.as_str()))
        };
        Ok(record)
    }

    async fn fetch_species(&self, id: EntityId) -> Result<SpeciesRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(&status) = self.failing_species.get(&id.raw()) {
            return Err(FetchError::Network { id, status });
        }
        let raw = id.raw();
        let english = format!("Mon {raw}");
        let korean = format!("포켓몬 {raw}");
        if self.no_localized_name.contains(&raw) {
            Ok(SpeciesRecord::new([("en", english.as_str())]))
        } else {
            Ok(SpeciesRecord::new([("en", english.as_str()), ("ko", korean.as_str())]))
        }
    }
}

/// Cache recording every load, with opt-in failures.
#[derive(Default)]
pub struct RecordingCache {
    failing: HashSet<String>,
    loaded: Mutex<Vec<String>>,
    retained: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }

    /// URLs attempted, in completion order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.lock().unwrap().clone()
    }

    /// Working set passed to the last `retain`.
    pub fn retained(&self) -> Vec<String> {
        self.retained.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageCache for RecordingCache {
    async fn load(&self, url: &str) -> Result<(), PreloadError> {
        self.loaded.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(PreloadError::Status {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok(())
    }

    fn retain(&self, urls: &[String]) {
        *self.retained.lock().unwrap() = urls.to_vec();
    }
}

/// Board positions of both cards of `entity`.
pub fn pair_of(session: &GameSession, entity: u32) -> (CardIndex, CardIndex) {
    let found: Vec<CardIndex> = session
        .deck()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.entity_id == EntityId(entity))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(found.len(), 2, "entity {entity} should have exactly two cards");
    (found[0], found[1])
}

/// Key of the card at `index`.
pub fn key_at(session: &GameSession, index: CardIndex) -> String {
    session.deck().cards()[index].key.to_string()
}
