//! HTTP client for PokeAPI.
//!
//! `PokeApi` implements both seams the game needs:
//! - `EntityLookup` over `{base}/pokemon/{id}` and `{base}/pokemon-species/{id}`
//! - `ImageCache` by downloading artwork into an in-memory map
//!
//! Cloning is cheap: clones share the HTTP connection pool and the image
//! cache, so one instance can serve as both lookup and cache. The cache
//! holds the images of the current board only; each restart evicts the
//! rest through `ImageCache::retain`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::builder::{EntityLookup, PokemonRecord, SpeciesRecord};
use crate::core::config::{GameConfig, DEFAULT_API_BASE};
use crate::core::entity::EntityId;
use crate::core::error::{FetchError, PreloadError};
use crate::preload::ImageCache;

/// PokeAPI client with a shared image cache.
#[derive(Clone, Debug)]
pub struct PokeApi {
    client: reqwest::Client,
    base: String,
    images: Arc<Mutex<FxHashMap<String, Vec<u8>>>>,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl PokeApi {
    /// Create a client for the given base URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            images: Arc::default(),
        }
    }

    /// Create a client for the configured base URL.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.api_base.as_str())
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn pokemon_url(&self, id: EntityId) -> String {
        format!("{}/pokemon/{}", self.base, id.raw())
    }

    #[must_use]
    pub fn species_url(&self, id: EntityId) -> String {
        format!("{}/pokemon-species/{}", self.base, id.raw())
    }

    /// Is `url` already in the image cache?
    #[must_use]
    pub fn is_cached(&self, url: &str) -> bool {
        self.images().contains_key(url)
    }

    /// Cached bytes for `url`.
    #[must_use]
    pub fn cached_image(&self, url: &str) -> Option<Vec<u8>> {
        self.images().get(url).cloned()
    }

    /// Number of cached images.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.images().len()
    }

    // The map stays consistent across a panicking holder: every write is a
    // single insert or retain.
    fn images(&self) -> MutexGuard<'_, FxHashMap<String, Vec<u8>>> {
        self.images.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        id: EntityId,
    ) -> Result<T, FetchError> {
        let transport = |err: reqwest::Error| FetchError::Transport {
            id,
            message: err.to_string(),
        };

        debug!(%url, "lookup");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network {
                id,
                status: status.as_u16(),
            });
        }
        response.json::<T>().await.map_err(transport)
    }
}

#[async_trait]
impl EntityLookup for PokeApi {
    async fn fetch_pokemon(&self, id: EntityId) -> Result<PokemonRecord, FetchError> {
        self.get_json(self.pokemon_url(id), id).await
    }

    async fn fetch_species(&self, id: EntityId) -> Result<SpeciesRecord, FetchError> {
        self.get_json(self.species_url(id), id).await
    }
}

#[async_trait]
impl ImageCache for PokeApi {
    async fn load(&self, url: &str) -> Result<(), PreloadError> {
        if self.is_cached(url) {
            return Ok(());
        }

        let transport = |err: reqwest::Error| PreloadError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PreloadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(transport)?;

        self.images().insert(url.to_string(), bytes.to_vec());
        Ok(())
    }

    fn retain(&self, urls: &[String]) {
        let mut images = self.images();
        let before = images.len();
        images.retain(|url, _| urls.iter().any(|keep| keep == url));
        debug!(evicted = before - images.len(), "image cache trimmed");
    }
}
