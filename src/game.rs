//! Game driver: deck builder → preloader → session.
//!
//! `MemoryGame` is the surface a UI layer drives. It owns the lookup, the
//! image cache, the seeded RNG and the current session, and exposes the
//! three user actions (`restart`, `start`, `click`) plus clock ticks.

use tracing::{error, info};

use crate::builder::{build_deck, EntityLookup};
use crate::core::config::GameConfig;
use crate::core::error::FetchError;
use crate::core::rng::GameRng;
use crate::preload::{preload, unique_images, ImageCache, PreloadReport};
use crate::session::{ClickOutcome, GameSession, SessionSnapshot};

/// A memory game bound to a lookup service and an image cache.
pub struct MemoryGame<L, C> {
    config: GameConfig,
    rng: GameRng,
    lookup: L,
    cache: C,
    session: GameSession,
}

impl<L, C> MemoryGame<L, C>
where
    L: EntityLookup,
    C: ImageCache,
{
    /// Create a game. No deck is built until `restart`.
    pub fn new(config: GameConfig, lookup: L, cache: C) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            session: GameSession::new(&config),
            config,
            lookup,
            cache,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Throw away the current board and build a fresh one.
    ///
    /// Pending timers of the old board are cancelled before anything else.
    /// On failure the session lands in `Failed` with start disabled and the
    /// error is returned; no partial deck is ever installed.
    pub async fn restart(&mut self) -> Result<PreloadReport, FetchError> {
        self.session.reset();
        let rng = self.rng.fork();

        let deck = match build_deck(&self.lookup, &rng, &self.config).await {
            Ok(deck) => deck,
            Err(err) => {
                error!(%err, "deck build failed");
                self.session.fail(&err);
                return Err(err);
            }
        };

        let images =
            unique_images(std::iter::once(self.config.back_image.as_str()).chain(deck.images()));
        self.cache.retain(&images);
        let report = preload(&self.cache, images).await;
        info!(
            loaded = report.loaded,
            failed = report.failed.len(),
            "images preloaded"
        );

        self.session.load(deck);
        Ok(report)
    }

    /// Begin the reveal. Returns false unless the board is ready.
    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    /// Click a card by key.
    pub fn click(&mut self, key: &str) -> ClickOutcome {
        self.session.click(key)
    }

    /// Let `elapsed_ms` pass on the game clock.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.session.advance(elapsed_ms);
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[must_use]
    pub fn matches(&self) -> u32 {
        self.session.matches()
    }

    #[must_use]
    pub fn status(&self) -> String {
        self.session.status_text()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }
}
