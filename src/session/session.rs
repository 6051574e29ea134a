//! The game session: one board, its counters and its turn state.
//!
//! ## Flow
//!
//! 1. `load(deck)` once the deck is built and preloaded (`Loading → Ready`)
//! 2. `start()` flips every card and schedules the reveal timer
//! 3. `advance(ms)` fires due timers; reveal end opens the board
//! 4. `click(key)` records picks and evaluates pairs
//! 5. `reset()` discards the board and every pending timer
//!
//! All transitions happen on discrete calls; nothing runs concurrently.
//!
//! ```
//! use pokememo::cards::Deck;
//! use pokememo::core::{Entity, EntityId, GameConfig, GameRng};
//! use pokememo::session::{ClickOutcome, GamePhase, GameSession};
//!
//! let entities = vec![Entity::new(EntityId(1), "이상해씨", "1.png")];
//! let deck = Deck::from_entities(&entities, &mut GameRng::new(1));
//! let (a, b) = (deck.cards()[0].key.clone(), deck.cards()[1].key.clone());
//!
//! let mut session = GameSession::new(&GameConfig::default());
//! session.load(deck);
//! session.start();
//! session.advance(2_500);
//!
//! assert_eq!(session.click(a.as_str()), ClickOutcome::FirstPick);
//! assert_eq!(session.click(b.as_str()), ClickOutcome::Matched { won: true });
//! assert_eq!(session.phase(), GamePhase::Won);
//! assert_eq!(session.moves(), 1);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::phase::{ClickOutcome, GamePhase, IgnoreReason, Status};
use super::timer::{Scheduler, Timer, TimerKind};
use crate::cards::{CardIndex, CardKey, Deck};
use crate::core::config::GameConfig;
use crate::core::entity::EntityId;
use crate::core::error::FetchError;

/// Renderer-facing projection of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub key: CardKey,
    pub entity_id: EntityId,
    pub name: String,
    pub image: String,
    pub face_up: bool,
    pub matched: bool,
}

/// Everything a renderer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub moves: u32,
    pub matches: u32,
    pub pair_count: usize,
    pub status: String,
    pub can_start: bool,
    pub locked: bool,
    /// Cards in board order.
    pub cards: Vec<CardView>,
}

/// A single game board.
#[derive(Clone, Debug)]
pub struct GameSession {
    phase: GamePhase,
    deck: Deck,
    face_up: Vec<bool>,
    index: FxHashMap<CardKey, CardIndex>,

    moves: u32,
    matches: u32,

    ready: bool,
    started: bool,
    locked: bool,

    // Positions in `deck`; never own the cards.
    first_pick: Option<CardIndex>,
    second_pick: Option<CardIndex>,

    status: Status,
    scheduler: Scheduler,
    generation: u64,

    reveal_ms: u64,
    mismatch_ms: u64,
}

impl GameSession {
    /// Create an empty session waiting for a deck.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Loading,
            deck: Deck::default(),
            face_up: Vec::new(),
            index: FxHashMap::default(),
            moves: 0,
            matches: 0,
            ready: false,
            started: false,
            locked: true,
            first_pick: None,
            second_pick: None,
            status: Status::Loading,
            scheduler: Scheduler::new(),
            generation: 0,
            reveal_ms: config.reveal_ms,
            mismatch_ms: config.mismatch_ms,
        }
    }

    // === Observers ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Board generation; bumped on every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Picks awaiting evaluation, in click order.
    #[must_use]
    pub fn picks(&self) -> (Option<CardIndex>, Option<CardIndex>) {
        (self.first_pick, self.second_pick)
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Status line as shown to the user.
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Is the start action available?
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.phase == GamePhase::Ready
    }

    /// Final move count once every pair is matched.
    #[must_use]
    pub fn final_moves(&self) -> Option<u32> {
        (self.phase == GamePhase::Won).then_some(self.moves)
    }

    /// Is the card at `index` currently face-up?
    #[must_use]
    pub fn is_face_up(&self, index: CardIndex) -> bool {
        self.face_up.get(index).copied().unwrap_or(false)
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.face_up.iter().filter(|&&up| up).count()
    }

    /// Board position of a card key.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<CardIndex> {
        self.index.get(key).copied()
    }

    /// Milliseconds until the next pending timer fires.
    #[must_use]
    pub fn next_timer_in(&self) -> Option<u64> {
        self.scheduler.next_due_in()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Renderer projection of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let cards = self
            .deck
            .iter()
            .zip(&self.face_up)
            .map(|(card, &face_up)| CardView {
                key: card.key.clone(),
                entity_id: card.entity_id,
                name: card.name.clone(),
                image: card.image.clone(),
                face_up,
                matched: card.matched,
            })
            .collect();

        SessionSnapshot {
            phase: self.phase,
            moves: self.moves,
            matches: self.matches,
            pair_count: self.pair_count(),
            status: self.status_text(),
            can_start: self.can_start(),
            locked: self.locked,
            cards,
        }
    }

    // === Lifecycle ===

    /// Discard the board: cancel timers, clear counters and picks.
    ///
    /// Timers scheduled before the reset are dropped, and the generation
    /// bump makes any that slip through act on nothing.
    pub fn reset(&mut self) {
        let dropped = self.scheduler.cancel_all();
        self.generation += 1;

        self.phase = GamePhase::Loading;
        self.deck = Deck::default();
        self.face_up.clear();
        self.index.clear();
        self.moves = 0;
        self.matches = 0;
        self.ready = false;
        self.started = false;
        self.locked = true;
        self.clear_picks();
        self.status = Status::Loading;

        debug!(generation = self.generation, dropped_timers = dropped, "session reset");
    }

    /// Install a built, preloaded deck (`Loading → Ready`).
    ///
    /// Returns false, leaving the session untouched, outside `Loading`.
    pub fn load(&mut self, deck: Deck) -> bool {
        if self.phase != GamePhase::Loading {
            return false;
        }

        self.face_up = vec![false; deck.len()];
        self.index = deck.index_by_key();
        self.deck = deck;
        self.ready = true;
        self.phase = GamePhase::Ready;
        self.status = Status::Ready { reveal_ms: self.reveal_ms };

        info!(cards = self.deck.len(), "board ready");
        true
    }

    /// Record a failed deck build (`Loading → Failed`).
    ///
    /// The start action stays disabled until a reset and a successful load.
    pub fn fail(&mut self, error: &FetchError) -> bool {
        if self.phase != GamePhase::Loading {
            return false;
        }

        self.phase = GamePhase::Failed;
        self.ready = false;
        self.locked = true;
        self.status = Status::Failed;

        debug!(%error, "board failed to load");
        true
    }

    /// Start the game (`Ready → Revealing`): every card face-up, board locked.
    pub fn start(&mut self) -> bool {
        if !self.ready || self.started {
            return false;
        }

        self.started = true;
        self.locked = true;
        self.face_up.iter_mut().for_each(|up| *up = true);
        self.phase = GamePhase::Revealing;
        self.status = Status::Revealing { reveal_ms: self.reveal_ms };
        self.scheduler.schedule(self.reveal_ms, self.generation, TimerKind::RevealEnd);

        debug!(reveal_ms = self.reveal_ms, "reveal started");
        true
    }

    /// Click the card with the given key.
    pub fn click(&mut self, key: &str) -> ClickOutcome {
        match self.index_of(key) {
            Some(index) => self.click_at(index),
            None => ClickOutcome::Ignored(IgnoreReason::UnknownCard),
        }
    }

    /// Click the card at a board position.
    pub fn click_at(&mut self, index: CardIndex) -> ClickOutcome {
        if let Some(reason) = self.ignore_reason(index) {
            return ClickOutcome::Ignored(reason);
        }

        self.face_up[index] = true;

        let Some(first) = self.first_pick else {
            self.first_pick = Some(index);
            return ClickOutcome::FirstPick;
        };

        self.second_pick = Some(index);
        self.moves += 1;
        self.locked = true;

        if self.deck.cards()[first].pairs_with(&self.deck.cards()[index]) {
            self.resolve_match(first, index)
        } else {
            self.phase = GamePhase::Evaluating;
            self.status = Status::Mismatched;
            self.scheduler.schedule(self.mismatch_ms, self.generation, TimerKind::MismatchEnd);
            debug!(moves = self.moves, "mismatch");
            ClickOutcome::Mismatched
        }
    }

    /// Advance the clock by `elapsed_ms`, firing every timer that comes due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some(timer) = self.scheduler.pop_due(target) {
            self.fire(timer);
        }
        self.scheduler.settle(target);
    }

    // === Internals ===

    fn ignore_reason(&self, index: CardIndex) -> Option<IgnoreReason> {
        if !self.started {
            return Some(IgnoreReason::NotStarted);
        }
        if self.locked {
            return Some(IgnoreReason::Locked);
        }
        let Some(card) = self.deck.get(index) else {
            return Some(IgnoreReason::UnknownCard);
        };
        if card.matched {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if self.face_up[index] {
            return Some(IgnoreReason::AlreadyFaceUp);
        }
        None
    }

    fn resolve_match(&mut self, first: CardIndex, second: CardIndex) -> ClickOutcome {
        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.matched = true;
            }
        }
        self.matches += 1;
        self.clear_picks();
        self.locked = false;

        let won = self.matches as usize == self.pair_count();
        if won {
            self.phase = GamePhase::Won;
            self.status = Status::Won { moves: self.moves };
            info!(moves = self.moves, "all pairs matched");
        } else {
            self.phase = GamePhase::Playing;
            self.status = Status::Matched {
                matches: self.matches,
                pairs: self.pair_count(),
            };
            debug!(matches = self.matches, moves = self.moves, "match");
        }
        ClickOutcome::Matched { won }
    }

    fn fire(&mut self, timer: Timer) {
        if timer.generation != self.generation {
            debug!(kind = ?timer.kind, "stale timer ignored");
            return;
        }

        match timer.kind {
            TimerKind::RevealEnd if self.phase == GamePhase::Revealing => {
                for (card, up) in self.deck.iter().zip(self.face_up.iter_mut()) {
                    if !card.matched {
                        *up = false;
                    }
                }
                self.locked = false;
                self.phase = GamePhase::Playing;
                self.status = Status::Playing;
                debug!("reveal ended");
            }
            TimerKind::MismatchEnd if self.phase == GamePhase::Evaluating => {
                for index in [self.first_pick, self.second_pick].into_iter().flatten() {
                    self.face_up[index] = false;
                }
                self.clear_picks();
                self.locked = false;
                self.phase = GamePhase::Playing;
            }
            kind => debug!(?kind, phase = ?self.phase, "timer fired out of phase"),
        }
    }

    fn clear_picks(&mut self) {
        self.first_pick = None;
        self.second_pick = None;
    }
}
