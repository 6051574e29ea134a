//! Session phases, click outcomes and status messages.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `Loading → Ready → Revealing → Playing ⇄ Evaluating → Won`, with
/// `Loading → Failed` when the deck cannot be built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a deck.
    #[default]
    Loading,
    /// Deck built and preloaded; waiting for start.
    Ready,
    /// Every card face-up for the reveal window.
    Revealing,
    /// Accepting picks.
    Playing,
    /// A mismatched pair is on display.
    Evaluating,
    /// Every pair matched.
    Won,
    /// Deck construction failed; a restart is needed.
    Failed,
}

impl GamePhase {
    /// Has the deck finished loading?
    #[must_use]
    pub fn is_loaded(self) -> bool {
        !matches!(self, GamePhase::Loading | GamePhase::Failed)
    }
}

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    NotStarted,
    Locked,
    AlreadyMatched,
    AlreadyFaceUp,
    UnknownCard,
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// No-op; state is unchanged.
    Ignored(IgnoreReason),
    /// Card flipped and recorded as the first pick.
    FirstPick,
    /// Second pick matched the first. `won` is set on the final pair.
    Matched { won: bool },
    /// Second pick did not match; both flip back when the timer fires.
    Mismatched,
}

impl ClickOutcome {
    /// Did the click change state?
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, ClickOutcome::Ignored(_))
    }
}

/// User-facing status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Loading,
    Ready { reveal_ms: u64 },
    Revealing { reveal_ms: u64 },
    Playing,
    Matched { matches: u32, pairs: usize },
    Mismatched,
    Won { moves: u32 },
    Failed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Loading => write!(f, "Loading Pokémon cards..."),
            Status::Ready { reveal_ms } => write!(
                f,
                "Ready! Press start to see every card for {}.",
                seconds(*reveal_ms)
            ),
            Status::Revealing { reveal_ms } => {
                write!(f, "All cards revealed for {}!", seconds(*reveal_ms))
            }
            Status::Playing => write!(f, "Go! Flip cards to find matching Pokémon pairs."),
            Status::Matched { matches, pairs } => write!(f, "Match! ({matches}/{pairs})"),
            Status::Mismatched => write!(f, "No match! Try again."),
            Status::Won { moves } => write!(f, "You won! Total moves: {moves}"),
            Status::Failed => write!(f, "Failed to load cards. Please try again later."),
        }
    }
}

// Rounded to tenths: 2500 -> "2.5 seconds", 2000 -> "2 seconds", 1000 -> "1 second"
fn seconds(millis: u64) -> String {
    let tenths = millis.saturating_add(50) / 100;
    let unit = if tenths == 10 { "second" } else { "seconds" };
    if tenths % 10 == 0 {
        format!("{} {unit}", tenths / 10)
    } else {
        format!("{}.{} {unit}", tenths / 10, tenths % 10)
    }
}
