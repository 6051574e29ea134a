//! Game state machine: session, phases, timers.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns the board, counters, picks and the lock
//! - `GamePhase`: Lifecycle position
//! - `Scheduler`: Cancellable delayed callbacks on a virtual clock
//! - `SessionSnapshot`: Read-only projection for renderers

pub mod phase;
#[allow(clippy::module_inception)]
pub mod session;
pub mod timer;

pub use phase::{ClickOutcome, GamePhase, IgnoreReason, Status};
pub use session::{CardView, GameSession, SessionSnapshot};
pub use timer::{Scheduler, Timer, TimerId, TimerKind};
