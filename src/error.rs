//! Error kinds for the engine.
//!
//! Every public operation that can fail returns `Result<_, Error>` instead of
//! a C-style sentinel (negative count, null pointer, boolean false); a
//! `thiserror` enum carries the same information through ordinary
//! `?`-propagation.

use thiserror::Error;

/// Something went wrong building or using an [`crate::Automaton`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// `register`/`register_ex` was called with a zero-length pattern.
    #[error("pattern must be at least one byte long")]
    EmptyPattern,

    /// Registering this pattern would create a node beyond the arena's
    /// fixed capacity. The arena never grows; callers that can't bound the
    /// pattern set up front must pick a larger capacity at creation time.
    #[error("automaton arena is full (capacity exceeded)")]
    ArenaFull,

    /// A search or replace operation was attempted before `compile` ran.
    #[error("automaton has not been compiled yet")]
    NotCompiled,

    /// `compile` was called a second time without an intervening `reset`.
    #[error("automaton is already compiled")]
    AlreadyCompiled,
}

pub type Result<T> = std::result::Result<T, Error>;
