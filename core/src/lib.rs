#![no_std]

extern crate alloc;

pub use engine::*;
pub use error::*;
pub use source::*;
pub use types::*;

mod engine;
mod error;
mod source;
mod types;

/// Outcome of a successful [`RoundEngine::submit`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The color matched the head of the sequence; more colors remain.
    Accepted,
    /// The color matched and emptied the sequence: the round is won, the
    /// score was incremented and the next reveal phase may begin.
    RoundComplete,
}

impl SubmitOutcome {
    pub const fn completed_round(self) -> bool {
        match self {
            Self::Accepted => false,
            Self::RoundComplete => true,
        }
    }
}
