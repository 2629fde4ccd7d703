//! Turn-taking protocol layer for the ripetito memory game.
//!
//! [`Coordinator`] drives a [`ripetito_core::RoundEngine`] through a whole
//! session: it consumes button and timer [`Event`]s and answers with
//! [`Command`] batches that a frontend applies to its drawing surface and
//! timer (see [`render`]). The coordinator itself never blocks and never
//! touches a clock; pacing is expressed as explicit [`Command::Wait`]
//! suspension points.

#![no_std]

extern crate alloc;

pub use button::*;
pub use coordinator::*;
pub use event::*;
pub use render::*;

mod button;
mod coordinator;
mod event;
pub mod render;

use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Animation pacing for a session.
///
/// `blink` is deliberately shorter than `reveal`: the failure animation is
/// a rapid flutter, the reveal phase a readable beat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Delay between reveal-phase highlight steps.
    pub reveal: Duration,
    /// Delay between failure-blink toggles.
    pub blink: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(300),
            blink: Duration::from_millis(100),
        }
    }
}
