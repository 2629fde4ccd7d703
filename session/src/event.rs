use crate::Button;
use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Input consumed by the coordinator, one at a time, in order.
///
/// `Press`/`Release` come from the input surface; `Elapsed` is the
/// completion of the single outstanding [`Command::Wait`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Press(Button),
    Release(Button),
    Elapsed,
}

/// Instruction emitted by the coordinator for the frontend to apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Show `button` in its pressed/active look (`lit`) or idle look.
    Light { button: Button, lit: bool },
    /// Schedule a one-shot timer; deliver [`Event::Elapsed`] when it fires.
    Wait(Duration),
}

/// Ordered batch of commands produced by one event. Small by construction:
/// no transition emits more than a light change and a wait.
pub type Commands = SmallVec<[Command; 4]>;
