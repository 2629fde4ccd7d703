//! Collaborator contracts for the rendering/I-O plumbing around a session.
//!
//! The coordinator never talks to a drawing surface or a clock directly; a
//! frontend implements these two traits and pipes command batches through
//! [`dispatch`], delivering [`Event::Elapsed`](crate::Event::Elapsed) back
//! into the coordinator when the scheduled delay fires.

use crate::{Button, Command};
use core::time::Duration;

/// External drawing surface for the five buttons.
pub trait Renderer {
    /// Show `button` in its pressed/active appearance (`lit`) or back in
    /// its idle appearance.
    fn highlight(&mut self, button: Button, lit: bool);
}

/// One-shot delay scheduler. At most one delay is outstanding per session;
/// scheduling a new one may simply replace a pending one.
pub trait Scheduler {
    fn after(&mut self, delay: Duration);
}

/// Applies a command batch to the two collaborators, in order.
pub fn dispatch<R, S>(commands: &[Command], renderer: &mut R, scheduler: &mut S)
where
    R: Renderer,
    S: Scheduler,
{
    for &command in commands {
        match command {
            Command::Light { button, lit } => renderer.highlight(button, lit),
            Command::Wait(delay) => scheduler.after(delay),
        }
    }
}
