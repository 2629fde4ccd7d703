use crate::{Button, Command, Commands, Event, Pacing};
use ripetito_core::{Color, ColorSource, GameError, RoundEngine, SubmitOutcome};

/// Toggles emitted by the failure animation: 3 full on/off cycles,
/// ending with the target button unlit.
const BLINK_TOGGLES: u8 = 6;

/// Where the session currently stands. One phase is active at a time and
/// every phase owns the little state it needs, so an impossible
/// phase/event combination simply has no arm to land in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// No active session; waiting for a center release.
    Idle,
    /// Showing the sequence. `lit` tracks which half of the highlight
    /// beat the current color is in.
    Revealing { color: Color, lit: bool },
    /// The player's turn to replay the sequence.
    Awaiting,
    /// Failure animation: blinking the color the player should have
    /// pressed.
    Blinking {
        target: Color,
        lit: bool,
        toggles_left: u8,
    },
}

/// Sequences a [`RoundEngine`] through whole sessions.
///
/// Feed it every input and timer event through [`handle`](Self::handle)
/// and apply the returned commands; at most one [`Command::Wait`] is
/// outstanding at any time, and a stale [`Event::Elapsed`] arriving in a
/// phase that is not waiting is ignored.
#[derive(Clone, Debug)]
pub struct Coordinator<S> {
    source: S,
    pacing: Pacing,
    engine: Option<RoundEngine>,
    phase: Phase,
}

impl<S: ColorSource> Coordinator<S> {
    pub fn new(source: S) -> Self {
        Self::with_pacing(source, Pacing::default())
    }

    pub fn with_pacing(source: S, pacing: Pacing) -> Self {
        Self {
            source,
            pacing,
            engine: None,
            phase: Phase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// The active engine, if a session is running.
    pub fn engine(&self) -> Option<&RoundEngine> {
        self.engine.as_ref()
    }

    pub fn score(&self) -> Option<u32> {
        self.engine.as_ref().map(RoundEngine::score)
    }

    /// Consumes one event and returns the commands it produced.
    pub fn handle(&mut self, event: Event) -> Commands {
        log::trace!("{event:?} in {:?}", self.phase);

        let mut cmds = Commands::new();
        match self.phase {
            Phase::Idle => self.on_idle(event, &mut cmds),
            Phase::Revealing { color, lit } => self.on_revealing(color, lit, event, &mut cmds),
            Phase::Awaiting => self.on_awaiting(event, &mut cmds),
            Phase::Blinking {
                target,
                lit,
                toggles_left,
            } => self.on_blinking(target, lit, toggles_left, event, &mut cmds),
        }
        cmds
    }

    fn on_idle(&mut self, event: Event, cmds: &mut Commands) {
        match event {
            Event::Press(button) => cmds.push(light(button, true)),
            Event::Release(button) => {
                cmds.push(light(button, false));
                if button == Button::Center {
                    log::debug!("starting a new session");
                    self.engine = Some(RoundEngine::new());
                    self.begin_reveal(cmds);
                }
            }
            Event::Elapsed => log::trace!("stale timer in idle, ignored"),
        }
    }

    fn on_revealing(&mut self, color: Color, lit: bool, event: Event, cmds: &mut Commands) {
        match event {
            Event::Elapsed if !lit => {
                cmds.push(light(color.into(), true));
                cmds.push(Command::Wait(self.pacing.reveal));
                self.phase = Phase::Revealing { color, lit: true };
            }
            Event::Elapsed => {
                cmds.push(light(color.into(), false));
                if self.engine.as_ref().is_some_and(RoundEngine::is_player_turn) {
                    log::debug!("reveal phase done, awaiting replay");
                    self.phase = Phase::Awaiting;
                } else {
                    self.begin_reveal(cmds);
                }
            }
            Event::Press(_) | Event::Release(_) => {
                log::trace!("input ignored during the reveal phase");
            }
        }
    }

    fn on_awaiting(&mut self, event: Event, cmds: &mut Commands) {
        match event {
            Event::Press(button) => cmds.push(light(button, true)),
            Event::Release(button) => {
                cmds.push(light(button, false));
                match button {
                    Button::Center => log::debug!("center release mid-session, ignored"),
                    Button::Color(color) => self.play(color, cmds),
                }
            }
            Event::Elapsed => log::trace!("stale timer while awaiting input, ignored"),
        }
    }

    fn on_blinking(
        &mut self,
        target: Color,
        lit: bool,
        toggles_left: u8,
        event: Event,
        cmds: &mut Commands,
    ) {
        match event {
            Event::Elapsed => {
                let lit = !lit;
                cmds.push(light(target.into(), lit));

                let toggles_left = toggles_left - 1;
                if toggles_left == 0 {
                    log::debug!("failure animation done, session over");
                    self.engine = None;
                    self.phase = Phase::Idle;
                } else {
                    cmds.push(Command::Wait(self.pacing.blink));
                    self.phase = Phase::Blinking {
                        target,
                        lit,
                        toggles_left,
                    };
                }
            }
            Event::Press(_) | Event::Release(_) => {
                log::trace!("input ignored during the failure animation");
            }
        }
    }

    /// Draws the next color and schedules its highlight beat.
    fn begin_reveal(&mut self, cmds: &mut Commands) {
        let Some(engine) = self.engine.as_mut() else {
            self.abort("reveal requested without an active engine");
            return;
        };

        match engine.reveal_next(&mut self.source) {
            Ok(color) => {
                cmds.push(Command::Wait(self.pacing.reveal));
                self.phase = Phase::Revealing { color, lit: false };
            }
            Err(err) => self.engine_rejected(err),
        }
    }

    fn play(&mut self, color: Color, cmds: &mut Commands) {
        let Some(engine) = self.engine.as_mut() else {
            self.abort("submit without an active engine");
            return;
        };

        match engine.submit(color) {
            Ok(SubmitOutcome::Accepted) => {}
            Ok(SubmitOutcome::RoundComplete) => self.begin_reveal(cmds),
            Err(GameError::BadColor { want, .. }) => {
                log::debug!("wrong color, blinking {want:?}");
                cmds.push(Command::Wait(self.pacing.blink));
                self.phase = Phase::Blinking {
                    target: want,
                    lit: false,
                    toggles_left: BLINK_TOGGLES,
                };
            }
            Err(err) => self.engine_rejected(err),
        }
    }

    /// An engine rejection other than `BadColor` means the coordinator
    /// drove the engine out of turn; the phase tracking above is supposed
    /// to make that impossible.
    fn engine_rejected(&mut self, err: GameError) {
        debug_assert!(false, "engine rejected a coordinated call: {err}");
        self.abort("engine rejected a coordinated call");
    }

    fn abort(&mut self, reason: &str) {
        log::error!("{reason}, dropping the session");
        self.engine = None;
        self.phase = Phase::Idle;
    }
}

const fn light(button: Button, lit: bool) -> Command {
    Command::Light { button, lit }
}
