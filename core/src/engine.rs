use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::{Color, ColorSource, GameError, Result, SubmitOutcome};

/// State machine for one game from start to finish.
///
/// A round alternates between two phases: the game reveals colors one by one
/// via [`reveal_next`](Self::reveal_next) until the sequence reaches its
/// target length, then the player replays them in order via
/// [`submit`](Self::submit). A full replay scores one point and starts the
/// next, longer round. The first wrong color ends the game for good; a
/// finished engine only answers reads and is replaced, never reused.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundEngine {
    sequence: VecDeque<Color>,
    score: u32,
    over: bool,
    player_turn: bool,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// True when the player may submit. Always false on a finished game,
    /// whatever phase it ended in.
    pub fn is_player_turn(&self) -> bool {
        !self.over && self.player_turn
    }

    /// Colors still to be replayed in the current phase.
    pub fn pending(&self) -> usize {
        self.sequence.len()
    }

    /// Sequence length the current round's reveal phase runs up to.
    /// Round 1 shows 3 colors, round 2 shows 4, and so on.
    fn target_len(&self) -> usize {
        self.score as usize + 3
    }

    /// Draws the next color from `source` and appends it to the sequence.
    ///
    /// Call repeatedly while [`is_player_turn`](Self::is_player_turn) stays
    /// false; once the sequence reaches its target length the engine flips
    /// to the replay phase and further reveals fail with
    /// [`GameError::PlayerTurn`].
    pub fn reveal_next(&mut self, source: &mut impl ColorSource) -> Result<Color> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if self.player_turn {
            return Err(GameError::PlayerTurn);
        }

        let color = source.next_color();
        self.sequence.push_back(color);

        if self.sequence.len() == self.target_len() {
            self.player_turn = true;
        }

        Ok(color)
    }

    /// Plays `color` against the head of the sequence.
    ///
    /// A match consumes the head; emptying the sequence completes the round,
    /// scores a point and hands the turn back to the game. A mismatch ends
    /// the game and reports the expected color via
    /// [`GameError::BadColor`].
    pub fn submit(&mut self, color: Color) -> Result<SubmitOutcome> {
        if self.over {
            return Err(GameError::GameOver);
        }
        if !self.player_turn {
            return Err(GameError::GameTurn);
        }

        match self.sequence.front().copied() {
            // unreachable while the phase flags hold: the replay phase always
            // starts with a full sequence
            None => Err(GameError::GameTurn),
            Some(want) if want != color => {
                self.over = true;
                log::debug!("game over at score {}: got {color:?}, want {want:?}", self.score);
                Err(GameError::BadColor { got: color, want })
            }
            Some(_) => {
                self.sequence.pop_front();
                if self.sequence.is_empty() {
                    self.player_turn = false;
                    self.score += 1;
                    log::debug!("round complete, score now {}", self.score);
                    Ok(SubmitOutcome::RoundComplete)
                } else {
                    Ok(SubmitOutcome::Accepted)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedColorSource;
    use Color::*;

    fn reveal_phase(engine: &mut RoundEngine, source: &mut ScriptedColorSource) -> alloc::vec::Vec<Color> {
        let mut shown = alloc::vec::Vec::new();
        while !engine.is_player_turn() {
            shown.push(engine.reveal_next(source).unwrap());
        }
        shown
    }

    #[test]
    fn fresh_engine_starts_on_the_game_turn() {
        let engine = RoundEngine::new();

        assert_eq!(engine.score(), 0);
        assert!(!engine.is_over());
        assert!(!engine.is_player_turn());
        assert_eq!(engine.pending(), 0);
    }

    #[test]
    fn full_replay_scores_one_point() {
        let mut source = ScriptedColorSource::new([Green, Red, Yellow]);
        let mut engine = RoundEngine::new();

        let shown = reveal_phase(&mut engine, &mut source);
        assert_eq!(shown, [Green, Red, Yellow]);

        assert_eq!(engine.submit(Green).unwrap(), SubmitOutcome::Accepted);
        assert_eq!(engine.submit(Red).unwrap(), SubmitOutcome::Accepted);
        assert_eq!(engine.submit(Yellow).unwrap(), SubmitOutcome::RoundComplete);

        assert_eq!(engine.score(), 1);
        assert!(!engine.is_player_turn());
        assert!(!engine.is_over());
    }

    #[test]
    fn round_n_reveals_n_plus_three_colors() {
        let mut source = ScriptedColorSource::new([Blue]);
        let mut engine = RoundEngine::new();

        for round in 0..4u32 {
            let shown = reveal_phase(&mut engine, &mut source);
            assert_eq!(shown.len(), round as usize + 3);
            assert_eq!(engine.pending(), round as usize + 3);

            for _ in 0..shown.len() {
                engine.submit(Blue).unwrap();
            }
            assert_eq!(engine.score(), round + 1);
        }
    }

    #[test]
    fn mismatch_ends_the_game_and_names_the_expected_color() {
        let mut source = ScriptedColorSource::new([Green, Red, Yellow]);
        let mut engine = RoundEngine::new();

        reveal_phase(&mut engine, &mut source);
        engine.submit(Green).unwrap();

        assert_eq!(
            engine.submit(Blue),
            Err(GameError::BadColor {
                got: Blue,
                want: Red,
            })
        );
        assert!(engine.is_over());
        assert!(!engine.is_player_turn());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn finished_engine_rejects_everything_and_stays_frozen() {
        let mut source = ScriptedColorSource::new([Green, Red, Yellow]);
        let mut engine = RoundEngine::new();

        reveal_phase(&mut engine, &mut source);
        let _ = engine.submit(Red);
        assert!(engine.is_over());

        let snapshot = engine.clone();
        assert_eq!(engine.submit(Green), Err(GameError::GameOver));
        assert_eq!(engine.reveal_next(&mut source), Err(GameError::GameOver));
        assert_eq!(engine, snapshot);
    }

    #[test]
    fn submit_before_any_reveal_is_the_game_turn() {
        let mut engine = RoundEngine::new();

        assert_eq!(engine.submit(Green), Err(GameError::GameTurn));
        assert!(!engine.is_over());
    }

    #[test]
    fn reveal_during_the_replay_phase_is_the_player_turn() {
        let mut source = ScriptedColorSource::new([Green, Red, Yellow]);
        let mut engine = RoundEngine::new();

        reveal_phase(&mut engine, &mut source);

        assert_eq!(engine.reveal_next(&mut source), Err(GameError::PlayerTurn));
        assert_eq!(engine.pending(), 3);
    }

    #[test]
    fn mid_game_engine_survives_a_serde_round_trip() {
        let mut source = ScriptedColorSource::new([Green, Red, Yellow]);
        let mut engine = RoundEngine::new();

        reveal_phase(&mut engine, &mut source);
        engine.submit(Green).unwrap();

        let saved = serde_json::to_string(&engine).unwrap();
        let mut restored: RoundEngine = serde_json::from_str(&saved).unwrap();

        assert_eq!(restored, engine);
        assert_eq!(restored.submit(Red).unwrap(), SubmitOutcome::Accepted);
        assert_eq!(restored.submit(Yellow).unwrap(), SubmitOutcome::RoundComplete);
    }
}
