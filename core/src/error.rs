use crate::Color;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("player turn, submit a color instead of revealing")]
    PlayerTurn,
    #[error("game turn, wait for the reveal phase to finish")]
    GameTurn,
    #[error("bad color {got:?}, want {want:?}")]
    BadColor { got: Color, want: Color },
}

pub type Result<T> = core::result::Result<T, GameError>;
