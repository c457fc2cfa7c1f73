// src/games/mod.rs

//! Game sessions: linear question sessions (quiz, true/false) and the
//! term-matching round.

pub mod board;
pub mod matching;
pub mod session;

pub use board::GameBoard;
pub use matching::{MatchResult, MatchingRound};
pub use session::{GameSession, Phase, SessionView};

use std::fmt;

use serde::Serialize;

use crate::error::AppError;

/// A question that can be asked, answered and graded.
pub trait GameQuestion: Clone {
    type Answer: Clone + PartialEq + fmt::Debug + Serialize;
    type View: Serialize;

    fn correct_answer(&self) -> Self::Answer;

    /// Whether `answer` is a legal choice for this question at all.
    fn accepts(&self, _answer: &Self::Answer) -> bool {
        true
    }

    /// Client-facing view; the answer is only revealed once `reveal` is set.
    fn view(&self, reveal: bool) -> Self::View;

    fn is_correct(&self, answer: &Self::Answer) -> bool {
        *answer == self.correct_answer()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The current question already has an answer.
    AlreadyAnswered,
    /// `advance` was called before answering.
    NotAnswered,
    /// The session is over.
    Finished,
    /// The answer is not one of the question's choices.
    InvalidAnswer,
    /// A term or definition id that is not part of this round.
    UnknownItem(u32),
    /// No game has been started yet.
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyAnswered => f.write_str("Question already answered"),
            GameError::NotAnswered => f.write_str("Answer the current question first"),
            GameError::Finished => f.write_str("Game is complete"),
            GameError::InvalidAnswer => f.write_str("Answer is not one of the options"),
            GameError::UnknownItem(id) => write!(f, "Item {id} is not part of this round"),
            GameError::NotStarted => f.write_str("No game in progress"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidAnswer | GameError::UnknownItem(_) => AppError::BadRequest(err.to_string()),
            GameError::NotStarted => AppError::NotFound(err.to_string()),
            GameError::AlreadyAnswered | GameError::NotAnswered | GameError::Finished => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

/// End-of-game feedback tier.
pub fn score_message(score: usize, total: usize) -> &'static str {
    let percentage = if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    };

    if percentage >= 80.0 {
        "Excellent! You have great cybersecurity knowledge!"
    } else if percentage >= 60.0 {
        "Good job! Keep learning to strengthen your security awareness."
    } else {
        "Keep practicing! Every bit of security knowledge helps protect you."
    }
}
