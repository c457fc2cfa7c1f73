// src/games/board.rs

use std::sync::Mutex;

use crate::models::question::{QuizQuestion, TrueFalseQuestion};

use super::{GameSession, MatchingRound};

/// The in-progress game of each kind. One player, so one slot per game.
#[derive(Debug, Default)]
pub struct GameBoard {
    pub quiz: Mutex<Option<GameSession<QuizQuestion>>>,
    pub true_false: Mutex<Option<GameSession<TrueFalseQuestion>>>,
    pub matching: Mutex<Option<MatchingRound>>,
}

impl GameBoard {
    /// Drops every in-progress game. Called whenever the session user
    /// changes so games never carry over between users.
    pub fn clear(&self) {
        with_slot(&self.quiz, |game| *game = None);
        with_slot(&self.true_false, |game| *game = None);
        with_slot(&self.matching, |round| *round = None);
        tracing::debug!("Game board cleared");
    }
}

/// Runs `f` with the slot locked. A poisoned lock is recovered; the slot
/// only ever holds plain data.
pub fn with_slot<T, R>(slot: &Mutex<T>, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = slot.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut guard)
}
