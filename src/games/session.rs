// src/games/session.rs

use serde::Serialize;

use super::{GameError, GameQuestion, score_message};

/// Where a linear session stands.
///
/// `AwaitingAnswer → AnswerShown → AwaitingAnswer … → Complete`. Answering
/// the last question goes straight to `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingAnswer,
    AnswerShown,
    Complete,
}

/// One play-through of a fixed question list.
#[derive(Debug, Clone)]
pub struct GameSession<Q: GameQuestion> {
    questions: Vec<Q>,
    index: usize,
    phase: Phase,
    score: usize,
    answers: Vec<Q::Answer>,
}

impl<Q: GameQuestion> GameSession<Q> {
    pub fn new(questions: Vec<Q>) -> Self {
        let phase = if questions.is_empty() {
            Phase::Complete
        } else {
            Phase::AwaitingAnswer
        };

        Self {
            questions,
            index: 0,
            phase,
            score: 0,
            answers: Vec::new(),
        }
    }

    /// Records an answer for the current question. Returns whether it was
    /// correct. The score moves at most once per question, here.
    pub fn answer(&mut self, answer: Q::Answer) -> Result<bool, GameError> {
        match self.phase {
            Phase::AwaitingAnswer => {}
            Phase::AnswerShown => return Err(GameError::AlreadyAnswered),
            Phase::Complete => return Err(GameError::Finished),
        }

        let question = self.questions.get(self.index).ok_or(GameError::Finished)?;
        if !question.accepts(&answer) {
            return Err(GameError::InvalidAnswer);
        }

        let correct = question.is_correct(&answer);
        if correct {
            self.score += 1;
        }
        self.answers.push(answer);

        self.phase = if self.index + 1 == self.questions.len() {
            Phase::Complete
        } else {
            Phase::AnswerShown
        };
        Ok(correct)
    }

    /// Moves from a shown answer to the next question.
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        match self.phase {
            Phase::AwaitingAnswer => Err(GameError::NotAnswered),
            Phase::Complete => Err(GameError::Finished),
            Phase::AnswerShown => {
                self.index += 1;
                self.phase = Phase::AwaitingAnswer;
                Ok(self.phase)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn answers(&self) -> &[Q::Answer] {
        &self.answers
    }

    pub fn current(&self) -> Option<&Q> {
        self.questions.get(self.index)
    }

    pub fn view(&self) -> SessionView<Q::View, Q::Answer> {
        let answered = self.phase != Phase::AwaitingAnswer;
        let last_answer = answered.then(|| self.answers.last().cloned()).flatten();
        let last_correct = match (&last_answer, self.current()) {
            (Some(answer), Some(question)) => Some(question.is_correct(answer)),
            _ => None,
        };

        SessionView {
            phase: self.phase,
            index: self.index,
            total: self.total(),
            score: self.score,
            question: self.current().map(|q| q.view(answered)),
            last_answer,
            last_correct,
            message: self
                .is_complete()
                .then(|| score_message(self.score, self.total())),
        }
    }
}

/// Grades a full answer sheet against a question list, position by position.
pub fn score_answers<Q: GameQuestion>(questions: &[Q], answers: &[Q::Answer]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(answer))
        .count()
}

/// Snapshot of a session for the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<V, A> {
    pub phase: Phase,
    pub index: usize,
    pub total: usize,
    pub score: usize,
    pub question: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_answer: Option<A>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
