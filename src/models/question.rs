// src/models/question.rs

use serde::{Deserialize, Serialize};

use crate::games::GameQuestion;
use crate::services::daily_selection::PoolItem;

/// A multiple-choice quiz question from the static bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    pub explanation: String,
}

/// DTO for sending a quiz question to the client. `correct` and
/// `explanation` are only filled in once the question has been answered.
#[derive(Debug, Serialize)]
pub struct QuizQuestionView {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl PoolItem for QuizQuestion {
    type Id = u32;

    fn pool_id(&self) -> u32 {
        self.id
    }
}

impl GameQuestion for QuizQuestion {
    type Answer = usize;
    type View = QuizQuestionView;

    fn correct_answer(&self) -> usize {
        self.correct
    }

    fn accepts(&self, answer: &usize) -> bool {
        *answer < self.options.len()
    }

    fn view(&self, reveal: bool) -> QuizQuestionView {
        QuizQuestionView {
            id: self.id,
            question: self.question.clone(),
            options: self.options.clone(),
            correct: reveal.then_some(self.correct),
            explanation: reveal.then(|| self.explanation.clone()),
        }
    }
}

/// A true-or-false statement from the static bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrueFalseQuestion {
    pub id: u32,
    pub statement: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct TrueFalseQuestionView {
    pub id: u32,
    pub statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl PoolItem for TrueFalseQuestion {
    type Id = u32;

    fn pool_id(&self) -> u32 {
        self.id
    }
}

impl GameQuestion for TrueFalseQuestion {
    type Answer = bool;
    type View = TrueFalseQuestionView;

    fn correct_answer(&self) -> bool {
        self.correct
    }

    fn view(&self, reveal: bool) -> TrueFalseQuestionView {
        TrueFalseQuestionView {
            id: self.id,
            statement: self.statement.clone(),
            correct: reveal.then_some(self.correct),
            explanation: reveal.then(|| self.explanation.clone()),
        }
    }
}

/// A term/definition pair for the matching game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingTerm {
    pub id: u32,
    pub term: String,
    pub definition: String,
    pub category: String,
}

impl PoolItem for MatchingTerm {
    type Id = u32;

    fn pool_id(&self) -> u32 {
        self.id
    }
}

/// Request body for answering the current question.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest<A> {
    pub answer: A,
}

/// Request body for placing a term on a definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceMatchRequest {
    pub term_id: u32,
    pub definition_id: u32,
}
