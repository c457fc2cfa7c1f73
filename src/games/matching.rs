// src/games/matching.rs

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::models::question::MatchingTerm;
use crate::services::daily_selection::sample;

use super::{GameError, score_message};

/// One round of the term-matching game.
///
/// Terms and definitions are the same drawn items, each list shuffled on its
/// own. A term is matched correctly when it is placed on its own definition.
#[derive(Debug, Clone)]
pub struct MatchingRound {
    terms: Vec<MatchingTerm>,
    definitions: Vec<MatchingTerm>,
    /// term id → definition id
    matches: BTreeMap<u32, u32>,
    result: Option<MatchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: usize,
    pub total: usize,
    pub complete: bool,
    pub message: &'static str,
}

impl MatchingRound {
    /// Draws `k` items from `pool`. Unlike the question games this is not
    /// pinned per day: every round is a fresh draw.
    pub fn draw<R: Rng + ?Sized>(pool: &[MatchingTerm], k: usize, rng: &mut R) -> Self {
        let selected = sample(pool, k, rng);
        let mut terms = selected.clone();
        let mut definitions = selected;
        terms.shuffle(rng);
        definitions.shuffle(rng);

        Self {
            terms,
            definitions,
            matches: BTreeMap::new(),
            result: None,
        }
    }

    /// Places `term_id` on `definition_id`, replacing any earlier placement
    /// of the same term.
    pub fn place(&mut self, term_id: u32, definition_id: u32) -> Result<(), GameError> {
        if !self.terms.iter().any(|t| t.id == term_id) {
            return Err(GameError::UnknownItem(term_id));
        }
        if !self.definitions.iter().any(|d| d.id == definition_id) {
            return Err(GameError::UnknownItem(definition_id));
        }

        self.matches.insert(term_id, definition_id);
        Ok(())
    }

    /// Scores the current placements.
    pub fn submit(&mut self) -> MatchResult {
        let total = self.terms.len();
        let score = self
            .terms
            .iter()
            .filter(|t| self.matches.get(&t.id) == Some(&t.id))
            .count();
        let complete = score == total;

        let message = if complete && total > 0 {
            "Perfect! You're a cybersecurity expert!"
        } else {
            score_message(score, total)
        };

        let result = MatchResult {
            score,
            total,
            complete,
            message,
        };
        self.result = Some(result.clone());
        result
    }

    pub fn view(&self) -> MatchingView {
        MatchingView {
            terms: self
                .terms
                .iter()
                .map(|t| TermCard {
                    id: t.id,
                    text: t.term.clone(),
                    category: t.category.clone(),
                })
                .collect(),
            definitions: self
                .definitions
                .iter()
                .map(|d| TermCard {
                    id: d.id,
                    text: d.definition.clone(),
                    category: d.category.clone(),
                })
                .collect(),
            matches: self.matches.clone(),
            result: self.result.clone(),
        }
    }

    pub fn terms(&self) -> &[MatchingTerm] {
        &self.terms
    }

    pub fn definitions(&self) -> &[MatchingTerm] {
        &self.definitions
    }
}

#[derive(Debug, Serialize)]
pub struct TermCard {
    pub id: u32,
    pub text: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct MatchingView {
    pub terms: Vec<TermCard>,
    pub definitions: Vec<TermCard>,
    pub matches: BTreeMap<u32, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}
