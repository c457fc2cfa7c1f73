// src/services/tips.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::content;
use crate::error::AppError;
use crate::models::tip::{CreateTipRequest, Tip, TipCategory};
use crate::models::user::UserLevel;
use crate::store::{KeyValueStore, keys, load_collection, save_collection};
use crate::utils::clock::Clock;
use crate::utils::html::{clean_text, required};

#[derive(Clone)]
pub struct TipStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl TipStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Every tip. Falls back to the built-in set until an admin first
    /// writes the collection.
    pub fn all(&self) -> Vec<Tip> {
        load_collection(self.store.as_ref(), keys::TIPS)
            .unwrap_or_else(|| content::tips::default_tips(self.clock.now()))
    }

    /// Tips a user of `level` may see, optionally narrowed to one category.
    pub fn visible_to(&self, level: UserLevel, category: Option<TipCategory>) -> Vec<Tip> {
        self.all()
            .into_iter()
            .filter(|tip| tip.visible_to(level))
            .filter(|tip| category.is_none_or(|c| tip.category == c))
            .collect()
    }

    pub fn create(&self, request: &CreateTipRequest) -> Result<Tip, AppError> {
        let title = required(&request.title)
            .ok_or_else(|| AppError::BadRequest("Tip title is required".to_string()))?;
        let content = required(&request.content)
            .map(|c| clean_text(&c))
            .ok_or_else(|| AppError::BadRequest("Tip content is required".to_string()))?;

        if !request.level.iter().all(|l| UserLevel::CONTENT_TIERS.contains(l)) {
            return Err(AppError::BadRequest(
                "Tips target entry, mid or top levels only".to_string(),
            ));
        }
        let level: BTreeSet<UserLevel> = request.level.iter().copied().collect();
        if level.is_empty() {
            return Err(AppError::BadRequest("At least one level is required".to_string()));
        }

        let tip = Tip {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            category: request.category,
            level,
            created_at: self.clock.now(),
        };

        let mut tips = self.all();
        tips.push(tip.clone());
        save_collection(self.store.as_ref(), keys::TIPS, &tips)?;

        tracing::info!(tip_id = %tip.id, "Tip created");
        Ok(tip)
    }

    /// Removes a tip. `Ok(false)` if no tip has that id.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut tips = self.all();
        let before = tips.len();
        tips.retain(|tip| tip.id != id);
        if tips.len() == before {
            return Ok(false);
        }

        save_collection(self.store.as_ref(), keys::TIPS, &tips)?;
        tracing::info!(tip_id = %id, "Tip deleted");
        Ok(true)
    }
}
