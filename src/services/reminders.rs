// src/services/reminders.rs

use std::sync::Arc;

use crate::error::AppError;
use crate::models::reminder::{CreateReminderRequest, Reminder, UpdateReminderRequest};
use crate::store::{KeyValueStore, keys, load_collection, save_collection};
use crate::utils::clock::Clock;
use crate::utils::html::{clean_text, required};

/// Per-user reminders. Each user's list lives under its own key, so one
/// user can never address another's reminders.
#[derive(Clone)]
pub struct ReminderStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ReminderStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn list(&self, user_id: &str) -> Vec<Reminder> {
        load_collection::<Reminder>(self.store.as_ref(), &keys::reminders(user_id))
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }

    pub fn create(&self, user_id: &str, request: &CreateReminderRequest) -> Result<Reminder, AppError> {
        let title = required(&request.title)
            .ok_or_else(|| AppError::BadRequest("Reminder title is required".to_string()))?;

        let reminder = Reminder {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title,
            description: clean_text(&request.description),
            due_date: request.due_date,
            completed: false,
            created_at: self.clock.now(),
        };

        let mut reminders = self.list(user_id);
        reminders.push(reminder.clone());
        self.save(user_id, &reminders)?;

        tracing::info!(reminder_id = %reminder.id, "Reminder created");
        Ok(reminder)
    }

    pub fn update(
        &self,
        user_id: &str,
        id: &str,
        request: &UpdateReminderRequest,
    ) -> Result<Option<Reminder>, AppError> {
        let title = match request.title.as_deref() {
            Some(t) => Some(
                required(t)
                    .ok_or_else(|| AppError::BadRequest("Reminder title cannot be empty".to_string()))?,
            ),
            None => None,
        };

        self.modify(user_id, id, |reminder| {
            if let Some(title) = title {
                reminder.title = title;
            }
            if let Some(description) = request.description.as_deref() {
                reminder.description = clean_text(description);
            }
            if let Some(due_date) = request.due_date {
                reminder.due_date = due_date;
            }
            if let Some(completed) = request.completed {
                reminder.completed = completed;
            }
        })
    }

    pub fn toggle(&self, user_id: &str, id: &str) -> Result<Option<Reminder>, AppError> {
        self.modify(user_id, id, |reminder| reminder.completed = !reminder.completed)
    }

    /// `Ok(false)` if the user has no reminder with that id.
    pub fn delete(&self, user_id: &str, id: &str) -> Result<bool, AppError> {
        let mut reminders = self.list(user_id);
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Ok(false);
        }

        self.save(user_id, &reminders)?;
        tracing::info!(reminder_id = %id, "Reminder deleted");
        Ok(true)
    }

    fn modify(
        &self,
        user_id: &str,
        id: &str,
        change: impl FnOnce(&mut Reminder),
    ) -> Result<Option<Reminder>, AppError> {
        let mut reminders = self.list(user_id);
        let Some(reminder) = reminders.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        change(reminder);
        let updated = reminder.clone();

        self.save(user_id, &reminders)?;
        Ok(Some(updated))
    }

    fn save(&self, user_id: &str, reminders: &[Reminder]) -> Result<(), AppError> {
        save_collection(self.store.as_ref(), &keys::reminders(user_id), reminders)
    }
}
