// src/services/reports.rs

use std::sync::Arc;

use crate::error::AppError;
use crate::models::report::{CreateReportRequest, Report, ReportStatus};
use crate::models::user::User;
use crate::store::{KeyValueStore, keys, load_collection, save_collection};
use crate::utils::clock::Clock;
use crate::utils::html::{clean_text, required};

#[derive(Clone)]
pub struct ReportStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ReportStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn all(&self) -> Vec<Report> {
        load_collection(self.store.as_ref(), keys::REPORTS).unwrap_or_default()
    }

    /// Files a report as `reporter`. Anonymous reports carry no user id.
    pub fn submit(&self, reporter: &User, request: &CreateReportRequest) -> Result<Report, AppError> {
        let title = required(&request.title)
            .ok_or_else(|| AppError::BadRequest("Report title is required".to_string()))?;
        let description = required(&request.description)
            .map(|d| clean_text(&d))
            .ok_or_else(|| AppError::BadRequest("Report description is required".to_string()))?;

        let report = Report {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: (!request.is_anonymous).then(|| reporter.id.clone()),
            title,
            description,
            is_anonymous: request.is_anonymous,
            status: ReportStatus::Pending,
            created_at: self.clock.now(),
        };

        let mut reports = self.all();
        reports.push(report.clone());
        save_collection(self.store.as_ref(), keys::REPORTS, &reports)?;

        tracing::info!(report_id = %report.id, anonymous = report.is_anonymous, "Report submitted");
        Ok(report)
    }

    /// A user's own, non-anonymous reports.
    pub fn mine(&self, user_id: &str) -> Vec<Report> {
        self.all()
            .into_iter()
            .filter(|r| !r.is_anonymous && r.user_id.as_deref() == Some(user_id))
            .collect()
    }

    /// Admin status change. `Ok(None)` if no report has that id.
    pub fn set_status(&self, id: &str, status: ReportStatus) -> Result<Option<Report>, AppError> {
        let mut reports = self.all();
        let Some(report) = reports.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        report.status = status;
        let updated = report.clone();

        save_collection(self.store.as_ref(), keys::REPORTS, &reports)?;
        tracing::info!(report_id = %id, status = ?status, "Report status updated");
        Ok(Some(updated))
    }
}
