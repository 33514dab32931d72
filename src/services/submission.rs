//! Submission pipeline: validate, persist, then notify
//!
//! The only component with a real contract: validation failures short-circuit
//! before any side effect, persistence failures short-circuit before any
//! notification, and the webhook notification is dispatched on a detached
//! task whose outcome never reaches the caller.

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::LeadgateError;
use crate::services::webhook::{KIND_FORM_SUBMISSION, WebhookNotifier};
use crate::storage::{Inquiry, SeaOrmStorage, Visit};
use crate::validation::{
    FieldError, InquiryPayload, RequestMeta, VisitPayload, validate_inquiry, validate_visit,
};

/// Why a submission was not accepted
#[derive(Debug)]
pub enum SubmitError {
    /// Caller-supplied payload failed the schema; nothing was persisted
    Invalid(Vec<FieldError>),
    /// The record store rejected the insert; nothing was persisted
    Storage(LeadgateError),
}

pub struct SubmissionService {
    storage: Arc<SeaOrmStorage>,
    notifier: Arc<WebhookNotifier>,
}

impl SubmissionService {
    pub fn new(storage: Arc<SeaOrmStorage>, notifier: Arc<WebhookNotifier>) -> Self {
        Self { storage, notifier }
    }

    /// Validate and persist an inquiry, then notify the webhook.
    ///
    /// Duplicate submissions are not deduplicated: each call that validates
    /// creates its own row.
    pub async fn submit_inquiry(&self, payload: InquiryPayload) -> Result<Inquiry, SubmitError> {
        let record = validate_inquiry(payload).map_err(SubmitError::Invalid)?;

        let inquiry = self.storage.create_inquiry(record).await.map_err(|e| {
            error!("Inquiry persist failed: {}", e);
            SubmitError::Storage(e)
        })?;

        info!(
            "Inquiry {} created (postcode: {}, source: {})",
            inquiry.id,
            inquiry.postcode,
            inquiry.source.as_deref().unwrap_or("-")
        );

        self.dispatch_notification(&inquiry);

        Ok(inquiry)
    }

    /// Validate and persist a visit ping. Never notifies the webhook.
    pub async fn submit_visit(
        &self,
        payload: VisitPayload,
        meta: RequestMeta,
    ) -> Result<Visit, SubmitError> {
        let record = validate_visit(payload, meta).map_err(SubmitError::Invalid)?;

        let visit = self.storage.create_visit(record).await.map_err(|e| {
            error!("Visit persist failed: {}", e);
            SubmitError::Storage(e)
        })?;

        info!("Visit {} created (page: {})", visit.id, visit.page);

        Ok(visit)
    }

    /// Fire-and-forget webhook dispatch on a detached task.
    ///
    /// The response path does not await delivery; failures are handled inside
    /// the notifier (log-and-drop).
    fn dispatch_notification(&self, inquiry: &Inquiry) {
        if !self.notifier.is_configured() {
            return;
        }

        let data = match serde_json::to_value(inquiry) {
            Ok(data) => data,
            Err(e) => {
                error!("Inquiry {} could not be serialized for webhook: {}", inquiry.id, e);
                return;
            }
        };

        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            notifier.notify(KIND_FORM_SUBMISSION, data).await;
        });
    }
}
