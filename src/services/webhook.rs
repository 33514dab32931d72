//! Webhook notifier
//!
//! Best-effort delivery of submission events to one externally configured
//! HTTP endpoint. With no endpoint configured every call is a silent no-op.
//! Delivery failures are logged and dropped; there is no retry and no queue.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use ureq::Agent;

use crate::config::WebhookConfig;

/// Event kind sent for a new inquiry
pub const KIND_FORM_SUBMISSION: &str = "form_submission";

/// Body POSTed to the configured endpoint
#[derive(Debug, Clone, Serialize)]
pub struct WebhookEvent {
    pub kind: String,
    pub data: serde_json::Value,
    pub timestamp: String,
}

pub struct WebhookNotifier {
    endpoint: Option<String>,
    agent: Agent,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs.max(1))))
            .build()
            .into();

        Self {
            endpoint: config.url,
            agent,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Attempt one delivery. Never returns an error; the outcome is logged.
    pub async fn notify(&self, kind: &str, data: serde_json::Value) {
        let Some(endpoint) = self.endpoint.clone() else {
            debug!("Webhook not configured, skipping {} event", kind);
            return;
        };

        let event = WebhookEvent {
            kind: kind.to_string(),
            data,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let agent = self.agent.clone();

        // ureq is synchronous; run the delivery on the blocking pool
        let result =
            tokio::task::spawn_blocking(move || Self::deliver_sync(&agent, &endpoint, &event))
                .await;

        match result {
            Ok(Ok(())) => debug!("Webhook {} event delivered", kind),
            Ok(Err(e)) => warn!("Webhook delivery failed: {}", e),
            Err(e) => warn!("Webhook delivery task failed: {}", e),
        }
    }

    fn deliver_sync(agent: &Agent, endpoint: &str, event: &WebhookEvent) -> Result<(), String> {
        agent
            .post(endpoint)
            .send_json(event)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_fixture() -> WebhookEvent {
        WebhookEvent {
            kind: KIND_FORM_SUBMISSION.to_string(),
            data: serde_json::json!({"name": "Jane Doe", "phone": "07700900000"}),
            timestamp: "2026-08-06T10:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_event_body_shape() {
        let body = serde_json::to_value(event_fixture()).unwrap();
        assert_eq!(body["kind"], "form_submission");
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unconfigured_notifier_is_a_noop() {
        let notifier = WebhookNotifier::new(WebhookConfig {
            url: None,
            timeout_secs: 5,
        });
        assert!(!notifier.is_configured());

        // Must return without attempting any network I/O
        notifier
            .notify(KIND_FORM_SUBMISSION, serde_json::json!({}))
            .await;
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_swallowed() {
        // TEST-NET address, not routable; delivery fails and is dropped
        let notifier = WebhookNotifier::new(WebhookConfig {
            url: Some("http://192.0.2.1/hook".to_string()),
            timeout_secs: 1,
        });
        assert!(notifier.is_configured());

        notifier
            .notify(KIND_FORM_SUBMISSION, serde_json::json!({"name": "Jane"}))
            .await;
    }
}
