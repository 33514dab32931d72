use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::SelectedModel;

/// A persisted lead-capture submission.
///
/// Serializes in the wire shape the landing pages and the webhook consumer
/// expect: camelCase keys, `ref` for the referral code, absent keys for
/// unset optionals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub postcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated inquiry waiting to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub postcode: String,
    pub email: Option<String>,
    pub selected_model: Option<SelectedModel>,
    pub notes: Option<String>,
    pub ref_code: Option<String>,
    pub epc: Option<String>,
    pub source: Option<String>,
}

/// A persisted page-visit tracking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i64,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epc: Option<String>,
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated visit waiting to be inserted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewVisit {
    pub ref_code: Option<String>,
    pub epc: Option<String>,
    pub page: String,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}
