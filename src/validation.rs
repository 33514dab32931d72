//! Shared input schema for inquiries and visits
//!
//! Request bodies deserialize into all-optional payload structs; the
//! `validate_*` functions turn them into typed records or itemized field
//! errors. System-assigned fields (`id`, `created_at`) are not part of the
//! payload structs, so callers cannot supply them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::storage::{NewInquiry, NewVisit};

pub const NAME_MAX_LEN: usize = 120;
pub const PHONE_MAX_LEN: usize = 32;
pub const POSTCODE_MAX_LEN: usize = 16;
pub const EMAIL_MAX_LEN: usize = 254;
pub const NOTES_MAX_LEN: usize = 2000;
pub const TRACKING_MAX_LEN: usize = 64;

/// Boiler model picked on the landing-page quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
pub enum SelectedModel {
    #[serde(rename = "unsure")]
    #[strum(serialize = "unsure")]
    Unsure,
    #[serde(rename = "2000")]
    #[strum(serialize = "2000")]
    Series2000,
    #[serde(rename = "4000")]
    #[strum(serialize = "4000")]
    Series4000,
    #[serde(rename = "8000")]
    #[strum(serialize = "8000")]
    Series8000,
}

impl std::fmt::Display for SelectedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for SelectedModel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsure" => Ok(Self::Unsure),
            "2000" => Ok(Self::Series2000),
            "4000" => Ok(Self::Series4000),
            "8000" => Ok(Self::Series8000),
            _ => Err(format!(
                "Invalid model: '{}'. Valid: {}",
                s,
                Self::iter()
                    .map(|m| m.as_ref().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Raw inquiry submission, as posted by the landing-page form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "selectedModel")]
    pub selected_model: Option<String>,
    #[serde(alias = "message")]
    pub notes: Option<String>,
    #[serde(rename = "ref")]
    pub ref_code: Option<String>,
    pub epc: Option<String>,
    pub source: Option<String>,
}

/// Raw visit ping, before the server merges in request metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitPayload {
    #[serde(rename = "ref")]
    pub ref_code: Option<String>,
    pub epc: Option<String>,
    pub page: Option<String>,
}

/// One failed field with a user-facing reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate an inquiry payload into a persistable record.
///
/// Collects every failed field rather than stopping at the first one, so the
/// client can surface all of them at once.
pub fn validate_inquiry(payload: InquiryPayload) -> Result<NewInquiry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_field("name", payload.name, NAME_MAX_LEN, &mut errors);
    let phone = required_field("phone", payload.phone, PHONE_MAX_LEN, &mut errors);
    let postcode = required_field("postcode", payload.postcode, POSTCODE_MAX_LEN, &mut errors);

    let email = match optional_field("email", payload.email, EMAIL_MAX_LEN, &mut errors) {
        Some(email) => {
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push(FieldError::new("email", "must be a valid email address"));
                None
            }
        }
        None => None,
    };

    let selected_model = match payload.selected_model.filter(|s| !s.trim().is_empty()) {
        Some(raw) => match raw.trim().parse::<SelectedModel>() {
            Ok(model) => Some(model),
            Err(e) => {
                errors.push(FieldError::new("selectedModel", e));
                None
            }
        },
        None => None,
    };

    let notes = optional_field("notes", payload.notes, NOTES_MAX_LEN, &mut errors);
    let ref_code = optional_field("ref", payload.ref_code, TRACKING_MAX_LEN, &mut errors);
    let epc = optional_field("epc", payload.epc, TRACKING_MAX_LEN, &mut errors);
    let source = optional_field("source", payload.source, TRACKING_MAX_LEN, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewInquiry {
        name: name.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        postcode: postcode.unwrap_or_default(),
        email,
        selected_model,
        notes,
        ref_code,
        epc,
        source,
    })
}

/// Server-observed request metadata merged into a visit before validation
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

/// Validate a visit payload plus request metadata into a persistable record.
pub fn validate_visit(
    payload: VisitPayload,
    meta: RequestMeta,
) -> Result<NewVisit, Vec<FieldError>> {
    let mut errors = Vec::new();

    let page = required_field("page", payload.page, TRACKING_MAX_LEN, &mut errors);
    let ref_code = optional_field("ref", payload.ref_code, TRACKING_MAX_LEN, &mut errors);
    let epc = optional_field("epc", payload.epc, TRACKING_MAX_LEN, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewVisit {
        ref_code,
        epc,
        page: page.unwrap_or_default(),
        user_agent: meta.user_agent.map(truncate_to(NOTES_MAX_LEN)),
        ip: meta.ip.map(truncate_to(TRACKING_MAX_LEN)),
    })
}

fn required_field(
    field: &str,
    value: Option<String>,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) if v.chars().count() > max_len => {
            errors.push(FieldError::new(
                field,
                format!("must be at most {} characters", max_len),
            ));
            None
        }
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

fn optional_field(
    field: &str,
    value: Option<String>,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let v = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())?;
    if v.chars().count() > max_len {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", max_len),
        ));
        return None;
    }
    Some(v)
}

fn truncate_to(max_len: usize) -> impl Fn(String) -> String {
    move |s| {
        if s.chars().count() <= max_len {
            s
        } else {
            s.chars().take(max_len).collect()
        }
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.split('.').all(|part| !part.is_empty())
}
