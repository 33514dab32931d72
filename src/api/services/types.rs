//! API wire types

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// Error body: `{message}` plus itemized `errors` for validation failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Body returned for a recorded visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitAck {
    pub ok: bool,
}
