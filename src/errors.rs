use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum LeadgateError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    Serialization(String),
    NotifyDelivery(String),
}

impl LeadgateError {
    pub fn code(&self) -> &'static str {
        match self {
            LeadgateError::DatabaseConfig(_) => "E001",
            LeadgateError::DatabaseConnection(_) => "E002",
            LeadgateError::DatabaseOperation(_) => "E003",
            LeadgateError::Validation(_) => "E004",
            LeadgateError::Serialization(_) => "E005",
            LeadgateError::NotifyDelivery(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LeadgateError::DatabaseConfig(_) => "Database Configuration Error",
            LeadgateError::DatabaseConnection(_) => "Database Connection Error",
            LeadgateError::DatabaseOperation(_) => "Database Operation Error",
            LeadgateError::Validation(_) => "Validation Error",
            LeadgateError::Serialization(_) => "Serialization Error",
            LeadgateError::NotifyDelivery(_) => "Notify Delivery Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LeadgateError::DatabaseConfig(msg) => msg,
            LeadgateError::DatabaseConnection(msg) => msg,
            LeadgateError::DatabaseOperation(msg) => msg,
            LeadgateError::Validation(msg) => msg,
            LeadgateError::Serialization(msg) => msg,
            LeadgateError::NotifyDelivery(msg) => msg,
        }
    }

    /// HTTP status the error maps to when it reaches a handler
    pub fn http_status(&self) -> StatusCode {
        match self {
            LeadgateError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LeadgateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LeadgateError {}

impl LeadgateError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LeadgateError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LeadgateError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LeadgateError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LeadgateError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LeadgateError::Serialization(msg.into())
    }

    pub fn notify_delivery<T: Into<String>>(msg: T) -> Self {
        LeadgateError::NotifyDelivery(msg.into())
    }
}

impl From<sea_orm::DbErr> for LeadgateError {
    fn from(err: sea_orm::DbErr) -> Self {
        LeadgateError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LeadgateError {
    fn from(err: serde_json::Error) -> Self {
        LeadgateError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeadgateError>;
