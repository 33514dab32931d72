//! Response builders shared by the API handlers

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError};
use serde::Serialize;

use crate::validation::FieldError;

use super::types::ErrorBody;

/// 201 with the created record as the body
pub fn created_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(data)
}

/// 400 with itemized field errors
pub fn validation_error_response(errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::BadRequest()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ErrorBody {
            message: "Validation failed".to_string(),
            errors: Some(errors),
        })
}

/// Generic error body, no field detail
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ErrorBody {
            message: message.into(),
            errors: None,
        })
}

/// Map body-deserialization failures to the same 400 shape the validators use
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = validation_error_response(vec![FieldError {
        field: "body".to_string(),
        message: detail,
    }]);
    actix_web::error::InternalError::from_response(err, response).into()
}
