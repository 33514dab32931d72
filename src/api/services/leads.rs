//! Inquiry and visit submission endpoints
//!
//! `/api/inquiries` and `/api/leads` are two routes over the same handler,
//! kept as aliases for the landing-page variants that still post to the old
//! path. `/api/visits` records page-view pings and augments them with
//! server-observed request metadata.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::USER_AGENT;
use actix_web::{HttpRequest, Responder, web};
use tracing::trace;

use crate::services::{SubmissionService, SubmitError};
use crate::utils::ip::extract_client_ip;
use crate::validation::{InquiryPayload, RequestMeta, VisitPayload};

use super::helpers::{created_response, error_response, validation_error_response};
use super::types::VisitAck;

/// Single handler behind both inquiry routes
pub async fn post_inquiry(
    payload: web::Json<InquiryPayload>,
    service: web::Data<Arc<SubmissionService>>,
) -> impl Responder {
    trace!("Received inquiry submission");

    match service.submit_inquiry(payload.into_inner()).await {
        Ok(inquiry) => created_response(inquiry),
        Err(SubmitError::Invalid(errors)) => validation_error_response(errors),
        Err(SubmitError::Storage(_)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not save your inquiry, please try again",
        ),
    }
}

pub async fn post_visit(
    req: HttpRequest,
    payload: web::Json<VisitPayload>,
    service: web::Data<Arc<SubmissionService>>,
) -> impl Responder {
    trace!("Received visit ping");

    let meta = RequestMeta {
        user_agent: req
            .headers()
            .get(USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(String::from),
        ip: extract_client_ip(&req),
    };

    match service.submit_visit(payload.into_inner(), meta).await {
        Ok(_) => created_response(VisitAck { ok: true }),
        Err(SubmitError::Invalid(errors)) => validation_error_response(errors),
        Err(SubmitError::Storage(_)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not record the visit, please try again",
        ),
    }
}

/// Submission route table under `/api`
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/inquiries", web::post().to(post_inquiry))
        .route("/leads", web::post().to(post_inquiry))
        .route("/visits", web::post().to(post_visit))
}
