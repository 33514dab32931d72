//! Record store: append-only persistence for inquiries and visits

mod models;
mod sea_orm;

pub use models::{Inquiry, NewInquiry, NewVisit, Visit};
pub use sea_orm::SeaOrmStorage;
