pub mod health;
pub mod helpers;
pub mod leads;
pub mod types;

pub use health::{AppStartTime, health_routes};
pub use leads::api_routes;
