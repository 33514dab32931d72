use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware::Compress, web};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{info, warn};

use leadgate::api::services::{AppStartTime, api_routes, health_routes};
use leadgate::api::services::helpers::json_error_handler;
use leadgate::config::{CorsConfig, StaticConfig};
use leadgate::services::{SubmissionService, WebhookNotifier};
use leadgate::storage::SeaOrmStorage;
use leadgate::system::init_logging;

/// Build the CORS layer for the form endpoints. Disabled config yields the
/// restrictive default (no cross-origin requests allowed).
fn build_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    if config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed. \
            Set allowed_origins explicitly or use [\"*\"] for any origin."
        );
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenv().ok();

    let config = StaticConfig::load();
    let _log_guard = init_logging(&config.logging);

    let storage = Arc::new(
        SeaOrmStorage::new(&config.database.url)
            .await
            .expect("Failed to initialize record store"),
    );

    let notifier = Arc::new(WebhookNotifier::new(config.webhook.clone()));
    if notifier.is_configured() {
        info!("Webhook notification enabled");
    } else {
        info!("Webhook notification disabled (no webhook.url configured)");
    }

    let service = Arc::new(SubmissionService::new(storage.clone(), notifier));

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Compress::default())
            .wrap(build_cors(&cors_config))
            .service(api_routes())
            .service(health_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
