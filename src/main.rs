use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mentor_match::config::Settings;
use mentor_match::core::Matcher;
use mentor_match::routes::{self, AppState};
use mentor_match::services::{seed_demo_profiles, ProfileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting mentor matching service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let match_config = settings.match_config().map_err(|e| {
        error!("Invalid matching configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let matcher = Matcher::new(match_config).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        "Matcher initialized: weights {:?}, exclusivity {:?}, fallback threshold {}",
        match_config.weights, match_config.exclusivity, match_config.fallback_threshold
    );

    let mut store = ProfileStore::new();
    if settings.demo.seed_profiles {
        seed_demo_profiles(&mut store).map_err(|e| {
            error!("Failed to seed demo profiles: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?;
        info!("Seeded demo mentors and mentees");
    }

    let app_state = AppState::new(store, matcher, settings.matching.fallback_seed);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
