use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use skillswap_match::config::Settings;
use skillswap_match::core::Recommender;
use skillswap_match::models::ScoringWeights;
use skillswap_match::routes::{self, AppState};
use skillswap_match::services::{AssistantConfig, DescriptionCache, SkillAssistant};
use skillswap_match::{handle_json_payload_error, handle_query_payload_error};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging (LOG_LEVEL / LOG_FORMAT override the config file)
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting SkillSwap match service...");
    info!("Configuration loaded successfully");

    // Initialize recommender with configured weights and jitter
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let jitter = settings.scoring.jitter.build();

    let recommender = Recommender::new(weights, jitter);

    info!(
        "Recommender initialized with weights: {:?}, jitter: {:?}",
        recommender.weights(),
        settings.scoring.jitter.mode
    );

    let assistant_config = AssistantConfig::from(&settings.assistant);
    info!("Skill assistant initialized (model: {})", assistant_config.model);

    let assistant = Arc::new(SkillAssistant::new(assistant_config, recommender));

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);
    let cache = Arc::new(DescriptionCache::new(l1_cache_size, cache_ttl));

    info!("Description cache initialized (L1: {} entries, TTL: {}s)", l1_cache_size, cache_ttl);

    let app_state = AppState { assistant, cache };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
