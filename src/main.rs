use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use pawmatch::config::{LoggingSettings, Settings};
use pawmatch::core::Matcher;
use pawmatch::routes::{self, matches::AppState};
use pawmatch::services::PostgresClient;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path payload errors (malformed ids)
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Pawmatch matching service...");

    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "PostgreSQL client initialized (max: {} connections)",
        settings.database.max_connections.unwrap_or(10)
    );

    let app_state = AppState {
        store: Arc::new(postgres),
        matcher: Matcher::new(),
    };

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
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
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
