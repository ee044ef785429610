use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use std::collections::HashSet;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod subscribe_handlers;
}

use handlers::subscribe_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    subscribers: Mutex<HashSet<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(HashSet::new()),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = match std::env::var("FRONTEND_URL") {
        Ok(origin) => CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_origin(origin.parse::<axum::http::HeaderValue>().expect("FRONTEND_URL must be a valid origin"))
            .allow_headers([axum::http::header::CONTENT_TYPE]),
        Err(_) => CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_origin(Any)
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/subscribe", post(subscribe_handlers::subscribe))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = Arc::new(AppState::new());
    let app = app(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
