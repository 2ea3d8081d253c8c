//! Maze Engine - Main entry point.

use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maze_engine::infrastructure::{
    config::{load_dotenv_from_repo_root, EngineConfig},
    memory::InMemoryGameStore,
    ports::GameStore,
    seed,
};
use maze_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maze_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Maze Engine");

    let config = EngineConfig::from_env();

    // Seed games
    let definitions = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading game definitions");
            seed::load_definitions(path)?
        }
        None => {
            tracing::info!("MAZE_SEED_PATH not set, seeding the demo game");
            vec![seed::demo_definition()]
        }
    };

    let store = Arc::new(InMemoryGameStore::new());
    let seeded = seed::seed_store(store.as_ref(), definitions).await?;
    let game_ids = store.list_game_ids().await?;
    tracing::info!(seeded, games = ?game_ids, "Game store ready");

    // Create application
    let app = Arc::new(App::new(store));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config
        .cors_allowed_origins
        .as_deref()
        .and_then(build_cors_layer)
    {
        router = router.layer(cors);
    }

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PATCH, Method::OPTIONS])
        // Moves send X-User-Id and a JSON body, which trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static("x-user-id"),
            axum::http::header::CONTENT_TYPE,
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
