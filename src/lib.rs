use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod inventory;
pub mod models;

use crate::inventory::Inventory;

/// Shared application state. Cloning is cheap; every clone points at the
/// same inventory.
#[derive(Clone, Default)]
pub struct AppState {
    pub inventory: Arc<RwLock<Inventory>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
        }
    }
}

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Inventory ───────────────────────────────────────────────────────
        .route("/inventory", get(handlers::inventory::list_inventory))
        .route("/add", post(handlers::inventory::add_item))
        .route("/remove", post(handlers::inventory::remove_item))

        // ── Heading ─────────────────────────────────────────────────────────
        .route("/name/:name", get(handlers::heading::heading_name))

        // ── Static page assets ──────────────────────────────────────────────
        .fallback_service(ServeDir::new(static_dir.as_ref()))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
