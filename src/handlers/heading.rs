use axum::{extract::Path, http::StatusCode};
use tracing::info;

/// Page heading for a user-supplied owner name.
pub fn heading_for(name: &str) -> String {
    format!("{name}'s Food Inventory")
}

// ── GET /name/:name ───────────────────────────────────────────────────────────

pub async fn heading_name(Path(name): Path<String>) -> (StatusCode, String) {
    info!(name = %name, "Personalized heading");
    (StatusCode::OK, heading_for(&name))
}
