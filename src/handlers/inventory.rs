use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    extract::FormFields,
    models::{parse_row, Item},
    AppState,
};

// ── GET /inventory ────────────────────────────────────────────────────────────

pub async fn list_inventory(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let inventory = state.inventory.read().await;

    info!(count = inventory.len(), "Listed inventory");

    (StatusCode::OK, Json(inventory.items().to_vec()))
}

// ── POST /add ─────────────────────────────────────────────────────────────────

pub async fn add_item(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let item = Item::from_fields(&fields).inspect_err(|_| {
        let mut received: Vec<&str> = fields.keys().map(String::as_str).collect();
        received.sort_unstable();
        warn!(?received, "Rejected item with missing fields");
    })?;

    let mut inventory = state.inventory.write().await;
    info!(item = %item.item, category = %item.category, "Added item");
    inventory.add(item);

    Ok((StatusCode::OK, Json(inventory.items().to_vec())))
}

// ── POST /remove ──────────────────────────────────────────────────────────────

pub async fn remove_item(
    State(state): State<AppState>,
    FormFields(fields): FormFields,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let raw = fields.get("row").map(String::as_str);

    let mut inventory = state.inventory.write().await;
    let removed = raw
        .and_then(parse_row)
        .ok_or(AppError::InvalidRow)
        .and_then(|row| inventory.remove(row).map(|item| (row, item)));

    match removed {
        Ok((row, item)) => {
            info!(row, item = %item.item, remaining = inventory.len(), "Removed item");
            Ok((StatusCode::OK, Json(inventory.items().to_vec())))
        }
        Err(err) => {
            warn!(row = ?raw, count = inventory.len(), "Rejected removal");
            Err(err)
        }
    }
}
