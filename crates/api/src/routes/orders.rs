//! Bulk order/share stubs over a group's photo selection.
//!
//! Neither action creates anything real: ordering confirms the count and
//! clears the selection, sharing confirms the count and keeps it.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use domain::selection::{PhotoSelection, SelectionError};
use persistence::repositories::PhotoGroupRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// Request payload carrying the marked photo ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionRequest {
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

/// Confirmation for an order stub.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderResponse {
    pub ordered: usize,
}

/// Confirmation for a share stub.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ShareResponse {
    pub shared: usize,
}

fn selection_error(err: SelectionError) -> ApiError {
    match err {
        SelectionError::EmptySelection => ApiError::Validation("No photos selected".to_string()),
    }
}

/// Order the selected photos of a group.
///
/// POST /api/v1/groups/:group_id/orders
pub async fn order_photos(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());
    repo.find_by_id(&group_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;

    let mut selection = PhotoSelection::from_ids(request.photo_ids);
    let ordered = selection.order().map_err(selection_error)?;

    info!(group_id = %group_id, ordered = ordered, "Confirmed photo order");

    Ok(Json(OrderResponse { ordered }))
}

/// Share the selected photos of a group.
///
/// POST /api/v1/groups/:group_id/shares
pub async fn share_photos(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<ShareResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());
    repo.find_by_id(&group_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;

    let selection = PhotoSelection::from_ids(request.photo_ids);
    let shared = selection.share().map_err(selection_error)?;

    info!(group_id = %group_id, shared = shared, "Confirmed photo share");

    Ok(Json(ShareResponse { shared }))
}
