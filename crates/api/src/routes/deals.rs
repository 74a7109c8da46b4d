//! Deal catalog routes.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::deal::{DealDetails, ListDealsResponse, ListDealsWithCoverResponse};
use domain::models::photo::ListPhotosResponse;
use persistence::repositories::DealRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// List all photo sessions.
///
/// GET /api/v1/deals
pub async fn list_deals(
    State(state): State<AppState>,
) -> Result<Json<ListDealsResponse>, ApiError> {
    let repo = DealRepository::new(state.catalog.clone());
    let deals = repo.list().await;
    let count = deals.len();

    info!(deal_count = count, "Listed deals");

    Ok(Json(ListDealsResponse { data: deals, count }))
}

/// List all photo sessions with cover images.
///
/// GET /api/v1/deals/covers
pub async fn list_deals_with_covers(
    State(state): State<AppState>,
) -> Result<Json<ListDealsWithCoverResponse>, ApiError> {
    let repo = DealRepository::new(state.catalog.clone());
    let deals = repo.list_with_covers().await;
    let count = deals.len();

    info!(deal_count = count, "Listed deals with covers");

    Ok(Json(ListDealsWithCoverResponse { data: deals, count }))
}

/// Get a photo session with its description.
///
/// GET /api/v1/deals/:deal_id
pub async fn get_deal(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> Result<Json<DealDetails>, ApiError> {
    let repo = DealRepository::new(state.catalog.clone());
    let details = repo
        .find_by_id(&deal_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Photo session not found".to_string()))?;

    info!(deal_id = %deal_id, status = %details.deal.status, "Retrieved deal details");

    Ok(Json(details))
}

/// List a deal's flat photo set.
///
/// GET /api/v1/deals/:deal_id/photos
///
/// Unknown deals yield an empty set, matching the mock source.
pub async fn list_deal_photos(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> Result<Json<ListPhotosResponse>, ApiError> {
    let repo = DealRepository::new(state.catalog.clone());
    let photos = repo.photos(&deal_id).await;
    let count = photos.len();

    info!(deal_id = %deal_id, photo_count = count, "Listed deal photos");

    Ok(Json(ListPhotosResponse {
        data: photos,
        count,
    }))
}
