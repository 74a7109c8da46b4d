//! Group tree routes.
//!
//! The group detail view fans out its reads (group record, children, own
//! photo count) and joins before responding, the way the portal pages load.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::photo::ListPhotosResponse;
use domain::models::photo_group::{GroupDetailResponse, ListGroupsResponse};
use persistence::repositories::PhotoGroupRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// List a deal's top-level groups.
///
/// GET /api/v1/deals/:deal_id/groups
pub async fn list_top_groups(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> Result<Json<ListGroupsResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());
    let groups = repo.list_top_level(&deal_id).await;
    let count = groups.len();

    info!(deal_id = %deal_id, group_count = count, "Listed top-level groups");

    Ok(Json(ListGroupsResponse {
        data: groups,
        count,
    }))
}

/// Get a group with its children and back-navigation target.
///
/// GET /api/v1/deals/:deal_id/groups/:group_id
///
/// A group may carry both child groups and photos of its own; the response
/// exposes both.
pub async fn get_group(
    State(state): State<AppState>,
    Path((deal_id, group_id)): Path<(String, String)>,
) -> Result<Json<GroupDetailResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());

    let (group, children, photos) = tokio::join!(
        repo.find(&group_id, &deal_id),
        repo.list_children(&group_id, &deal_id),
        repo.photos(&group_id),
    );

    let group = group.ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;
    let back = group.back_target();

    info!(
        deal_id = %deal_id,
        group_id = %group_id,
        child_count = children.len(),
        photo_count = photos.len(),
        "Retrieved group details"
    );

    Ok(Json(GroupDetailResponse {
        group,
        back,
        children,
        photos_total: photos.len(),
    }))
}

/// List a group's direct children.
///
/// GET /api/v1/deals/:deal_id/groups/:group_id/children
///
/// Leaf groups yield an empty set.
pub async fn list_child_groups(
    State(state): State<AppState>,
    Path((deal_id, group_id)): Path<(String, String)>,
) -> Result<Json<ListGroupsResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());
    let groups = repo.list_children(&group_id, &deal_id).await;
    let count = groups.len();

    info!(
        deal_id = %deal_id,
        group_id = %group_id,
        child_count = count,
        "Listed child groups"
    );

    Ok(Json(ListGroupsResponse {
        data: groups,
        count,
    }))
}

/// List a group's own photos.
///
/// GET /api/v1/groups/:group_id/photos
///
/// Unknown groups yield an empty set, matching the mock source.
pub async fn list_group_photos(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<ListPhotosResponse>, ApiError> {
    let repo = PhotoGroupRepository::new(state.catalog.clone());
    let photos = repo.photos(&group_id).await;
    let count = photos.len();

    info!(group_id = %group_id, photo_count = count, "Listed group photos");

    Ok(Json(ListPhotosResponse {
        data: photos,
        count,
    }))
}
