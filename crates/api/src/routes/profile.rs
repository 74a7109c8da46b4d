//! Profile routes for the session user.

use axum::{extract::State, Json};
use domain::models::user::{UpdateProfileRequest, User};
use persistence::repositories::UserRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Get the current session user.
///
/// GET /api/v1/users/me
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(state.catalog.clone());
    Ok(Json(repo.current().await))
}

/// Update the session user's profile.
///
/// PUT /api/v1/users/me
///
/// Edits mutate the in-memory record only and are lost on restart.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;

    let repo = UserRepository::new(state.catalog.clone());
    let user = repo.update_profile(&request).await;

    info!(
        user_id = %user.id,
        name_changed = request.name.is_some(),
        phone_changed = request.phone.is_some(),
        email_changed = request.email.is_some(),
        settings_changed = request.notification_settings.is_some(),
        "Profile updated"
    );

    Ok(Json(user))
}
