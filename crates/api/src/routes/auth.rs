//! Session login route.

use axum::{extract::State, Json};
use domain::models::user::User;
use persistence::repositories::UserRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// Mock T-ID login.
///
/// POST /api/v1/auth/login
///
/// No credentials and no token model: the call resolves the session user
/// after the simulated authorization round-trip.
pub async fn login(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(state.catalog.clone());
    let user = repo.authenticate().await;

    info!(user_id = %user.id, "Session user logged in");

    Ok(Json(user))
}
