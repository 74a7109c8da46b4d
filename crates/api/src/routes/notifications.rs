//! Notification template and test send routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::time::Duration;

use domain::models::notification::{
    ListTemplatesQuery, ListTemplatesResponse, ListTestsResponse, NotificationTest,
    NotificationTestStatus, SendTestRequest,
};
use domain::services::gateway::DeliveryOutcome;
use domain::services::template::render_preview;
use persistence::repositories::{DealRepository, NotificationTestRepository, TemplateRepository};
use tracing::{info, warn};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_notification_test;

/// List notification templates, optionally narrowed to one channel.
///
/// GET /api/v1/notifications/templates?channel=sms
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<ListTemplatesResponse>, ApiError> {
    let repo = TemplateRepository::new(state.catalog.clone());
    let templates = repo.list(query.channel).await;
    let count = templates.len();

    info!(
        template_count = count,
        channel_filter = ?query.channel,
        "Listed notification templates"
    );

    Ok(Json(ListTemplatesResponse {
        data: templates,
        count,
    }))
}

/// Send a test notification for a deal.
///
/// POST /api/v1/deals/:deal_id/notifications/tests
///
/// Input is validated synchronously before any simulated delay or gateway
/// call; on a valid request the rendered message goes through the gateway
/// under a best-effort timeout and the outcome lands at the front of the
/// deal's history.
pub async fn send_test(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
    Json(request): Json<SendTestRequest>,
) -> Result<(StatusCode, Json<NotificationTest>), ApiError> {
    request.validate()?;

    let deal_repo = DealRepository::new(state.catalog.clone());
    let template_repo = TemplateRepository::new(state.catalog.clone());

    let (deal, template) = tokio::join!(
        deal_repo.find_by_id(&deal_id),
        template_repo.find_by_id(&request.template_id),
    );

    let deal = deal.ok_or_else(|| ApiError::NotFound("Photo session not found".to_string()))?;
    let template =
        template.ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;

    let text = render_preview(&template.text, deal.deal.date);

    let timeout = Duration::from_millis(state.config.mock.gateway_timeout_ms);
    let outcome = tokio::time::timeout(
        timeout,
        state.gateway.deliver(request.channel, &request.phone, &text),
    )
    .await
    .map_err(|_| {
        warn!(deal_id = %deal_id, channel = %request.channel, "Gateway call timed out");
        ApiError::ServiceUnavailable("Notification gateway timed out".to_string())
    })?;

    let status = match outcome {
        DeliveryOutcome::Delivered => NotificationTestStatus::Success,
        DeliveryOutcome::Failed(_) => NotificationTestStatus::Error,
    };

    let history = NotificationTestRepository::new(state.catalog.clone());
    let test = history
        .append(&deal_id, request.channel, &request.phone, status)
        .await;

    record_notification_test(request.channel.as_str(), status.as_str());

    info!(
        deal_id = %deal_id,
        test_id = %test.id,
        channel = %test.channel,
        status = %test.status,
        "Recorded notification test"
    );

    Ok((StatusCode::CREATED, Json(test)))
}

/// List a deal's recent test sends, newest first, at most five.
///
/// GET /api/v1/deals/:deal_id/notifications/tests
pub async fn list_tests(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> Result<Json<ListTestsResponse>, ApiError> {
    let repo = NotificationTestRepository::new(state.catalog.clone());
    let tests = repo.recent_for_deal(&deal_id).await;
    let count = tests.len();

    info!(deal_id = %deal_id, test_count = count, "Listed notification tests");

    Ok(Json(ListTestsResponse { data: tests, count }))
}
