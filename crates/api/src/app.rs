use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::gateway::NotificationGateway;
use persistence::store::CatalogStore;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{auth, deals, groups, health, notifications, orders, profile};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub config: Arc<Config>,
    pub gateway: Arc<dyn NotificationGateway>,
}

pub fn create_app(
    config: Config,
    catalog: Arc<CatalogStore>,
    gateway: Arc<dyn NotificationGateway>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        catalog,
        config: config.clone(),
        gateway,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Portal routes under the versioned API prefix
    let api_routes = Router::new()
        // Session (v1)
        .route("/api/v1/auth/login", post(auth::login))
        .route(
            "/api/v1/users/me",
            get(profile::get_profile).put(profile::update_profile),
        )
        // Deal catalog (v1)
        .route("/api/v1/deals", get(deals::list_deals))
        .route("/api/v1/deals/covers", get(deals::list_deals_with_covers))
        .route("/api/v1/deals/:deal_id", get(deals::get_deal))
        .route("/api/v1/deals/:deal_id/photos", get(deals::list_deal_photos))
        // Group tree (v1)
        .route("/api/v1/deals/:deal_id/groups", get(groups::list_top_groups))
        .route(
            "/api/v1/deals/:deal_id/groups/:group_id",
            get(groups::get_group),
        )
        .route(
            "/api/v1/deals/:deal_id/groups/:group_id/children",
            get(groups::list_child_groups),
        )
        .route("/api/v1/groups/:group_id/photos", get(groups::list_group_photos))
        // Order/share stubs (v1)
        .route("/api/v1/groups/:group_id/orders", post(orders::order_photos))
        .route("/api/v1/groups/:group_id/shares", post(orders::share_photos))
        // Notifications (v1)
        .route(
            "/api/v1/notifications/templates",
            get(notifications::list_templates),
        )
        .route(
            "/api/v1/deals/:deal_id/notifications/tests",
            post(notifications::send_test).get(notifications::list_tests),
        );

    // Public routes (health and metrics)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
