use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, CourseService, PasswordHasher, SeaOrmAuthService, SeaOrmCourseService, TokenKeys,
};

pub mod auth;
mod courses;
mod error;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub tokens: Arc<TokenKeys>,

    pub auth_service: Arc<dyn AuthService>,

    pub course_service: Arc<dyn CourseService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// Connects to the database and wires the services. Fails if no token secret
/// is configured.
pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let tokens = Arc::new(TokenKeys::from_config(&config.security)?);

    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let hasher = PasswordHasher::new(config.security.bcrypt_cost);

    let auth_service = Arc::new(SeaOrmAuthService::new(
        store.clone(),
        hasher,
        tokens.clone(),
    ));
    let course_service = Arc::new(SeaOrmCourseService::new(store.clone()));

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        tokens,
        auth_service,
        course_service,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/myprofile", get(auth::my_profile))
        .route("/get_courses", get(courses::list_courses))
        .route("/get_course_by_id/{id}", get(courses::get_course))
        .route("/course_categories", get(courses::list_categories))
        .route(
            "/get_course_by_category/{category}",
            get(courses::courses_by_category),
        )
        .route("/get_course_by_name/{name}", get(courses::courses_by_name))
        .route("/health/live", get(system::health_live))
        .route("/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::root))
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        // Innermost span is the one `Authenticated` records `user_id` on.
        .layer(middleware::from_fn(observability::track_metrics))
        .layer(TraceLayer::new_for_http())
}
