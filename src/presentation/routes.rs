//! Route definitions and server setup

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Config;
use crate::application::{ApplicationError, DeveloperServiceImpl};
use crate::config::StorageBackend;
use crate::infrastructure::{
    DeveloperRepository, FileDeveloperRepository, InMemoryDeveloperRepository,
};
use crate::presentation::{
    controllers::{
        AppState,
        developers::{create_developer, get_developer, list_developers, update_developer},
        health::{health_check, liveness_probe, readiness_probe},
        pages::{
            add_form_page, detail_page, edit_form_page, list_page, submit_add_form,
            submit_edit_form,
        },
    },
    middleware::logging_middleware,
    models::*,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::developers::list_developers,
        crate::presentation::controllers::developers::create_developer,
        crate::presentation::controllers::developers::get_developer,
        crate::presentation::controllers::developers::update_developer,
        crate::presentation::controllers::health::health_check,
        crate::presentation::controllers::health::liveness_probe,
        crate::presentation::controllers::health::readiness_probe
    ),
    components(
        schemas(
            DeveloperDto,
            SkillsDto,
            CreateDeveloperRequest,
            UpdateDeveloperRequest,
            ErrorResponse,
            ErrorDetail,
            HealthResponse
        )
    ),
    tags(
        (name = "developers", description = "Developer roster endpoints"),
        (name = "health", description = "System health endpoints")
    ),
    info(
        title = "Devroster API",
        version = "0.1.0",
        description = "Manage a roster of developers and their skill ratings.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Create the application router with the full middleware stack
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let api_routes = Router::new()
        .route("/devs", get(list_developers).post(create_developer))
        .route("/devs/{id}", get(get_developer).patch(update_developer));

    let page_routes = Router::new()
        .route("/", get(list_page))
        .route("/devs/add", get(add_form_page).post(submit_add_form))
        .route("/devs/{id}", get(detail_page))
        .route("/devs/{id}/edit", get(edit_form_page).post(submit_edit_form));

    let health_routes = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_probe))
        .route("/health/ready", get(readiness_probe));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes);

    if config.server.enable_docs {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server.allowed_origins))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_seconds,
                )))
                .layer(middleware::from_fn(logging_middleware)),
        )
        .with_state(app_state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Build the record store named by `storage.backend`
pub async fn create_repository(
    config: &Config,
) -> Result<Arc<dyn DeveloperRepository>, ApplicationError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory developer store");
            Ok(Arc::new(InMemoryDeveloperRepository::new()))
        }
        StorageBackend::File => {
            let repository = FileDeveloperRepository::open(&config.storage.path)
                .await
                .map_err(|e| ApplicationError::Configuration {
                    message: format!(
                        "cannot open developer store at {}: {}",
                        config.storage.path.display(),
                        e
                    ),
                })?;
            tracing::info!(path = %repository.path().display(), "Using file developer store");
            Ok(Arc::new(repository))
        }
    }
}

/// Wire the store, the service and the router together
pub async fn create_app(config: &Config) -> Result<Router, ApplicationError> {
    let repository = create_repository(config).await?;
    let developer_service = Arc::new(DeveloperServiceImpl::new(repository));
    Ok(create_router(AppState::new(developer_service), config))
}
