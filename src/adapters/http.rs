use crate::config::Settings;
use crate::core::catalog::Catalog;
use crate::core::contact::ContactIntake;
use crate::core::diagnostics::StatusReporter;
use crate::core::{
    ContactCandidate, ContactReceipt, ExperienceItem, Project, StatusReport, StoreHandle,
};
use crate::utils::error::{PortfolioError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const ROOT_MESSAGE: &str = "Portfolio API running";
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

/// Everything a request handler can reach. Immutable after startup.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub contact: ContactIntake,
    pub status: StatusReporter,
}

impl AppState {
    pub fn new(catalog: Catalog, store: StoreHandle, settings: &Settings) -> Self {
        Self {
            catalog,
            contact: ContactIntake::new(store.clone()),
            status: StatusReporter::new(
                store,
                settings.database_url_set(),
                settings.database_name_set(),
            ),
        }
    }
}

pub type SharedState = Arc<AppState>;

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            let body = json!({ "detail": self.field_errors() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }

        tracing::error!("❌ Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal Server Error" })),
        )
            .into_response()
    }
}

/// Browsers reject a literal `*` alongside credentials, so the request's own
/// origin, method and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/api/projects", get(get_projects))
        .route("/api/experience", get(get_experience))
        .route("/api/contact", post(submit_contact))
        .route("/test", get(test_database))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn read_root() -> Json<serde_json::Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({ "message": HELLO_MESSAGE }))
}

async fn get_projects(State(state): State<SharedState>) -> Json<Vec<Project>> {
    Json(state.catalog.list_projects().to_vec())
}

async fn get_experience(State(state): State<SharedState>) -> Json<Vec<ExperienceItem>> {
    Json(state.catalog.list_experience().to_vec())
}

async fn submit_contact(
    State(state): State<SharedState>,
    payload: std::result::Result<Json<ContactCandidate>, JsonRejection>,
) -> Result<Json<ContactReceipt>> {
    let Json(candidate) = payload.map_err(|rejection| PortfolioError::MalformedBody {
        message: rejection.body_text(),
    })?;
    let receipt = state.contact.submit_contact(candidate).await?;
    Ok(Json(receipt))
}

async fn test_database(State(state): State<SharedState>) -> Json<StatusReport> {
    Json(state.status.report_status().await)
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: tokio::net::TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
