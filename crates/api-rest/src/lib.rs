//! # API REST
//!
//! REST API implementation for the EchoRoom mood service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, cross-origin headers, preflight)
//!
//! Uses `api-shared` for body types and `echoroom-core` for classification.

#![warn(rust_2018_idioms)]

use api_shared::{
    cors, AnalyzeMoodErrorRes, AnalyzeMoodReq, AnalyzeMoodRes, HealthRes, HealthService,
    ListMoodsRes,
};
use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use echoroom_core::{Mood, MoodClassifier, DEFAULT_MOOD};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the REST API
///
/// Shared by all request handlers. Holds only the classifier, which is immutable and cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    classifier: MoodClassifier,
}

impl AppState {
    pub fn new(classifier: MoodClassifier) -> Self {
        Self { classifier }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_moods, analyze_mood),
    components(schemas(
        HealthRes,
        ListMoodsRes,
        AnalyzeMoodReq,
        AnalyzeMoodRes,
        AnalyzeMoodErrorRes,
    ))
)]
pub struct ApiDoc;

/// Error half of every classification handler result.
type MoodFailure = (StatusCode, Json<AnalyzeMoodErrorRes>);

fn failure(status: StatusCode, error: impl Into<String>) -> MoodFailure {
    (
        status,
        Json(AnalyzeMoodErrorRes {
            error: error.into(),
            mood: DEFAULT_MOOD.to_string(),
        }),
    )
}

/// Build the REST router.
///
/// `/analyze-mood` is also mounted at `/api/analyze-mood`, the path the journal page calls.
/// Every response, including preflights, errors and unknown routes, carries the cross-origin
/// headers from [`api_shared::cors`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/moods", get(list_moods))
        .route("/analyze-mood", post(analyze_mood))
        .route("/api/analyze-mood", post(analyze_mood))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(middleware::from_fn(answer_preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(cors::ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(cors::ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer every `OPTIONS` request with an empty `200`, whatever the path.
async fn answer_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, cors::JSON_CONTENT_TYPE)],
        )
            .into_response();
    }
    next.run(req).await
}

async fn not_found() -> MoodFailure {
    failure(StatusCode::NOT_FOUND, "not found")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not contact upstream.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/moods",
    responses(
        (status = 200, description = "Mood vocabulary offered to the model", body = ListMoodsRes)
    )
)]
#[axum::debug_handler]
async fn list_moods() -> Json<ListMoodsRes> {
    Json(ListMoodsRes {
        moods: Mood::vocabulary()
            .iter()
            .map(|m| m.as_str().to_string())
            .collect(),
        fallback: DEFAULT_MOOD.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze-mood",
    request_body = AnalyzeMoodReq,
    responses(
        (status = 200, description = "Mood label for the entry", body = AnalyzeMoodRes),
        (status = 400, description = "JSON body lacks a string `text` field", body = AnalyzeMoodErrorRes),
        (status = 500, description = "Body is not JSON, or upstream classification failed", body = AnalyzeMoodErrorRes)
    )
)]
/// Classify a journal entry
///
/// The body is parsed as JSON whatever its `Content-Type`. An entry whose label cannot be read from
/// the upstream response still succeeds with `Neutral`.
///
/// # Returns
/// * `Ok(Json<AnalyzeMoodRes>)` - Trimmed label from the model, or `Neutral`
/// * `Err((StatusCode, Json<AnalyzeMoodErrorRes>))` - Failure with the fallback mood attached
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is valid JSON but `text` is missing or not a string.
///
/// Returns `500 Internal Server Error` if:
/// - the body is not valid JSON, or
/// - the upstream call fails, times out, or returns an unreadable response.
#[axum::debug_handler]
async fn analyze_mood(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeMoodRes>, MoodFailure> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Unparseable analyze-mood body: {}", e);
        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to parse request body: {e}"),
        )
    })?;
    let req: AnalyzeMoodReq = serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Rejected analyze-mood body: {}", e);
        failure(StatusCode::BAD_REQUEST, format!("invalid request body: {e}"))
    })?;

    match state.classifier.classify(&req.text).await {
        Ok(mood) => Ok(Json(AnalyzeMoodRes { mood })),
        Err(e) => {
            tracing::error!("Analyze mood error: {}", e);
            Err(failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
