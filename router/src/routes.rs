use crate::{
    config::ServerConfig,
    error::AppJson,
    processor::Action,
    Status, TextRequest, TextResponse,
};

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::instrument;

/// Builds the whole HTTP surface: liveness probe, text actions, CORS.
pub fn app(config: &ServerConfig) -> Router {
    let status = Status {
        message: format!("{} AI API", config.service_name),
        status: "running".to_string(),
    };

    Router::new()
        .route("/", get(move || root_handler(status.clone())))
        .nest("/api", api_routes())
        .layer(cors(config))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router {
    Router::new()
        .route("/improve", post(improve_handler))
        .route("/rephrase", post(rephrase_handler))
        .route("/grammar", post(grammar_handler))
        .route("/:action", post(action_handler))
}

fn cors(config: &ServerConfig) -> CorsLayer {
    // Credentials rule out wildcards, so methods and headers are mirrored.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn root_handler(status: Status) -> Json<Status> {
    Json(status)
}

#[instrument(skip_all)]
async fn improve_handler(AppJson(request): AppJson<TextRequest>) -> Json<TextResponse> {
    Json(Action::Improve.apply(request))
}

#[instrument(skip_all)]
async fn rephrase_handler(AppJson(request): AppJson<TextRequest>) -> Json<TextResponse> {
    Json(Action::Rephrase.apply(request))
}

#[instrument(skip_all)]
async fn grammar_handler(AppJson(request): AppJson<TextRequest>) -> Json<TextResponse> {
    Json(Action::Grammar.apply(request))
}

#[instrument(skip(request))]
async fn action_handler(
    Path(action): Path<String>,
    AppJson(request): AppJson<TextRequest>,
) -> Json<TextResponse> {
    let resolved = Action::from(action.as_str());
    tracing::info!("Dispatching {:?} to {}", action, resolved);
    Json(resolved.apply(request))
}
