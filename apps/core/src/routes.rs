//! HTTP surface: the greeting endpoint and the rate-limited
//! classification endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Request;
use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::assembler::{ApiResponse, ResponseAssembler};
use crate::clock::{ist_now, IST_LABEL};
use crate::error::AppError;
use crate::models::{DataRequest, GreetingResponse};
use crate::rate_limiter::{enforce_rate_limit, Admission};

pub const GREETING: &str = "Hello from BFHL server!";

#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<ResponseAssembler>,
    pub admission: Admission,
}

impl AppState {
    pub fn new(assembler: ResponseAssembler, admission: Admission) -> Self {
        Self {
            assembler: Arc::new(assembler),
            admission,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Only classification is admission-controlled
    let classify = Router::new()
        .route("/bfhl", post(classify_tokens))
        .route_layer(middleware::from_fn_with_state(
            state.admission.clone(),
            enforce_rate_limit,
        ));

    Router::new()
        .route("/", get(greeting))
        .merge(classify)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
        .with_state(state)
}

async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING.to_string(),
        timestamp: ist_now(),
        timezone: IST_LABEL.to_string(),
    })
}

async fn classify_tokens(
    State(state): State<AppState>,
    payload: Result<Json<DataRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(request) = payload?;
    let response = state.assembler.assemble(&request.data);
    info!(
        tokens = request.data.len(),
        user_id = response.user_id(),
        success = response.is_success(),
        "Classification request handled"
    );
    Ok(response)
}
