use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::contract::ContractError;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreditsResponse {
    pub id: u64,
    pub credits: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn get_health() -> Json<HealthStatus> {
    metrics::record_request("health", 200);
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_config(State(state): State<AppState>) -> Response {
    match state.config_handler.get_config().await {
        Ok(snapshot) => {
            metrics::record_request("config", 200);
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(e) => query_failed("config", e),
    }
}

pub async fn get_credits(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        metrics::record_request("credits", 400);
        return error_response(StatusCode::BAD_REQUEST, format!("invalid account id '{id}'"));
    };

    match state.config_handler.contract_handler().get_credits(id).await {
        Ok(credits) => {
            metrics::record_request("credits", 200);
            (StatusCode::OK, Json(CreditsResponse { id, credits })).into_response()
        }
        Err(e) => query_failed("credits", e),
    }
}

fn query_failed(route: &'static str, e: ContractError) -> Response {
    tracing::error!(route, error = %e, "Contract query failed");
    metrics::record_request(route, 502);
    error_response(StatusCode::BAD_GATEWAY, e.to_string())
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
