//! Peripheral status endpoints.
//!
//! Report service liveness and storage connectivity; none of them touch the
//! diagnostic pipeline.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::AppState;

/// API version reported by the status endpoints.
const VERSION: &str = "2.0.0";

/// GET / - welcome message with connectivity summary.
pub async fn read_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Bem-vindo ao Diagnóstico IA Hunter v2!",
        "db_status": db_status(&state),
        "version": VERSION,
    }))
}

/// GET /health - liveness probe.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "database": db_status(&state),
        "version": VERSION,
    }))
}

/// GET /test-db - round-trips a query through the repository.
pub async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let Some(repository) = &state.repository else {
        return Json(json!({
            "status": "no_connection",
            "message": "Database pool not initialized",
        }));
    };

    match repository.health().await {
        Ok(timestamp) => Json(json!({
            "status": "success",
            "timestamp": timestamp.to_rfc3339(),
        })),
        Err(err) => Json(json!({
            "status": "error",
            "message": err.to_string(),
        })),
    }
}

/// GET /db-info - storage description for debugging.
pub async fn db_info(State(state): State<AppState>) -> Json<Value> {
    let Some(repository) = &state.repository else {
        return Json(json!({ "status": "disconnected" }));
    };

    match repository.info().await {
        Ok(info) => {
            let mut body = json!({ "status": "connected" });
            if let (Value::Object(map), Value::Object(extra)) =
                (&mut body, serde_json::to_value(&info).unwrap_or_default())
            {
                map.extend(extra);
            }
            Json(body)
        }
        Err(err) => Json(json!({
            "status": "error",
            "message": err.to_string(),
        })),
    }
}

fn db_status(state: &AppState) -> &'static str {
    if state.repository.is_some() {
        "connected"
    } else {
        "disconnected"
    }
}
