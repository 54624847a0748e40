// src/routes/misc.rs
//! Smoke-test endpoints: the hello page, `/api/ping` and `/api/echo`.

use axum::{
    extract::rejection::JsonRejection,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::AppError;

// ---

const HELLO_PAGE: &str = "<h1>Hello world</h1><p>paddyflow gateway</p>";

#[derive(Debug, Deserialize)]
struct EchoRequest {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct EchoResponse {
    you_sent: String,
}

#[derive(Debug, Serialize)]
struct PingResponse {
    message: &'static str,
}

async fn hello() -> Html<&'static str> {
    Html(HELLO_PAGE)
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

async fn echo(body: Result<Json<EchoRequest>, JsonRejection>) -> Result<Json<EchoResponse>, AppError> {
    // ---
    let Json(req) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(EchoResponse { you_sent: req.text }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/api/ping", get(ping))
        .route("/api/echo", post(echo))
}
