//! Axum router construction and request handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use warden_auth::jwt::JwtKeys;
use warden_web::{
    mw_auth::mw_require_auth,
    store::UserStore,
    user::{CredentialsRequest, LoginResponse, RegisterResponse, login_user, register_user},
};

use crate::prelude::*;
use warden_web::prelude::Result as WebResult;

/// Shared handler state: the user store and token key material, injected
/// once at startup.
#[derive(Clone)]
pub struct AuthState {
    /// User persistence collaborator.
    pub users: Arc<dyn UserStore>,
    /// Session token key material.
    pub keys: Arc<JwtKeys>,
}

fn v1(path: &str) -> String {
    format!("/v1/{path}")
}

/// Builds the application router around the injected state.
pub fn build_router(state: AuthState) -> Router {
    let protected_routes = Router::new()
        .route(&v1("users/auth/verification"), get(verify_session))
        .route_layer(middleware::from_fn_with_state(
            state.keys.clone(),
            mw_require_auth,
        ));

    let auth_routes = Router::new()
        .route(&v1("users/auth"), get(index).post(register))
        .route(&v1("users/auth/login"), post(login));

    Router::new()
        .merge(protected_routes)
        .merge(auth_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API in a background task.
pub async fn setup_api(state: AuthState) -> Result<JoinHandle<Result<()>>> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    Ok(handle)
}

/// Response body for the session verification endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct VerificationResponse {
    /// Always true once the guard has passed.
    pub auth: bool,
    /// Human-readable confirmation.
    pub message: String,
}

async fn verify_session() -> Json<VerificationResponse> {
    Json(VerificationResponse {
        auth: true,
        message: String::from("Authenticated."),
    })
}

async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialsRequest>,
) -> WebResult<Json<LoginResponse>> {
    Ok(Json(login_user(
        &payload,
        state.users.as_ref(),
        &state.keys,
    )?))
}

#[axum::debug_handler]
async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialsRequest>,
) -> WebResult<(StatusCode, Json<RegisterResponse>)> {
    let response = register_user(&payload, state.users.as_ref(), &state.keys)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn index() -> &'static str {
    "auth"
}
