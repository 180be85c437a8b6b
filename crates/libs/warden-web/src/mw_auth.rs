//! Bearer-token authentication guard for protected routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use warden_auth::jwt::JwtKeys;

use crate::{auth_token::decode_token, prelude::*};

/// Middleware that requires a valid bearer token for a route.
///
/// The `Authorization` header must carry exactly two space-separated tokens
/// (`Bearer <token>`). The token's signature is verified against the
/// injected keys; the decoded claims are discarded and the request proceeds
/// unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use axum::{Router, middleware, routing::get};
/// use warden_auth::jwt::JwtKeys;
/// use warden_web::mw_auth::mw_require_auth;
///
/// let keys = Arc::new(JwtKeys::new(b"secret"));
/// let app: Router<()> = Router::new()
///     .route("/protected", get(protected_handler))
///     .layer(middleware::from_fn_with_state(keys, mw_require_auth));
///
/// async fn protected_handler() -> &'static str {
///     "This requires authentication"
/// }
/// ```
pub async fn mw_require_auth(
    State(keys): State<Arc<JwtKeys>>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Err(Error::MissingAuthHeader);
    };
    let value = value.to_str().map_err(|_| Error::MalformedAuthHeader)?;

    let token_bearer: Vec<&str> = value.split(' ').collect();
    if token_bearer.len() != 2 {
        return Err(Error::MalformedAuthHeader);
    }
    let token = token_bearer[1];

    decode_token(token, &keys).map_err(|_| Error::TokenVerification)?;

    Ok(next.run(req).await)
}
