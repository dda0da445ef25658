use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::Login;
use crate::user::models::UserId;

/// Identity resolved from the bearer token, available to protected handlers
/// through request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub login: Login,
}

/// Identity gate for protected routes.
///
/// Rejects with 401 when the Authorization header is missing or not a bearer
/// token, when the token does not verify, or when its subject no longer
/// resolves to a stored identity.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Owned: the request body is not Sync, so no borrow of it may cross an await
    let token = extract_token_from_header(&req)?.to_string();

    let user = state.user_service.authenticate(&token).await.map_err(|e| {
        tracing::debug!(reason = %e, "Identity gate rejected request");
        rejection(ApiError::from(e))
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        login: user.login,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req.headers().get(header::AUTHORIZATION).ok_or_else(|| {
        tracing::debug!("Missing Authorization header");
        not_authenticated()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        not_authenticated()
    })?;

    bearer_token(auth_str).ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer token");
        not_authenticated()
    })
}

/// Token from an `Authorization` value; the scheme name is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn not_authenticated() -> Response {
    rejection(ApiError::Unauthorized("Not authenticated".to_string()))
}

fn rejection(err: ApiError) -> Response {
    let mut response = err.into_response();
    if response.status() == StatusCode::UNAUTHORIZED {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    }
    response
}
