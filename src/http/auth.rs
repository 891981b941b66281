//! Bearer-token authentication middleware.

use super::AppState;
use crate::identity::AuthError;
use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

const NO_TOKEN: &str = "No token provided or invalid format. Expected: Bearer <token>";

/// Resolves the bearer token to a [`UserId`](crate::user::domain::UserId)
/// and stores it in the request extensions.
pub(super) async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return rejection(&AuthError::MissingToken);
    };
    match state.identity.verify(&token).await {
        Ok(user_id) => {
            request.extensions_mut().insert(user_id);
            next.run(request).await
        }
        Err(err) => {
            warn!(error = %err, path = %request.uri().path(), "rejected bearer token");
            rejection(&err)
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}

fn rejection(err: &AuthError) -> Response {
    let body = match err {
        AuthError::MissingToken => json!({ "message": NO_TOKEN }),
        AuthError::Expired => json!({ "message": "Token has expired" }),
        AuthError::Malformed => json!({ "message": "Invalid token format" }),
        AuthError::Invalid(reason) => json!({ "message": "Invalid token", "error": reason }),
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Bearer abc.def"), Some("abc.def"))]
    #[case(Some("Basic abc"), None)]
    #[case(Some("bearer abc"), None)]
    #[case(None, None)]
    fn bearer_token_requires_scheme_prefix(
        #[case] header: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut headers = HeaderMap::new();
        if let Some(value) = header {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(value).expect("valid header"));
        }

        assert_eq!(bearer_token(&headers).as_deref(), expected);
    }
}
