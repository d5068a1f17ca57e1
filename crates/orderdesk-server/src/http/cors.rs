// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "content-type, x-request-id";

fn allowed_origin(state: &AppState, origin: &str) -> bool {
    state
        .api
        .cors_allowed_origins
        .iter()
        .any(|o| o == "*" || o == origin)
}

/// Answers preflight requests and stamps allow-origin headers on responses
/// to configured dashboard origins. Requests without an `origin` header pass
/// through untouched.
pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let Some(origin) = origin.filter(|o| allowed_origin(&state, o)) else {
        return next.run(req).await;
    };

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        put_cors_headers(&mut resp, &origin);
        return resp;
    }

    let mut resp = next.run(req).await;
    put_cors_headers(&mut resp, &origin);
    resp
}

fn put_cors_headers(resp: &mut Response, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        resp.headers_mut().insert("access-control-allow-origin", v);
    }
    resp.headers_mut().insert(
        "access-control-allow-methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    resp.headers_mut().insert(
        "access-control-allow-headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
