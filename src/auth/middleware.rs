//! Authentication middleware that validates the session cookie and redirects
//! unauthenticated requests to the log in page.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{auth::cookie::validate_session, endpoints, state::AuthState};

/// Middleware function that checks for a valid session cookie. The request
/// is executed normally if the cookie is valid, otherwise a redirect to the
/// log-in page is returned using `get_redirect`.
#[inline]
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn() -> Response,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return get_redirect();
        }
    };

    if let Err(error) = validate_session(&jar) {
        tracing::debug!("Rejecting unauthenticated request: {error}");
        return get_redirect();
    }

    let request = Request::from_parts(parts, body);
    next.run(request).await
}

/// Middleware function that protects page routes.
///
/// Unauthenticated requests get an HTTP redirect to the log-in page.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key`
/// for decrypting and verifying the cookie contents.
pub(crate) async fn auth_guard(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, || {
        Redirect::to(endpoints::LOG_IN_VIEW).into_response()
    })
    .await
}

/// Middleware function that protects htmx API routes.
///
/// Unauthenticated requests get an `HX-Redirect` to the log-in page so that
/// htmx performs a full page navigation instead of swapping in the log-in
/// page markup.
pub(crate) async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, || {
        (
            HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
            StatusCode::OK,
        )
            .into_response()
    })
    .await
}
