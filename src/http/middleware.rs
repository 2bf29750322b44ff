//! Axum middleware applying a [`HeaderGuard`] to every response.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    extract::{Request, State},
    http::{header::USER_AGENT, HeaderMap},
    middleware::{self, Next},
    response::Response,
    Router,
};

use crate::guard::HeaderGuard;

/// Guard handle shared between the middleware and the config watcher.
pub type SharedGuard = Arc<ArcSwap<HeaderGuard>>;

/// Wrap a compiled guard for sharing.
pub fn shared(guard: HeaderGuard) -> SharedGuard {
    Arc::new(ArcSwap::from_pointee(guard))
}

/// Middleware function setting security headers on the response.
///
/// The policy is loaded after the inner service completes, so a reload
/// during a request applies to that request's response.
pub async fn guard_headers(
    State(guard): State<SharedGuard>,
    request: Request,
    next: Next,
) -> Response {
    // Only the user agent is needed once the request has been consumed.
    let mut seen = HeaderMap::new();
    if let Some(user_agent) = request.headers().get(USER_AGENT) {
        seen.insert(USER_AGENT, user_agent.clone());
    }

    let mut response = next.run(request).await;
    guard.load().apply(&seen, &mut response);
    response
}

/// Layer [`guard_headers`] onto a router.
pub fn apply_guard<S>(router: Router<S>, guard: SharedGuard) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(guard, guard_headers))
}
