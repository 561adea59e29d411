//! Axum router assembly.

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use inventory_app::ports::ItemRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Unmatched paths answer `404 Not found`. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes::<R>())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wrap [`build`] so trailing slashes are trimmed before routing
/// (`/items/` is served as `/items`).
///
/// Serve it with `axum::ServiceExt::<axum::extract::Request>::into_make_service`.
pub fn service<R>(state: AppState<R>) -> NormalizePath<Router>
where
    R: ItemRepository + Send + Sync + 'static,
{
    NormalizePathLayer::trim_trailing_slash().layer(build(state))
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
