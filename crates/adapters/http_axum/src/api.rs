//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::routing::get;

use inventory_app::ports::ItemRepository;

use crate::state::AppState;

/// Build the item routes.
///
/// Verbs not listed for a path fall through to a handler that answers `405`.
/// `HEAD` is routed there explicitly since `get` would otherwise serve it.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/items",
            get(items::list::<R>)
                .post(items::create::<R>)
                .head(items::collection_method_not_allowed)
                .fallback(items::collection_method_not_allowed),
        )
        .route(
            "/items/{id}",
            get(items::get::<R>)
                .put(items::update::<R>)
                .delete(items::delete::<R>)
                .head(items::member_method_not_allowed)
                .fallback(items::member_method_not_allowed),
        )
}
