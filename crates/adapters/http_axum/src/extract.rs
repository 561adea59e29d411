//! Request extractors that reject with [`ApiError`].

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use inventory_domain::id::ItemId;

use crate::error::ApiError;

/// The `{id}` path segment parsed as an [`ItemId`].
///
/// Declare it before any body extractor so a bad id is reported ahead of a
/// bad body.
pub struct ItemIdPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;
        raw.parse().map(Self).map_err(|_| ApiError::InvalidId)
    }
}

/// A JSON request body.
///
/// Unlike [`axum::Json`] this ignores the `Content-Type` header and collapses
/// every decoding failure into [`ApiError::InvalidJson`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidJson)?;
        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            tracing::debug!(error = %err, "rejected request body");
            ApiError::InvalidJson
        })
    }
}
