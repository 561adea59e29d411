//! JSON REST handlers for items.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use inventory_app::ports::ItemRepository;
use inventory_domain::item::{Item, ItemPatch, NewItem};

use crate::error::ApiError;
use crate::extract::{ItemIdPath, JsonBody};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Item>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /items`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let items = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `POST /items`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    JsonBody(req): JsonBody<NewItem>,
) -> Result<CreateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let created = state.item_service.create_item(req).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /items/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    ItemIdPath(id): ItemIdPath,
) -> Result<GetResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let item = state.item_service.get_item(id).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `PUT /items/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    ItemIdPath(id): ItemIdPath,
    JsonBody(patch): JsonBody<ItemPatch>,
) -> Result<GetResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let updated = state.item_service.update_item(id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /items/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    ItemIdPath(id): ItemIdPath,
) -> Result<DeleteResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    state.item_service.delete_item(id).await?;
    Ok(DeleteResponse::NoContent)
}

/// Any other verb on `/items`.
pub async fn collection_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Any other verb on `/items/{id}`. The id is still validated first.
pub async fn member_method_not_allowed(ItemIdPath(_): ItemIdPath) -> ApiError {
    ApiError::MethodNotAllowed
}
