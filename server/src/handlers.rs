//! `/todo` route handlers.
//!
//! | Method | Query | Body | Success |
//! |--------|-------|------|---------|
//! | POST   |       | item | 201 + item |
//! | GET    | `id`  |      | 200 + item |
//! | PUT    |       | item | 200 + updated item |
//! | DELETE | `id`  |      | 200 + removed item |

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use todo_core::TodoItem;
use tracing::info;

use crate::{error::ApiError, SharedStore};

/// `?id=` query string for GET and DELETE.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

pub fn routes() -> Router<SharedStore> {
    Router::new().route(
        "/todo",
        get(get_item)
            .post(create_item)
            .put(update_item)
            .delete(delete_item),
    )
}

async fn create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<TodoItem>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let Json(item) = payload?;
    let created = store.create(item).map_err(ApiError::from_create)?;
    info!(id = created.id, "todo item created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_item(
    State(store): State<SharedStore>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Query(IdQuery { id }) = query?;
    Ok(Json(store.get(id)?))
}

async fn update_item(
    State(store): State<SharedStore>,
    payload: Result<Json<TodoItem>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Json(item) = payload?;
    let updated = store.update(item)?;
    info!(id = updated.id, "todo item updated");
    Ok(Json(updated))
}

async fn delete_item(
    State(store): State<SharedStore>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Query(IdQuery { id }) = query?;
    let deleted = store.delete(id)?;
    info!(id = deleted.id, "todo item deleted");
    Ok(Json(deleted))
}
