//! JSON handlers for items.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shelf_app::ports::ItemRepository;
use shelf_domain::error::{ShelfError, ValidationError};
use shelf_domain::id::ItemId;
use shelf_domain::item::{Item, ItemPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string carrying the target item id (`?item_id=…`).
#[derive(Deserialize)]
pub struct ItemIdQuery {
    pub item_id: ItemId,
}

/// Query string for name lookups (`?name=…`, optional).
#[derive(Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Request body for creating an item.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub brand: Option<String>,
}

/// Request body for patching an item. Absent or `null` fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
}

impl From<CreateItemRequest> for Item {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            brand: req.brand,
        }
    }
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            brand: req.brand,
        }
    }
}

/// Acknowledgement returned after a successful delete.
#[derive(Serialize)]
pub struct DeletedBody {
    #[serde(rename = "Success")]
    pub success: &'static str,
}

/// Possible responses from the lookup endpoints.
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
    Ok(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Item>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(DeletedBody {
                success: "Item deleted successfully",
            })
            .into_response(),
        }
    }
}

fn parse_item_id(path: Result<Path<String>, PathRejection>) -> Result<ItemId, ApiError> {
    let Path(raw) = path?;
    ItemId::from_str(&raw).map_err(|err| {
        ApiError::from(ShelfError::Validation(ValidationError::InvalidItemId(err)))
    })
}

/// `GET /get-item/{item_id}`
pub async fn get<IR>(
    State(state): State<AppState<IR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_item_id(path)?;
    let item = state.item_service.get_item(item_id).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `GET /get-by-name?name=…`
pub async fn get_by_name<IR>(
    State(state): State<AppState<IR>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<GetResponse, ApiError>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    let Query(params) = query?;
    let item = state
        .item_service
        .find_item_by_name(params.name.as_deref())
        .await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /create-item?item_id=…`
pub async fn create<IR>(
    State(state): State<AppState<IR>>,
    query: Result<Query<ItemIdQuery>, QueryRejection>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    let Query(params) = query?;
    let Json(req) = body?;

    let created = state
        .item_service
        .create_item(params.item_id, Item::from(req))
        .await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `PUT /update-item/{item_id}`
pub async fn update<IR>(
    State(state): State<AppState<IR>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    let item_id = parse_item_id(path)?;
    let Json(req) = body?;
    let updated = state
        .item_service
        .update_item(item_id, ItemPatch::from(req))
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /delete-item?item_id=…`
pub async fn delete<IR>(
    State(state): State<AppState<IR>>,
    query: Result<Query<ItemIdQuery>, QueryRejection>,
) -> Result<DeleteResponse, ApiError>
where
    IR: ItemRepository + Send + Sync + 'static,
{
    let Query(params) = query?;
    state.item_service.delete_item(params.item_id).await?;
    Ok(DeleteResponse::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_null_fields_as_absent_when_building_patch() {
        let req: UpdateItemRequest =
            serde_json::from_str(r#"{"name": null, "brand": null}"#).unwrap();
        assert!(ItemPatch::from(req).is_empty());
    }

    #[test]
    fn should_require_name_and_price_in_create_body() {
        assert!(serde_json::from_str::<CreateItemRequest>(r#"{"price": 1.0}"#).is_err());
        assert!(serde_json::from_str::<CreateItemRequest>(r#"{"name": "Milk"}"#).is_err());

        let req: CreateItemRequest =
            serde_json::from_str(r#"{"name": "Milk", "price": 2.5}"#).unwrap();
        let item = Item::from(req);
        assert_eq!(item.name, "Milk");
        assert!(item.brand.is_none());
    }
}
