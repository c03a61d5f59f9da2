//! Menu item API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    now_rfc3339, Category, CreateMenuItemRequest, MenuItem, Price, UpdateMenuItemRequest,
};
use crate::AppState;

/// GET /api/menu/items - List the full menu collection.
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Vec<MenuItem>> {
    let store = state.store.read().await;
    success(store.items().to_vec())
}

/// GET /api/menu/items/:id - Get a single menu item.
pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MenuItem> {
    let store = state.store.read().await;

    match store.select_item(&id) {
        Some(item) => success(item),
        None => error(AppError::NotFound(format!("Menu item {} not found", id))),
    }
}

/// POST /api/menu/items - Create a new menu item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateMenuItemRequest>,
) -> ApiResult<MenuItem> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return error(AppError::Validation("Name is required".to_string()));
    }
    let price = match Price::new(request.price) {
        Ok(price) => price,
        Err(e) => return error(AppError::Validation(e.to_string())),
    };

    let now = now_rfc3339();
    let item = MenuItem {
        id: request.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: request.name,
        description: request.description,
        price,
        category: request.category,
        ingredients: request.ingredients,
        allergens: request.allergens,
        available: request.available,
        created_at: now.clone(),
        updated_at: now,
        image: request.image,
        nutritional_info: request.nutritional_info,
    };

    let mut store = state.store.write().await;
    match store.add_item(item).await {
        Ok(item) => success(item),
        Err(e) => error(e),
    }
}

/// PUT /api/menu/items/:id - Replace a menu item wholesale.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMenuItemRequest>,
) -> ApiResult<MenuItem> {
    if request.name.trim().is_empty() {
        return error(AppError::Validation("Name is required".to_string()));
    }
    let price = match Price::new(request.price) {
        Ok(price) => price,
        Err(e) => return error(AppError::Validation(e.to_string())),
    };

    let mut store = state.store.write().await;

    // The id and creation timestamp survive the replacement
    let Some(existing) = store.select_item(&id) else {
        return error(AppError::NotFound(format!("Menu item {} not found", id)));
    };

    let item = MenuItem {
        id,
        name: request.name,
        description: request.description,
        price,
        category: request.category,
        ingredients: request.ingredients,
        allergens: request.allergens,
        available: request.available,
        created_at: existing.created_at,
        updated_at: now_rfc3339(),
        image: request.image,
        nutritional_info: request.nutritional_info,
    };

    match store.update_item(item).await {
        Ok(Some(item)) => success(item),
        Ok(None) => error(AppError::NotFound("Menu item not found".to_string())),
        Err(e) => error(e),
    }
}

/// DELETE /api/menu/items/:id - Delete a menu item.
///
/// Deleting an absent id is not an error; the operation is idempotent.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let mut store = state.store.write().await;

    match store.delete_item(&id).await {
        Ok(removed) => {
            if removed == 0 {
                tracing::debug!("Delete for absent menu item {}", id);
            }
            success(())
        }
        Err(e) => error(e),
    }
}

/// GET /api/menu/categories - List the fixed category set.
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let store = state.store.read().await;
    success(store.categories().to_vec())
}
