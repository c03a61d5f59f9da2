//! Listing view API endpoints.
//!
//! The view state (filter criteria + current page) lives server-side: the
//! console is single-operator, and keeping it here lets the backend enforce
//! the page-reset rule instead of trusting each client to re-derive it.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::view::{FilterCriteria, MenuPage};
use crate::AppState;

/// Request body for moving to another page.
#[derive(Debug, Deserialize)]
pub struct SetPageRequest {
    pub page: usize,
}

/// GET /api/menu/view - The current filtered, paginated page.
pub async fn get_view(State(state): State<AppState>) -> ApiResult<MenuPage> {
    let store = state.store.read().await;
    let mut view = state.view.write().await;

    success(view.page(store.items(), store.generation()))
}

/// PUT /api/menu/view/filters - Replace the filter criteria.
///
/// A criteria change resets the page to 1.
pub async fn set_view_filters(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<MenuPage> {
    let store = state.store.read().await;
    let mut view = state.view.write().await;

    view.set_criteria(criteria);
    success(view.page(store.items(), store.generation()))
}

/// PUT /api/menu/view/page - Move to another page of the current view.
pub async fn set_view_page(
    State(state): State<AppState>,
    Json(request): Json<SetPageRequest>,
) -> ApiResult<MenuPage> {
    let store = state.store.read().await;
    let mut view = state.view.write().await;

    view.set_page(request.page);
    success(view.page(store.items(), store.generation()))
}
