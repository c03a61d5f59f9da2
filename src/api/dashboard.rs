//! Dashboard API endpoints.
//!
//! Catalog figures are computed from the store; the order and revenue
//! numbers are simulated display data, as in the original console.

use axum::extract::State;
use rand::Rng;
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::Category;
use crate::AppState;

/// Item count for one category.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Dashboard metrics for the landing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_items: usize,
    pub available_items: usize,
    pub unavailable_items: usize,
    pub average_price: f64,
    pub items_per_category: Vec<CategoryCount>,
    /// Simulated figure, regenerated on every request
    pub orders_today: u64,
    /// Simulated figure, regenerated on every request
    pub revenue_today: f64,
}

/// GET /api/dashboard/metrics - Dashboard figures.
pub async fn dashboard_metrics(State(state): State<AppState>) -> ApiResult<DashboardMetrics> {
    let store = state.store.read().await;
    let items = store.items();

    let total_items = items.len();
    let available_items = items.iter().filter(|item| item.available).count();
    let average_price = if total_items == 0 {
        0.0
    } else {
        items.iter().map(|item| item.price.value()).sum::<f64>() / total_items as f64
    };

    let items_per_category = Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: items.iter().filter(|item| item.category == category).count(),
        })
        .collect();

    let mut rng = rand::rng();
    let orders_today: u64 = rng.random_range(40..180);
    let average_order = if average_price > 0.0 { average_price } else { 12.0 };
    let revenue_today = (orders_today as f64 * average_order * 100.0).round() / 100.0;

    success(DashboardMetrics {
        total_items,
        available_items,
        unavailable_items: total_items - available_items,
        average_price,
        items_per_category,
        orders_today,
        revenue_today,
    })
}
