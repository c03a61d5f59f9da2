//! Menu Admin Backend
//!
//! REST backend for a restaurant menu administration console, with a
//! SQLite-backed key-value store and a write-through in-memory menu store.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod seed;
mod storage;
mod store;
mod view;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use storage::MenuStorage;
use store::MenuStore;
use view::MenuView;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MenuStore>>,
    pub view: Arc<RwLock<MenuView>>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Menu Admin Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!(
        "Duplicate-id policy: {}",
        config.duplicate_id_policy.as_str()
    );

    if !config.auth_enabled() {
        tracing::warn!("MENU_ADMIN_PASSWORD is empty. Authentication is disabled!");
    } else if config.admin_password == config::DEFAULT_ADMIN_PASSWORD {
        tracing::warn!("Running with the default operator password (set MENU_ADMIN_PASSWORD)");
    }

    // Initialize the key-value store
    let pool = storage::init_storage(&config.db_path).await?;
    let menu_storage = MenuStorage::new(pool);

    // One-time demo-data reconciliation
    let seeded = seed::reconcile_demo_items(&menu_storage).await?;
    if seeded > 0 {
        tracing::info!("Seeded {} demo menu items", seeded);
    }

    // Hydrate the menu store
    let mut menu_store = MenuStore::new(menu_storage, config.duplicate_id_policy);
    menu_store.load_items().await;
    tracing::info!("Loaded {} menu items", menu_store.items().len());

    // Prime the listing view against the hydrated collection
    let mut menu_view = MenuView::new(config.page_size);
    menu_view.page(menu_store.items(), menu_store.generation());

    // Create application state
    let state = AppState {
        store: Arc::new(RwLock::new(menu_store)),
        view: Arc::new(RwLock::new(menu_view)),
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session registry for the auth layer
    let sessions = state.sessions.clone();
    let auth_enabled = state.config.auth_enabled();

    // Routes behind session authentication
    let protected_routes = Router::new()
        // Auth
        .route("/auth/logout", post(api::logout))
        // Menu items
        .route("/menu/items", get(api::list_items))
        .route("/menu/items", post(api::create_item))
        .route("/menu/items/{id}", get(api::get_item))
        .route("/menu/items/{id}", put(api::update_item))
        .route("/menu/items/{id}", delete(api::delete_item))
        .route("/menu/categories", get(api::list_categories))
        // Listing view
        .route("/menu/view", get(api::get_view))
        .route("/menu/view/filters", put(api::set_view_filters))
        .route("/menu/view/page", put(api::set_view_page))
        // Dashboard
        .route("/dashboard/metrics", get(api::dashboard_metrics))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), auth_enabled, req, next)
        }));

    // Login is reachable without a session
    let auth_routes = Router::new().route("/auth/login", post(api::login));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", auth_routes.merge(protected_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
