//! Configuration module for the menu admin backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::store::DuplicateIdPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operator username checked at login
    pub admin_username: String,
    /// Operator password checked at login; empty disables the session
    /// guard entirely (dev mode)
    pub admin_password: String,
    /// Path to the SQLite key-value store file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// How the store treats an insert with an already-present id
    pub duplicate_id_policy: DuplicateIdPolicy,
    /// Page size of the listing view
    pub page_size: usize,
}

/// Default operator credentials, matching the original console.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_username =
            env::var("MENU_ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());

        let admin_password =
            env::var("MENU_ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let db_path = env::var("MENU_DB_PATH")
            .unwrap_or_else(|_| "./data/menu.sqlite".to_string())
            .into();

        let bind_addr = env::var("MENU_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid MENU_BIND_ADDR format");

        let log_level = env::var("MENU_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let duplicate_id_policy = env::var("MENU_DUPLICATE_ID_POLICY")
            .map(|s| {
                DuplicateIdPolicy::from_str(&s).expect("Invalid MENU_DUPLICATE_ID_POLICY value")
            })
            .unwrap_or_default();

        let page_size = env::var("MENU_PAGE_SIZE")
            .map(|s| parse_page_size(&s))
            .unwrap_or(6);

        Self {
            admin_username,
            admin_password,
            db_path,
            bind_addr,
            log_level,
            duplicate_id_policy,
            page_size,
        }
    }

    /// Whether the session guard is active. An explicitly empty
    /// `MENU_ADMIN_PASSWORD` disables authentication.
    pub fn auth_enabled(&self) -> bool {
        !self.admin_password.is_empty()
    }
}

/// Parse the page size, rejecting values the listing view cannot serve.
fn parse_page_size(s: &str) -> usize {
    let page_size: usize = s.parse().expect("Invalid MENU_PAGE_SIZE value");
    if page_size == 0 {
        panic!("Invalid MENU_PAGE_SIZE value: must be at least 1");
    }
    page_size
}
