//! Operator account models matching the frontend auth interface.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_rfc3339;

/// Role assigned to an operator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Staff,
    Guest,
}

/// Permissions granted to an operator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "create:menu")]
    CreateMenu,
    #[serde(rename = "update:menu")]
    UpdateMenu,
    #[serde(rename = "delete:menu")]
    DeleteMenu,
    #[serde(rename = "view:menu")]
    ViewMenu,
    #[serde(rename = "manage:users")]
    ManageUsers,
}

/// Profile of the authenticated operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub permissions: Vec<Permission>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Build the default admin profile for a freshly authenticated operator.
    pub fn admin(username: &str) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            role: UserRole::Admin,
            permissions: vec![
                Permission::CreateMenu,
                Permission::UpdateMenu,
                Permission::DeleteMenu,
                Permission::ViewMenu,
                Permission::ManageUsers,
            ],
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Request body for the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}
