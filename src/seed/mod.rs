//! One-time demo-data reconciliation.
//!
//! At startup, bundled demonstration records are merged into storage:
//! any demo record whose id is not already present is appended, then the
//! collection is saved once. Running it again is a no-op, and records the
//! operator has edited keep their edits.

use crate::errors::AppError;
use crate::models::MenuItem;
use crate::storage::MenuStorage;

/// Demonstration records bundled with the binary.
const DEMO_ITEMS_JSON: &str = include_str!("demo_items.json");

/// Merge bundled demo records into storage. Returns how many were added.
pub async fn reconcile_demo_items(storage: &MenuStorage) -> Result<usize, AppError> {
    let demo_items: Vec<MenuItem> = serde_json::from_str(DEMO_ITEMS_JSON)?;

    let mut items = storage.load().await;
    let missing: Vec<MenuItem> = demo_items
        .into_iter()
        .filter(|demo| !items.iter().any(|item| item.id == demo.id))
        .collect();

    if missing.is_empty() {
        return Ok(0);
    }

    let added = missing.len();
    items.extend(missing);
    storage.save(&items).await?;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Price};
    use crate::storage::init_storage;
    use tempfile::TempDir;

    async fn storage_fixture() -> (MenuStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_storage(&temp_dir.path().join("test.sqlite"))
            .await
            .expect("Failed to init storage");
        (MenuStorage::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_seeds_empty_storage() {
        let (storage, _dir) = storage_fixture().await;

        let added = reconcile_demo_items(&storage).await.unwrap();

        assert!(added > 0);
        assert_eq!(storage.load().await.len(), added);
    }

    #[tokio::test]
    async fn test_reconciliation_is_idempotent() {
        let (storage, _dir) = storage_fixture().await;

        let first = reconcile_demo_items(&storage).await.unwrap();
        let second = reconcile_demo_items(&storage).await.unwrap();

        assert!(first > 0);
        assert_eq!(second, 0);
        assert_eq!(storage.load().await.len(), first);
    }

    #[tokio::test]
    async fn test_reconciliation_keeps_edited_records() {
        let (storage, _dir) = storage_fixture().await;
        reconcile_demo_items(&storage).await.unwrap();

        // Operator edits a demo record
        let mut items = storage.load().await;
        items[0].name = "Renamed By Operator".to_string();
        items[0].price = Price::new(99.0).unwrap();
        let edited_id = items[0].id.clone();
        storage.save(&items).await.unwrap();

        let added = reconcile_demo_items(&storage).await.unwrap();
        assert_eq!(added, 0);

        let items = storage.load().await;
        let edited = items.iter().find(|i| i.id == edited_id).unwrap();
        assert_eq!(edited.name, "Renamed By Operator");
    }

    #[tokio::test]
    async fn test_reconciliation_preserves_operator_items() {
        let (storage, _dir) = storage_fixture().await;

        let own_item = MenuItem {
            id: "operator-1".to_string(),
            name: "Daily Special".to_string(),
            description: String::new(),
            price: Price::new(15.0).unwrap(),
            category: Category::MainCourses,
            ingredients: vec![],
            allergens: vec![],
            available: true,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
            image: None,
            nutritional_info: None,
        };
        storage.save(std::slice::from_ref(&own_item)).await.unwrap();

        let added = reconcile_demo_items(&storage).await.unwrap();

        let items = storage.load().await;
        assert_eq!(items.len(), added + 1);
        assert_eq!(items[0].id, "operator-1");
    }
}
