//! Menu catalog models matching the frontend MenuItem interface.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appetizers,
    MainCourses,
    Desserts,
    Beverages,
    Sides,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Appetizers,
        Category::MainCourses,
        Category::Desserts,
        Category::Beverages,
        Category::Sides,
    ];
}

/// Fixed set of allergens a menu item may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Gluten,
    Dairy,
    Nuts,
    Eggs,
    Soy,
    Shellfish,
}

/// A validated, non-negative price.
///
/// Construction fails for negative or non-finite values, so a `Price` held
/// anywhere in the system is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidPrice(value));
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPrice;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

/// Error returned when a price fails validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidPrice(pub f64);

impl std::fmt::Display for InvalidPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "price cannot be negative (got {})", self.0)
    }
}

impl std::error::Error for InvalidPrice {}

/// Nutritional information for a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// A single catalog record describing one dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default = "now_rfc3339")]
    pub created_at: String,
    #[serde(default = "now_rfc3339")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
}

fn default_available() -> bool {
    true
}

/// Current time as an RFC 3339 string, the timestamp format of the catalog.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Accepts either a single string or a sequence of strings and normalizes
/// to a sequence. The frontend form submits ingredients both ways.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrSeq::deserialize(deserializer)? {
        StringOrSeq::One(s) => vec![s],
        StringOrSeq::Many(v) => v,
    })
}

/// Request body for creating a new menu item.
///
/// The server generates the id and timestamps; an explicit id is accepted
/// for seeded/imported records and is subject to the duplicate-id policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
}

/// Request body for updating an existing menu item.
///
/// Updates are wholesale replacements: every field of the record is taken
/// from this payload, except the id (from the path) and `createdAt` (kept
/// from the existing record).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
}
