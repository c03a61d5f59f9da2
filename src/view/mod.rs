//! Filter and pagination logic for the menu listing view.
//!
//! Filtering and slicing are pure functions; `MenuView` layers the
//! transient view state (criteria + current page) on top and enforces the
//! page-reset rule: the page snaps back to 1 whenever the criteria or the
//! underlying collection change, so a stale page can never point past the
//! end of a shorter filtered list.

use serde::{Deserialize, Serialize};

use crate::models::{Category, MenuItem};

/// Transient filter criteria owned by the listing view. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively against name and description.
    #[serde(default)]
    pub search_text: String,
    /// Exact category match; `None` means no category filter.
    #[serde(default)]
    pub category: Option<Category>,
}

/// Keep an item if its name or description contains the search text
/// (case-insensitive) and, when a category filter is set, its category
/// matches exactly.
pub fn filter_items(items: &[MenuItem], criteria: &FilterCriteria) -> Vec<MenuItem> {
    let needle = criteria.search_text.to_lowercase();

    items
        .iter()
        .filter(|item| {
            let matches_search = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle);
            let matches_category = criteria
                .category
                .map_or(true, |category| item.category == category);
            matches_search && matches_category
        })
        .cloned()
        .collect()
}

/// Slice out page `page` (1-indexed) of `page_size` items.
/// Pages past the end yield an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// One page of the filtered collection, as served to the listing view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPage {
    pub items: Vec<MenuItem>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Stateful listing view: filter criteria plus the current page.
pub struct MenuView {
    criteria: FilterCriteria,
    current_page: usize,
    page_size: usize,
    last_generation: u64,
}

impl MenuView {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size,
            last_generation: 0,
        }
    }

    /// Replace the filter criteria. A change resets the page to 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.current_page = 1;
        }
    }

    /// Move to another page. Pages are 1-indexed.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Derive the current page from the collection.
    ///
    /// `generation` identifies the collection revision; when it differs
    /// from the last derivation the page resets to 1 first.
    pub fn page(&mut self, items: &[MenuItem], generation: u64) -> MenuPage {
        if generation != self.last_generation {
            self.last_generation = generation;
            self.current_page = 1;
        }

        let filtered = filter_items(items, &self.criteria);
        let total_items = filtered.len();
        let total_pages = total_items.div_ceil(self.page_size);
        let items = paginate(&filtered, self.current_page, self.page_size).to_vec();

        MenuPage {
            items,
            current_page: self.current_page,
            page_size: self.page_size,
            total_items,
            total_pages,
        }
    }
}
