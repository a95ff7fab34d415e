// SPDX-License-Identifier: MPL-2.0
//! In-memory category catalog.
//!
//! Holds the categories managed by the entry form and list screen. Deletion
//! is soft (entries are flagged and hidden from listings) and names must be
//! unique among non-deleted categories, compared case-insensitively.

use chrono::{DateTime, Utc};
use std::fmt;

/// Unique identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(u64);

/// A single category entry.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    is_listed: bool,
    created_at: DateTime<Utc>,
    is_deleted: bool,
}

impl Category {
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the category is visible on the storefront.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.is_listed
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Reasons a catalog operation can be refused.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    DuplicateName,
    NotFound,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::DuplicateName => {
                write!(f, "A category with this name already exists.")
            }
            Rejection::NotFound => write!(f, "Category not found."),
        }
    }
}

/// The category store.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Category>,
    next_id: u64,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new category.
    ///
    /// The name is trimmed before storing. Fails with
    /// [`Rejection::DuplicateName`] if a non-deleted category already uses
    /// the name (case-insensitive).
    pub fn add(&mut self, name: &str, is_listed: bool) -> Result<CategoryId, Rejection> {
        let name = name.trim();
        if self.name_taken(name, None) {
            return Err(Rejection::DuplicateName);
        }

        let id = CategoryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Category {
            id,
            name: name.to_owned(),
            is_listed,
            created_at: Utc::now(),
            is_deleted: false,
        });
        Ok(id)
    }

    /// Renames a category and updates its listed flag.
    ///
    /// The duplicate check excludes the category being edited, so saving an
    /// entry under its current name succeeds.
    pub fn update(
        &mut self,
        id: CategoryId,
        name: &str,
        is_listed: bool,
    ) -> Result<(), Rejection> {
        let name = name.trim();
        if self.name_taken(name, Some(id)) {
            return Err(Rejection::DuplicateName);
        }

        let entry = self.entry_mut(id)?;
        entry.name = name.to_owned();
        entry.is_listed = is_listed;
        Ok(())
    }

    /// Flags a category as deleted. It disappears from listings and its name
    /// becomes available again, but the entry itself is retained.
    pub fn soft_delete(&mut self, id: CategoryId) -> Result<(), Rejection> {
        self.entry_mut(id)?.is_deleted = true;
        Ok(())
    }

    /// Flips the listed flag and returns the new state.
    pub fn toggle_listed(&mut self, id: CategoryId) -> Result<bool, Rejection> {
        let entry = self.entry_mut(id)?;
        entry.is_listed = !entry.is_listed;
        Ok(entry.is_listed)
    }

    /// Returns a non-deleted category by id.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.entries
            .iter()
            .find(|c| c.id == id && !c.is_deleted)
    }

    /// Returns non-deleted categories whose name contains `query`
    /// (case-insensitive), newest first. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Category> {
        let needle = query.trim().to_lowercase();
        let mut results: Vec<&Category> = self
            .entries
            .iter()
            .filter(|c| !c.is_deleted)
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect();

        // Newest first; id breaks ties between entries created in the same instant.
        results.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.0.cmp(&a.id.0))
        });
        results
    }

    /// Number of non-deleted categories.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|c| !c.is_deleted).count()
    }

    fn entry_mut(&mut self, id: CategoryId) -> Result<&mut Category, Rejection> {
        self.entries
            .iter_mut()
            .find(|c| c.id == id && !c.is_deleted)
            .ok_or(Rejection::NotFound)
    }

    fn name_taken(&self, name: &str, exclude: Option<CategoryId>) -> bool {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .filter(|c| !c.is_deleted)
            .filter(|c| Some(c.id) != exclude)
            .any(|c| c.name.to_lowercase() == lowered)
    }
}

/// One page of catalog results.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a Category>,
    /// 1-based page number after clamping.
    pub number: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl Page<'_> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Splits `items` into pages of `per_page` and returns the requested page.
///
/// Page numbers are 1-based. A page of 0 falls back to the first page and a
/// page past the end clamps to the last page, so a stale page selection
/// (e.g. after deleting the last item on the final page) still renders.
#[must_use]
pub fn paginate(items: Vec<&Category>, page: usize, per_page: usize) -> Page<'_> {
    let per_page = per_page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);

    let start = (number - 1) * per_page;
    let page_items = items
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    Page {
        items: page_items,
        number,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog.add(name, true).expect("add category");
        }
        catalog
    }

    #[test]
    fn add_stores_trimmed_name() {
        let mut catalog = Catalog::new();
        let id = catalog.add("  Books  ", true).expect("add");
        assert_eq!(catalog.get(id).expect("get").name(), "Books");
    }

    #[test]
    fn add_rejects_duplicate_name_case_insensitive() {
        let mut catalog = catalog_with(&["Books"]);
        assert_eq!(catalog.add("books", true), Err(Rejection::DuplicateName));
        assert_eq!(catalog.add("BOOKS ", false), Err(Rejection::DuplicateName));
    }

    #[test]
    fn deleted_names_become_available_again() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Books", true).expect("add");
        catalog.soft_delete(id).expect("delete");
        assert!(catalog.add("Books", true).is_ok());
    }

    #[test]
    fn update_excludes_self_from_duplicate_check() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Books", true).expect("add");
        catalog.add("Games", true).expect("add");

        // Saving under the current name is fine.
        assert!(catalog.update(id, "Books", false).is_ok());
        assert!(!catalog.get(id).expect("get").is_listed());

        // Colliding with another entry is not.
        assert_eq!(
            catalog.update(id, "games", true),
            Err(Rejection::DuplicateName)
        );
    }

    #[test]
    fn soft_delete_hides_from_search_and_get() {
        let mut catalog = catalog_with(&["Books", "Games"]);
        let id = catalog.search("Books")[0].id();
        catalog.soft_delete(id).expect("delete");

        assert!(catalog.get(id).is_none());
        assert!(catalog.search("Books").is_empty());
        assert_eq!(catalog.active_count(), 1);
    }

    #[test]
    fn operations_on_missing_or_deleted_entries_fail() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Books", true).expect("add");
        catalog.soft_delete(id).expect("delete");

        assert_eq!(catalog.soft_delete(id), Err(Rejection::NotFound));
        assert_eq!(catalog.toggle_listed(id), Err(Rejection::NotFound));
        assert_eq!(catalog.update(id, "Games", true), Err(Rejection::NotFound));
    }

    #[test]
    fn toggle_listed_flips_and_reports_state() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Books", true).expect("add");
        assert_eq!(catalog.toggle_listed(id), Ok(false));
        assert_eq!(catalog.toggle_listed(id), Ok(true));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog_with(&["Home Decor", "Garden", "Decorations"]);
        let hits = catalog.search("deco");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.name().to_lowercase().contains("deco")));
    }

    #[test]
    fn search_orders_newest_first() {
        let catalog = catalog_with(&["First", "Second", "Third"]);
        let names: Vec<&str> = catalog.search("").iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn paginate_splits_into_pages() {
        let names: Vec<String> = (0..25).map(|i| format!("Category {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let catalog = catalog_with(&refs);

        let all = catalog.search("");
        let page = paginate(all, 1, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert!(!page.has_previous());
        assert!(page.has_next());

        let last = paginate(catalog.search(""), 3, 10);
        assert_eq!(last.items.len(), 5);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        let catalog = catalog_with(&["Books", "Games"]);

        let zero = paginate(catalog.search(""), 0, 10);
        assert_eq!(zero.number, 1);

        let past_end = paginate(catalog.search(""), 99, 10);
        assert_eq!(past_end.number, 1); // only one page exists

        let sized = paginate(catalog.search(""), 99, 1);
        assert_eq!(sized.number, 2);
        assert_eq!(sized.items.len(), 1);
    }

    #[test]
    fn paginate_empty_catalog_yields_single_empty_page() {
        let catalog = Catalog::new();
        let page = paginate(catalog.search(""), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
    }
}
