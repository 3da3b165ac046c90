//! Filterable catalogs
//!
//! A catalog is an ordered list of entries (photos, rooms) bucketed by a
//! category key, plus the ordered list of tabs a page renders above it.
//! The tab bar always carries an implicit [`ALL_CATEGORY`] tab in front.
//!
//! Tabs and content panels are authored separately. Without an explicit
//! `panels` list every tab gets a panel; with one, a tab whose key has no
//! panel shows nothing and a panel without a tab cannot be reached.

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{validate_catalog, CatalogWarning};

/// Key of the implicit tab that shows every entry
pub const ALL_CATEGORY: &str = "all";

/// Anything that can be listed in a filterable catalog
pub trait CatalogEntry {
    /// Identifier used for duplicate detection (not required to be unique)
    fn entry_id(&self) -> String;

    /// Category (tab) key of the entry
    fn category(&self) -> &str;
}

/// One tab of a catalog's tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTab {
    pub key: String,
    pub label: String,
}

impl CategoryTab {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.key == ALL_CATEGORY
    }
}

/// Entries plus the tabs used to browse them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog<T> {
    /// Label of the implicit "all" tab
    #[serde(default)]
    pub all_label: String,
    #[serde(default)]
    pub tabs: Vec<CategoryTab>,
    /// Category keys that get a content panel; `None` means one per tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<String>>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            all_label: String::new(),
            tabs: Vec::new(),
            panels: None,
            items: Vec::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    /// Tabs in render order, the "all" tab first
    pub fn tab_bar(&self) -> Vec<CategoryTab> {
        let all_label = if self.all_label.trim().is_empty() {
            "All"
        } else {
            self.all_label.as_str()
        };
        let mut tabs = Vec::with_capacity(self.tabs.len() + 1);
        tabs.push(CategoryTab::new(ALL_CATEGORY, all_label));
        tabs.extend(self.tabs.iter().filter(|t| !t.is_all()).cloned());
        tabs
    }

    /// Keys of the rendered content panels
    pub fn panel_keys(&self) -> Vec<&str> {
        match &self.panels {
            Some(panels) => panels.iter().map(String::as_str).collect(),
            None => self.tabs.iter().map(|t| t.key.as_str()).collect(),
        }
    }

    pub fn has_panel(&self, key: &str) -> bool {
        key == ALL_CATEGORY || self.panel_keys().contains(&key)
    }

    /// Entries shown when the `active` tab is selected.
    ///
    /// Like [`filter`], except that a tab without a panel shows nothing.
    pub fn filter(&self, active: &str) -> Vec<&T> {
        if !self.has_panel(active) {
            return Vec::new();
        }
        filter(&self.items, active)
    }

    pub fn filter_cloned(&self, active: &str) -> Vec<T>
    where
        T: Clone,
    {
        self.filter(active).into_iter().cloned().collect()
    }

    pub fn validate(&self) -> Vec<CatalogWarning> {
        validate_catalog(&self.items, &self.tabs, &self.panel_keys())
    }
}

/// Select the entries shown under the `active` tab.
///
/// `"all"` yields every entry; any other key yields the entries whose
/// category equals it, in their original order. A key nothing is tagged
/// with yields an empty list.
pub fn filter<'a, T: CatalogEntry>(items: &'a [T], active: &str) -> Vec<&'a T> {
    if active == ALL_CATEGORY {
        return items.iter().collect();
    }
    items.iter().filter(|e| e.category() == active).collect()
}

/// Owned variant of [`filter`] for callers that hand the view to a renderer
pub fn filter_cloned<T: CatalogEntry + Clone>(items: &[T], active: &str) -> Vec<T> {
    filter(items, active).into_iter().cloned().collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Tagged {
        pub id: u32,
        pub category: String,
    }

    impl CatalogEntry for Tagged {
        fn entry_id(&self) -> String {
            self.id.to_string()
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    pub fn tagged(id: u32, category: &str) -> Tagged {
        Tagged {
            id,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = vec![tagged(3, "b"), tagged(1, "a"), tagged(2, "b")];
        let view = filter(&items, ALL_CATEGORY);
        let ids: Vec<u32> = view.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_keeps_order_and_category() {
        let items = vec![
            tagged(1, "rooms"),
            tagged(2, "facilities"),
            tagged(3, "rooms"),
            tagged(4, "exterior"),
        ];
        for key in ["rooms", "facilities", "exterior"] {
            let view = filter(&items, key);
            assert!(view.iter().all(|e| e.category == key));
            let positions: Vec<usize> = view
                .iter()
                .map(|e| items.iter().position(|i| i.id == e.id).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn test_filter_rooms_and_missing_tag() {
        let items = vec![tagged(1, "rooms"), tagged(2, "rooms"), tagged(3, "facilities")];

        let rooms = filter_cloned(&items, "rooms");
        assert_eq!(rooms, vec![tagged(1, "rooms"), tagged(2, "rooms")]);

        assert!(filter(&items, "kitchen").is_empty());
    }

    #[test]
    fn test_filter_empty_items() {
        let items: Vec<Tagged> = Vec::new();
        assert!(filter(&items, ALL_CATEGORY).is_empty());
        assert!(filter(&items, "rooms").is_empty());
    }

    #[test]
    fn test_tab_bar_puts_all_first() {
        let catalog = Catalog {
            all_label: "All Photos".to_string(),
            tabs: vec![
                CategoryTab::new("exterior", "Exterior"),
                CategoryTab::new("rooms", "Rooms"),
            ],
            panels: None,
            items: vec![tagged(1, "rooms")],
        };
        let keys: Vec<String> = catalog.tab_bar().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["all", "exterior", "rooms"]);
        assert_eq!(catalog.tab_bar()[0].label, "All Photos");
    }

    #[test]
    fn test_tab_bar_default_label() {
        let catalog: Catalog<Tagged> = Catalog::default();
        let bar = catalog.tab_bar();
        assert_eq!(bar.len(), 1);
        assert_eq!(bar[0].label, "All");
    }

    #[test]
    fn test_tab_without_panel_shows_nothing() {
        let catalog = Catalog {
            all_label: String::new(),
            tabs: vec![
                CategoryTab::new("rooms", "Rooms"),
                CategoryTab::new("kitchen", "Kitchen"),
            ],
            panels: Some(vec!["rooms".to_string(), "events".to_string()]),
            items: vec![tagged(1, "rooms"), tagged(2, "kitchen")],
        };

        assert_eq!(catalog.filter(ALL_CATEGORY).len(), 2);
        assert_eq!(catalog.filter_cloned("rooms"), vec![tagged(1, "rooms")]);
        assert!(catalog.filter("kitchen").is_empty());
        assert!(!catalog.has_panel("kitchen"));
        assert!(catalog.has_panel("events"));
    }

    #[test]
    fn test_panels_default_to_tabs() {
        let catalog = Catalog {
            all_label: String::new(),
            tabs: vec![CategoryTab::new("rooms", "Rooms")],
            panels: None,
            items: vec![tagged(1, "rooms")],
        };
        assert_eq!(catalog.panel_keys(), vec!["rooms"]);
        assert_eq!(catalog.filter("rooms").len(), 1);
    }
}
