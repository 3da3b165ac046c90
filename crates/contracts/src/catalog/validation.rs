use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{CatalogEntry, CategoryTab, ALL_CATEGORY};

/// Authoring problem found in a catalog.
///
/// Warnings are reported, never fixed: the catalog still renders exactly as
/// authored (an entry with an unlisted category only shows under "all").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// Several entries share one id
    DuplicateId { id: String, count: usize },
    /// Entry category matches no tab
    UnlistedCategory { id: String, category: String },
    /// Tab that no entry is tagged with
    EmptyTab { key: String },
    /// Tab that has no content panel, so selecting it shows nothing
    TabWithoutPanel { key: String },
    /// Content panel that no tab selects
    PanelWithoutTab { key: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::DuplicateId { id, count } => {
                write!(f, "id '{}' is used by {} entries", id, count)
            }
            CatalogWarning::UnlistedCategory { id, category } => write!(
                f,
                "entry '{}' has category '{}' which has no tab; it is only listed under '{}'",
                id, category, ALL_CATEGORY
            ),
            CatalogWarning::EmptyTab { key } => {
                write!(f, "tab '{}' has no entries", key)
            }
            CatalogWarning::TabWithoutPanel { key } => {
                write!(f, "tab '{}' has no content panel and always shows nothing", key)
            }
            CatalogWarning::PanelWithoutTab { key } => {
                write!(f, "panel '{}' has no tab and can never be shown", key)
            }
        }
    }
}

/// Check a catalog against its tab list and its panel keys.
///
/// Order of the result: duplicate ids (by id), unlisted categories (by
/// entry position), empty tabs, tabs without a panel (both by tab position),
/// then panels without a tab (by panel position).
pub fn validate_catalog<T: CatalogEntry>(
    items: &[T],
    tabs: &[CategoryTab],
    panels: &[&str],
) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();

    let mut id_counts: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        *id_counts.entry(item.entry_id()).or_insert(0) += 1;
    }
    warnings.extend(
        id_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, count)| CatalogWarning::DuplicateId { id, count }),
    );

    let listed = |category: &str| tabs.iter().any(|t| t.key == category);

    warnings.extend(
        items
            .iter()
            .filter(|item| !listed(item.category()))
            .map(|item| CatalogWarning::UnlistedCategory {
                id: item.entry_id(),
                category: item.category().to_string(),
            }),
    );

    warnings.extend(
        tabs.iter()
            .filter(|tab| !tab.is_all())
            .filter(|tab| !items.iter().any(|item| item.category() == tab.key))
            .map(|tab| CatalogWarning::EmptyTab {
                key: tab.key.clone(),
            }),
    );

    warnings.extend(
        tabs.iter()
            .filter(|tab| !tab.is_all())
            .filter(|tab| !panels.contains(&tab.key.as_str()))
            .map(|tab| CatalogWarning::TabWithoutPanel {
                key: tab.key.clone(),
            }),
    );

    warnings.extend(
        panels
            .iter()
            .filter(|key| **key != ALL_CATEGORY && !listed(**key))
            .map(|key| CatalogWarning::PanelWithoutTab {
                key: key.to_string(),
            }),
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{tagged, Tagged};

    fn tabs(keys: &[&str]) -> Vec<CategoryTab> {
        keys.iter().map(|k| CategoryTab::new(*k, *k)).collect()
    }

    fn check(items: &[Tagged], keys: &[&str]) -> Vec<CatalogWarning> {
        validate_catalog(items, &tabs(keys), keys)
    }

    #[test]
    fn test_clean_catalog_has_no_warnings() {
        let items = vec![tagged(1, "rooms"), tagged(2, "facilities")];
        assert!(check(&items, &["rooms", "facilities"]).is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_reported_once() {
        let items = vec![
            tagged(7, "facilities"),
            tagged(7, "facilities"),
            tagged(8, "kitchen"),
            tagged(7, "facilities"),
        ];
        let warnings = check(&items, &["facilities", "kitchen"]);
        assert_eq!(
            warnings,
            vec![CatalogWarning::DuplicateId {
                id: "7".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_unlisted_category_and_empty_tab() {
        // tab says "events", entries say "kitchen"
        let items = vec![tagged(1, "rooms"), tagged(2, "kitchen")];
        let warnings = check(&items, &["rooms", "events"]);
        assert_eq!(
            warnings,
            vec![
                CatalogWarning::UnlistedCategory {
                    id: "2".to_string(),
                    category: "kitchen".to_string()
                },
                CatalogWarning::EmptyTab {
                    key: "events".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_tab_and_panel_mismatch() {
        let items = vec![tagged(1, "rooms"), tagged(2, "kitchen")];
        let warnings = validate_catalog(
            &items,
            &tabs(&["rooms", "kitchen"]),
            &["rooms", "events"],
        );
        assert_eq!(
            warnings,
            vec![
                CatalogWarning::TabWithoutPanel {
                    key: "kitchen".to_string()
                },
                CatalogWarning::PanelWithoutTab {
                    key: "events".to_string()
                },
            ]
        );
        assert!(warnings[1].to_string().contains("can never be shown"));
    }

    #[test]
    fn test_warning_messages() {
        let w = CatalogWarning::EmptyTab {
            key: "events".to_string(),
        };
        assert_eq!(w.to_string(), "tab 'events' has no entries");

        let w = CatalogWarning::UnlistedCategory {
            id: "9".to_string(),
            category: "kitchen".to_string(),
        };
        assert!(w.to_string().contains("only listed under 'all'"));
    }
}
