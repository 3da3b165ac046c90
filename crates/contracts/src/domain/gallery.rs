use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// Photo in the gallery catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Authored id; repeats are tolerated and reported by validation
    pub id: u32,
    pub category: String,
    pub url: String,
    /// Short title, also used as the image alt text
    pub caption: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry for GalleryItem {
    fn entry_id(&self) -> String {
        self.id.to_string()
    }

    fn category(&self) -> &str {
        &self.category
    }
}
