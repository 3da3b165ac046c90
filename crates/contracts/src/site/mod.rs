//! Site content: everything the pages render, loaded as one document.
//!
//! The built-in document (`content/site.json`) is compiled into the crate;
//! the backend may serve a replacement loaded from disk.

pub mod hero;
pub mod variant;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Catalog, CatalogWarning};
use crate::domain::about::AboutContent;
use crate::domain::contact::ContactContent;
use crate::domain::facility::{Facility, FacilityGroup};
use crate::domain::gallery::GalleryItem;
use crate::domain::place::Place;
use crate::domain::room::{RoomEntry, RoomPreview};
use crate::domain::{ImageRef, PageIntro};

pub use hero::{CallToAction, HeroConfig};
pub use variant::{SiteRoute, SiteVariant};

const BUILTIN_CONTENT: &str = include_str!("../../content/site.json");

// ============================================================================
// Document
// ============================================================================

/// Business details shared by the navbar and footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub variant: SiteVariant,
    pub footer_blurb: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSummary {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub about: AboutSummary,
    pub facilities_intro: String,
    pub facilities: Vec<Facility>,
    pub rooms_intro: String,
    pub rooms: Vec<RoomPreview>,
    pub places_intro: String,
    pub places: Vec<Place>,
    pub gallery_intro: String,
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitiesContent {
    pub intro: PageIntro,
    pub groups: Vec<FacilityGroup>,
    pub maintenance_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomsContent {
    pub intro: PageIntro,
    pub catalog: Catalog<RoomEntry>,
    pub booking_steps: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotosContent {
    pub intro: PageIntro,
    pub catalog: Catalog<GalleryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub hero: HeroConfig,
    pub home: HomeContent,
    pub about_intro: PageIntro,
    pub about: AboutContent,
    pub facilities: FacilitiesContent,
    pub rooms: RoomsContent,
    pub photos: PhotosContent,
    pub contact_intro: PageIntro,
    pub contact: ContactContent,
}

impl SiteContent {
    /// Content compiled into the binary
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid site content: {}", e))
    }

    pub fn variant(&self) -> SiteVariant {
        self.site.variant
    }

    /// Authoring problems worth surfacing; the content is used as-is regardless.
    pub fn validate(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();

        warnings.extend(
            self.photos
                .catalog
                .validate()
                .into_iter()
                .map(|warning| ContentWarning::Catalog {
                    catalog: "photos".to_string(),
                    warning,
                }),
        );
        warnings.extend(
            self.rooms
                .catalog
                .validate()
                .into_iter()
                .map(|warning| ContentWarning::Catalog {
                    catalog: "rooms".to_string(),
                    warning,
                }),
        );

        let variant = self.variant();
        for (source, cta) in [("hero.primary", &self.hero.primary), ("hero.secondary", &self.hero.secondary)] {
            if !variant.resolves(&cta.target) {
                warnings.push(ContentWarning::DeadLink {
                    source: source.to_string(),
                    target: cta.target.clone(),
                });
            }
        }

        warnings
    }
}

// ============================================================================
// Warnings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ContentWarning {
    Catalog {
        catalog: String,
        warning: CatalogWarning,
    },
    /// Link to a route the active variant does not have
    DeadLink { source: String, target: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::Catalog { catalog, warning } => write!(f, "{}: {}", catalog, warning),
            ContentWarning::DeadLink { source, target } => {
                write!(f, "{}: link target '{}' is not a route of this site", source, target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, ALL_CATEGORY};

    #[test]
    fn test_builtin_content_parses() {
        let content = SiteContent::builtin().unwrap();
        assert!(!content.site.name.is_empty());
        assert_eq!(content.variant(), SiteVariant::Full);
        assert!(!content.photos.catalog.items.is_empty());
        assert!(!content.rooms.catalog.items.is_empty());
    }

    #[test]
    fn test_builtin_room_tabs() {
        let content = SiteContent::builtin().unwrap();
        let keys: Vec<String> = content
            .rooms
            .catalog
            .tab_bar()
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["all", "single", "double", "premium"]);

        let catalog = &content.rooms.catalog;
        assert_eq!(filter(&catalog.items, ALL_CATEGORY).len(), catalog.items.len());
        assert_eq!(filter(&catalog.items, "single").len(), 2);
    }

    #[test]
    fn test_builtin_photo_warnings_are_reported_not_fixed() {
        let content = SiteContent::builtin().unwrap();
        let warnings = content.validate();

        // the gallery reuses id 7 for three photos
        assert!(warnings.iter().any(|w| matches!(
            w,
            ContentWarning::Catalog {
                warning: CatalogWarning::DuplicateId { id, count: 3 },
                ..
            } if id == "7"
        )));

        // and the entries are still there
        let ids: Vec<u32> = content
            .photos
            .catalog
            .items
            .iter()
            .map(|p| p.id)
            .filter(|id| *id == 7)
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_builtin_photo_tabs_and_panels_disagree() {
        let content = SiteContent::builtin().unwrap();
        let catalog = &content.photos.catalog;

        let tab_keys: Vec<String> = catalog.tab_bar().into_iter().map(|t| t.key).collect();
        assert_eq!(tab_keys, vec!["all", "exterior", "rooms", "facilities", "kitchen"]);
        assert_eq!(catalog.panel_keys(), vec!["exterior", "rooms", "facilities", "events"]);

        // kitchen photos exist but the kitchen tab has no panel
        assert!(catalog.items.iter().any(|p| p.category == "kitchen"));
        assert!(catalog.filter("kitchen").is_empty());
        assert_eq!(catalog.filter(ALL_CATEGORY).len(), catalog.items.len());

        let photo_warnings: Vec<CatalogWarning> = content
            .validate()
            .into_iter()
            .filter_map(|w| match w {
                ContentWarning::Catalog { catalog, warning } if catalog == "photos" => Some(warning),
                _ => None,
            })
            .collect();
        assert!(photo_warnings.contains(&CatalogWarning::TabWithoutPanel {
            key: "kitchen".to_string()
        }));
        assert!(photo_warnings.contains(&CatalogWarning::PanelWithoutTab {
            key: "events".to_string()
        }));
    }

    #[test]
    fn test_compact_variant_flags_dead_hero_link() {
        let mut content = SiteContent::builtin().unwrap();
        content.site.variant = SiteVariant::Compact;
        content.hero.primary.target = "/rooms".to_string();
        let dead: Vec<ContentWarning> = content
            .validate()
            .into_iter()
            .filter(|w| matches!(w, ContentWarning::DeadLink { .. }))
            .collect();
        assert_eq!(
            dead,
            vec![ContentWarning::DeadLink {
                source: "hero.primary".to_string(),
                target: "/rooms".to_string()
            }]
        );
        assert!(dead[0].to_string().contains("'/rooms'"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteContent::from_json("{ not json").is_err());
    }

    #[test]
    fn test_warning_serializes_with_scope_tag() {
        let w = ContentWarning::Catalog {
            catalog: "photos".into(),
            warning: CatalogWarning::EmptyTab {
                key: "events".into(),
            },
        };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["scope"], "catalog");
        assert_eq!(json["warning"]["kind"], "empty_tab");
    }
}
