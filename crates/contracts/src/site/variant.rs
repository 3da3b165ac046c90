use serde::{Deserialize, Serialize};

/// Client-side routes of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteRoute {
    Home,
    About,
    Facilities,
    Rooms,
    Photos,
    Contact,
}

impl SiteRoute {
    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::About => "/about",
            SiteRoute::Facilities => "/facilities",
            SiteRoute::Rooms => "/rooms",
            SiteRoute::Photos => "/photos",
            SiteRoute::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::About => "About",
            SiteRoute::Facilities => "Facilities",
            SiteRoute::Rooms => "Rooms",
            SiteRoute::Photos => "Photos",
            SiteRoute::Contact => "Contact Us",
        }
    }

    /// Icon key understood by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            SiteRoute::Home => "home",
            SiteRoute::About => "building",
            SiteRoute::Facilities => "panel",
            SiteRoute::Rooms => "bed",
            SiteRoute::Photos => "image",
            SiteRoute::Contact => "phone",
        }
    }

    pub fn all() -> Vec<SiteRoute> {
        vec![
            SiteRoute::Home,
            SiteRoute::About,
            SiteRoute::Facilities,
            SiteRoute::Rooms,
            SiteRoute::Photos,
            SiteRoute::Contact,
        ]
    }

    pub fn from_path(path: &str) -> Option<SiteRoute> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        SiteRoute::all().into_iter().find(|r| r.path() == path)
    }
}

/// Build flavour of the site.
///
/// `Compact` has no standalone about and rooms pages; the home page carries
/// their sections instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteVariant {
    #[default]
    Full,
    Compact,
}

impl SiteVariant {
    pub fn routes(&self) -> Vec<SiteRoute> {
        SiteRoute::all()
            .into_iter()
            .filter(|r| self.has_route(*r))
            .collect()
    }

    pub fn has_route(&self, route: SiteRoute) -> bool {
        match self {
            SiteVariant::Full => true,
            SiteVariant::Compact => !matches!(route, SiteRoute::About | SiteRoute::Rooms),
        }
    }

    /// Whether the home page embeds the full about and rooms sections
    pub fn folds_into_home(&self) -> bool {
        matches!(self, SiteVariant::Compact)
    }

    /// Whether a link target leads somewhere in this variant.
    ///
    /// External links, `mailto:`/`tel:` links and same-page anchors are
    /// always accepted; internal paths must name one of the variant's routes.
    pub fn resolves(&self, target: &str) -> bool {
        let target = target.trim();
        if target.is_empty() {
            return false;
        }
        if target.contains("://") || target.starts_with("mailto:") || target.starts_with("tel:") {
            return true;
        }
        let path = target.split(['#', '?']).next().unwrap_or_default();
        if path.is_empty() {
            return true;
        }
        SiteRoute::from_path(path)
            .map(|r| self.has_route(r))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_variant_has_every_route() {
        let paths: Vec<&str> = SiteVariant::Full.routes().iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            vec!["/", "/about", "/facilities", "/rooms", "/photos", "/contact"]
        );
    }

    #[test]
    fn test_compact_variant_drops_about_and_rooms() {
        let paths: Vec<&str> = SiteVariant::Compact.routes().iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/facilities", "/photos", "/contact"]);
        assert!(SiteVariant::Compact.folds_into_home());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
        assert_eq!(SiteRoute::from_path(""), Some(SiteRoute::Home));
        assert_eq!(SiteRoute::from_path("/rooms/"), Some(SiteRoute::Rooms));
        assert_eq!(SiteRoute::from_path("/pricing"), None);
    }

    #[test]
    fn test_resolves() {
        let compact = SiteVariant::Compact;
        assert!(compact.resolves("/contact"));
        assert!(compact.resolves("/#rooms"));
        assert!(compact.resolves("#about"));
        assert!(compact.resolves("https://example.com/virtual-tour/suite"));
        assert!(compact.resolves("mailto:info@example.com"));
        assert!(!compact.resolves("/rooms"));
        assert!(!compact.resolves("/about?tab=team"));
        assert!(!compact.resolves(""));
        assert!(SiteVariant::Full.resolves("/rooms"));
    }
}
