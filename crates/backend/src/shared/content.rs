use contracts::site::{ContentWarning, SiteContent};
use once_cell::sync::OnceCell;

use super::config::{resolve_path, SiteConfig};

/// Site content served by the API together with its authoring warnings
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub content: SiteContent,
    pub warnings: Vec<ContentWarning>,
}

static SITE_CONTENT: OnceCell<LoadedContent> = OnceCell::new();

/// Load the content document and keep it for the lifetime of the process.
///
/// A configured `content_path` that cannot be read or parsed is an error;
/// without one the built-in document is used.
pub fn initialize_content(config: &SiteConfig) -> anyhow::Result<()> {
    let loaded = load(config)?;

    for warning in &loaded.warnings {
        tracing::warn!("Site content: {}", warning);
    }
    tracing::info!(
        "Site content ready: {} photos, {} rooms, {} warnings",
        loaded.content.photos.catalog.items.len(),
        loaded.content.rooms.catalog.items.len(),
        loaded.warnings.len()
    );

    SITE_CONTENT
        .set(loaded)
        .map_err(|_| anyhow::anyhow!("site content already initialized"))
}

pub fn load(config: &SiteConfig) -> anyhow::Result<LoadedContent> {
    let content = match &config.content_path {
        Some(path) => {
            let resolved = resolve_path(path);
            tracing::info!("Loading site content from: {}", resolved.display());
            let json = std::fs::read_to_string(&resolved).map_err(|e| {
                anyhow::anyhow!("cannot read site content {}: {}", resolved.display(), e)
            })?;
            SiteContent::from_json(&json)?
        }
        None => {
            tracing::info!("Using built-in site content");
            SiteContent::builtin()?
        }
    };

    let warnings = content.validate();
    Ok(LoadedContent { content, warnings })
}

pub fn get() -> anyhow::Result<&'static LoadedContent> {
    SITE_CONTENT
        .get()
        .ok_or_else(|| anyhow::anyhow!("site content not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_config(content_path: Option<String>) -> SiteConfig {
        SiteConfig {
            dist_dir: "dist".to_string(),
            content_path,
        }
    }

    #[test]
    fn test_builtin_content_loads_with_warnings() {
        let loaded = load(&site_config(None)).unwrap();
        assert!(!loaded.content.photos.catalog.items.is_empty());
        assert!(!loaded.warnings.is_empty());
    }

    #[test]
    fn test_content_from_file() {
        let mut content = SiteContent::builtin().unwrap();
        content.site.name = "Riverside Hostel".to_string();
        content.photos.catalog.items.clear();
        content.photos.catalog.tabs.clear();

        let path = std::env::temp_dir().join(format!("site-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let loaded = load(&site_config(Some(path.to_string_lossy().to_string()))).unwrap();
        assert_eq!(loaded.content.site.name, "Riverside Hostel");
        assert!(loaded.content.photos.catalog.items.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("no-such-dir").join("site.json");
        let result = load(&site_config(Some(missing.to_string_lossy().to_string())));
        assert!(result.is_err());
    }
}
