use axum::{extract::Query, http::StatusCode, Json};
use contracts::catalog::{filter_cloned, ALL_CATEGORY};
use contracts::domain::gallery::GalleryItem;
use contracts::domain::room::RoomEntry;
use contracts::site::{ContentWarning, SiteContent};
use serde::Deserialize;

use crate::shared::content::{self, LoadedContent};

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    fn active(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c.trim(),
            _ => ALL_CATEGORY,
        }
    }
}

fn loaded() -> Result<&'static LoadedContent, StatusCode> {
    content::get().map_err(|e| {
        tracing::error!("{}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/content
pub async fn get_content() -> Result<Json<SiteContent>, StatusCode> {
    Ok(Json(loaded()?.content.clone()))
}

/// GET /api/content/warnings
pub async fn get_warnings() -> Result<Json<Vec<ContentWarning>>, StatusCode> {
    Ok(Json(loaded()?.warnings.clone()))
}

/// GET /api/photos?category=rooms
pub async fn list_photos(
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<GalleryItem>>, StatusCode> {
    let items = &loaded()?.content.photos.catalog.items;
    Ok(Json(filter_cloned(items, query.active())))
}

/// GET /api/rooms?category=premium
pub async fn list_rooms(
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<RoomEntry>>, StatusCode> {
    let items = &loaded()?.content.rooms.catalog.items;
    Ok(Json(filter_cloned(items, query.active())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_category_means_all() {
        let q = CategoryQuery { category: None };
        assert_eq!(q.active(), "all");
        let q = CategoryQuery {
            category: Some("  ".into()),
        };
        assert_eq!(q.active(), "all");
        let q = CategoryQuery {
            category: Some("kitchen".into()),
        };
        assert_eq!(q.active(), "kitchen");
    }
}
