use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

/// Room type offered on the rooms page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub id: String,
    /// Room type key (single, double, premium), the catalog category
    #[serde(rename = "type")]
    pub room_type: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub size: String,
    pub occupancy: String,
    pub availability: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub tour_link: String,
    /// One-line pitch shown in the comparison table
    #[serde(default)]
    pub summary: String,
}

impl CatalogEntry for RoomEntry {
    fn entry_id(&self) -> String {
        self.id.clone()
    }

    fn category(&self) -> &str {
        &self.room_type
    }
}

/// Room card shown in the home page preview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPreview {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub tour_link: String,
}

/// Row of the room comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub title: String,
    pub size: String,
    pub occupancy: String,
    pub price: String,
    pub summary: String,
}

impl From<&RoomEntry> for ComparisonRow {
    fn from(room: &RoomEntry) -> Self {
        let summary = if room.summary.trim().is_empty() {
            room.description.clone()
        } else {
            room.summary.clone()
        };
        Self {
            title: room.title.clone(),
            size: room.size.clone(),
            occupancy: room.occupancy.clone(),
            price: room.price.clone(),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name_on_the_wire() {
        let json = r#"{
            "id": "suite",
            "type": "premium",
            "title": "Premium Suite",
            "description": "Luxurious accommodation",
            "image_url": "/images/suite.jpg",
            "price": "$450/month",
            "size": "280 sq ft",
            "occupancy": "1 person",
            "availability": "3 suites available",
            "tour_link": "https://example.com/virtual-tour/premium-suite"
        }"#;
        let room: RoomEntry = serde_json::from_str(json).unwrap();
        assert_eq!(room.category(), "premium");
        assert!(room.features.is_empty());
    }

    #[test]
    fn test_comparison_row_falls_back_to_description() {
        let room = RoomEntry {
            title: "Standard Single Room".into(),
            description: "Compact and comfortable".into(),
            ..Default::default()
        };
        assert_eq!(ComparisonRow::from(&room).summary, "Compact and comfortable");

        let room = RoomEntry {
            summary: "Basic amenities".into(),
            ..room
        };
        assert_eq!(ComparisonRow::from(&room).summary, "Basic amenities");
    }
}
