use serde::{Deserialize, Serialize};

/// Point of interest near the hostel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub distance: String,
    pub travel_time: String,
    pub category: String,
}

impl Place {
    /// CSS modifier for the category badge; matching ignores case
    pub fn badge_class(&self) -> &'static str {
        match self.category.to_lowercase().as_str() {
            "education" => "place-badge--education",
            "transport" => "place-badge--transport",
            "shopping" => "place-badge--shopping",
            "dining" => "place-badge--dining",
            "healthcare" => "place-badge--healthcare",
            "entertainment" => "place-badge--entertainment",
            _ => "place-badge--other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        let mut place = Place {
            category: "Education".into(),
            ..Default::default()
        };
        assert_eq!(place.badge_class(), "place-badge--education");
        place.category = "TRANSPORT".into();
        assert_eq!(place.badge_class(), "place-badge--transport");
        place.category = "Parks".into();
        assert_eq!(place.badge_class(), "place-badge--other");
    }
}
