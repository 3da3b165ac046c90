use serde::{Deserialize, Serialize};

/// Amenity card (icon key, title, description)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Facilities grouped under one tab of the facilities page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityGroup {
    pub key: String,
    pub label: String,
    pub facilities: Vec<Facility>,
}

/// Every facility of every group, in group order
pub fn flatten_groups(groups: &[FacilityGroup]) -> Vec<Facility> {
    groups
        .iter()
        .flat_map(|g| g.facilities.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(title: &str) -> Facility {
        Facility {
            icon: "wifi".into(),
            title: title.into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_flatten_keeps_group_order() {
        let groups = vec![
            FacilityGroup {
                key: "academic".into(),
                label: "Academic".into(),
                facilities: vec![facility("Study Rooms"), facility("Printing Station")],
            },
            FacilityGroup {
                key: "dining".into(),
                label: "Dining".into(),
                facilities: vec![facility("Modern Kitchen")],
            },
        ];
        let titles: Vec<String> = flatten_groups(&groups).into_iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Study Rooms", "Printing Station", "Modern Kitchen"]);
    }
}
