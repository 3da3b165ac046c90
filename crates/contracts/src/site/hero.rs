use serde::{Deserialize, Serialize};

/// Button of a hero banner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: String,
}

/// Full-screen banner at the top of the home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    /// Line breaks (`\n`) are rendered as `<br>`
    pub headline: String,
    pub subcopy: String,
    pub image_url: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

impl HeroConfig {
    pub fn headline_lines(&self) -> Vec<&str> {
        self.headline.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }

    pub fn actions(&self) -> [&CallToAction; 2] {
        [&self.primary, &self.secondary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_lines() {
        let hero = HeroConfig {
            headline: "Your Home Away\nFrom Home\n".into(),
            ..Default::default()
        };
        assert_eq!(hero.headline_lines(), vec!["Your Home Away", "From Home"]);
    }
}
