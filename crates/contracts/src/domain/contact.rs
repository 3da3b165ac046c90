use serde::{Deserialize, Serialize};

use super::Faq;

/// Label and value line of a contact card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    #[serde(default)]
    pub label: String,
    pub value: String,
}

/// Phone / email / address / hours card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: String,
    pub title: String,
    /// Accent colour name used for the card's top border
    pub accent: String,
    pub lines: Vec<ContactLine>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub mode: String,
    pub text: String,
}

/// Content of the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub cards: Vec<ContactCard>,
    pub directions: Vec<Direction>,
    pub faqs: Vec<Faq>,
}
