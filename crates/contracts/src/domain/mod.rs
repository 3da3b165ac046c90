//! Content records rendered by the site pages

pub mod about;
pub mod contact;
pub mod facility;
pub mod gallery;
pub mod place;
pub mod room;

use serde::{Deserialize, Serialize};

/// Image with its alternative text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// Title block at the top of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageIntro {
    pub title: String,
    pub subtitle: String,
}

/// Question and answer pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
