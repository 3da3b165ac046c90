use serde::{Deserialize, Serialize};

use super::{Faq, ImageRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub detail: String,
}

/// Content of the about page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub story_heading: String,
    pub story: Vec<String>,
    pub story_images: Vec<ImageRef>,
    pub values_intro: String,
    pub values: Vec<ValueCard>,
    pub team_intro: String,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
}
