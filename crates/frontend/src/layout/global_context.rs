use contracts::site::{SiteContent, SiteVariant};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_url;

/// Where the rendered content came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Builtin,
    Server,
}

/// Site-wide state: the content document every page renders from.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub content: RwSignal<SiteContent>,
    pub source: RwSignal<ContentSource>,
}

impl SiteContext {
    /// Context seeded with the built-in content
    pub fn new() -> Self {
        let content = match SiteContent::builtin() {
            Ok(content) => content,
            Err(e) => {
                log::error!("Built-in site content is invalid: {}", e);
                SiteContent::default()
            }
        };
        for warning in content.validate() {
            log::warn!("Site content: {}", warning);
        }

        Self {
            content: RwSignal::new(content),
            source: RwSignal::new(ContentSource::Builtin),
        }
    }

    /// Replace the built-in content with the backend's copy.
    /// When the backend is unreachable the built-in content stays.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match fetch_content().await {
                Ok(content) => {
                    for warning in content.validate() {
                        log::warn!("Site content: {}", warning);
                    }
                    this.content.set(content);
                    this.source.set(ContentSource::Server);
                }
                Err(e) => log::warn!("Using built-in site content: {}", e),
            }
        });
    }

    pub fn variant(&self) -> Signal<SiteVariant> {
        let content = self.content;
        Signal::derive(move || content.with(|c| c.variant()))
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext context not found")
}

async fn fetch_content() -> Result<SiteContent, String> {
    let response = gloo_net::http::Request::get(&api_url("/api/content"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch content: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<SiteContent>()
        .await
        .map_err(|e| format!("Failed to parse content: {}", e))
}
