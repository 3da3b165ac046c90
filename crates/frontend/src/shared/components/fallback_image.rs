use leptos::prelude::*;

/// Shown in place of images that fail to load
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// `<img>` that swaps to [`PLACEHOLDER_IMAGE`] the first time loading fails.
///
/// The swap happens at most once, so a missing placeholder can't loop.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let current = RwSignal::new(src);
    let swapped = RwSignal::new(false);

    let on_error = move |_| {
        if swapped.get_untracked() {
            return;
        }
        log::warn!("Image failed to load: {}", current.get_untracked());
        swapped.set(true);
        current.set(PLACEHOLDER_IMAGE.to_string());
    };

    view! {
        <img
            src=move || current.get()
            alt=alt
            class=class
            class:image--placeholder=move || swapped.get()
            loading="lazy"
            on:error=on_error
        />
    }
}
