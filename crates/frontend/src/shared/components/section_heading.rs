use leptos::prelude::*;

/// Centered title + intro line above a page section
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-heading__title">{title}</h2>
            {move || {
                let text = subtitle.get();
                (!text.is_empty()).then(|| view! { <p class="section-heading__subtitle">{text}</p> })
            }}
        </div>
    }
}
