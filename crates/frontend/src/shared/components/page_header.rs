use contracts::domain::PageIntro;
use leptos::prelude::*;

/// Banner at the top of every inner page: title, subtitle and an optional
/// slot for actions (e.g. a call-to-action button).
#[component]
pub fn PageHeader(
    /// Title and subtitle
    #[prop(into)]
    intro: Signal<PageIntro>,

    /// Optional actions under the subtitle
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container page-header__content">
                <h1 class="page-header__title">{move || intro.with(|i| i.title.clone())}</h1>
                {move || {
                    let subtitle = intro.with(|i| i.subtitle.clone());
                    (!subtitle.is_empty()).then(|| view! {
                        <p class="page-header__subtitle">{subtitle}</p>
                    })
                }}
                {children.map(|c| view! { <div class="page-header__actions">{c()}</div> })}
            </div>
        </section>
    }
}
