use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container not-found__content">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"The page you are looking for doesn't exist or has moved."</p>
                <Button href="/".to_string() size="lg">"Back to Home"</Button>
            </div>
        </section>
    }
}
