use crate::layout::global_context::SiteContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Built-in content right away, replaced by the backend's copy once fetched.
    let site = SiteContext::new();
    site.load();
    provide_context(site);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
