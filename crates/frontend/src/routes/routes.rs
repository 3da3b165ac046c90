use crate::layout::global_context::use_site;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::facilities::FacilitiesPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::photos::PhotosPage;
use crate::pages::rooms::RoomsPage;
use contracts::site::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Renders `children` only when the active site variant has `route`;
/// otherwise sends the visitor home, where the variant shows that content.
#[component]
fn VariantGate(route: SiteRoute, children: ChildrenFn) -> impl IntoView {
    let variant = use_site().variant();

    view! {
        <Show
            when=move || variant.get().has_route(route)
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/about")
                        view=|| view! {
                            <VariantGate route=SiteRoute::About>
                                <AboutPage />
                            </VariantGate>
                        }
                    />
                    <Route path=path!("/facilities") view=FacilitiesPage />
                    <Route
                        path=path!("/rooms")
                        view=|| view! {
                            <VariantGate route=SiteRoute::Rooms>
                                <RoomsPage />
                            </VariantGate>
                        }
                    />
                    <Route path=path!("/photos") view=PhotosPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
