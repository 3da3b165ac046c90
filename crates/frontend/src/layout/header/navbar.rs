use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use contracts::interaction::{ScrollFlag, SCROLL_THRESHOLD};
use contracts::site::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site();
    let variant = site.variant();
    let pathname = use_location().pathname;

    let scroll = RwSignal::new(ScrollFlag::new(SCROLL_THRESHOLD));
    let menu_open = RwSignal::new(false);

    let sync_scroll = move || {
        let mut flag = scroll.get_untracked();
        if flag.update(scroll_offset()) {
            scroll.set(flag);
        }
    };

    // The page may be restored mid-scroll, so take a first reading on mount.
    sync_scroll();
    let listener = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());
    on_cleanup(move || listener.remove());

    // Close the mobile menu after every navigation.
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let is_active = move |route: SiteRoute| {
        pathname.with(|path| SiteRoute::from_path(path) == Some(route))
    };

    view! {
        <nav
            class="navbar"
            class:navbar--scrolled=move || scroll.get().is_scrolled()
            class:navbar--open=move || menu_open.get()
        >
            <div class="container navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    {icon("building")}
                    <span>{move || site.content.with(|c| c.site.name.clone())}</span>
                </A>

                <div class="navbar__links">
                    {move || {
                        variant
                            .get()
                            .routes()
                            .into_iter()
                            .map(|route| view! {
                                <A
                                    href=route.path()
                                    attr:class=move || {
                                        if is_active(route) {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                >
                                    {route.label()}
                                </A>
                            })
                            .collect_view()
                    }}
                    <A href="/contact" attr:class="button button--primary button--small navbar__cta">
                        "Get in Touch"
                    </A>
                </div>

                <button
                    class="button button--icon navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </nav>
    }
}
