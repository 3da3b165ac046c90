pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Navbar;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------+
/// |  Navbar (fixed)              |
/// +------------------------------+
/// |  routed page                 |
/// +------------------------------+
/// |  Footer                      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    // New page, start at the top.
    Effect::new(move |_| {
        pathname.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <div class="site">
            <Navbar />
            <main class="site__main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
