use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let variant = site.variant();
    let info = move || site.content.with(|c| c.site.clone());
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__column">
                    <h3 class="footer__brand">{icon("building")} {move || info().name}</h3>
                    <p class="footer__blurb">{move || info().footer_blurb}</p>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__links">
                        {move || {
                            variant
                                .get()
                                .routes()
                                .into_iter()
                                .map(|route| view! {
                                    <li><A href=route.path()>{route.label()}</A></li>
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__contact">
                        <li>{icon("map-pin")} <span>{move || info().address}</span></li>
                        <li>
                            {icon("phone")}
                            <a href=move || format!("tel:{}", info().phone.replace(' ', ""))>
                                {move || info().phone}
                            </a>
                        </li>
                        <li>
                            {icon("mail")}
                            <a href=move || format!("mailto:{}", info().email)>{move || info().email}</a>
                        </li>
                        <li>{icon("clock")} <span>{move || info().hours}</span></li>
                    </ul>
                </div>

                <div class="footer__column footer__map">
                    <iframe
                        src=move || info().map_embed_url
                        title="Map"
                        {..leptos::attr::loading("lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
            </div>

            <div class="footer__bottom">
                {move || format!("© {} {}. All rights reserved.", year, info().name)}
            </div>
        </footer>
    }
}
