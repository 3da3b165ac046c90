pub mod api;
pub mod forms;

use crate::layout::global_context::use_site;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::{CardAnimated, FaqList, PageHeader, SectionHeading};
use crate::shared::icons::icon;
use forms::{BookingForm, ContactForm, VisitForm};
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_site();
    let contact = move || site.content.with(|c| c.contact.clone());
    let form_tab = RwSignal::new("contact".to_string());

    view! {
        <div class="page page--contact">
            <PageHeader intro=Signal::derive(move || site.content.with(|c| c.contact_intro.clone())) />

            <section class="section">
                <div class="container grid grid--4">
                    {move || {
                        contact()
                            .cards
                            .into_iter()
                            .enumerate()
                            .map(|(i, card)| view! {
                                <CardAnimated delay_ms=stagger(i) class=format!("contact-card contact-card--{}", card.accent)>
                                    <div class="contact-card__icon">{icon(&card.icon)}</div>
                                    <h3 class="contact-card__title">{card.title}</h3>
                                    {card.lines
                                        .into_iter()
                                        .map(|line| view! {
                                            <p class="contact-card__line">
                                                {(!line.label.is_empty()).then(|| view! {
                                                    <span class="contact-card__label">{format!("{}: ", line.label)}</span>
                                                })}
                                                <span>{line.value}</span>
                                            </p>
                                        })
                                        .collect_view()}
                                    {(!card.note.is_empty()).then(|| view! {
                                        <p class="contact-card__note">{card.note}</p>
                                    })}
                                </CardAnimated>
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section class="section section--muted">
                <div class="container contact__split">
                    <div class="contact__forms">
                        <SectionHeading title="Send Us a Message" />
                        <TabList selected_value=form_tab>
                            <Tab value="contact">"General Inquiry"</Tab>
                            <Tab value="booking">"Book a Room"</Tab>
                            <Tab value="visit">"Schedule a Visit"</Tab>
                        </TabList>
                        <div class="contact__form-body">
                            {move || match form_tab.get().as_str() {
                                "booking" => view! { <BookingForm /> }.into_any(),
                                "visit" => view! { <VisitForm /> }.into_any(),
                                _ => view! { <ContactForm /> }.into_any(),
                            }}
                        </div>
                    </div>

                    <div class="contact__location">
                        <SectionHeading title="Find Us" />
                        <div class="contact__map">
                            <iframe
                                src=move || site.content.with(|c| c.site.map_embed_url.clone())
                                title="Hostel location"
                                {..leptos::attr::loading("lazy")}
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                        <p class="contact__address">
                            {icon("map-pin")} {move || site.content.with(|c| c.site.address.clone())}
                        </p>
                        <h3 class="contact__directions-title">"Directions"</h3>
                        <ul class="contact__directions">
                            {move || {
                                contact()
                                    .directions
                                    .into_iter()
                                    .map(|d| view! {
                                        <li>
                                            <strong>{d.mode}</strong>
                                            <span>{d.text}</span>
                                        </li>
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeading title="Frequently Asked Questions" />
                    <FaqList faqs=Signal::derive(move || site.content.with(|c| c.contact.faqs.clone())) />
                </div>
            </section>
        </div>
    }
}
