//! Landing page.
//!
//! Sections: hero, about summary, facility highlights, room previews,
//! places nearby and a gallery teaser. In the compact variant the about and
//! rooms previews are replaced by the full sections of those pages.

use crate::layout::global_context::use_site;
use crate::pages::about::AboutSections;
use crate::pages::rooms::RoomsSections;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{CardAnimated, FallbackImage, Reveal, SectionHeading};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let variant = use_site().variant();

    view! {
        <div class="page page--home">
            <Hero />
            {move || {
                if variant.get().folds_into_home() {
                    view! {
                        <section id="about" class="section">
                            <div class="container"><AboutSections /></div>
                        </section>
                        <FacilityHighlights />
                        <section id="rooms" class="section section--muted">
                            <div class="container"><RoomsSections /></div>
                        </section>
                    }
                    .into_any()
                } else {
                    view! {
                        <AboutSummary />
                        <FacilityHighlights />
                        <RoomPreviews />
                    }
                    .into_any()
                }
            }}
            <PlacesNearby />
            <GalleryTeaser />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let site = use_site();
    let hero = move || site.content.with(|c| c.hero.clone());

    view! {
        <section
            class="hero"
            style=move || format!(
                "background-image: linear-gradient(rgba(15, 23, 42, 0.6), rgba(15, 23, 42, 0.6)), url('{}');",
                hero().image_url
            )
        >
            <div class="container hero__content">
                <h1 class="hero__headline">
                    {move || {
                        hero()
                            .headline_lines()
                            .into_iter()
                            .map(|line| view! { <span class="hero__line">{line.to_string()}</span> })
                            .collect_view()
                    }}
                </h1>
                <p class="hero__subcopy">{move || hero().subcopy}</p>
                <div class="hero__actions">
                    {move || {
                        let [primary, secondary] = hero().actions().map(|cta| cta.clone());
                        view! {
                            <Button href=primary.target size="lg">{primary.label}</Button>
                            <Button href=secondary.target variant="light" size="lg">
                                {secondary.label}
                            </Button>
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSummary() -> impl IntoView {
    let site = use_site();
    let about = move || site.content.with(|c| c.home.about.clone());

    view! {
        <section class="section">
            <div class="container about-summary">
                <Reveal class="about-summary__text">
                    <h2 class="about-summary__heading">{move || about().heading}</h2>
                    {move || {
                        about()
                            .paragraphs
                            .into_iter()
                            .map(|p| view! { <p>{p}</p> })
                            .collect_view()
                    }}
                    <Button href="/about".to_string() variant="outline">
                        "Learn More About Us" {icon("arrow-right")}
                    </Button>
                </Reveal>
                <Reveal class="about-summary__media" delay_ms=150>
                    {move || {
                        let image = about().image;
                        view! { <FallbackImage src=image.url alt=image.alt class="about-summary__image" /> }
                    }}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn FacilityHighlights() -> impl IntoView {
    let site = use_site();

    view! {
        <section class="section section--muted">
            <div class="container">
                <SectionHeading
                    title="Our Facilities"
                    subtitle=Signal::derive(move || site.content.with(|c| c.home.facilities_intro.clone()))
                />
                <div class="grid grid--4">
                    {move || {
                        site.content
                            .with(|c| c.home.facilities.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(i, facility)| view! {
                                <CardAnimated delay_ms=stagger(i) class="facility-card">
                                    <div class="facility-card__icon">{icon(&facility.icon)}</div>
                                    <h3 class="facility-card__title">{facility.title}</h3>
                                    <p class="facility-card__text">{facility.description}</p>
                                </CardAnimated>
                            })
                            .collect_view()
                    }}
                </div>
                <div class="section__footer">
                    <Button href="/facilities".to_string() variant="outline">
                        "View All Facilities" {icon("arrow-right")}
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoomPreviews() -> impl IntoView {
    let site = use_site();

    view! {
        <section class="section">
            <div class="container">
                <SectionHeading
                    title="Our Rooms"
                    subtitle=Signal::derive(move || site.content.with(|c| c.home.rooms_intro.clone()))
                />
                <div class="grid grid--2">
                    {move || {
                        site.content
                            .with(|c| c.home.rooms.clone())
                            .into_iter()
                            .map(|room| view! {
                                <Reveal class="room-preview">
                                    <FallbackImage src=room.image_url alt=room.title.clone() class="room-preview__image" />
                                    <div class="room-preview__body">
                                        <h3 class="room-preview__title">{room.title}</h3>
                                        <p class="room-preview__text">{room.description}</p>
                                        <ul class="check-list">
                                            {room.features
                                                .into_iter()
                                                .map(|f| view! { <li>{icon("check")} <span>{f}</span></li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="room-preview__actions">
                                            <Button href="/rooms".to_string()>"View Details"</Button>
                                            <Button href=room.tour_link variant="outline">
                                                {icon("external-link")} "Virtual Tour"
                                            </Button>
                                        </div>
                                    </div>
                                </Reveal>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlacesNearby() -> impl IntoView {
    let site = use_site();

    view! {
        <section class="section section--muted">
            <div class="container">
                <SectionHeading
                    title="Places Nearby"
                    subtitle=Signal::derive(move || site.content.with(|c| c.home.places_intro.clone()))
                />
                <div class="grid grid--4">
                    {move || {
                        site.content
                            .with(|c| c.home.places.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(i, place)| {
                                let badge = place.badge_class();
                                view! {
                                    <CardAnimated delay_ms=stagger(i) class="place-card">
                                        <div class="place-card__header">
                                            <div class="place-card__icon">{icon(&place.icon)}</div>
                                            <Badge class=format!("place-badge {}", badge)>{place.category}</Badge>
                                        </div>
                                        <h3 class="place-card__title">{place.title}</h3>
                                        <p class="place-card__text">{place.description}</p>
                                        <div class="place-card__meta">
                                            <span>{icon("map-pin")} {place.distance}</span>
                                            <span>{icon("clock")} {place.travel_time}</span>
                                        </div>
                                    </CardAnimated>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryTeaser() -> impl IntoView {
    let site = use_site();

    view! {
        <section class="section">
            <div class="container">
                <SectionHeading
                    title="Photo Gallery"
                    subtitle=Signal::derive(move || site.content.with(|c| c.home.gallery_intro.clone()))
                />
                <div class="grid grid--4 gallery-teaser">
                    {move || {
                        site.content
                            .with(|c| c.home.gallery.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(i, item)| view! {
                                <Reveal class="gallery-tile" delay_ms=stagger(i)>
                                    <FallbackImage src=item.url alt=item.caption.clone() class="gallery-tile__image" />
                                    <div class="gallery-tile__caption">
                                        <span class="gallery-tile__category">{item.category}</span>
                                        <span>{item.caption}</span>
                                    </div>
                                </Reveal>
                            })
                            .collect_view()
                    }}
                </div>
                <div class="section__footer">
                    <Button href="/photos".to_string()>"View Full Gallery" {icon("arrow-right")}</Button>
                </div>
            </div>
        </section>
    }
}
