//! Rooms: filterable room cards, a detail dialog, a comparison table and
//! booking information.

use crate::layout::global_context::use_site;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{
    CardAnimated, FallbackImage, FilterableCatalog, PageHeader, SectionHeading,
};
use crate::shared::icons::icon;
use contracts::domain::room::{ComparisonRow, RoomEntry};
use contracts::interaction::Selection;
use leptos::prelude::*;
use thaw::{Dialog, DialogActions, DialogBody, DialogContent, DialogSurface, DialogTitle};

#[component]
pub fn RoomsPage() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="page page--rooms">
            <PageHeader intro=Signal::derive(move || site.content.with(|c| c.rooms.intro.clone())) />
            <section class="section">
                <div class="container">
                    <RoomsSections />
                </div>
            </section>
        </div>
    }
}

/// Catalog, detail dialog, comparison and booking info.
///
/// Also embedded in the home page of the compact variant.
#[component]
pub fn RoomsSections() -> impl IntoView {
    let site = use_site();
    let catalog = Signal::derive(move || site.content.with(|c| c.rooms.catalog.clone()));

    let selection = RwSignal::new(Selection::<RoomEntry>::new());
    let open = RwSignal::new(false);

    // The dialog mirrors the selection; closing it (mask, Escape, button)
    // dismisses the selection.
    Effect::new(move |_| {
        let is_open = selection.with(|s| s.is_open());
        if open.get_untracked() != is_open {
            open.set(is_open);
        }
    });
    Effect::new(move |_| {
        if !open.get() && selection.with_untracked(|s| s.is_open()) {
            selection.update(|s| s.dismiss());
        }
    });

    let render_room = move |index: usize, room: RoomEntry| {
        let picked = room.clone();
        view! {
            <div class="room-card-wrapper" on:click=move |_| selection.update(|s| s.select(picked.clone()))>
                <CardAnimated delay_ms=stagger(index) class="room-card">
                    <FallbackImage src=room.image_url.clone() alt=room.title.clone() class="room-card__image" />
                    <div class="room-card__body">
                        <div class="room-card__header">
                            <h3 class="room-card__title">{room.title.clone()}</h3>
                            <Badge variant="primary">{room.price.clone()}</Badge>
                        </div>
                        <p class="room-card__text">{room.description.clone()}</p>
                        <div class="room-card__meta">
                            <span>{icon("users")} {room.occupancy.clone()}</span>
                            <span>{room.size.clone()}</span>
                        </div>
                        <span class="room-card__more">"View Details" {icon("arrow-right")}</span>
                    </div>
                </CardAnimated>
            </div>
        }
    };

    view! {
        <div class="rooms">
            <FilterableCatalog
                catalog=catalog
                render=render_room
                grid_class="grid--3"
                empty_text="No rooms of this type are listed right now."
            />

            <Dialog open=open>
                <DialogSurface>
                    <DialogBody>
                        {move || selection.with(|s| s.cloned()).map(|room| {
                            let title = room.title.clone();
                            let tour_link = room.tour_link.clone();
                            view! {
                                <DialogTitle>{title}</DialogTitle>
                                <DialogContent>
                                    <RoomDetails room=room />
                                </DialogContent>
                                <DialogActions>
                                    <Button
                                        variant="ghost"
                                        on_click=Callback::new(move |_| selection.update(|s| s.dismiss()))
                                    >
                                        "Close"
                                    </Button>
                                    <Button href=tour_link variant="outline">
                                        {icon("external-link")} "Virtual Tour"
                                    </Button>
                                    <Button href="/contact".to_string()>"Book Now"</Button>
                                </DialogActions>
                            }
                        })}
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <div class="rooms__block">
                <SectionHeading title="Room Comparison" />
                <ComparisonTable />
            </div>

            <div class="rooms__block">
                <SectionHeading title="Booking Information" />
                <BookingInfo />
            </div>
        </div>
    }
}

#[component]
fn RoomDetails(room: RoomEntry) -> impl IntoView {
    view! {
        <div class="room-details">
            <FallbackImage src=room.image_url alt=room.title class="room-details__image" />
            <div class="room-details__badges">
                <Badge variant="light">{icon("users")} {room.occupancy}</Badge>
                <Badge variant="light">{room.size}</Badge>
                <Badge variant="primary">{room.price}</Badge>
            </div>
            <p>{room.description}</p>
            <div class="room-details__lists">
                <div>
                    <h4>"Room Features"</h4>
                    <ul class="check-list">
                        {room.features.into_iter().map(|f| view! { <li>{icon("check")} <span>{f}</span></li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Amenities"</h4>
                    <ul class="check-list">
                        {room.amenities.into_iter().map(|a| view! { <li>{icon("check")} <span>{a}</span></li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <p class="room-details__availability">{icon("bed")} {room.availability}</p>
        </div>
    }
}

#[component]
fn ComparisonTable() -> impl IntoView {
    let site = use_site();
    let rows = move || {
        site.content.with(|c| {
            c.rooms
                .catalog
                .items
                .iter()
                .map(ComparisonRow::from)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-wrapper">
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Room Type"</th>
                        <th>"Size"</th>
                        <th>"Occupancy"</th>
                        <th>"Price"</th>
                        <th>"Best For"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td class="comparison-table__title">{row.title}</td>
                                    <td>{row.size}</td>
                                    <td>{row.occupancy}</td>
                                    <td>{row.price}</td>
                                    <td>{row.summary}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn BookingInfo() -> impl IntoView {
    let site = use_site();
    let steps = move || site.content.with(|c| c.rooms.booking_steps.clone());
    let requirements = move || site.content.with(|c| c.rooms.requirements.clone());

    view! {
        <div class="grid grid--2">
            <CardAnimated class="booking-card">
                <h3>"How to Book"</h3>
                <ol class="booking-card__steps">
                    {move || steps().into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                </ol>
            </CardAnimated>
            <CardAnimated delay_ms=80 class="booking-card">
                <h3>"Requirements"</h3>
                <ul class="check-list">
                    {move || {
                        requirements()
                            .into_iter()
                            .map(|r| view! { <li>{icon("check")} <span>{r}</span></li> })
                            .collect_view()
                    }}
                </ul>
                <Button href="/contact".to_string()>"Start Your Booking"</Button>
            </CardAnimated>
        </div>
    }
}
