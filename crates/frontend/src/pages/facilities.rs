use crate::layout::global_context::use_site;
use crate::shared::components::card_animated::stagger;
use crate::shared::components::ui::Button;
use crate::shared::components::{CardAnimated, PageHeader, SectionHeading};
use crate::shared::icons::icon;
use contracts::domain::facility::{flatten_groups, Facility};
use leptos::prelude::*;
use thaw::{Tab, TabList};

fn facility_card(index: usize, facility: Facility) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger(index) class="facility-card">
            <div class="facility-card__icon">{icon(&facility.icon)}</div>
            <h3 class="facility-card__title">{facility.title}</h3>
            <p class="facility-card__text">{facility.description}</p>
        </CardAnimated>
    }
}

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    let site = use_site();
    let groups = Memo::new(move |_| site.content.with(|c| c.facilities.groups.clone()));

    // First group open by default; re-pick if the content is swapped and the
    // key disappears.
    let selected = RwSignal::new(String::new());
    Effect::new(move |_| {
        groups.with(|groups| {
            let current = selected.get_untracked();
            if !groups.iter().any(|g| g.key == current) {
                if let Some(first) = groups.first() {
                    selected.set(first.key.clone());
                }
            }
        });
    });

    view! {
        <div class="page page--facilities">
            <PageHeader intro=Signal::derive(move || site.content.with(|c| c.facilities.intro.clone())) />

            <section class="section">
                <div class="container">
                    <SectionHeading title="All Facilities" />
                    <div class="grid grid--4">
                        {move || {
                            groups.with(|g| flatten_groups(g))
                                .into_iter()
                                .enumerate()
                                .map(|(i, f)| facility_card(i, f))
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>

            <section class="section section--muted">
                <div class="container">
                    <SectionHeading title="Facilities by Category" />
                    <TabList selected_value=selected>
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|g| view! { <Tab value=g.key>{g.label}</Tab> })
                                .collect_view()
                        }}
                    </TabList>
                    <div class="grid grid--3 facilities__group">
                        {move || {
                            let key = selected.get();
                            groups
                                .with(|groups| groups.iter().find(|g| g.key == key).cloned())
                                .map(|g| g.facilities)
                                .unwrap_or_default()
                                .into_iter()
                                .enumerate()
                                .map(|(i, f)| facility_card(i, f))
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container maintenance">
                    <h2 class="maintenance__title">"Need Something Fixed?"</h2>
                    <p class="maintenance__text">
                        {move || site.content.with(|c| c.facilities.maintenance_text.clone())}
                    </p>
                    <Button href="/contact".to_string() size="lg">"Submit a Request"</Button>
                </div>
            </section>
        </div>
    }
}
