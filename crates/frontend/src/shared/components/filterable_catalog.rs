//! Tab bar plus grid over a [`Catalog`].
//!
//! The active tab starts at "all". Switching tabs re-renders the grid with
//! `Catalog::filter_cloned`, so entries keep their document order and a tab
//! without a content panel shows an empty grid. Entries are
//! handed to `render` together with their position in the filtered list;
//! ids are not used as keys because content may repeat them.

use contracts::catalog::{Catalog, CatalogEntry, ALL_CATEGORY};
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
pub fn FilterableCatalog<T, F, V>(
    /// Entries and tabs
    #[prop(into)]
    catalog: Signal<Catalog<T>>,
    /// Renders one entry given its position in the filtered list
    render: F,
    /// Extra class for the grid
    #[prop(optional, into)]
    grid_class: String,
    /// Shown when the active tab has no entries
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView
where
    T: CatalogEntry + Clone + PartialEq + Send + Sync + 'static,
    F: Fn(usize, T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let active = RwSignal::new(ALL_CATEGORY.to_string());

    let visible = Memo::new(move |_| {
        let key = active.get();
        catalog.with(|c| c.filter_cloned(&key))
    });

    Effect::new(move |_| {
        log::debug!("Catalog tab: {}", active.get());
    });

    view! {
        <div class="catalog">
            <div class="catalog__tabs">
                <TabList selected_value=active>
                    {move || {
                        catalog
                            .with(|c| c.tab_bar())
                            .into_iter()
                            .map(|tab| view! { <Tab value=tab.key>{tab.label}</Tab> })
                            .collect_view()
                    }}
                </TabList>
            </div>

            {move || {
                let entries = visible.get();
                let empty = entries.is_empty().then(|| {
                    let text = empty_text
                        .get()
                        .unwrap_or_else(|| "Nothing to show in this category yet.".to_string());
                    view! { <p class="catalog__empty">{text}</p> }
                });

                let render = render.clone();
                view! {
                    <div class=format!("catalog__grid {}", grid_class)>
                        {entries
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| render(index, entry))
                            .collect_view()}
                    </div>
                    {empty}
                }
            }}
        </div>
    }
}
