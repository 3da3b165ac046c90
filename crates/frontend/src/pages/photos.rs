use crate::layout::global_context::use_site;
use crate::shared::components::ui::Button;
use crate::shared::components::{FallbackImage, FilterableCatalog, PageHeader, Reveal, SectionHeading};
use crate::shared::components::card_animated::stagger;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::gallery::GalleryItem;
use contracts::interaction::Selection;
use leptos::prelude::*;

#[component]
pub fn PhotosPage() -> impl IntoView {
    let site = use_site();
    let catalog = Signal::derive(move || site.content.with(|c| c.photos.catalog.clone()));
    let selection = RwSignal::new(Selection::<GalleryItem>::new());

    let render_photo = move |index: usize, item: GalleryItem| {
        let picked = item.clone();
        view! {
            <Reveal class="gallery-tile" delay_ms=stagger(index)>
                <button
                    class="gallery-tile__button"
                    on:click=move |_| selection.update(|s| s.select(picked.clone()))
                >
                    <FallbackImage src=item.url alt=item.caption.clone() class="gallery-tile__image" />
                    <div class="gallery-tile__caption">
                        <span>{item.caption}</span>
                    </div>
                </button>
            </Reveal>
        }
    };

    let close = Callback::new(move |_| selection.update(|s| s.dismiss()));

    view! {
        <div class="page page--photos">
            <PageHeader intro=Signal::derive(move || site.content.with(|c| c.photos.intro.clone())) />

            <section class="section">
                <div class="container">
                    <FilterableCatalog
                        catalog=catalog
                        render=render_photo
                        grid_class="grid--3 gallery"
                        empty_text="No photos in this category yet."
                    />
                </div>
            </section>

            {move || selection.with(|s| s.cloned()).map(|item| {
                let caption = item.caption.clone();
                view! {
                    <Modal title=caption on_close=close class="lightbox">
                        <FallbackImage src=item.url alt=item.caption class="lightbox__image" />
                        {(!item.description.is_empty()).then(|| view! {
                            <p class="lightbox__description">{item.description}</p>
                        })}
                    </Modal>
                }
            })}

            <section class="section section--muted">
                <div class="container virtual-tour">
                    <SectionHeading
                        title="Virtual Tour"
                        subtitle="Take a 360° walk through our rooms and common areas from anywhere."
                    />
                    <div class="virtual-tour__placeholder">
                        {icon("image")}
                        <p>"The interactive tour is coming soon."</p>
                        <Button href="/contact".to_string() variant="outline">"Schedule an In-Person Visit"</Button>
                    </div>
                </div>
            </section>
        </div>
    }
}
