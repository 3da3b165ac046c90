//! Reveal: fades its children in the first time they scroll into view.
//!
//! One IntersectionObserver per instance, disconnected as soon as the
//! element has been revealed and on unmount.

use contracts::interaction::reveal::{RevealState, REVEAL_THRESHOLD};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the JS callback it calls into
struct Watch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[component]
pub fn Reveal(
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Transition delay in ms
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let state = RwSignal::new(RevealState::default());
    let watch = StoredValue::new_local(None::<Watch>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if state.get_untracked().is_visible() || watch.with_value(|w| w.is_some()) {
            return;
        }

        match observe(&element, state) {
            Ok(w) => watch.set_value(Some(w)),
            Err(e) => {
                // No observer support: show the content right away.
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                state.update(|s| {
                    s.observe(true);
                });
            }
        }
    });

    // Release the observer once the content is visible.
    Effect::new(move |_| {
        if state.get().is_visible() {
            watch.try_set_value(None);
        }
    });

    on_cleanup(move || {
        watch.try_set_value(None);
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal {}", class)
            class:reveal--visible=move || state.get().is_visible()
            style=format!("transition-delay: {}ms;", delay_ms)
        >
            {children()}
        </div>
    }
}

fn observe(element: &web_sys::Element, state: RwSignal<RevealState>) -> Result<Watch, JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let mut next = state.get_untracked();
            if next.observe(intersecting) {
                observer.disconnect();
                state.set(next);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Watch {
        observer,
        _callback: callback,
    })
}
