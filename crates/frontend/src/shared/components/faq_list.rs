use contracts::domain::Faq;
use leptos::prelude::*;

/// Question/answer pairs as native disclosure widgets
#[component]
pub fn FaqList(#[prop(into)] faqs: Signal<Vec<Faq>>) -> impl IntoView {
    view! {
        <div class="faq">
            {move || {
                faqs.get()
                    .into_iter()
                    .map(|faq| view! {
                        <details class="faq__item">
                            <summary class="faq__question">{faq.question}</summary>
                            <p class="faq__answer">{faq.answer}</p>
                        </details>
                    })
                    .collect_view()
            }}
        </div>
    }
}
