use leptos::prelude::*;

/// Button component with variants (primary, outline, ghost, light) and sizes (sm, md, lg).
///
/// With `href` set it renders a link styled as a button; external links
/// open in a new tab.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "ghost" or "light"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Link target; renders an `<a>` instead of a `<button>`
    #[prop(optional, into)]
    href: Option<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "light" => "button--light",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--small",
        Some("lg") => "button--large",
        _ => "",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let full_class =
        move || format!("button {} {} {}", variant_class(), size_class(), additional_class());

    if let Some(href) = href {
        let external = href.starts_with("http");
        return view! {
            <a
                href=href
                class=full_class
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                on:click=move |ev| {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            >
                {children()}
            </a>
        }
        .into_any();
    }

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=full_class
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
    .into_any()
}
