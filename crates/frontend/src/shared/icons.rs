use leptos::prelude::*;

/// Inline SVG icon by name; unknown names render a neutral circle.
///
/// Content documents reference icons by these names.
pub fn icon(name: &str) -> AnyView {
    match name {
        "home" => svg(view! {
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
            <polyline points="9 22 9 12 15 12 15 22"/>
        }),
        "building" => svg(view! {
            <rect x="4" y="2" width="16" height="20" rx="2"/>
            <path d="M9 22v-4h6v4"/>
            <path d="M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01"/>
        }),
        "panel" => svg(view! {
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        }),
        "bed" => svg(view! {
            <path d="M2 4v16"/>
            <path d="M2 8h18a2 2 0 0 1 2 2v10"/>
            <path d="M2 17h20"/>
            <path d="M6 8v9"/>
        }),
        "image" => svg(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <circle cx="9" cy="9" r="2"/>
            <path d="M21 15l-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>
        }),
        "phone" => svg(view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z"/>
        }),
        "mail" => svg(view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M22 7l-10 6L2 7"/>
        }),
        "map-pin" => svg(view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/>
            <circle cx="12" cy="10" r="3"/>
        }),
        "clock" => svg(view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12 6 12 12 16 14"/>
        }),
        "wifi" => svg(view! {
            <path d="M5 12.55a11 11 0 0 1 14.08 0"/>
            <path d="M1.42 9a16 16 0 0 1 21.16 0"/>
            <path d="M8.53 16.11a6 6 0 0 1 6.95 0"/>
            <path d="M12 20h.01"/>
        }),
        "utensils" => svg(view! {
            <path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/>
            <path d="M7 2v20"/>
            <path d="M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3zm0 0v7"/>
        }),
        "book-open" => svg(view! {
            <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>
            <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>
        }),
        "shield-check" => svg(view! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>
            <path d="M9 12l2 2 4-4"/>
        }),
        "dumbbell" => svg(view! {
            <path d="M6.5 6.5h11"/>
            <path d="M6.5 17.5h11"/>
            <path d="M6 20v-16"/>
            <path d="M18 20v-16"/>
            <path d="M3 17v-10"/>
            <path d="M21 17v-10"/>
        }),
        "tv" => svg(view! {
            <rect x="2" y="7" width="20" height="15" rx="2"/>
            <polyline points="17 2 12 7 7 2"/>
        }),
        "wind" => svg(view! {
            <path d="M9.59 4.59A2 2 0 1 1 11 8H2"/>
            <path d="M12.59 19.41A2 2 0 1 0 14 16H2"/>
            <path d="M17.73 7.73A2.5 2.5 0 1 1 19.5 12H2"/>
        }),
        "coffee" => svg(view! {
            <path d="M18 8h1a4 4 0 0 1 0 8h-1"/>
            <path d="M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4z"/>
            <path d="M6 1v3M10 1v3M14 1v3"/>
        }),
        "printer" => svg(view! {
            <polyline points="6 9 6 2 18 2 18 9"/>
            <path d="M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2"/>
            <rect x="6" y="14" width="12" height="8"/>
        }),
        "signal" => svg(view! {
            <path d="M2 20h.01M7 20v-4M12 20v-8M17 20V8M22 4v16"/>
        }),
        "sparkles" => svg(view! {
            <path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z"/>
            <path d="M19 17v4M17 19h4"/>
        }),
        "shirt" => svg(view! {
            <path d="M20.38 3.46L16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z"/>
        }),
        "gamepad" => svg(view! {
            <path d="M6 12h4M8 10v4"/>
            <path d="M15 13h.01M18 11h.01"/>
            <rect x="2" y="6" width="20" height="12" rx="2"/>
        }),
        "users" => svg(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }),
        "school" => svg(view! {
            <path d="M22 10L12 5 2 10l10 5 10-5z"/>
            <path d="M6 12v5c3 3 9 3 12 0v-5"/>
        }),
        "train" => svg(view! {
            <rect x="4" y="3" width="16" height="16" rx="2"/>
            <path d="M4 11h16M12 3v8M8 19l-2 3M16 19l2 3"/>
        }),
        "shopping-bag" => svg(view! {
            <path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"/>
            <path d="M3 6h18"/>
            <path d="M16 10a4 4 0 0 1-8 0"/>
        }),
        "hospital" => svg(view! {
            <path d="M12 6v4M14 8h-4"/>
            <path d="M18 22V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v18"/>
            <path d="M2 22h20M10 22v-4h4v4"/>
        }),
        "film" => svg(view! {
            <rect x="2" y="2" width="20" height="20" rx="2.18"/>
            <path d="M7 2v20M17 2v20M2 12h20M2 7h5M2 17h5M17 17h5M17 7h5"/>
        }),
        "award" => svg(view! {
            <circle cx="12" cy="8" r="7"/>
            <polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"/>
        }),
        "check" => svg(view! {
            <polyline points="20 6 9 17 4 12"/>
        }),
        "arrow-right" => svg(view! {
            <path d="M5 12h14M12 5l7 7-7 7"/>
        }),
        "external-link" => svg(view! {
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
            <polyline points="15 3 21 3 21 9"/>
            <path d="M10 14L21 3"/>
        }),
        "menu" => svg(view! {
            <path d="M3 12h18M3 6h18M3 18h18"/>
        }),
        "x" => svg(view! {
            <path d="M18 6L6 18M6 6l12 12"/>
        }),
        "chevron-down" => svg(view! {
            <polyline points="6 9 12 15 18 9"/>
        }),
        _ => svg(view! {
            <circle cx="12" cy="12" r="10"/>
        }),
    }
}

fn svg(paths: impl IntoView + Send + 'static) -> AnyView {
    view! {
        <svg class="icon" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}
