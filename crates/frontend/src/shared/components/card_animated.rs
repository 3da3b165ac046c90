//! CardAnimated: a thaw Card that fades in on mount.
//!
//! The animation is `@keyframes card-appear` in `styles/site.css`.
//!
//! # Example
//! ```text
//! // Cascading delay for a stagger effect
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//!
//! // Extra class and inline styles
//! <CardAnimated class="room-card" style="max-width: 400px;">
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation.
///
/// # Props
/// - `delay_ms` animation delay in ms (default `0`), for staggering grids.
/// - `class`    extra classes for the card element.
/// - `style`    inline styles appended after the animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes.
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles (appended after the animation).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=format!("site-card {}", class) attr:style=full_style>
            {children()}
        </Card>
    }
}

/// Stagger delay for the `index`-th card of a grid, capped so long lists
/// don't keep the last cards hidden.
pub fn stagger(index: usize) -> u32 {
    (index.min(8) as u32) * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_steps_by_60ms() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(1), 60);
        assert_eq!(stagger(3), 180);
    }

    #[test]
    fn test_stagger_caps_at_index_8() {
        assert_eq!(stagger(8), 480);
        assert_eq!(stagger(9), 480);
        assert_eq!(stagger(500), 480);
    }
}
