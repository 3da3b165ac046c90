//! Small UI state machines shared by the site's interactive components.
//!
//! They hold no DOM handles so the transitions can be tested natively; the
//! frontend stores them in signals and feeds them browser events.

pub mod reveal;
pub mod scroll;
pub mod selection;

pub use reveal::{RevealState, REVEAL_THRESHOLD};
pub use scroll::{ScrollFlag, SCROLL_THRESHOLD};
pub use selection::Selection;
