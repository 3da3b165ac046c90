pub mod content;
pub mod inquiry;
