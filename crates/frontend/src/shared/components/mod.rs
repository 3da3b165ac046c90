pub mod card_animated;
pub mod fallback_image;
pub mod faq_list;
pub mod filterable_catalog;
pub mod page_header;
pub mod reveal;
pub mod section_heading;
pub mod ui;

pub use card_animated::CardAnimated;
pub use fallback_image::FallbackImage;
pub use faq_list::FaqList;
pub use filterable_catalog::FilterableCatalog;
pub use page_header::PageHeader;
pub use reveal::Reveal;
pub use section_heading::SectionHeading;
