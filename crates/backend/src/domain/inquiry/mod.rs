pub mod service;
pub mod sink;

pub use service::{InquiryDesk, InquiryError};
