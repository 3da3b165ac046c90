//! Types and pure logic shared by the site frontend and the backend.

pub mod catalog;
pub mod domain;
pub mod inquiry;
pub mod interaction;
pub mod site;
