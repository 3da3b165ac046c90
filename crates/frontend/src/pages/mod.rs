pub mod about;
pub mod contact;
pub mod facilities;
pub mod home;
pub mod not_found;
pub mod photos;
pub mod rooms;
