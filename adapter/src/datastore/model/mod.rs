pub mod booking;
pub mod resource;
pub mod room;
pub mod user;
