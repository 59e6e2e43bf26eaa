pub mod booking;
pub mod id;
pub mod list;
pub mod resource;
pub mod room;
pub mod time;
pub mod user;
