pub mod booking;
pub mod health;
pub mod resource;
pub mod room;
pub mod user;

#[cfg(test)]
pub(crate) mod fixtures;
