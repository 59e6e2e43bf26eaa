pub mod datastore;
pub mod repository;
