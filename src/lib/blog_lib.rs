pub mod models;
pub mod repos;
pub mod services;
pub mod store;
