pub mod constants;
pub mod errors;
pub mod messages;
pub mod models;
pub mod resource;
pub mod routes;
pub mod session;
pub mod types;
