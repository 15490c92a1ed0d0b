//! Catalog API access.

pub mod client;
