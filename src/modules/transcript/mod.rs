pub mod controller;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod resolver;
pub mod routes;
pub mod schema;
