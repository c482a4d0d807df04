//! HTTP surface of the account service
//!
//! Exposed as a library so integration tests can build the same `App` the
//! binary serves.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
