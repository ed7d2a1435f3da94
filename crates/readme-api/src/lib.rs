//! HTTP API for Readme Builder.
//!
//! # Modules
//!
//! - [`error`]: Error to response mapping
//! - [`handlers`]: One handler per endpoint
//! - [`models`]: Request bodies, query parameters and responses
//! - [`routes`]: The axum router
//! - [`server`]: Listener setup and graceful shutdown
//! - [`state`]: Shared handler state

#![doc = include_str!("../README.md")]

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use server::{serve, serve_with_shutdown};
pub use state::AppState;
