//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read; neither reads the wall clock.

pub mod handlers;

pub use handlers::*;
