//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories for tests and ephemeral runs
//! - `sqlite` - SQLite repositories, migrations and first-startup seeding
//! - `http` - Axum REST API

pub mod http;
pub mod memory;
pub mod sqlite;
