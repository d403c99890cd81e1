//! BJJ Elite - Personal Brazilian Jiu-Jitsu training companion
//!
//! Single-user backend keeping an athlete profile, a training attendance
//! ledger, XP progression with level tiers and history, belt graduation
//! progress, and plain record collections (techniques, workouts, class
//! schedule, diets, achievements) behind a JSON HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
