//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `attendance` - Set of training days with range counting
//! - `progression` - XP, level tiers, streak and action history
//! - `graduation` - Belts and time-in-belt progress
//! - `profile` - The athlete profile singleton
//! - `records` - Techniques, workouts, schedule, diets, achievements
//! - `catalogue` - Starter content written on first startup

pub mod attendance;
pub mod catalogue;
pub mod foundation;
pub mod graduation;
pub mod profile;
pub mod progression;
pub mod records;
