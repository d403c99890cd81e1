//! Profile module - the single athlete profile and its partial updates.

mod aggregate;
mod patch;

pub use aggregate::{
    Profile, DEFAULT_HEIGHT_M, DEFAULT_NAME, DEFAULT_OBJECTIVE, DEFAULT_WEIGHT_KG,
};
pub use patch::ProfilePatch;
