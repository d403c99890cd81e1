//! Profile command and query handlers.

mod get_graduation;
mod get_profile;
mod update_profile;

pub use get_graduation::{GetGraduationHandler, GetGraduationQuery};
pub use get_profile::GetProfileHandler;
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
