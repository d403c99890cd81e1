//! Progression command and query handlers.

mod get_progression;
mod grant_xp;
mod list_history;

pub use get_progression::{GetProgressionHandler, ProgressionSnapshot};
pub use grant_xp::{GrantXpCommand, GrantXpHandler};
pub use list_history::{ListHistoryHandler, ListHistoryQuery};
