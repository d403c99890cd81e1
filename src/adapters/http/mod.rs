//! HTTP adapter - REST API over the application handlers.
//!
//! Every error is returned as `{code, message, details?}`. Only this layer
//! reads the wall clock; handlers receive `today` / `occurred_at` explicitly.

mod attendance;
mod dto;
mod error;
mod profile;
mod progression;
mod records;
mod router;
mod state;

pub use dto::{AckResponse, CreatedResponse, GrantXpRequest, HistoryEntryResponse};
pub use error::{ApiError, ErrorResponse};
pub use records::record_router;
pub use router::{api_router, build_router};
pub use state::{AppState, RecordRepositories};
