//! Record store handlers, generic over the collection.

mod create_record;
mod delete_record;
mod list_records;
mod update_record;

pub use create_record::CreateRecordHandler;
pub use delete_record::DeleteRecordHandler;
pub use list_records::ListRecordsHandler;
pub use update_record::{UpdateRecordCommand, UpdateRecordHandler};
