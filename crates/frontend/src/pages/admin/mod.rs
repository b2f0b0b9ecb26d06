pub mod competitor;
pub mod data_upload;
pub mod manual_entry;
pub mod users;
