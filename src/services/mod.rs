pub mod blocklist;
pub mod upload;
