pub mod list;
pub mod new_client;
