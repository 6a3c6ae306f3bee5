pub mod download_handler;
pub mod submit_handler;
