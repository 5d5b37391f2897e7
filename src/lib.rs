pub mod constants;
pub mod error;
pub mod handlers;
pub mod types;
pub mod utils;
