pub mod account_seed_handler;
pub mod resume_schema_handler;
