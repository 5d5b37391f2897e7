use std::env;

pub fn get_database_url() -> Result<String, env::VarError> {
    env::var("DATABASE_URL")
}
