use std::io;

use dotenv::dotenv;
use jobboard_admin::{constants::config, handlers::resume_schema_handler};

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    resume_schema_handler::run_with_url(config::get_database_url(), &mut io::stdout()).await
}
