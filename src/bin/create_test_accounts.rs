use std::io;

use bcrypt::DEFAULT_COST;
use dotenv::dotenv;
use jobboard_admin::{
    constants::{accounts::TEST_ACCOUNTS, config},
    error::AdminError,
    handlers::account_seed_handler,
    utils::db,
};

#[tokio::main]
async fn main() -> Result<(), AdminError> {
    dotenv().ok();
    env_logger::init();

    let db = db::connect(&config::get_database_url()?).await?;

    let mut out = io::stdout();
    account_seed_handler::create_test_accounts(&db, TEST_ACCOUNTS, DEFAULT_COST, &mut out).await?;
    Ok(())
}
