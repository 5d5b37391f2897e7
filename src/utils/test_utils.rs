use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Cheapest cost bcrypt accepts; keeps seeding tests fast.
pub const TEST_HASH_COST: u32 = 4;

/// In-memory SQLite database with the baseline schema applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Everything the tools printed, as a string.
pub fn output_text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("tool output is valid UTF-8")
}
