use sea_orm::{Database, DatabaseConnection};

use crate::error::AdminError;

/// Open `database_url`; the tools never fall back to a default database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, AdminError> {
    log::debug!("Connecting to {}", database_url);

    let db = Database::connect(database_url).await.map_err(|e| {
        log::error!("Failed to connect to database: {}", e);
        e
    })?;
    log::info!("Database connected successfully");
    Ok(db)
}
