use std::{env, io};

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("DATABASE_URL environment variable is required: {0}")]
    Config(#[from] env::VarError),

    #[error("{0}")]
    Database(#[from] DbErr),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("no such table: {0}")]
    MissingTable(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
