use bcrypt::{hash, BcryptError};

/// Salted bcrypt hash of `password` at the given work factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost).map_err(|e| {
        log::error!("Password hashing error: {}", e);
        e
    })
}
