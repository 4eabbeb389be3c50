//! Password hashing and verification.
//!
//! New accounts store bcrypt hashes. Rows written before hashing was turned
//! on hold plain text, so verification checks for a bcrypt prefix and falls
//! back to direct comparison for legacy rows.

use anyhow::Result;

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Verifies a candidate password against the stored value, bcrypt first with
/// a plain-text fallback for legacy rows.
pub fn verify_password(candidate: &str, stored: &str) -> Result<bool> {
    if stored.starts_with("$2a$") || stored.starts_with("$2b$") || stored.starts_with("$2y$") {
        Ok(bcrypt::verify(candidate, stored)?)
    } else {
        Ok(candidate == stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn test_legacy_plain_text_comparison() {
        assert!(verify_password("hunter2", "hunter2").unwrap());
        assert!(!verify_password("hunter2", "something-else").unwrap());
    }
}
