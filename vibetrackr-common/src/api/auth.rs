//! Bearer-token authentication primitives
//!
//! Tokens are opaque: 32 random bytes, hex-encoded, issued once at user
//! registration. Only the SHA-256 hash of a token is stored; presented
//! tokens are re-hashed and matched against the stored hash.
//!
//! # Pure Functions
//!
//! This module contains ONLY pure functions. No HTTP framework
//! dependencies (Axum, etc.) - those are in module-specific code.

use rand::RngCore;
use sha2::{Digest, Sha256};

// ========================================
// Error Types
// ========================================

/// Authentication error types
#[derive(Debug, Clone)]
pub enum ApiAuthError {
    /// Authorization header missing from request
    MissingHeader,

    /// Authorization header present but not of the form "Bearer <token>"
    MalformedHeader,

    /// Presented token does not match any stored token hash
    UnknownToken,

    /// Database error during token lookup
    DatabaseError(String),
}

impl std::fmt::Display for ApiAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiAuthError::MissingHeader => write!(f, "Missing Authorization header"),
            ApiAuthError::MalformedHeader => write!(f, "Malformed Authorization header"),
            ApiAuthError::UnknownToken => write!(f, "Unknown token"),
            ApiAuthError::DatabaseError(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for ApiAuthError {}

// ========================================
// Token Generation & Hashing
// ========================================

/// Generate a fresh opaque bearer token (64 hex characters)
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Hash a token for storage or lookup (SHA-256, 64 hex characters)
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn parse_bearer(header_value: &str) -> Result<&str, ApiAuthError> {
    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(ApiAuthError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(ApiAuthError::MalformedHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn hash_is_deterministic_64_hex_chars() {
        let hash1 = hash_token("some-token");
        let hash2 = hash_token("some-token");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert!(hash1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_tokens_hash_differently() {
        assert_ne!(hash_token("token-a"), hash_token("token-b"));
    }

    #[test]
    fn parse_bearer_extracts_token() {
        assert_eq!(parse_bearer("Bearer abc123").unwrap(), "abc123");
    }

    #[test]
    fn parse_bearer_rejects_missing_scheme() {
        assert!(parse_bearer("abc123").is_err());
        assert!(parse_bearer("Basic abc123").is_err());
    }

    #[test]
    fn parse_bearer_rejects_empty_token() {
        assert!(parse_bearer("Bearer ").is_err());
        assert!(parse_bearer("Bearer    ").is_err());
    }
}
