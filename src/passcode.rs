//! Passcode generation, hashing and verification.
//!
//! Hashing is deliberately slow (Argon2id with a fresh random salt), so both
//! directions run on the blocking thread pool: a claim against one share must
//! not stall unrelated requests on the async runtime.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::Credential;

/// Number of distinct passcodes. The keyphrase partition and rate limiting
/// carry the rest of the brute-force resistance.
const PASSCODE_SPACE: u32 = 10_000;

/// Default Argon2 time cost (iterations).
pub const DEFAULT_TIME_COST: u32 = 2;

/// Generates a fresh zero-padded 4-digit passcode.
pub fn generate() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..PASSCODE_SPACE);
    format!("{:04}", n)
}

fn hasher(time_cost: u32) -> AppResult<Argon2<'static>> {
    let params = Params::new(Params::DEFAULT_M_COST, time_cost, Params::DEFAULT_P_COST, None)
        .map_err(|e| AppError::Hashing(format!("invalid parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a plaintext passcode into a PHC-format string.
///
/// Any failure propagates: the caller must abort its operation rather than
/// persist a share without a valid hash.
pub async fn hash(plain: &str, time_cost: u32) -> AppResult<String> {
    let plain = plain.to_string();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        let hash = hasher(time_cost)?
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    })
    .await
    .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))?
}

/// Verifies a plaintext passcode against a PHC-format hash string.
/// A malformed hash verifies as `false` rather than erroring.
pub fn verify_hash(plain: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

/// Verifies a plaintext passcode against a stored credential.
///
/// Legacy plaintext records compare directly; they keep working until the
/// startup migration rewrites them.
pub async fn verify_credential(plain: &str, credential: &Credential) -> bool {
    match credential {
        Credential::Hashed(hash) => {
            let plain = plain.to_string();
            let hash = hash.clone();
            tokio::task::spawn_blocking(move || verify_hash(&plain, &hash))
                .await
                .unwrap_or(false)
        }
        Credential::LegacyPlain(stored) => stored == plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cheapest valid time cost; keeps the test suite off the default work
    // factor.
    const TEST_COST: u32 = 1;

    #[test]
    fn test_generate_is_four_digits() {
        for _ in 0..100 {
            let code = generate();
            assert_eq!(code.len(), 4);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn test_hash_verify_round_trip() {
        let hash = hash("0420", TEST_COST).await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_hash("0420", &hash));
        assert!(!verify_hash("0421", &hash));
    }

    #[tokio::test]
    async fn test_same_passcode_hashes_differently() {
        let a = hash("1234", TEST_COST).await.unwrap();
        let b = hash("1234", TEST_COST).await.unwrap();
        assert_ne!(a, b); // fresh salt per hash
        assert!(verify_hash("1234", &a));
        assert!(verify_hash("1234", &b));
    }

    #[test]
    fn test_malformed_hash_is_false_not_error() {
        assert!(!verify_hash("1234", ""));
        assert!(!verify_hash("1234", "not-a-phc-string"));
        assert!(!verify_hash("1234", "$argon2id$v=19$truncated"));
    }

    #[tokio::test]
    async fn test_zero_time_cost_is_rejected() {
        let err = hash("1234", 0).await.unwrap_err();
        assert!(matches!(err, AppError::Hashing(_)));
    }

    #[tokio::test]
    async fn test_verify_credential_dispatches_on_variant() {
        let hashed = Credential::Hashed(hash("0042", TEST_COST).await.unwrap());
        assert!(verify_credential("0042", &hashed).await);
        assert!(!verify_credential("9999", &hashed).await);

        let legacy = Credential::LegacyPlain("0042".to_string());
        assert!(verify_credential("0042", &legacy).await);
        assert!(!verify_credential("9999", &legacy).await);
    }
}
