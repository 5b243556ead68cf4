use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

#[derive(Debug)]
pub enum Error {
    FailedToHash,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::FailedToHash
        })
}

pub fn verify(stored_hash: &str, password: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(err) => {
            tracing::error!("Invalid password hash format: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_original_password_only() {
        let hashed = hash("correct horse").unwrap();

        assert_ne!(hashed, "correct horse");
        assert!(verify(&hashed, "correct horse"));
        assert!(!verify(&hashed, "battery staple"));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify("plaintext", "plaintext"));
    }
}
