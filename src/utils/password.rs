use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hashed = hash("adobo-and-rice").unwrap();
        assert_ne!(hashed, "adobo-and-rice");
        assert!(verify("adobo-and-rice", &hashed));
        assert!(!verify("sinigang", &hashed));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash("halo-halo").unwrap(), hash("halo-halo").unwrap());
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify("anything", "plaintext-password"));
    }
}
