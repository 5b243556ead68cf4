use crate::types::JwtContext;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    FailedToSign,
    InvalidToken,
}

type Result<T> = std::result::Result<T, Error>;

pub fn sign(jwt: &JwtContext, user_id: String) -> Result<String> {
    let exp = (Utc::now() + Duration::hours(jwt.ttl_hours)).timestamp() as usize;

    encode(
        &Header::default(),
        &Claims { id: user_id, exp },
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign access token: {}", err);
        Error::FailedToSign
    })
}

pub fn verify(jwt: &JwtContext, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!("Rejected access token: {}", err);
        Error::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(secret: &str) -> JwtContext {
        JwtContext {
            secret: secret.to_string(),
            ttl_hours: 1,
        }
    }

    #[test]
    fn signed_token_carries_user_id() {
        let jwt = context("secret");
        let token = sign(&jwt, "01J0USER".to_string()).unwrap();

        assert_eq!(verify(&jwt, &token).unwrap().id, "01J0USER");
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = sign(&context("one"), "01J0USER".to_string()).unwrap();

        assert_eq!(
            verify(&context("two"), &token).unwrap_err(),
            Error::InvalidToken
        );
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtContext {
            secret: "secret".to_string(),
            ttl_hours: -2,
        };
        let token = sign(&jwt, "01J0USER".to_string()).unwrap();

        assert_eq!(verify(&jwt, &token).unwrap_err(), Error::InvalidToken);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            verify(&context("secret"), "not-a-token").unwrap_err(),
            Error::InvalidToken
        );
    }
}
