use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::core::entities::Uid;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The account id of the caller
    sub: String,
    /// Expiry time as Unix timestamp
    exp: i64,
}

/// Issues and verifies HS256 bearer tokens of callers.
pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    time_valid: Duration,
}

impl JwtState {
    pub fn new(secret: &str, time_valid: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            time_valid,
        }
    }

    pub fn generate_token(&self, uid: &Uid) -> Result<String> {
        let exp = (OffsetDateTime::now_utc() + self.time_valid).unix_timestamp();
        let claims = Claims {
            sub: uid.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_uid(&self, token: &str) -> Result<Uid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims.sub.parse()?)
    }
}
