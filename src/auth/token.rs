//! Encoding and decoding of the bearer tokens issued at login.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::models::UserId;

/// How long an issued token stays valid.
pub const TOKEN_DURATION: Duration = Duration::hours(24);

/// The contents of a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The id of the user the token was issued to.
    pub sub: i64,
    /// The time the token was issued, as a unix timestamp.
    pub iat: usize,
    /// The expiry time of the token, as a unix timestamp.
    pub exp: usize,
}

/// Create a signed token for `user_id` valid for [TOKEN_DURATION].
///
/// # Errors
/// Returns an error if the underlying JWT library fails to sign.
pub fn encode_token(
    user_id: UserId,
    encoding_key: &EncodingKey,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = OffsetDateTime::now_utc();
    let claims = Claims {
        sub: user_id.as_i64(),
        iat: now.unix_timestamp() as usize,
        exp: (now + TOKEN_DURATION).unix_timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key)
}

/// Verify `token` and return its claims.
///
/// # Errors
/// Returns an error if the token is malformed, expired or not signed with
/// the matching key.
pub fn decode_token(
    token: &str,
    decoding_key: &DecodingKey,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, decoding_key, &Validation::default()).map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, EncodingKey};

    use super::{decode_token, encode_token};
    use crate::models::UserId;

    #[test]
    fn token_round_trips_user_id() {
        let encoding_key = EncodingKey::from_secret(b"42");
        let decoding_key = DecodingKey::from_secret(b"42");

        let token = encode_token(UserId::new(7), &encoding_key).unwrap();
        let claims = decode_token(&token, &decoding_key).unwrap();

        assert_eq!(claims.sub, 7);
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let token = encode_token(UserId::new(7), &EncodingKey::from_secret(b"42")).unwrap();

        assert!(decode_token(&token, &DecodingKey::from_secret(b"not 42")).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not a token", &DecodingKey::from_secret(b"42")).is_err());
    }
}
