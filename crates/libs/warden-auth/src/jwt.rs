//! JWT token management for warden sessions.
//!
//! This module provides signing and verification of the JSON Web Tokens used
//! for stateless authentication. Key material is built once from the
//! configured secret and injected wherever tokens are issued or checked;
//! nothing here is process-global.
//!
//! # Usage
//!
//! [`JwtKeys`] carries the encoding and decoding keys together with the
//! validation settings:
//! - [`JwtKeys::encode`]: create signed JWT tokens from claim data
//! - [`JwtKeys::decode`]: validate and extract claims from JWT tokens
//!
//! # Examples
//!
//! ```rust
//! use warden_auth::jwt::JwtKeys;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     sub: String,
//! }
//!
//! let keys = JwtKeys::new(b"MySuperSecret");
//!
//! let claims = UserClaims {
//!     sub: "admin@example.com".to_string(),
//! };
//!
//! let token = keys.encode(&claims).unwrap();
//! let decoded = keys.decode::<UserClaims>(&token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::AuthConfig;
use crate::prelude::*;

/// JWT signing algorithm used for all session tokens.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair and validation settings for JWT operations.
pub struct JwtKeys {
    /// Key used for signing new JWT tokens.
    encoding: EncodingKey,
    /// Key used for verifying existing JWT tokens.
    decoding: DecodingKey,
    /// Validation settings applied when decoding.
    validation: Validation,
}

impl JwtKeys {
    /// Creates a new key pair from the provided secret.
    ///
    /// Session tokens carry no expiration claim, so validation checks the
    /// signature and token structure only.
    ///
    /// # Arguments
    ///
    /// * `secret` - Raw bytes of the signing secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Creates a new key pair from the signing configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes())
    }

    /// Creates a signed JWT token from the provided claims.
    ///
    /// # Arguments
    ///
    /// * `claims` - Claims data to encode in the token (must be serializable)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Base64-encoded JWT token
    /// * `Err(Error)` - Token creation or serialization errors
    ///
    /// # Security Notes
    ///
    /// - Claims are not encrypted, only signed for integrity
    /// - Keep payload minimal to reduce token size and attack surface
    pub fn encode<T>(&self, claims: &T) -> Result<String>
    where
        T: Serialize,
    {
        let header = Header::new(ALGORITHM);
        Ok(encode(&header, claims, &self.encoding)?)
    }

    /// Validates and decodes a JWT token to extract claims.
    ///
    /// Only tokens signed with the same secret and matching algorithm are
    /// accepted.
    ///
    /// # Arguments
    ///
    /// * `token` - JWT token string to validate and decode
    ///
    /// # Returns
    ///
    /// * `Ok(TokenData<T>)` - Validated token with extracted claims
    /// * `Err(Error)` - Invalid token, signature mismatch, or deserialization errors
    pub fn decode<T>(&self, token: &str) -> Result<TokenData<T>>
    where
        T: DeserializeOwned,
    {
        Ok(decode(token, &self.decoding, &self.validation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
    }

    fn claims() -> TestClaims {
        TestClaims {
            sub: String::from("user@example.com"),
        }
    }

    #[test]
    fn encode_decode_round_trips() -> Result<()> {
        let keys = JwtKeys::new(b"round-trip-secret");
        let token = keys.encode(&claims())?;
        let decoded = keys.decode::<TestClaims>(&token)?;
        assert_eq!(decoded.claims, claims());
        Ok(())
    }

    #[test]
    fn decode_fails_with_different_secret() -> Result<()> {
        let keys = JwtKeys::new(b"first-secret");
        let other = JwtKeys::new(b"second-secret");
        let token = keys.encode(&claims())?;
        assert!(other.decode::<TestClaims>(&token).is_err());
        Ok(())
    }

    #[test]
    fn decode_fails_for_truncated_token() -> Result<()> {
        let keys = JwtKeys::new(b"truncate-secret");
        let token = keys.encode(&claims())?;
        let truncated = &token[..token.len() - 4];
        assert!(keys.decode::<TestClaims>(truncated).is_err());
        Ok(())
    }

    #[test]
    fn decode_fails_for_tampered_payload() -> Result<()> {
        let keys = JwtKeys::new(b"tamper-secret");
        let token = keys.encode(&claims())?;
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'e' { b'f' } else { b'e' };
        parts[1] = String::from_utf8(payload).expect("payload stays ASCII");
        let tampered = parts.join(".");
        assert!(keys.decode::<TestClaims>(&tampered).is_err());
        Ok(())
    }

    #[test]
    fn decode_accepts_tokens_without_expiration() -> Result<()> {
        let keys = JwtKeys::new(b"no-exp-secret");
        let token = keys.encode(&claims())?;
        assert!(keys.decode::<TestClaims>(&token).is_ok());
        Ok(())
    }
}
