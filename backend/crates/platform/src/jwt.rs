//! Compact JSON Web Tokens (HS512 only)
//!
//! Thin wrapper over `jsonwebtoken`. Only `HS512` is produced or accepted;
//! the header is read before the signature is checked so tokens announcing
//! `HS256`, `RS512`, ... are reported as such. Time-based claims are left to
//! the caller: this module only proves that the claims were produced by a
//! holder of the key.

use std::fmt;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The only algorithm this module speaks
pub const ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Wrong number of segments, bad base64, bad JSON or unknown `alg`
    #[error("Malformed token")]
    Malformed,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Failed to serialize claims: {0}")]
    Serialization(String),
}

/// HS512 signer/verifier holding the symmetric key
#[derive(Clone)]
pub struct Hs512 {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs512 {
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        let key = key.as_ref();

        let mut validation = Validation::new(ALGORITHM);
        // exp/nbf/aud belong to the caller
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
        }
    }

    /// Serialize and sign `claims`
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding)
            .map_err(|e| JwtError::Serialization(e.to_string()))
    }

    /// Check header and signature, then deserialize the claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, JwtError> {
        let header = jsonwebtoken::decode_header(token).map_err(|_| JwtError::Malformed)?;
        if header.alg != ALGORITHM {
            return Err(JwtError::UnsupportedAlgorithm(format!("{:?}", header.alg)));
        }

        jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => {
                    JwtError::UnsupportedAlgorithm(format!("{:?}", header.alg))
                }
                _ => JwtError::Malformed,
            })
    }
}

impl fmt::Debug for Hs512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs512")
            .field("alg", &ALGORITHM)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    /// `{"alg":"none","typ":"JWT"}`
    const NONE_HEADER: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0";
    /// `{"alg":"HS256","typ":"JWT"}`
    const HS256_HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
    /// `{"alg":"RS512","typ":"JWT"}`
    const RS512_HEADER: &str = "eyJhbGciOiJSUzUxMiIsInR5cCI6IkpXVCJ9";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Claims {
        sub: String,
        n: u32,
    }

    fn claims() -> Claims {
        Claims {
            sub: "alice".into(),
            n: 7,
        }
    }

    fn segments(token: &str) -> Vec<&str> {
        token.split('.').collect()
    }

    #[test]
    fn test_encode_decode() {
        let signer = Hs512::new(b"secret");
        let token = signer.encode(&claims()).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(signer.decode::<Claims>(&token).unwrap(), claims());
    }

    #[test]
    fn test_header_announces_hs512() {
        let token = Hs512::new(b"k").encode(&claims()).unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS512);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = Hs512::new(b"one").encode(&claims()).unwrap();
        assert_eq!(
            Hs512::new(b"two").decode::<Claims>(&token),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_claims_rejected() {
        let signer = Hs512::new(b"secret");
        let token = signer.encode(&claims()).unwrap();
        let other = signer
            .encode(&Claims {
                sub: "mallory".into(),
                n: 7,
            })
            .unwrap();

        // mallory's claims under alice's signature
        let (ours, theirs) = (segments(&token), segments(&other));
        let tampered = format!("{}.{}.{}", ours[0], theirs[1], ours[2]);
        assert_eq!(
            signer.decode::<Claims>(&tampered),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_other_algorithms_rejected() {
        let signer = Hs512::new(b"secret");
        let token = signer.encode(&claims()).unwrap();
        let parts = segments(&token);

        for (header, alg) in [(HS256_HEADER, "HS256"), (RS512_HEADER, "RS512")] {
            let forged = format!("{}.{}.{}", header, parts[1], parts[2]);
            assert_eq!(
                signer.decode::<Claims>(&forged),
                Err(JwtError::UnsupportedAlgorithm(alg.to_string()))
            );
        }
    }

    #[test]
    fn test_unsigned_token_rejected() {
        let signer = Hs512::new(b"secret");
        let token = signer.encode(&claims()).unwrap();
        let unsigned = format!("{}.{}.", NONE_HEADER, segments(&token)[1]);
        assert_eq!(signer.decode::<Claims>(&unsigned), Err(JwtError::Malformed));
    }

    #[test]
    fn test_malformed_rejected() {
        let signer = Hs512::new(b"secret");
        for token in ["", "abc", "a.b", "a.b.c.d", "!!.??.**"] {
            assert_eq!(signer.decode::<Claims>(token), Err(JwtError::Malformed));
        }
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = Hs512::new(b"very-secret");
        assert!(!format!("{signer:?}").contains("very-secret"));
    }
}
