//! Stateless session tokens
//!
//! Tokens are HS256 JWTs carrying only `iat` and `exp` (Unix seconds), keyed by
//! a process-wide signing secret. Nothing is stored: a token is valid iff its
//! signature verifies against the secret held by this process and the current
//! time is strictly before `exp`. Restarting with a new secret invalidates every
//! outstanding token, and there is no revocation before natural expiry.
//!
//! Clock skew between processes is not compensated. Verification compares `exp`
//! against the local wall clock only.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::auth_error::{AuthError, AuthResult};

/// Default session lifetime in seconds
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Length of a generated signing secret in bytes
pub const GENERATED_SECRET_LEN: usize = 32;

/// Claims carried by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issued-at, Unix seconds
    pub iat: u64,
    /// Expiry, Unix seconds
    pub exp: u64,
}

impl SessionClaims {
    pub fn issued_at(&self) -> u64 {
        self.iat
    }

    pub fn expires_at(&self) -> u64 {
        self.exp
    }

    /// Seconds left before expiry at `now` (zero once expired)
    pub fn remaining_at(&self, now: u64) -> u64 {
        self.exp.saturating_sub(now)
    }
}

/// Process-wide HMAC key, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Fresh random secret for processes started without one
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; GENERATED_SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningSecret([REDACTED; {}])", self.0.len())
    }
}

/// Issues and verifies session tokens
///
/// Cheap to share behind an `Arc`; holds no mutable state.
#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionTokenService {
    /// Build a service keyed by `secret` issuing tokens valid for `ttl`
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` so the boundary is `now >= exp`
        // with zero leeway and an injectable clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now until now + TTL
    pub fn issue(&self) -> AuthResult<String> {
        self.issue_at(unix_now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, now: u64) -> AuthResult<String> {
        let claims = SessionClaims {
            iat: now,
            exp: now.saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))
    }

    /// Verify a token against the current wall clock
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        self.verify_at(token, unix_now())
    }

    /// Verify a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: u64) -> AuthResult<SessionClaims> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if now >= data.claims.exp {
            return Err(AuthError::Expired {
                expired_at: data.claims.exp,
            });
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Current Unix time in seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    fn service(secret: &str, ttl_secs: u64) -> SessionTokenService {
        SessionTokenService::new(
            &SigningSecret::new(secret.as_bytes()),
            Duration::from_secs(ttl_secs),
        )
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let svc = service("test-secret", 3600);
        let token = svc.issue().unwrap();
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_claims_encode_issue_time_and_ttl() {
        let svc = service("test-secret", 600);
        let token = svc.issue_at(T0).unwrap();
        let claims = svc.verify_at(&token, T0).unwrap();

        assert_eq!(claims.issued_at(), T0);
        assert_eq!(claims.expires_at(), T0 + 600);
        assert_eq!(claims.remaining_at(T0 + 100), 500);
    }

    #[test]
    fn test_valid_until_one_second_before_expiry() {
        let svc = service("test-secret", 3600);
        let token = svc.issue_at(T0).unwrap();

        assert!(svc.verify_at(&token, T0 + 3599).is_ok());
    }

    #[test]
    fn test_expired_at_exact_expiry() {
        let svc = service("test-secret", 3600);
        let token = svc.issue_at(T0).unwrap();

        assert_eq!(
            svc.verify_at(&token, T0 + 3600),
            Err(AuthError::Expired {
                expired_at: T0 + 3600
            })
        );
        assert!(matches!(
            svc.verify_at(&token, T0 + 10_000),
            Err(AuthError::Expired { .. })
        ));
    }

    #[test]
    fn test_token_from_past_is_expired_now() {
        let svc = service("test-secret", 60);
        let token = svc.issue_at(T0).unwrap();

        assert!(matches!(svc.verify(&token), Err(AuthError::Expired { .. })));
    }

    #[test]
    fn test_different_secret_is_invalid() {
        let issuer = service("secret-a", 3600);
        let verifier = service("secret-b", 3600);
        let token = issuer.issue().unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_malformed_strings_are_invalid() {
        let svc = service("test-secret", 3600);
        let malformed = [
            "not-a-token",
            "a.b.c",
            "eyJhbGciOiJIUzI1NiJ9..",
            "....",
            "Bearer something",
            "\u{1F600}.\u{1F600}.\u{1F600}",
        ];

        for candidate in malformed {
            assert!(
                matches!(svc.verify(candidate), Err(AuthError::InvalidToken(_))),
                "expected INVALID_TOKEN for {candidate:?}"
            );
        }
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let svc = service("test-secret", 3600);
        let token = svc.issue().unwrap();
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{head}.{flipped}{}", &sig[1..]);

        assert!(matches!(
            svc.verify(&tampered),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_unsigned_token_is_rejected() {
        let svc = service("test-secret", 3600);
        // {"alg":"none","typ":"JWT"} . {"iat":1,"exp":99999999999} . <empty>
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJpYXQiOjEsImV4cCI6OTk5OTk5OTk5OTl9.";

        assert!(matches!(
            svc.verify(token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_empty_token_is_missing() {
        let svc = service("test-secret", 3600);
        assert_eq!(svc.verify(""), Err(AuthError::MissingToken));
        assert_eq!(svc.verify("   "), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = SigningSecret::generate();
        let b = SigningSecret::generate();

        assert_eq!(a.len(), GENERATED_SECRET_LEN);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_restart_with_new_secret_invalidates_tokens() {
        let before = SessionTokenService::new(&SigningSecret::generate(), Duration::from_secs(60));
        let after = SessionTokenService::new(&SigningSecret::generate(), Duration::from_secs(60));
        let token = before.issue().unwrap();

        assert!(before.verify(&token).is_ok());
        assert!(matches!(after.verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SigningSecret::new("super-secret");
        let rendered = format!("{secret:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
