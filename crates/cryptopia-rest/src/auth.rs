//! Authentication credentials and request signing
//!
//! Implements the exchange's `amx` authorization scheme: a base64 MD5 digest
//! of the JSON request body, and an HMAC-SHA256 over the signature base
//! string, carried as `Authorization: amx {key}:{signature}:{nonce}`.
//!
//! # Security
//!
//! The API secret is stored with the `secrecy` crate, which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use md5::Md5;
use secrecy::{ExposeSecret, SecretBox};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RestError, RestResult};

type HmacSha256 = Hmac<Sha256>;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Arguments
    /// * `api_key` - Your Cryptopia API key
    /// * `secret` - Your API secret (base64 encoded string)
    ///
    /// # Returns
    /// Result containing Credentials, or an error if the secret is not valid
    /// base64.
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> RestResult<Self> {
        let api_key = api_key.into();

        let decoded = BASE64.decode(secret.as_ref()).map_err(|e| {
            RestError::InvalidCredentials(format!("secret is not valid base64: {}", e))
        })?;

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(decoded)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CRYPTOPIA_API_KEY` and `CRYPTOPIA_API_SECRET` from the environment.
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var("CRYPTOPIA_API_KEY")
            .map_err(|_| RestError::EnvVarNotSet("CRYPTOPIA_API_KEY".to_string()))?;
        let secret = std::env::var("CRYPTOPIA_API_SECRET")
            .map_err(|_| RestError::EnvVarNotSet("CRYPTOPIA_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a private request
    ///
    /// Signing algorithm:
    /// 1. Content digest = base64(MD5(body))
    /// 2. Base string = api_key + "POST" + lowercase(urlencode(url)) + nonce
    ///    + content digest, concatenated without delimiters
    /// 3. Signature = base64(HMAC-SHA256(secret, base string))
    /// 4. Header value = "amx " + api_key + ":" + signature + ":" + nonce
    ///
    /// The resulting envelope is valid only for the exact `body` bytes the
    /// digest was computed over; a mutated body requires re-signing.
    ///
    /// # Arguments
    /// * `url` - Full request URL (e.g., "https://www.cryptopia.co.nz/api/GetBalance")
    /// * `body` - Serialized JSON request body
    /// * `nonce` - Unix-seconds nonce for this request
    pub fn sign_request(&self, url: &str, body: &str, nonce: u64) -> SignedEnvelope {
        // Step 1: base64(MD5(body))
        let content_digest = BASE64.encode(Md5::digest(body.as_bytes()));

        // Step 2: base string, no delimiters
        let base = format!(
            "{}POST{}{}{}",
            self.api_key,
            encoded_url_lower(url),
            nonce,
            content_digest
        );

        // Step 3: HMAC-SHA256(secret, base string)
        // expose_secret() provides controlled access to the key
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(base.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        // Step 4: composed Authorization header value
        let authorization = format!("amx {}:{}:{}", self.api_key, signature, nonce);

        SignedEnvelope {
            nonce,
            content_digest,
            signature,
            authorization,
        }
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Everything derived from signing one private request.
#[derive(Debug, Clone)]
pub struct SignedEnvelope {
    /// Unix-seconds nonce embedded in the header
    pub nonce: u64,
    /// base64 MD5 digest of the serialized request body
    pub content_digest: String,
    /// base64 HMAC-SHA256 signature
    pub signature: String,
    /// Composed `Authorization` header value
    pub authorization: String,
}

/// Request signer bound to a single request URL and nonce
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    url: String,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer with a fresh wall-clock nonce
    pub fn new(credentials: &'a Credentials, url: impl Into<String>) -> Self {
        Self::with_nonce(credentials, url, unix_nonce())
    }

    /// Create a signer with a caller-chosen nonce, for deterministic
    /// signature verification.
    pub fn with_nonce(credentials: &'a Credentials, url: impl Into<String>, nonce: u64) -> Self {
        Self {
            credentials,
            url: url.into(),
            nonce,
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request body
    pub fn sign(&self, body: &str) -> SignedEnvelope {
        self.credentials.sign_request(&self.url, body, self.nonce)
    }
}

/// Current Unix time in whole seconds, used as the request nonce.
///
/// One-second resolution means two signed requests issued within the same
/// second share a nonce, and the exchange's replay protection rejects the
/// second. The remote verifier is not confirmed to accept a finer resolution,
/// so the granularity is kept as-is.
pub(crate) fn unix_nonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

/// `encodeURIComponent`-style escaping of the request URL followed by ASCII
/// lowercasing, as the exchange's signature verifier expects.
///
/// The escape set differs from `encodeURIComponent` only on `!*'()`, none of
/// which can occur in a URL this client builds.
fn encoded_url_lower(url: &str) -> String {
    urlencoding::encode(url).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_KEY: &str = "8f3a41b2c6d94e0f";
    const SECRET: &str = "Y3J5cHRvcGlhLXRlc3Qtc2VjcmV0LTAxMjM0NTY3ODk=";
    const URL: &str = "https://www.cryptopia.co.nz/api/GetBalance";
    const NONCE: u64 = 1503005742;

    fn credentials() -> Credentials {
        Credentials::new(API_KEY, SECRET).unwrap()
    }

    #[test]
    fn test_invalid_base64_secret_rejected() {
        let result = Credentials::new("key", "not base64!!!");
        assert!(matches!(result, Err(RestError::InvalidCredentials(_))));
    }

    #[test]
    fn test_url_encoding_matches_javascript() {
        assert_eq!(
            encoded_url_lower(URL),
            "https%3a%2f%2fwww.cryptopia.co.nz%2fapi%2fgetbalance"
        );
    }

    #[test]
    fn test_empty_params_vector() {
        let envelope = credentials().sign_request(URL, "{}", NONCE);

        assert_eq!(envelope.content_digest, "mZFLkyvTelC5g8XnyQrpOw==");
        assert_eq!(envelope.signature, "Uea0Afm1r7EajjIhV87PGq6Zn3nbFwVPY0YKixWW0zM=");
        assert_eq!(
            envelope.authorization,
            "amx 8f3a41b2c6d94e0f:Uea0Afm1r7EajjIhV87PGq6Zn3nbFwVPY0YKixWW0zM=:1503005742"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = credentials();
        let body = r#"{"symbol":"btc_usd","type":"buy","amount":"1.5","price":"42000"}"#;

        let first = creds.sign_request(URL, body, NONCE);
        let second = creds.sign_request(URL, body, NONCE);

        assert_eq!(first.signature, second.signature);
        assert_eq!(first.content_digest, second.content_digest);
    }

    #[test]
    fn test_distinct_params_distinct_signature() {
        let creds = credentials();
        let buy = creds.sign_request(
            URL,
            r#"{"symbol":"btc_usd","type":"buy","amount":"1.5","price":"42000"}"#,
            NONCE,
        );
        let sell = creds.sign_request(
            URL,
            r#"{"symbol":"btc_usd","type":"sell","amount":"1.5","price":"42000"}"#,
            NONCE,
        );

        // Fixed vectors rather than a bare inequality check
        assert_eq!(buy.signature, "bsYaABfB9IaIoth7+PJMb+5hCiiPCKT4BHj1xMoZiTA=");
        assert_eq!(sell.signature, "P9BVFgmMusIttcpuPAjduixd/AtPBEfBYAMmkUfJLZo=");
        assert_ne!(buy.content_digest, sell.content_digest);
    }

    #[test]
    fn test_signer_captures_nonce() {
        let creds = credentials();
        let signer = RequestSigner::with_nonce(&creds, URL, NONCE);
        assert_eq!(signer.nonce(), NONCE);
        assert_eq!(signer.api_key(), API_KEY);

        let envelope = signer.sign("{}");
        assert_eq!(envelope.nonce, NONCE);
    }

    #[test]
    fn test_nonce_is_current_unix_seconds() {
        // 2020-01-01T00:00:00Z
        assert!(unix_nonce() > 1_577_836_800);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let debug = format!("{:?}", credentials());
        assert!(!debug.contains("cryptopia-test-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
