//! Error types for REST API operations

use cryptopia_types::error_codes;

/// Errors that can occur during REST API operations
///
/// Every network-path variant carries a description of the request that
/// produced it, so callers can tell which operation failed without tracking
/// it themselves.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport-level failure (connection, timeout, DNS)
    #[error("transport failure during {request}: {source}")]
    Transport {
        /// Description of the request that failed
        request: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// HTTP status outside [200, 300)
    #[error("HTTP status code {status} returned from {request}")]
    Status {
        /// Numeric HTTP status
        status: u16,
        /// Description of the request that failed
        request: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("could not parse response from {request}: {detail}")]
    Parse {
        /// Description of the request that failed
        request: String,
        /// What was wrong with the body
        detail: String,
    },

    /// Well-formed response carrying an exchange error code
    #[error("{request} returned error code {code}, message: '{message}'")]
    Api {
        /// Numeric exchange error code
        code: i64,
        /// Message resolved from the error-code table
        message: String,
        /// Description of the request that failed
        request: String,
    },

    /// Missing API credentials for a private endpoint
    #[error("api_key and secret must be configured to make this API request")]
    AuthRequired,

    /// Invalid API credentials
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Invalid request parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Environment variable not set
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl RestError {
    /// Exchange-reported error code, when the failure was an application error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status, when the failure was a protocol error
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the exchange is throttling the caller
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Api { code, .. } => error_codes::is_rate_limit(*code),
            Self::Status { status, .. } => *status == 503,
            _ => false,
        }
    }

    /// Check if the failure was an authentication problem, local or remote
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Api { code, .. } => error_codes::is_auth_failure(*code),
            Self::AuthRequired | Self::InvalidCredentials(_) => true,
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_names_request() {
        let err = RestError::Api {
            code: 10010,
            message: "Insufficient balance".to_string(),
            request: "POST request to url https://www.cryptopia.co.nz/api/trade".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("10010"));
        assert!(text.contains("Insufficient balance"));
        assert!(text.contains("api/trade"));
    }

    #[test]
    fn test_code_accessors() {
        let api = RestError::Api {
            code: 10001,
            message: String::new(),
            request: String::new(),
        };
        assert_eq!(api.error_code(), Some(10001));
        assert_eq!(api.http_status(), None);
        assert!(api.is_rate_limited());

        let status = RestError::Status {
            status: 503,
            request: String::new(),
        };
        assert_eq!(status.http_status(), Some(503));
        assert!(status.is_rate_limited());
        assert!(!status.is_auth_failure());
    }

    #[test]
    fn test_auth_classification() {
        assert!(RestError::AuthRequired.is_auth_failure());
        let sig_mismatch = RestError::Api {
            code: 10007,
            message: "Signatures do not match".to_string(),
            request: String::new(),
        };
        assert!(sig_mismatch.is_auth_failure());
        assert!(!sig_mismatch.is_rate_limited());
    }
}
