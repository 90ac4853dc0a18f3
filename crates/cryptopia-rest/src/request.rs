//! Request construction and dispatch
//!
//! One core for both endpoint classes: public unauthenticated GETs with
//! query-string parameters, and private JSON POSTs carrying the `amx`
//! authorization header. Precondition failures (missing credentials,
//! unserializable parameters) surface before any network activity.

use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::auth::{Credentials, RequestSigner};
use crate::error::{RestError, RestResult};
use crate::params::RequestParams;
use crate::response::{self, ResponseMode};

/// Path prefix for unauthenticated endpoints
const PUBLIC_API_PATH: &str = "api";
/// Path prefix for signed endpoints
const PRIVATE_API_PATH: &str = "api";

/// Shared request state: HTTP client, server URL, optional credentials.
#[derive(Debug, Clone)]
pub(crate) struct RequestCore {
    pub(crate) http: reqwest::Client,
    /// `https://{hostname}`, no trailing slash
    pub(crate) server: String,
    pub(crate) credentials: Option<Credentials>,
}

impl RequestCore {
    pub(crate) fn public_url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.server, PUBLIC_API_PATH, method)
    }

    pub(crate) fn private_url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.server, PRIVATE_API_PATH, method)
    }

    /// Issue an unauthenticated GET with query-string-encoded parameters.
    pub(crate) async fn get_public(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> RestResult<Value> {
        let url = self.public_url(method);
        let request_desc = format!(
            "GET request to url {} with parameters {}",
            url,
            query_desc(query)
        );

        debug!(%url, "dispatching public request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| RestError::Transport {
                request: request_desc.clone(),
                source,
            })?;

        response::normalize(response, &request_desc, ResponseMode::JsonObject).await
    }

    /// Sign and issue a private POST carrying the serialized parameters as a
    /// JSON body.
    pub(crate) async fn post_private(
        &self,
        method: &str,
        params: &RequestParams,
    ) -> RestResult<Value> {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;

        let url = self.private_url(method);
        let body = params.to_json()?;
        let envelope = RequestSigner::new(credentials, &url).sign(&body);

        let request_desc = format!(
            "POST request to url {} with method {} and params {}",
            url, method, body
        );

        debug!(%url, nonce = envelope.nonce, "dispatching private request");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, &envelope.authorization)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(|source| RestError::Transport {
                request: request_desc.clone(),
                source,
            })?;

        response::normalize(response, &request_desc, ResponseMode::Json).await
    }
}

fn query_desc(query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return "{}".to_string();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> RequestCore {
        RequestCore {
            http: reqwest::Client::new(),
            server: "https://www.cryptopia.co.nz".to_string(),
            credentials: None,
        }
    }

    #[test]
    fn test_url_assembly() {
        let core = core();
        assert_eq!(
            core.public_url("GetMarket/BTC_USDT"),
            "https://www.cryptopia.co.nz/api/GetMarket/BTC_USDT"
        );
        assert_eq!(
            core.private_url("GetBalance"),
            "https://www.cryptopia.co.nz/api/GetBalance"
        );
    }

    #[test]
    fn test_query_desc() {
        assert_eq!(query_desc(&[]), "{}");
        assert_eq!(
            query_desc(&[("currencyPair", "BTC_USDT".to_string()), ("limit", "1000".to_string())]),
            "currencyPair=BTC_USDT&limit=1000"
        );
    }

    #[tokio::test]
    async fn test_private_without_credentials_fails_before_network() {
        // The hostname is unresolvable; reaching the transport would fail
        // with a different error than AuthRequired.
        let core = RequestCore {
            http: reqwest::Client::new(),
            server: "https://host.invalid".to_string(),
            credentials: None,
        };

        let err = core
            .post_private("GetBalance", &RequestParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::AuthRequired));
    }
}
