//! Reqwest-backed gateway transport.
//!
//! [`GatewayTransport`] implements [`Transport`] by POSTing JSON bodies to
//! the merchant's gateway, attaching the session's authorization as a
//! bearer header on every request.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use url::Url;

use crate::transport::{BoxFuture, Transport, TransportError};

/// Configuration for [`GatewayTransport`].
pub struct GatewayConfig {
    /// Gateway base URL (e.g. `https://gateway.example.com/merchants/abc/client_api/`).
    pub url: String,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Opaque authorization token sent as a bearer `Authorization` header.
    /// Token contents are never inspected here.
    pub authorization: Option<String>,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl GatewayConfig {
    /// Creates a config for the given gateway base URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            authorization: None,
            http_client: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the authorization token.
    #[must_use]
    pub fn with_authorization(mut self, token: impl Into<String>) -> Self {
        self.authorization = Some(token.into());
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("has_authorization", &self.authorization.is_some())
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

/// Async HTTP transport for the merchant gateway.
pub struct GatewayTransport {
    base_url: Url,
    authorization: Option<String>,
    client: reqwest::Client,
}

impl GatewayTransport {
    /// Creates a transport from the given configuration.
    ///
    /// The base URL is normalized to end with a single `/` so relative
    /// endpoint paths join below it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn try_new(config: GatewayConfig) -> Result<Self, TransportError> {
        let mut normalized = config.url.trim_end_matches('/').to_owned();
        normalized.push('/');
        let base_url = Url::parse(&normalized).map_err(|e| TransportError::UrlParse {
            context: "parsing gateway base url",
            source: e,
        })?;

        let client = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .map_err(|e| TransportError::Http {
                    context: "building http client",
                    source: e,
                })?,
        };

        Ok(Self {
            base_url,
            authorization: config.authorization,
            client,
        })
    }

    /// Returns the normalized gateway base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for GatewayTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayTransport")
            .field("base_url", &self.base_url.as_str())
            .field("has_authorization", &self.authorization.is_some())
            .finish_non_exhaustive()
    }
}

/// Converts a string URL into a transport with default settings.
impl TryFrom<&str> for GatewayTransport {
    type Error = TransportError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(GatewayConfig::new(value))
    }
}

impl Transport for GatewayTransport {
    fn post<'a>(
        &'a self,
        path: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(async move {
            let url = self
                .base_url
                .join(path)
                .map_err(|e| TransportError::UrlParse {
                    context: "joining endpoint path",
                    source: e,
                })?;

            let mut request = self
                .client
                .post(url)
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body.to_owned());
            if let Some(token) = &self.authorization {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(|e| TransportError::Http {
                context: "lookup request",
                source: e,
            })?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::ResponseBodyRead {
                    context: "lookup response",
                    source: e,
                })?;

            if status.is_success() {
                Ok(text)
            } else {
                Err(TransportError::HttpStatus {
                    context: "lookup request",
                    status,
                    body: text,
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_body_verbatim_with_json_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payment_methods/a-nonce/three_d_secure/lookup"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"{"amount":"1.00"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok-body"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = GatewayTransport::try_from(server.uri().as_str()).unwrap();
        let body = transport
            .post(
                "payment_methods/a-nonce/three_d_secure/lookup",
                r#"{"amount":"1.00"}"#,
            )
            .await
            .unwrap();

        assert_eq!(body, "ok-body");
    }

    #[tokio::test]
    async fn sends_authorization_as_bearer_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("authorization", "Bearer client-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = GatewayTransport::try_new(
            GatewayConfig::new(server.uri()).with_authorization("client-token"),
        )
        .unwrap();

        transport.post("endpoint", "{}").await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_carries_body_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("rejected"))
            .mount(&server)
            .await;

        let transport = GatewayTransport::try_from(server.uri().as_str()).unwrap();
        let error = transport.post("endpoint", "{}").await.unwrap_err();

        match error {
            TransportError::HttpStatus { status, body, .. } => {
                assert_eq!(status.as_u16(), 422);
                assert_eq!(body, "rejected");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn base_url_gains_single_trailing_slash() {
        let transport = GatewayTransport::try_from("https://gateway.example.com/client_api//")
            .unwrap();
        assert_eq!(
            transport.base_url().as_str(),
            "https://gateway.example.com/client_api/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let error = GatewayTransport::try_from("not a url").unwrap_err();
        assert!(matches!(error, TransportError::UrlParse { .. }));
    }
}
