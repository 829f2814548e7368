//! Pre-configured HTTP client for the GoRest API.
//!
//! This is the request builder every scenario shares: base URL, bearer auth
//! and JSON content type are fixed at construction, and each verb method
//! returns the raw status plus parsed body. Status codes are data here, not
//! errors. The delete scenario asserts a 404 on the follow-up read, so
//! mapping non-2xx responses to `Err` would lose the behavior under test.
//! There is no retry logic; a transient failure fails the scenario.

use crate::config::Config;
use crate::error::{ApiError, ApiResult, ConfigError, ConfigResult};
use crate::graphql::GraphQlRequest;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// GoRest API client
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The bearer header is fixed for the lifetime of the client. Fails with
    /// [`ConfigError::Missing`] when no token is configured.
    pub fn new(config: &Config) -> ConfigResult<Self> {
        let token = config.token.as_ref().ok_or_else(|| ConfigError::Missing {
            field: "token (set the GOREST_API_TOKEN environment variable)".to_string(),
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose())).map_err(
            |_| ConfigError::Invalid {
                message: "token contains characters not valid in a header".to_string(),
            },
        )?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .user_agent(format!("gorest-e2e/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an API endpoint
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(self.http.get(self.url(path))).await
    }

    /// Make a POST request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// Make a PUT request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// Make a PATCH request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<ApiResponse> {
        self.send(self.http.patch(self.url(path)).json(body)).await
    }

    /// Make a DELETE request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(self.http.delete(self.url(path))).await
    }

    /// POST a GraphQL document to `/graphql`.
    pub async fn graphql(&self, request: &GraphQlRequest) -> ApiResult<ApiResponse> {
        self.post("/graphql", request).await
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<ApiResponse> {
        let response = request.send().await?;
        ApiResponse::read(response).await
    }
}

/// Raw outcome of one API call: status code plus parsed JSON body.
///
/// An empty body (204 on delete) parses as JSON null.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    async fn read(response: Response) -> ApiResult<Self> {
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
                status: status.as_u16(),
                source,
            })?
        };

        debug!(status = status.as_u16(), "api response");
        Ok(Self { status, body })
    }

    /// Field lookup by JSON pointer, e.g. `/data/user/name`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.body.pointer(pointer)
    }

    /// String field at a JSON pointer.
    pub fn str_at(&self, pointer: &str) -> Option<&str> {
        self.body.pointer(pointer)?.as_str()
    }

    /// Id at a JSON pointer, canonicalized to a string.
    ///
    /// REST returns ids as JSON numbers while GraphQL may return them as
    /// strings; chained scenarios compare ids across the two.
    pub fn id_at(&self, pointer: &str) -> Option<String> {
        match self.body.pointer(pointer)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}
