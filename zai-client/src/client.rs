//! Z.ai API client struct and builder.

use std::time::Duration;

use reqwest::Response;
use zai_types::{ChatCompletion, ChatError, CompletionRequest, DeltaSink};

use crate::streaming;

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.z.ai/api/paas/v4";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Z.ai GLM chat-completions API.
///
/// Connection parameters are fixed at construction and never mutated, so
/// one client can serve any number of concurrent calls. Cloning is cheap;
/// the underlying HTTP client is shared.
///
/// # Example
///
/// ```no_run
/// use zai_client::Zai;
///
/// let client = Zai::new("your-api-key")
///     .base_url("https://api.z.ai/api/paas/v4")
///     .timeout(std::time::Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct Zai {
    /// API key, sent as a bearer token on every request.
    pub(crate) api_key: String,
    /// API base URL (override for testing or proxies).
    pub(crate) base_url: String,
    /// Per-request timeout. Bounds the whole exchange, including the full
    /// duration of a streamed response.
    pub(crate) timeout: Duration,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Zai {
    /// Create a new client with the given API key and default settings.
    ///
    /// Default base URL: `https://api.z.ai/api/paas/v4`.
    /// Default timeout: 30 seconds.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server or an API proxy.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the request timeout.
    ///
    /// The timeout covers the entire exchange; for a streaming call that
    /// includes the time spent reading the stream.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the chat completions endpoint URL.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send a chat-completion request and return the full response.
    ///
    /// The request's `stream` flag is forced to `false`, whatever the
    /// caller set. Either a complete [`ChatCompletion`] is returned or the
    /// call fails with one terminal [`ChatError`]; there are no partial
    /// results.
    pub async fn chat(&self, mut request: CompletionRequest) -> Result<ChatCompletion, ChatError> {
        request.stream = false;

        let response = self.post_completions(&request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(Box::new(e)))?;

        serde_json::from_str(&body).map_err(ChatError::Decode)
    }

    /// Send a chat-completion request and stream text increments to `sink`.
    ///
    /// The request's `stream` flag is forced to `true`. Increments are
    /// delivered in wire order until the `[DONE]` sentinel or the end of
    /// the byte stream; both complete the call successfully. A sink failure
    /// aborts the stream immediately with [`ChatError::Sink`]; increments
    /// already delivered are not retracted.
    pub async fn chat_stream<S: DeltaSink>(
        &self,
        mut request: CompletionRequest,
        sink: &mut S,
    ) -> Result<(), ChatError> {
        request.stream = true;

        let response = self.post_completions(&request).await?;
        streaming::drive(response, sink).await
    }

    /// Serialize and dispatch `request`, returning the response once the
    /// status has been checked.
    ///
    /// On a non-success status the body is read best-effort: a failed read
    /// yields an empty body string rather than masking the status error.
    async fn post_completions(&self, request: &CompletionRequest) -> Result<Response, ChatError> {
        let url = self.completions_url();
        let payload = serde_json::to_vec(request).map_err(ChatError::Serialization)?;

        tracing::debug!(
            url = %url,
            model = %request.model,
            stream = request.stream,
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", self.api_key))
            .body(payload)
            .send()
            .await
            .map_err(|e| ChatError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let client = Zai::new("test-key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_timeout_is_set() {
        let client = Zai::new("test-key");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = Zai::new("test-key").base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn builder_overrides_timeout() {
        let client = Zai::new("test-key").timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn api_key_is_stored() {
        let client = Zai::new("zai-test-key");
        assert_eq!(client.api_key, "zai-test-key");
    }

    #[test]
    fn completions_url_includes_path() {
        let client = Zai::new("test-key").base_url("http://localhost:9999");
        assert_eq!(
            client.completions_url(),
            "http://localhost:9999/chat/completions"
        );
    }
}
