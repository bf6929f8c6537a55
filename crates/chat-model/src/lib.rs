//! A model provider for message-protocol chat APIs in the OpenRouter
//! style.
//!
//! The wire protocol exchanges role-tagged messages; assistant tool
//! calls ride on the assistant message itself and results come back as
//! `tool` messages. Structured output is requested through a
//! `response_format` JSON schema constraint.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use cross_intelligence_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use mime::Mime;
use reqwest::{Client, StatusCode, header};

pub use config::{ChatConfig, ChatConfigBuilder};

/// Error type for [`ChatProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Message-protocol model provider.
#[derive(Clone, Debug)]
pub struct ChatProvider {
    client: Client,
    config: Arc<ChatConfig>,
}

impl ChatProvider {
    /// Creates a new `ChatProvider` with the given configuration.
    #[inline]
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl ModelProvider for ChatProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let wire_req = proto::create_request(req, &self.config);
        let resp_fut = self
            .client
            .post(format!("{}{}", self.config.base_url, "/chat/completions"))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(&wire_req)
            .send();

        async move {
            let resp = resp_fut
                .await
                .map_err(|err| Error::new(format!("{err}"), ErrorKind::Request))?;

            let status = resp.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::new(
                    "rate limit exceeded",
                    ErrorKind::RateLimitExceeded,
                ));
            }
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(Error::new(
                    format!("request failed with status {status}: {body}"),
                    ErrorKind::Request,
                ));
            }

            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let is_json = content_type
                .as_deref()
                .and_then(|v| v.parse::<Mime>().ok())
                .map(|m| {
                    m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
                })
                .unwrap_or(false);
            if !is_json {
                return Err(Error::new(
                    format!("unexpected content type: {content_type:?}"),
                    ErrorKind::Parse,
                ));
            }

            let body = resp
                .text()
                .await
                .map_err(|err| Error::new(format!("{err}"), ErrorKind::Request))?;
            let parsed: proto::ChatCompletionResponse =
                serde_json::from_str(&body).map_err(|err| {
                    Error::new(
                        format!("malformed response: {err}"),
                        ErrorKind::Parse,
                    )
                })?;

            let Some(model_resp) = proto::parse_response(parsed) else {
                return Err(Error::new(
                    "response contained no usable content",
                    ErrorKind::Parse,
                ));
            };
            trace!("received {} response item(s)", model_resp.items.len());
            Ok(model_resp)
        }
    }
}
