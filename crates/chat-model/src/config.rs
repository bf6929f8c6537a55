use std::fmt::Debug;

/// Builder for [`ChatConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChatConfigBuilder {
    api_key: String,
    model: Option<String>,
    base_url: Option<String>,
}

impl ChatConfigBuilder {
    /// Creates a builder with the given API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
            base_url: None,
        }
    }

    /// Sets the model to use.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ChatConfig {
        ChatConfig {
            api_key: self.api_key,
            model: self
                .model
                .unwrap_or_else(|| "openai/gpt-4o".to_string()),
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://openrouter.ai/api/v1".to_string()),
        }
    }
}

impl Debug for ChatConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for the message-protocol provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChatConfig {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
}

impl Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
