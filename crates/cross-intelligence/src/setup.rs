use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use cross_intelligence_chat_model::{ChatConfigBuilder, ChatProvider};
use cross_intelligence_core::ModelClient;
use cross_intelligence_local_model::{LocalEngine, LocalProvider, ToolSlotPool};
use cross_intelligence_model::ToolDefinition;
use cross_intelligence_responses_model::{
    ResponsesConfigBuilder, ResponsesProvider,
};

use crate::ModelId;
use crate::api_keys;

/// Errors raised while resolving a model identifier into a client.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetupError {
    /// The identifier is not `local` or `provider:modelName`.
    InvalidModelId(String),
    /// The provider token names no known backend.
    UnknownProvider(String),
    /// No API key was found; the payload is the environment variable
    /// that was consulted.
    MissingApiKey(String),
    /// The on-device backend needs an engine; use
    /// [`client_for_engine`](crate::client_for_engine).
    EngineRequired,
}

impl Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidModelId(raw) => {
                write!(
                    f,
                    "invalid model id `{raw}`, expected `provider:modelName`"
                )
            }
            SetupError::UnknownProvider(provider) => {
                write!(f, "unknown provider `{provider}`")
            }
            SetupError::MissingApiKey(key_name) => {
                write!(f, "no API key set ({key_name})")
            }
            SetupError::EngineRequired => {
                write!(f, "the on-device backend requires an engine")
            }
        }
    }
}

impl StdError for SetupError {}

/// Resolves a remote model identifier into a ready-to-use client.
///
/// The API key comes from [`api_keys`]. On-device identifiers cannot
/// be resolved here because an engine must be supplied; use
/// [`client_for_engine`] for those.
pub fn client_for(id: &ModelId) -> Result<ModelClient, SetupError> {
    let ModelId::Remote { provider, model } = id else {
        return Err(SetupError::EngineRequired);
    };
    let api_key = api_keys::get(provider).ok_or_else(|| {
        // The prefix is non-empty here, so a key name always derives.
        SetupError::MissingApiKey(
            api_keys::key_name(provider).unwrap_or_default(),
        )
    })?;
    match provider.as_str() {
        "openai" => {
            debug!("using the item-protocol backend for {id}");
            let config = ResponsesConfigBuilder::with_api_key(api_key)
                .with_model(model)
                .build();
            Ok(ModelClient::new(ResponsesProvider::new(config)))
        }
        "openrouter" => {
            debug!("using the message-protocol backend for {id}");
            let config = ChatConfigBuilder::with_api_key(api_key)
                .with_model(model)
                .build();
            Ok(ModelClient::new(ChatProvider::new(config)))
        }
        other => Err(SetupError::UnknownProvider(other.to_owned())),
    }
}

/// Builds a client over an on-device engine.
///
/// One tool slot is bound per definition, for the lifetime of the
/// returned client; definitions that could not get a slot are not
/// visible to the engine.
pub fn client_for_engine(
    engine: Arc<dyn LocalEngine>,
    pool: &ToolSlotPool,
    tools: &[ToolDefinition],
) -> ModelClient {
    ModelClient::new(LocalProvider::new(engine, pool, tools))
}
