use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use cross_intelligence_model::ModelProviderError;

/// The error type for session operations.
///
/// Only fatal errors surface here; tool execution failures and unknown
/// tool names are recovered inside the conversation loop and fed back
/// to the model as textual results.
#[derive(Debug)]
pub enum Error {
    /// The backend failed to deliver or interpret a request. The
    /// transcript is left in its last consistent state.
    Backend(
        /// The underlying provider error.
        Box<dyn ModelProviderError>,
    ),
    /// A JSON schema could not be derived for the requested output
    /// type. Raised before any backend call is made.
    SchemaGeneration {
        /// The offending type.
        type_name: &'static str,
    },
    /// The final response text did not conform to the requested output
    /// type.
    ResponseDeserialization {
        /// The requested type.
        type_name: &'static str,
        /// The raw text that failed to parse.
        raw: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
    /// The configured tool round bound was exceeded before the model
    /// produced a final answer.
    ToolRoundLimit {
        /// The configured bound.
        limit: u32,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Backend(err) => {
                write!(f, "backend request failed: {err}")
            }
            Error::SchemaGeneration { type_name } => {
                write!(f, "failed to generate a JSON schema for `{type_name}`")
            }
            Error::ResponseDeserialization {
                type_name,
                raw,
                source,
            } => {
                write!(
                    f,
                    "failed to deserialize the response as `{type_name}`: \
                     {source} (raw response: {raw})"
                )
            }
            Error::ToolRoundLimit { limit } => {
                write!(f, "exceeded the configured bound of {limit} tool rounds")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Backend(err) => {
                Some(err.as_ref() as &(dyn StdError + 'static))
            }
            Error::ResponseDeserialization { source, .. } => Some(source),
            _ => None,
        }
    }
}
