use std::fmt::{self, Display};
use std::str::FromStr;

use crate::setup::SetupError;

/// The token that selects the on-device backend.
pub const ON_DEVICE_TOKEN: &str = "local";

/// A parsed model identifier.
///
/// Textual identifiers take the form `provider:modelName`, with the
/// bare token `local` reserved for the on-device engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// The on-device engine.
    OnDevice,
    /// A remote provider and the model to request from it.
    Remote {
        /// The provider token, e.g. `openai`.
        provider: String,
        /// The provider-specific model name.
        model: String,
    },
}

impl FromStr for ModelId {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ON_DEVICE_TOKEN {
            return Ok(ModelId::OnDevice);
        }
        let (provider, model) = s
            .split_once(':')
            .ok_or_else(|| SetupError::InvalidModelId(s.to_owned()))?;
        if provider.is_empty() || model.is_empty() {
            return Err(SetupError::InvalidModelId(s.to_owned()));
        }
        Ok(ModelId::Remote {
            provider: provider.to_owned(),
            model: model.to_owned(),
        })
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelId::OnDevice => write!(f, "{ON_DEVICE_TOKEN}"),
            ModelId::Remote { provider, model } => {
                write!(f, "{provider}:{model}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("local".parse::<ModelId>().unwrap(), ModelId::OnDevice);
        assert_eq!(
            "openai:gpt-4o".parse::<ModelId>().unwrap(),
            ModelId::Remote {
                provider: "openai".to_owned(),
                model: "gpt-4o".to_owned(),
            }
        );
        // Model names may themselves contain colons.
        assert_eq!(
            "openrouter:openai/o4-mini:free".parse::<ModelId>().unwrap(),
            ModelId::Remote {
                provider: "openrouter".to_owned(),
                model: "openai/o4-mini:free".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["", "openai", ":gpt-4o", "openai:"] {
            assert!(
                matches!(
                    raw.parse::<ModelId>(),
                    Err(SetupError::InvalidModelId(_))
                ),
                "accepted: {raw:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["local", "openai:gpt-4o"] {
            assert_eq!(raw.parse::<ModelId>().unwrap().to_string(), raw);
        }
    }
}
