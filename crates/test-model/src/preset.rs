use cross_intelligence_model::ToolCallRequest;
use serde::{Deserialize, Serialize};

/// The items in a preset response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetItem {
    /// An assistant text segment.
    #[serde(rename = "text")]
    Text(String),
    /// A tool call request.
    #[serde(rename = "tool_call")]
    ToolCall(ToolCallRequest),
}

/// The preset response for one round of the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetResponse {
    /// Items in this response.
    pub items: Vec<PresetItem>,
    /// If set, the round will fail in the first `failures` attempts.
    /// `Some(0)` means the round will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetResponse {
    /// Creates a `PresetResponse` with the specified items.
    #[inline]
    pub fn with_items(items: impl Into<Vec<PresetItem>>) -> Self {
        Self {
            items: items.into(),
            failures: None,
        }
    }

    /// Creates a `PresetResponse` with a single text item.
    #[inline]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_items([PresetItem::Text(text.into())])
    }

    /// Sets failure times before a successful response. `0` means the
    /// response will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let response = PresetResponse::with_items([
            PresetItem::Text("I have left a message for you.".to_string()),
            PresetItem::ToolCall(ToolCallRequest {
                call_id: "1".to_string(),
                name: "write_file".to_string(),
                arguments: r#"{"filename":"message.txt"}"#.to_string(),
            }),
        ]);

        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: PresetResponse =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(response, deserialized);
    }
}
