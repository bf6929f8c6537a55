use serde::{Deserialize, Serialize};

/// Describes a tool call request from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub call_id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments to pass to the tool, as a raw JSON string.
    pub arguments: String,
}

/// One item of a model response, in the order the model produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseItem {
    /// An assistant text segment.
    Text(String),
    /// A tool call request.
    ToolCall(ToolCallRequest),
}

/// A complete response from the model provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The response items, interleaved text and tool calls.
    pub items: Vec<ResponseItem>,
}

impl ModelResponse {
    /// Iterates over the tool call requests in this response, in the
    /// order they appeared.
    #[inline]
    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCallRequest> {
        self.items.iter().filter_map(|item| match item {
            ResponseItem::ToolCall(req) => Some(req),
            ResponseItem::Text(_) => None,
        })
    }

    /// Returns `true` if this response requests no tool calls, which
    /// terminates the conversation loop.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.tool_calls().next().is_none()
    }

    /// Concatenates all non-empty text segments, joined by a blank line,
    /// in their original order.
    pub fn final_text(&self) -> String {
        let segments: Vec<&str> = self
            .items
            .iter()
            .filter_map(|item| match item {
                ResponseItem::Text(text) if !text.is_empty() => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        segments.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_text_joins_segments() {
        let resp = ModelResponse {
            items: vec![
                ResponseItem::Text("First.".to_owned()),
                ResponseItem::Text(String::new()),
                ResponseItem::Text("Second.".to_owned()),
            ],
        };
        assert_eq!(resp.final_text(), "First.\n\nSecond.");
        assert!(resp.is_final());
    }

    #[test]
    fn test_tool_calls_in_order() {
        let resp = ModelResponse {
            items: vec![
                ResponseItem::ToolCall(ToolCallRequest {
                    call_id: "call:1".to_owned(),
                    name: "a".to_owned(),
                    arguments: "{}".to_owned(),
                }),
                ResponseItem::Text("working".to_owned()),
                ResponseItem::ToolCall(ToolCallRequest {
                    call_id: "call:2".to_owned(),
                    name: "b".to_owned(),
                    arguments: "{}".to_owned(),
                }),
            ],
        };
        let names: Vec<_> =
            resp.tool_calls().map(|req| req.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(!resp.is_final());
    }
}
