use cross_intelligence_model::{
    ModelRequest, ModelResponse, ResponseItem, ToolCallRequest,
    ToolDefinition, TranscriptEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ResponsesConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ResponsesResponse {
    pub output: Vec<OutputItem>,
}

/// A loosely-typed output item; the fields present depend on `type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct OutputItem {
    pub r#type: String,
    pub content: Option<Vec<OutputContent>>,
    pub call_id: Option<String>,
    pub name: Option<String>,
    pub arguments: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct OutputContent {
    pub r#type: String,
    pub text: Option<String>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ContentPart {
    r#type: &'static str,
    text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputItem {
    Message {
        role: &'static str,
        content: Vec<ContentPart>,
    },
    FunctionCall {
        call_id: String,
        name: String,
        arguments: String,
    },
    FunctionCallOutput {
        call_id: String,
        output: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct Tool {
    r#type: &'static str,
    name: String,
    description: String,
    strict: bool,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct TextFormat {
    r#type: &'static str,
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct TextOptions {
    format: TextFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ResponsesRequest {
    model: String,
    input: Vec<InputItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<TextOptions>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &ResponsesConfig,
) -> ResponsesRequest {
    ResponsesRequest {
        model: config.model.clone(),
        input: req.entries.iter().map(create_input_item).collect(),
        tools: req.tools.iter().map(create_tool).collect(),
        text: req.response_format.as_ref().map(|format| TextOptions {
            format: TextFormat {
                r#type: "json_schema",
                name: format.name.clone(),
                strict: true,
                schema: format.schema.clone(),
            },
        }),
    }
}

#[inline]
fn create_input_item(entry: &TranscriptEntry) -> InputItem {
    fn message(role: &'static str, part: &'static str, text: &str) -> InputItem {
        InputItem::Message {
            role,
            content: vec![ContentPart {
                r#type: part,
                text: text.to_owned(),
            }],
        }
    }

    match entry {
        TranscriptEntry::Developer(text) => {
            message("developer", "input_text", text)
        }
        TranscriptEntry::User(text) => message("user", "input_text", text),
        TranscriptEntry::Assistant(text) => {
            message("assistant", "output_text", text)
        }
        TranscriptEntry::ToolCall(call) => InputItem::FunctionCall {
            call_id: call.call_id.clone(),
            name: call.name.clone(),
            arguments: call.arguments.clone(),
        },
        TranscriptEntry::ToolResult(result) => InputItem::FunctionCallOutput {
            call_id: result.call_id.clone(),
            output: result.output.clone(),
        },
    }
}

#[inline]
fn create_tool(tool: &ToolDefinition) -> Tool {
    Tool {
        r#type: "function",
        name: tool.name.clone(),
        description: tool.description.clone(),
        strict: true,
        parameters: tool.parameters.clone(),
    }
}

/// Flattens the server's output items into the provider-neutral
/// response shape. Unknown item types are skipped.
pub fn parse_response(resp: ResponsesResponse) -> ModelResponse {
    let mut items = Vec::new();
    for item in resp.output {
        match item.r#type.as_str() {
            "message" => {
                for part in item.content.unwrap_or_default() {
                    if part.r#type == "output_text"
                        && let Some(text) = part.text
                    {
                        items.push(ResponseItem::Text(text));
                    }
                }
            }
            "function_call" => {
                let (Some(call_id), Some(name)) = (item.call_id, item.name)
                else {
                    warn!("skipping function_call item with missing fields");
                    continue;
                };
                items.push(ResponseItem::ToolCall(ToolCallRequest {
                    call_id,
                    name,
                    arguments: item.arguments.unwrap_or_default(),
                }));
            }
            other => {
                trace!("ignoring output item of type `{other}`");
            }
        }
    }
    ModelResponse { items }
}

#[cfg(test)]
mod tests {
    use cross_intelligence_model::{ResponseFormat, ToolCallResult};
    use serde_json::json;

    use super::*;
    use crate::ResponsesConfigBuilder;

    #[test]
    fn test_create_request() {
        let request = ModelRequest {
            entries: vec![
                TranscriptEntry::Developer(
                    "You are a helpful assistant.".to_owned(),
                ),
                TranscriptEntry::User("What's in todo.txt?".to_owned()),
                TranscriptEntry::ToolCall(ToolCallRequest {
                    call_id: "call:1".to_owned(),
                    name: "read_file".to_owned(),
                    arguments: r#"{"filename":"todo.txt"}"#.to_owned(),
                }),
                TranscriptEntry::ToolResult(ToolCallResult {
                    call_id: "call:1".to_owned(),
                    output: "buy milk".to_owned(),
                }),
            ],
            tools: vec![ToolDefinition {
                name: "read_file".to_owned(),
                description: "Reads a file.".to_owned(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "filename": { "type": "string" }
                    },
                    "required": ["filename"],
                    "additionalProperties": false
                }),
            }],
            response_format: None,
        };
        let config = ResponsesConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .build();

        let wire = create_request(&request, &config);
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["model"], "custom");
        assert_eq!(value["input"][0]["type"], "message");
        assert_eq!(value["input"][0]["role"], "developer");
        assert_eq!(value["input"][1]["content"][0]["type"], "input_text");
        assert_eq!(value["input"][2]["type"], "function_call");
        assert_eq!(value["input"][2]["call_id"], "call:1");
        assert_eq!(value["input"][3]["type"], "function_call_output");
        assert_eq!(value["input"][3]["output"], "buy milk");
        assert_eq!(value["tools"][0]["type"], "function");
        assert_eq!(value["tools"][0]["strict"], true);
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_create_request_with_response_format() {
        let request = ModelRequest {
            entries: vec![TranscriptEntry::User("Make an NPC".to_owned())],
            tools: vec![],
            response_format: Some(ResponseFormat {
                name: "NonPlayerCharacter".to_owned(),
                schema: json!({ "type": "object" }),
            }),
        };
        let config = ResponsesConfigBuilder::with_api_key("xxx").build();

        let value =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(value["text"]["format"]["type"], "json_schema");
        assert_eq!(value["text"]["format"]["name"], "NonPlayerCharacter");
        assert_eq!(value["text"]["format"]["strict"], true);
        // Empty tool lists are elided entirely.
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_parse_response() {
        let raw = json!({
            "output": [
                {
                    "type": "reasoning",
                    "summary": []
                },
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        { "type": "output_text", "text": "Let me check." }
                    ]
                },
                {
                    "type": "function_call",
                    "call_id": "call:1",
                    "name": "read_file",
                    "arguments": "{\"filename\":\"todo.txt\"}"
                }
            ]
        });
        let resp: ResponsesResponse = serde_json::from_value(raw).unwrap();
        let resp = parse_response(resp);
        assert_eq!(
            resp.items,
            [
                ResponseItem::Text("Let me check.".to_owned()),
                ResponseItem::ToolCall(ToolCallRequest {
                    call_id: "call:1".to_owned(),
                    name: "read_file".to_owned(),
                    arguments: "{\"filename\":\"todo.txt\"}".to_owned(),
                }),
            ]
        );
    }
}
