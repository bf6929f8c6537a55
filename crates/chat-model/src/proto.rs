use cross_intelligence_model::{
    ModelRequest, ModelResponse, ResponseItem, ToolCallRequest,
    ToolDefinition, TranscriptEntry,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ChatConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<ToolCall>>,
}

// --------------------
// Shared wire elements
// --------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub r#type: String,
    pub function: FunctionCall,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct Tool {
    r#type: &'static str,
    function: FunctionTool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },
    Tool {
        tool_call_id: String,
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct ResponseFormatOptions {
    r#type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatOptions>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &ChatConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: create_messages(&req.entries),
        tools: req.tools.iter().map(create_tool).collect(),
        response_format: req.response_format.as_ref().map(|format| {
            ResponseFormatOptions {
                r#type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: format.name.clone(),
                    strict: true,
                    schema: format.schema.clone(),
                },
            }
        }),
    }
}

/// Lowers transcript entries to chat messages.
///
/// This dialect has no standalone tool call message; a call is folded
/// into the assistant message that precedes it, so an assistant turn
/// that mixes text and calls becomes one message with both fields set.
fn create_messages(entries: &[TranscriptEntry]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            TranscriptEntry::Developer(text) => {
                messages.push(Message::System {
                    content: text.clone(),
                });
            }
            TranscriptEntry::User(text) => {
                messages.push(Message::User {
                    content: text.clone(),
                });
            }
            TranscriptEntry::Assistant(text) => {
                messages.push(Message::Assistant {
                    content: Some(text.clone()),
                    tool_calls: None,
                });
            }
            TranscriptEntry::ToolCall(call) => {
                let wire_call = ToolCall {
                    id: call.call_id.clone(),
                    r#type: "function".to_owned(),
                    function: FunctionCall {
                        name: call.name.clone(),
                        arguments: call.arguments.clone(),
                    },
                };
                match messages.last_mut() {
                    Some(Message::Assistant { tool_calls, .. }) => {
                        tool_calls
                            .get_or_insert_with(Vec::new)
                            .push(wire_call);
                    }
                    _ => messages.push(Message::Assistant {
                        content: None,
                        tool_calls: Some(vec![wire_call]),
                    }),
                }
            }
            TranscriptEntry::ToolResult(result) => {
                messages.push(Message::Tool {
                    tool_call_id: result.call_id.clone(),
                    content: result.output.clone(),
                });
            }
        }
    }
    messages
}

#[inline]
fn create_tool(tool: &ToolDefinition) -> Tool {
    Tool {
        r#type: "function",
        function: FunctionTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
        },
    }
}

/// Flattens the first choice into the provider-neutral response shape.
/// Returns `None` when there are no choices, or when the first choice
/// carries neither text nor tool calls.
pub fn parse_response(resp: ChatCompletionResponse) -> Option<ModelResponse> {
    let choice = resp.choices.into_iter().next()?;
    let mut items = Vec::new();
    if let Some(content) = choice.message.content
        && !content.is_empty()
    {
        items.push(ResponseItem::Text(content));
    }
    for call in choice.message.tool_calls.unwrap_or_default() {
        items.push(ResponseItem::ToolCall(ToolCallRequest {
            call_id: call.id,
            name: call.function.name,
            arguments: call.function.arguments,
        }));
    }
    if items.is_empty() {
        return None;
    }
    Some(ModelResponse { items })
}
