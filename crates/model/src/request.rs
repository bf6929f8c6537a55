use serde_json::Value;

use crate::response::ToolCallRequest;

/// A request to be sent to the model provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelRequest {
    /// The full ordered conversation history.
    pub entries: Vec<TranscriptEntry>,
    /// Tools that are available to the model.
    pub tools: Vec<ToolDefinition>,
    /// An optional constraint forcing the final answer to conform to a
    /// JSON schema.
    pub response_format: Option<ResponseFormat>,
}

/// A single entry in a conversation transcript.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TranscriptEntry {
    /// The developer instructions, inserted once at session creation.
    Developer(String),
    /// A user input text.
    User(String),
    /// One assistant text segment. May be empty when the turn is pure
    /// tool-calling.
    Assistant(String),
    /// A tool call requested by the model.
    ToolCall(ToolCallRequest),
    /// The result of a tool call.
    ToolResult(ToolCallResult),
}

/// The result of calling a tool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolCallResult {
    /// The identifier of the tool call request this result resolves.
    pub call_id: String,
    /// The textual output of the tool.
    pub output: String,
}

/// Describes a tool that can be used by the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolDefinition {
    /// Name of the tool. Unique within a session.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool.
    ///
    /// For most model providers, the parameters should typically be
    /// defined by a [JSON schema](https://json-schema.org/).
    pub parameters: Value,
}

/// A structured-output constraint attached to a request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResponseFormat {
    /// A name for the target shape, usually the type name.
    pub name: String,
    /// The JSON schema the final answer must conform to.
    pub schema: Value,
}
