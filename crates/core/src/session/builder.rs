use cross_intelligence_model::{
    ModelProvider, ToolDefinition, TranscriptEntry,
};

use crate::model_client::ModelClient;
use crate::tool::{DynamicTool, Registry, Tool};
use crate::transcript::Transcript;

use super::Session;

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    instructions: Option<String>,
    tools: Registry,
    max_tool_rounds: Option<u32>,
}

impl SessionBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the developer instructions for the session.
    ///
    /// Non-empty instructions become the first transcript entry, ahead
    /// of any user input. Empty instructions are ignored.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        if !instructions.is_empty() {
            self.instructions = Some(instructions);
        }
        self
    }

    /// Registers a statically-typed tool.
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.tools.add(tool);
        self
    }

    /// Registers a runtime-assembled tool.
    pub fn with_dynamic_tool(mut self, tool: DynamicTool) -> Self {
        self.tools.add_dynamic(tool);
        self
    }

    /// Caps how many tool rounds a single turn may take.
    ///
    /// When unset, a turn keeps resolving tool calls for as long as the
    /// backend requests them.
    #[inline]
    pub fn with_max_tool_rounds(mut self, limit: u32) -> Self {
        self.max_tool_rounds = Some(limit);
        self
    }

    /// Returns the wire definitions of the registered tools.
    ///
    /// Backends that bind per-tool resources ahead of time, such as the
    /// on-device engine, need these before the session exists.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.definitions()
    }

    /// Builds the session against the given provider.
    pub fn build<P: ModelProvider + 'static>(self, provider: P) -> Session {
        self.build_with_client(ModelClient::new(provider))
    }

    /// Builds the session against an already-erased client.
    pub fn build_with_client(self, client: ModelClient) -> Session {
        let mut transcript = Transcript::default();
        if let Some(instructions) = self.instructions {
            transcript.append(TranscriptEntry::Developer(instructions));
        }
        let tool_definitions = self.tools.definitions();
        Session {
            client,
            transcript,
            tools: self.tools,
            tool_definitions,
            max_tool_rounds: self.max_tool_rounds,
        }
    }
}
