use cross_intelligence_model::{ToolCallRequest, ToolDefinition};
use serde_json::Value;
use tracing::Instrument;

use crate::tool::{AnyTool, DynamicTool, Tool, ToolObject};

/// The session's toolset, looked up by exact name match and invoked
/// sequentially by the conversation loop.
#[derive(Default)]
pub struct Registry {
    tools: Vec<Box<dyn ToolObject>>,
}

impl Registry {
    pub fn add<T: Tool>(&mut self, tool: T) {
        self.tools.push(Box::new(AnyTool(tool)));
    }

    pub fn add_dynamic(&mut self, tool: DynamicTool) {
        self.tools.push(Box::new(tool));
    }

    /// Returns the wire definitions of all registered tools, in
    /// registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: tool.parameter_schema().clone(),
            })
            .collect()
    }

    /// Resolves and runs one tool call, always producing a textual
    /// result.
    ///
    /// Unknown tool names and execution failures are converted to text
    /// the model can observe on its next turn; they are never errors
    /// for the session caller.
    pub async fn invoke(&self, req: &ToolCallRequest) -> String {
        let Some(tool) =
            self.tools.iter().find(|tool| tool.name() == req.name)
        else {
            warn!("tool not found: {}", req.name);
            return format!("Function '{}' not found.", req.name);
        };

        let arguments = if req.arguments.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            match serde_json::from_str(&req.arguments) {
                Ok(arguments) => arguments,
                Err(err) => {
                    warn!("malformed arguments for tool {}: {err}", req.name);
                    return format!("Error: {err}");
                }
            }
        };

        trace!("invoking tool ({}) with args: {arguments:?}", req.call_id);
        let result = tool
            .execute(arguments)
            .instrument(debug_span!("tool execute", tool = %req.name))
            .await;
        match result {
            Ok(output) => output,
            Err(err) => format!("Error: {}", err.reason()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::tool::{Error, ToolResult};

    #[derive(Deserialize)]
    struct GreetInput {
        name: String,
    }

    struct GreetTool {
        schema: Value,
    }

    impl GreetTool {
        fn new() -> Self {
            Self {
                schema: json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" }
                    },
                    "required": ["name"]
                }),
            }
        }
    }

    impl Tool for GreetTool {
        type Input = GreetInput;

        fn name(&self) -> &str {
            "greet"
        }

        fn description(&self) -> &str {
            "Greets a person by name."
        }

        fn parameter_schema(&self) -> &Value {
            &self.schema
        }

        fn execute(
            &self,
            input: Self::Input,
        ) -> impl Future<Output = ToolResult> + Send + 'static {
            ready(Ok(format!("Hello, {}!", input.name)))
        }
    }

    fn call(name: &str, arguments: &str) -> ToolCallRequest {
        ToolCallRequest {
            call_id: "call:1".to_owned(),
            name: name.to_owned(),
            arguments: arguments.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_invoke() {
        let mut registry = Registry::default();
        registry.add(GreetTool::new());

        let result = registry.invoke(&call("greet", r#"{"name":"Bob"}"#)).await;
        assert_eq!(result, "Hello, Bob!");
    }

    #[tokio::test]
    async fn test_unknown_tool_yields_text() {
        let registry = Registry::default();
        let result = registry.invoke(&call("doesNotExist", "{}")).await;
        assert_eq!(result, "Function 'doesNotExist' not found.");
    }

    #[tokio::test]
    async fn test_invalid_input_yields_error_text() {
        let mut registry = Registry::default();
        registry.add(GreetTool::new());

        // Parseable JSON that doesn't match the input shape.
        let result = registry.invoke(&call("greet", r#"{"age":3}"#)).await;
        assert!(result.starts_with("Error: "), "got: {result}");

        // Unparseable JSON.
        let result = registry.invoke(&call("greet", "not json")).await;
        assert!(result.starts_with("Error: "), "got: {result}");
    }

    #[tokio::test]
    async fn test_empty_arguments_treated_as_empty_object() {
        let mut registry = Registry::default();
        registry.add_dynamic(DynamicTool::new(
            "ping",
            "Answers pong.",
            r#"{"type":"object","properties":{}}"#,
            |arguments| {
                ready(if arguments == json!({}) {
                    Ok("pong".to_owned())
                } else {
                    Err(Error::invalid_input())
                })
            },
        ));

        let result = registry.invoke(&call("ping", "")).await;
        assert_eq!(result, "pong");
    }

    #[tokio::test]
    async fn test_executor_failure_yields_error_text() {
        let mut registry = Registry::default();
        registry.add_dynamic(DynamicTool::new(
            "flaky",
            "Always fails.",
            r#"{"type":"object","properties":{}}"#,
            |_| {
                ready(ToolResult::Err(
                    Error::execution_error().with_reason("boom"),
                ))
            },
        ));

        let result = registry.invoke(&call("flaky", "{}")).await;
        assert_eq!(result, "Error: boom");
    }

    #[test]
    fn test_definitions_in_registration_order() {
        let mut registry = Registry::default();
        registry.add(GreetTool::new());
        registry.add_dynamic(DynamicTool::new(
            "ping",
            "Answers pong.",
            r#"{"type":"object","properties":{}}"#,
            |_| ready(Ok("pong".to_owned())),
        ));

        let definitions = registry.definitions();
        let names: Vec<_> =
            definitions.iter().map(|def| def.name.as_str()).collect();
        assert_eq!(names, ["greet", "ping"]);
        assert_eq!(definitions[0].parameters["type"], "object");
    }
}
