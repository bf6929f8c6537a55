use std::pin::Pin;

use serde_json::{Value, json};

use super::{ToolObject, ToolResult};

type DynamicExecutor = Box<
    dyn Fn(Value) -> Pin<Box<dyn Future<Output = ToolResult> + Send>>
        + Send
        + Sync,
>;

/// A tool assembled at runtime from its parts, without a dedicated
/// input type.
///
/// This is the single capability record the backends see: a name, a
/// description, an arguments schema, and an async executor. Use it when
/// the tool's argument shape is only known at runtime; otherwise prefer
/// implementing [`Tool`](super::Tool).
///
/// The arguments schema is supplied as a raw JSON string. If it fails
/// to parse, a permissive default schema is substituted so that one
/// malformed tool does not break the whole session.
pub struct DynamicTool {
    name: String,
    description: String,
    parameter_schema: Value,
    executor: DynamicExecutor,
}

impl DynamicTool {
    /// Creates a dynamic tool.
    ///
    /// The executor receives the parsed arguments value and resolves
    /// with the tool output.
    pub fn new<N, D, F, Fut>(
        name: N,
        description: D,
        raw_schema: &str,
        executor: F,
    ) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult> + Send + 'static,
    {
        let name = name.into();
        let parameter_schema = match serde_json::from_str(raw_schema) {
            Ok(schema) => schema,
            Err(err) => {
                warn!("invalid arguments schema for tool `{name}`: {err}");
                default_parameter_schema()
            }
        };
        Self {
            name,
            description: description.into(),
            parameter_schema,
            executor: Box::new(move |arguments| Box::pin(executor(arguments))),
        }
    }
}

impl ToolObject for DynamicTool {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[inline]
    fn execute(
        &self,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> {
        (self.executor)(arguments)
    }
}

fn default_parameter_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "input": { "type": "string" }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;

    #[test]
    fn test_schema_parse_fallback() {
        let tool = DynamicTool::new(
            "echo",
            "Echoes the input.",
            "not a schema {",
            |_| ready(Ok("done".to_owned())),
        );
        assert_eq!(tool.parameter_schema(), &default_parameter_schema());

        let tool = DynamicTool::new(
            "echo",
            "Echoes the input.",
            r#"{"type":"object","properties":{"text":{"type":"string"}}}"#,
            |_| ready(Ok("done".to_owned())),
        );
        assert_eq!(tool.parameter_schema()["properties"]["text"]["type"], "string");
    }
}
