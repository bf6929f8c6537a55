//! Tools the model can invoke mid-conversation.

mod dynamic;
mod error;
mod registry;

use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use dynamic::DynamicTool;
pub use error::{Error, ErrorKind};
pub(crate) use registry::Registry;

/// The result of a tool call.
pub type ToolResult = Result<String, Error>;

/// A caller-supplied capability the model may invoke mid-conversation.
///
/// Tools are registered on the session builder and owned by the session
/// for its lifetime; backends only ever see the wire definition derived
/// from the accessors below. Prefer this trait when the argument shape
/// is known at compile time; use [`DynamicTool`] when it is only
/// assembled at runtime.
pub trait Tool: Send + Sync + 'static {
    /// The argument shape the executor receives, deserialized from the
    /// raw JSON arguments of a tool call. A mismatch is reported back
    /// to the model as a textual error, not to the session caller.
    type Input: DeserializeOwned;

    /// Returns the name the model calls this tool by.
    ///
    /// Names are unique within a session and resolved by exact match.
    fn name(&self) -> &str;

    /// Returns the description shown to the model.
    fn description(&self) -> &str;

    /// Returns the JSON schema of the tool's arguments.
    ///
    /// The schema is built once when the tool is constructed, typically
    /// with `schemars::schema_for!`, not per call.
    fn parameter_schema(&self) -> &Value;

    /// Runs the tool with already-deserialized input.
    ///
    /// The returned future must not borrow from `self`. Failures become
    /// textual results the model observes on its next turn; they never
    /// abort the conversation.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static;
}

pub(crate) trait ToolObject: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameter_schema(&self) -> &Value;

    fn execute(
        &self,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = ToolResult> + Send>>;
}

pub(crate) struct AnyTool<T: Tool>(pub T);

impl<T: Tool> ToolObject for AnyTool<T> {
    #[inline]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[inline]
    fn description(&self) -> &str {
        self.0.description()
    }

    #[inline]
    fn parameter_schema(&self) -> &Value {
        self.0.parameter_schema()
    }

    #[inline]
    fn execute(
        &self,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> {
        let input: T::Input = match serde_json::from_value(arguments) {
            Ok(input) => input,
            Err(err) => {
                let reason = format!("{err}");
                return Box::pin(std::future::ready(ToolResult::Err(
                    Error::invalid_input().with_reason(reason),
                )));
            }
        };
        Box::pin(self.0.execute(input))
    }
}
