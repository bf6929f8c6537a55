//! A model provider backed by an on-device generation engine.
//!
//! Unlike the HTTP providers, the engine binds tools ahead of time
//! against a fixed pool of slots. The provider acquires one slot per
//! tool at construction and holds them for its lifetime; tools that
//! could not get a slot are omitted from every request.

#[macro_use]
extern crate tracing;

mod availability;
mod engine;
mod slots;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use cross_intelligence_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
    ToolDefinition,
};

pub use availability::Availability;
pub use engine::{EngineError, LocalEngine};
pub use slots::{DEFAULT_SLOT_COUNT, ToolSlot, ToolSlotPool};

/// Error type for [`LocalProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

struct BoundTool {
    name: String,
    _slot: ToolSlot,
}

/// On-device model provider.
pub struct LocalProvider {
    engine: Arc<dyn LocalEngine>,
    bound_tools: Vec<BoundTool>,
}

impl LocalProvider {
    /// Creates a new `LocalProvider`, binding a slot for each tool.
    ///
    /// Tools are bound in order; once the pool runs dry the remaining
    /// tools are skipped with a warning and will not be visible to the
    /// engine.
    pub fn new(
        engine: Arc<dyn LocalEngine>,
        pool: &ToolSlotPool,
        tools: &[ToolDefinition],
    ) -> Self {
        let mut bound_tools = Vec::with_capacity(tools.len());
        for tool in tools {
            let Some(slot) = pool.acquire() else {
                warn!(
                    "no free tool slot, `{}` will not be available",
                    tool.name
                );
                continue;
            };
            trace!("tool `{}` bound to slot {}", tool.name, slot.index());
            bound_tools.push(BoundTool {
                name: tool.name.clone(),
                _slot: slot,
            });
        }
        Self {
            engine,
            bound_tools,
        }
    }

    /// Returns the names of the tools that hold an engine slot.
    pub fn bound_tool_names(&self) -> impl Iterator<Item = &str> {
        self.bound_tools.iter().map(|tool| tool.name.as_str())
    }
}

impl ModelProvider for LocalProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let engine = Arc::clone(&self.engine);
        let mut req = req.clone();
        req.tools
            .retain(|tool| self.bound_tools.iter().any(|b| b.name == tool.name));

        async move {
            let availability = engine.availability();
            if !availability.is_available() {
                return Err(Error::new(
                    format!("engine is not available: {availability}"),
                    ErrorKind::Other,
                ));
            }
            engine
                .generate(req)
                .await
                .map_err(|err| Error::new(format!("{err}"), ErrorKind::Other))
        }
    }
}
