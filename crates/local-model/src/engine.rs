use std::error::Error as StdError;
use std::pin::Pin;

use cross_intelligence_model::{ModelRequest, ModelResponse};

use crate::Availability;

/// Error type produced by engine implementations.
pub type EngineError = Box<dyn StdError + Send + Sync>;

/// An on-device generation engine.
///
/// This is the seam between the portable session machinery and a
/// platform runtime. Implementations wrap whatever the platform offers,
/// and report availability so callers can degrade gracefully instead of
/// issuing requests that can never succeed.
///
/// The trait is object safe; providers hold engines as
/// `Arc<dyn LocalEngine>`.
pub trait LocalEngine: Send + Sync + 'static {
    /// Returns the engine's current availability.
    fn availability(&self) -> Availability;

    /// Runs one generation over the given request.
    ///
    /// The request's tool list has already been narrowed to the tools
    /// that hold an engine slot.
    fn generate(
        &self,
        req: ModelRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ModelResponse, EngineError>> + Send>>;
}
