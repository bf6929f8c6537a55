//! A local scripted model for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cross_intelligence_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
    ResponseItem,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Error {
    pub fn message(&self) -> &str {
        self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct State {
    script: Vec<PresetResponse>,
    round: usize,
    attempts_in_round: u64,
    requests: Vec<ModelRequest>,
    delay: Option<Duration>,
}

/// A local scripted model for testing purpose.
///
/// Before sending requests, you need to setup the response script, which
/// is how the model should respond round by round. Each `send_request`
/// call consumes the next scripted round; if the script runs out, an
/// error is returned.
///
/// Clones share the same script cursor, so a clone can be handed to the
/// session while the test keeps a handle for assertions.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    state: Arc<Mutex<State>>,
}

impl ScriptedProvider {
    /// Appends a response round to the script.
    pub fn add_response(&self, preset: PresetResponse) {
        self.state.lock().unwrap().script.push(preset);
    }

    /// Sets an artificial delay before each response.
    pub fn set_delay(&self, duration: Duration) {
        self.state.lock().unwrap().delay = Some(duration);
    }

    /// Returns copies of all requests received so far, in order.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Returns the number of rounds served successfully.
    pub fn rounds_served(&self) -> usize {
        self.state.lock().unwrap().round
    }
}

impl ModelProvider for ScriptedProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let state = Arc::clone(&self.state);
        let req = req.clone();
        async move {
            let delay = state.lock().unwrap().delay;
            if let Some(delay) = delay {
                sleep(delay).await;
            }

            let mut state = state.lock().unwrap();
            state.requests.push(req);

            let round = state.round;
            let Some(preset) = state.script.get(round).cloned() else {
                return Err(Error {
                    message: "no more scripted rounds",
                    kind: ErrorKind::Other,
                });
            };

            if let Some(failures) = preset.failures {
                if failures == 0 || state.attempts_in_round < failures {
                    state.attempts_in_round += 1;
                    return Err(Error {
                        message: "scripted failure",
                        kind: ErrorKind::Request,
                    });
                }
            }

            state.round += 1;
            state.attempts_in_round = 0;

            let items = preset
                .items
                .into_iter()
                .map(|item| match item {
                    PresetItem::Text(text) => ResponseItem::Text(text),
                    PresetItem::ToolCall(req) => ResponseItem::ToolCall(req),
                })
                .collect();
            Ok(ModelResponse { items })
        }
    }
}
