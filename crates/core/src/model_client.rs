use std::fmt::{self, Debug};
use std::pin::Pin;
use std::sync::Arc;

use cross_intelligence_model::{
    ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use tracing::Instrument;

type SendRequestResult = Result<ModelResponse, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased
/// interface for the other modules.
///
/// Cloning a `ModelClient` is cheap and every clone talks to the same
/// underlying provider.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
}

impl ModelClient {
    /// Creates a client that erases the given provider.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("got a request: {req:?}");
                    match fut.await {
                        Ok(resp) => {
                            trace!("got a response: {resp:?}");
                            Ok(resp)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err) as Box<dyn ModelProviderError>)
                        }
                    }
                }
                .instrument(trace_span!("model client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns the complete response.
    #[inline]
    pub async fn send_request(&self, req: ModelRequest) -> SendRequestResult {
        (self.handler_fn)(req).await
    }
}

impl Debug for ModelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use cross_intelligence_model::{ErrorKind, TranscriptEntry};
    use cross_intelligence_test_model::{PresetResponse, ScriptedProvider};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let provider = ScriptedProvider::default();
        provider.add_response(PresetResponse::with_text("How are you?"));

        let client = ModelClient::new(provider);
        let resp = client
            .send_request(ModelRequest {
                entries: vec![TranscriptEntry::User("Hi".to_owned())],
                tools: vec![],
                response_format: None,
            })
            .await
            .unwrap();
        assert_eq!(resp.final_text(), "How are you?");
    }

    #[tokio::test]
    async fn test_error_handling() {
        let provider = ScriptedProvider::default();
        let client = ModelClient::new(provider);
        let resp_or_err = client
            .send_request(ModelRequest {
                entries: vec![TranscriptEntry::User("Hi".to_owned())],
                tools: vec![],
                response_format: None,
            })
            .await;
        let err = resp_or_err.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
