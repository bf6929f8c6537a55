use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;

use cross_intelligence_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
    ResponseItem, TranscriptEntry,
};

#[derive(Debug)]
struct FakeModelProviderError(ErrorKind);

impl Display for FakeModelProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeModelProviderError {}

impl ModelProviderError for FakeModelProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelProviderError;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let result = 'blk: {
            if req.entries.is_empty() {
                break 'blk Err(FakeModelProviderError(ErrorKind::Other));
            }

            let content = req.entries.first().map(|entry| match entry {
                TranscriptEntry::User(text) => text.as_str(),
                _ => unreachable!("unexpected entry: {entry:?}"),
            });

            Ok(ModelResponse {
                items: vec![ResponseItem::Text(format!(
                    "You said {}",
                    content.unwrap_or("")
                ))],
            })
        };
        ready(result)
    }
}

#[tokio::test]
async fn test_completion() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        entries: vec![TranscriptEntry::User("Good morning".to_string())],
        tools: vec![],
        response_format: None,
    };
    let resp = provider.send_request(&req).await.unwrap();

    assert!(resp.is_final());
    assert_eq!(resp.final_text(), "You said Good morning");
}

#[tokio::test]
async fn test_error() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        entries: vec![],
        tools: vec![],
        response_format: None,
    };
    let result = provider.send_request(&req).await;
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}
