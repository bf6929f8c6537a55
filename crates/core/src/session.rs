mod builder;

use cross_intelligence_model::{
    ModelRequest, ResponseFormat, ToolCallResult, ToolDefinition,
    TranscriptEntry,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::error::Error;
use crate::model_client::ModelClient;
use crate::schema;
use crate::tool::Registry;
use crate::transcript::Transcript;

pub use builder::SessionBuilder;

/// A conversation session bound to one backend and one transcript.
///
/// The session owns the tool-calling loop: it sends the full transcript
/// to the backend, executes any requested tool calls, feeds results
/// back, and repeats until the backend produces a final answer with no
/// pending tool calls. The loop is identical for every backend; only
/// the wire format behind the [`ModelClient`] differs.
///
/// A session processes one `respond` call at a time (it takes `&mut
/// self`) and issues one backend call at a time within it. Dropping the
/// session releases any backend-held resources, such as on-device tool
/// slots.
pub struct Session {
    client: ModelClient,
    transcript: Transcript,
    tools: Registry,
    tool_definitions: Vec<ToolDefinition>,
    max_tool_rounds: Option<u32>,
}

impl Session {
    /// Sends a prompt and resolves with the final answer text.
    pub async fn respond(
        &mut self,
        prompt: impl Into<String>,
    ) -> Result<String, Error> {
        self.drive(prompt.into(), None)
            .instrument(debug_span!("session turn"))
            .await
    }

    /// Sends a prompt and coerces the final answer into `T` via a
    /// generated JSON schema constraint.
    ///
    /// The schema is resolved before any backend call is made; a
    /// generation failure fails fast. A final answer that does not
    /// parse as `T` fails with
    /// [`Error::ResponseDeserialization`], carrying the raw text for
    /// diagnosis.
    pub async fn respond_as<T>(
        &mut self,
        prompt: impl Into<String>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned + JsonSchema + 'static,
    {
        let schema = schema::response_schema::<T>()?;
        let format = ResponseFormat {
            name: schema::short_type_name::<T>().to_owned(),
            schema: (*schema).clone(),
        };
        let text = self
            .drive(prompt.into(), Some(format))
            .instrument(debug_span!("session turn"))
            .await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(source) => Err(Error::ResponseDeserialization {
                type_name: std::any::type_name::<T>(),
                raw: text,
                source,
            }),
        }
    }

    /// Returns a view of the transcript recorded so far.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    async fn drive(
        &mut self,
        prompt: String,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, Error> {
        self.transcript.append(TranscriptEntry::User(prompt));

        let mut rounds = 0u32;
        loop {
            let req = ModelRequest {
                entries: self.transcript.snapshot(),
                tools: self.tool_definitions.clone(),
                response_format: response_format.clone(),
            };
            let resp =
                self.client.send_request(req).await.map_err(Error::Backend)?;

            // Record the response items in the order received. Tool
            // calls are collected for sequential execution below.
            let pending: Vec<_> = resp.tool_calls().cloned().collect();
            for item in &resp.items {
                use cross_intelligence_model::ResponseItem;
                match item {
                    ResponseItem::Text(text) => self
                        .transcript
                        .append(TranscriptEntry::Assistant(text.clone())),
                    ResponseItem::ToolCall(call) => self
                        .transcript
                        .append(TranscriptEntry::ToolCall(call.clone())),
                }
            }

            if pending.is_empty() {
                debug!("turn finished after {rounds} tool rounds");
                return Ok(resp.final_text());
            }

            rounds += 1;
            if let Some(limit) = self.max_tool_rounds
                && rounds > limit
            {
                return Err(Error::ToolRoundLimit { limit });
            }

            // Execute strictly in response order; results are appended
            // before the next backend call, with no new user message.
            for call in pending {
                let output = self.tools.invoke(&call).await;
                self.transcript.append(TranscriptEntry::ToolResult(
                    ToolCallResult {
                        call_id: call.call_id,
                        output,
                    },
                ));
            }
        }
    }
}
