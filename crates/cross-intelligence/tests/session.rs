use std::future::ready;

use cross_intelligence::model::{ToolCallRequest, TranscriptEntry};
use cross_intelligence::tool::{Tool, ToolResult};
use cross_intelligence::{ModelClient, SessionBuilder};
use cross_intelligence_test_model::{
    PresetItem, PresetResponse, ScriptedProvider,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

struct LookupTool {
    schema: Value,
}

impl LookupTool {
    fn new() -> Self {
        Self {
            schema: json!({
                "type": "object",
                "properties": {
                    "city": { "type": "string" }
                },
                "required": ["city"],
                "additionalProperties": false
            }),
        }
    }
}

#[derive(Deserialize)]
struct LookupInput {
    city: String,
}

impl Tool for LookupTool {
    type Input = LookupInput;

    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Looks up the weather for a city."
    }

    fn parameter_schema(&self) -> &Value {
        &self.schema
    }

    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        ready(Ok(format!("Sunny in {}.", input.city)))
    }
}

#[tokio::test]
async fn test_tool_loop_through_the_facade() {
    let provider = ScriptedProvider::default();
    provider.add_response(PresetResponse::with_items([PresetItem::ToolCall(
        ToolCallRequest {
            call_id: "call:1".to_owned(),
            name: "weather".to_owned(),
            arguments: r#"{"city":"Lisbon"}"#.to_owned(),
        },
    )]));
    provider.add_response(PresetResponse::with_text(
        "It's sunny in Lisbon today.",
    ));

    let mut session = SessionBuilder::new()
        .with_instructions("Answer with the tool.")
        .with_tool(LookupTool::new())
        .build_with_client(ModelClient::new(provider.clone()));

    let answer = session.respond("Weather in Lisbon?").await.unwrap();
    assert_eq!(answer, "It's sunny in Lisbon today.");

    // The second request carries the tool exchange back to the model.
    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].entries.iter().any(|entry| matches!(
        entry,
        TranscriptEntry::ToolResult(result)
            if result.output == "Sunny in Lisbon."
    )));
}

#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct NonPlayerCharacter {
    name: String,
    age: u32,
    occupation: String,
}

#[tokio::test]
async fn test_structured_output_through_the_facade() {
    let provider = ScriptedProvider::default();
    provider.add_response(PresetResponse::with_text(
        r#"{"Name":"Bob","Age":40,"Occupation":"Smith"}"#,
    ));

    let mut session =
        SessionBuilder::new().build_with_client(ModelClient::new(provider.clone()));
    let npc: NonPlayerCharacter =
        session.respond_as("Make an NPC").await.unwrap();
    assert_eq!(npc.name, "Bob");
    assert_eq!(npc.age, 40);
    assert_eq!(npc.occupation, "Smith");

    let format = provider.requests()[0].response_format.clone().unwrap();
    assert_eq!(format.name, "NonPlayerCharacter");
    assert_eq!(format.schema["additionalProperties"], Value::Bool(false));
    let required = format.schema["required"].as_array().unwrap();
    assert_eq!(required.len(), 3);
}
