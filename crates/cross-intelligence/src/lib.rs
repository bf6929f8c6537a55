//! One session abstraction over on-device and remote language models.
//!
//! A [`Session`] keeps the conversation transcript, drives the
//! tool-calling loop, and can constrain final answers to a typed shape
//! via a generated JSON schema. Backends are selected with a
//! [`ModelId`] such as `openai:gpt-4o`, `openrouter:openai/gpt-4o`, or
//! the bare token `local` for an on-device engine.
//!
//! ```no_run
//! use cross_intelligence::{ModelId, SessionBuilder, client_for};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let id: ModelId = "openai:gpt-4o".parse()?;
//! let mut session = SessionBuilder::new()
//!     .with_instructions("Talk like a pirate.")
//!     .build_with_client(client_for(&id)?);
//! let answer = session.respond("Ahoy! Who are you?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod api_keys;
mod model_id;
mod setup;

pub use cross_intelligence_core::{
    Error, ModelClient, Session, SessionBuilder, Transcript, schema, tool,
    transcript,
};
pub use cross_intelligence_local_model as local;
pub use cross_intelligence_model as model;

pub use model_id::{ModelId, ON_DEVICE_TOKEN};
pub use setup::{SetupError, client_for, client_for_engine};
