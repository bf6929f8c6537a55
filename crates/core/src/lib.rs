//! Core logic including the conversation loop, tool execution, schema
//! generation, etc.
//!
//! The conversation loop here is provider-agnostic: every backend is
//! reached through the [`ModelClient`] erasure, and the loop itself is
//! never duplicated per provider.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod error;
mod model_client;
pub mod schema;
mod session;
pub mod tool;
pub mod transcript;

pub use error::Error;
pub use model_client::ModelClient;
pub use session::{Session, SessionBuilder};
pub use transcript::Transcript;
