//! An abstraction layer for different LLM backends.
//!
//! This crate establishes an unified protocol for a session to interact
//! with various supported backends (HTTP chat completion dialects or an
//! on-device model), so that callers can seamlessly switch between them
//! without modifying the conversation logic.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
