//! API key storage and retrieval.
//!
//! Keys are looked up by provider: the identifier's prefix before the
//! first `:` (or the whole identifier when there is none) is upcased
//! and suffixed with `_API_KEY`, so `openai:gpt-4o` reads
//! `OPENAI_API_KEY`. Keys set programmatically take precedence over
//! the environment.

use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

fn overrides() -> MutexGuard<'static, HashMap<String, String>> {
    static OVERRIDES: OnceLock<Mutex<HashMap<String, String>>> =
        OnceLock::new();
    let lock = OVERRIDES.get_or_init(Default::default);
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Returns the environment variable name a model identifier reads its
/// key from, or `None` when the identifier has no provider prefix.
pub fn key_name(model_id: &str) -> Option<String> {
    let prefix = model_id.split(':').next().unwrap_or_default();
    if prefix.is_empty() {
        return None;
    }
    Some(format!("{}_API_KEY", prefix.to_uppercase()))
}

/// Returns the API key for a model identifier, if one is set.
pub fn get(model_id: &str) -> Option<String> {
    let key_name = key_name(model_id)?;
    if let Some(key) = overrides().get(&key_name) {
        return Some(key.clone());
    }
    env::var(&key_name).ok().filter(|key| !key.is_empty())
}

/// Stores an in-memory API key for a model identifier's provider.
///
/// Returns `false` when the identifier has no provider prefix to
/// derive a key name from.
pub fn set(model_id: &str, api_key: impl Into<String>) -> bool {
    let Some(key_name) = key_name(model_id) else {
        return false;
    };
    overrides().insert(key_name, api_key.into());
    true
}
