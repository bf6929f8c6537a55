//! JSON schema generation for structured output types.
//!
//! A response type's shape is a hard caller contract, so generation
//! failures are fatal, unlike tool argument schemas which fall back to
//! a permissive default.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::Error;

static CACHE: OnceLock<Mutex<HashMap<TypeId, Arc<Value>>>> = OnceLock::new();

/// Returns the JSON schema for `T`, generating it on first use.
///
/// The produced schema is closed: every object level requires all of
/// its properties and allows no additional ones, to maximize the odds
/// the model emits parseable, complete objects.
///
/// Generation is pure and deterministic for a given type, so the result
/// is cached per type for the process lifetime and repeated calls
/// return structurally identical documents.
pub fn response_schema<T: JsonSchema + 'static>() -> Result<Arc<Value>, Error> {
    let cache = CACHE.get_or_init(Default::default);
    if let Some(schema) = cache
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(&TypeId::of::<T>())
    {
        return Ok(Arc::clone(schema));
    }

    let mut value = schema_for!(T).to_value();
    let Some(root) = value.as_object_mut() else {
        return Err(Error::SchemaGeneration {
            type_name: std::any::type_name::<T>(),
        });
    };
    root.remove("$schema");
    close_schema(&mut value);

    let schema = Arc::new(value);
    cache
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(TypeId::of::<T>(), Arc::clone(&schema));
    Ok(schema)
}

/// Returns the unqualified name of `T`, used to label response formats.
pub fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Recursively marks every object level as closed: all properties
/// required, no additional properties.
fn close_schema(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::Object(properties)) = obj.get("properties") {
                let names: Vec<Value> =
                    properties.keys().cloned().map(Value::String).collect();
                obj.insert("required".to_owned(), Value::Array(names));
                obj.insert(
                    "additionalProperties".to_owned(),
                    Value::Bool(false),
                );
            }
            for (_, child) in obj.iter_mut() {
                close_schema(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                close_schema(item);
            }
        }
        _ => {}
    }
}
