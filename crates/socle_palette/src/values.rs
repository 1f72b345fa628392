//! Initial value derivation from an assembled schema.

use crate::coerce::decode_json_or_text;
use crate::types::{ArgType, Args, ArgTypes};
use serde_json::Value;

/// The decoded form of an entry's default value, as it appears in a value
/// set. String defaults that parse as JSON become typed values.
pub fn decoded_default(entry: &ArgType) -> Option<Value> {
    entry.default_value.as_ref().map(decode_json_or_text)
}

/// Seed a value set from a schema: one entry per editable control.
///
/// Entries lacking a usable default receive an empty-string placeholder.
pub fn initial_args(arg_types: &ArgTypes) -> Args {
    let mut args = Args::new();

    for (key, entry) in arg_types {
        if entry.control.is_none() {
            continue;
        }
        let value = decoded_default(entry).unwrap_or_else(|| Value::String(String::new()));
        args.insert(key.clone(), value);
    }

    args
}
