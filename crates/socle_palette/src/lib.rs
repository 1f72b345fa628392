//! # socle_palette
//!
//! Palette - Interactive control schema generation for Socle.
//!
//! This crate maps a component's manifest description onto the control
//! schema a documentation tool renders as its interactive panel:
//!
//! - **Classify**: decide which control kind represents a type expression
//! - **Extract**: walk one component's metadata into per-category entries
//! - **Assemble**: merge categories into one ordered schema
//! - **Values**: seed the initial value set from the schema
//!
//! Suppressed members (private, protected, static) still receive disabled
//! reset placeholders so the host UI can blank stale controls when the
//! inspected component changes.
//!
//! ## Usage
//!
//! ```rust
//! use socle_manifest::Manifest;
//! use socle_palette::{arg_types, initial_args, HelpersConfig};
//!
//! let manifest: Manifest = serde_json::from_str(r#"{
//!   "modules": [{
//!     "declarations": [{
//!       "kind": "class",
//!       "name": "XBadge",
//!       "tagName": "x-badge",
//!       "members": [{
//!         "kind": "field",
//!         "name": "label",
//!         "type": { "text": "string" },
//!         "default": "'new'"
//!       }],
//!       "attributes": [{ "name": "label", "fieldName": "label" }]
//!     }]
//!   }]
//! }"#).unwrap();
//!
//! let component = manifest.component_by_tag("x-badge").unwrap();
//! let schema = arg_types(component, &HelpersConfig::default(), &[]);
//! let args = initial_args(&schema);
//! assert_eq!(args["label"], serde_json::json!("new"));
//! ```

mod assemble;
pub mod classify;
pub mod coerce;
mod config;
pub mod extract;
mod types;
mod values;

pub use assemble::{arg_types, wrapper_arg_types};
pub use classify::{clean_up_type, control_for_type, type_options};
pub use config::HelpersConfig;
pub use types::{ArgSet, ArgType, ArgTypes, Args, Category, ControlKind, FieldArgs};
pub use values::{decoded_default, initial_args};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use socle_manifest::Manifest;

    #[test]
    fn test_schema_to_values_round_trip() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
              "modules": [{
                "declarations": [{
                  "kind": "class",
                  "name": "XButton",
                  "tagName": "x-button",
                  "members": [
                    {
                      "kind": "field",
                      "name": "disabled",
                      "type": { "text": "boolean" },
                      "default": "false"
                    },
                    {
                      "kind": "field",
                      "name": "label",
                      "type": { "text": "string" },
                      "default": "'Click me'"
                    }
                  ],
                  "attributes": [{ "name": "disabled", "fieldName": "disabled" }],
                  "slots": [{ "name": "" }]
                }]
              }]
            }"#,
        )
        .unwrap();
        let component = manifest.component_by_tag("x-button").unwrap();
        let config = HelpersConfig::default();

        let schema = arg_types(component, &config, &[]);
        let args = initial_args(&schema);

        // Initial values equal decoded defaults by construction.
        assert_eq!(args["disabled"], json!(false));
        assert_eq!(decoded_default(&schema["disabled"]), Some(json!(false)));
        assert_eq!(args["label"], json!("Click me"));
        // The slot control got the empty-string placeholder.
        assert_eq!(args["default-slot"], json!(""));
    }
}
