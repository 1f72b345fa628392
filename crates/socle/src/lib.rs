//! # Socle
//!
//! Custom Elements Manifest helpers for documentation tooling.
//!
//! Socle translates a web component's static metadata (its Custom Elements
//! Manifest entry) into the interactive control schema of a documentation
//! tool, and renders live example markup reflecting the current control
//! values.
//!
//! ## Name Origin
//!
//! A **socle** is the plinth a museum piece stands on: it carries the work
//! and presents it without being the work itself. In the same way this
//! library carries a component's metadata into a form a gallery can
//! present and manipulate.
//!
//! ## Crates
//!
//! - [`manifest`] - Custom Elements Manifest data surface
//! - [`palette`] - control schema generation
//! - [`maquette`] - live example markup rendering
//!
//! ## Usage
//!
//! ```rust
//! use socle::{story_helpers, set_manifest, StoryOptions};
//!
//! let manifest = serde_json::from_str(r#"{
//!   "modules": [{
//!     "declarations": [{
//!       "kind": "class",
//!       "name": "MyElement",
//!       "tagName": "my-element",
//!       "members": [{
//!         "kind": "field",
//!         "name": "label",
//!         "type": { "text": "string" },
//!         "default": "'hello'"
//!       }],
//!       "attributes": [{ "name": "label", "fieldName": "label" }]
//!     }]
//!   }]
//! }"#).unwrap();
//!
//! set_manifest(manifest);
//! let helpers = story_helpers("my-element", &StoryOptions::default()).unwrap();
//! assert_eq!(helpers.args["label"], serde_json::json!("hello"));
//! ```

/// Custom Elements Manifest data surface.
pub use socle_manifest as manifest;

/// Control schema generation.
pub use socle_palette as palette;

/// Live example markup rendering.
pub use socle_maquette as maquette;

mod config;
mod error;
mod helpers;

pub use config::{config_snapshot, manifest as registered_manifest, register_config, set_manifest};
pub use error::HelpersError;
pub use helpers::{story_helpers, HelpersSession, StoryHelpers, StoryOptions};

// Re-export the types most stories touch directly.
pub use socle_manifest::{Component, Manifest};
pub use socle_palette::{ArgType, ArgTypes, Args, Category, ControlKind, HelpersConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// End-to-end scenario: one boolean attribute and one default slot.
    #[test]
    fn test_full_workflow() {
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
                    }
                  ],
                  "attributes": [{ "name": "disabled", "fieldName": "disabled" }],
                  "slots": [{ "name": "" }]
                }]
              }]
            }"#,
        )
        .unwrap();

        let helpers = StoryHelpers::for_component(
            &manifest,
            "x-button",
            HelpersConfig::default(),
            &StoryOptions::default(),
        )
        .unwrap();

        // One attribute entry and one slot entry.
        let disabled = &helpers.arg_types["disabled"];
        assert_eq!(disabled.control, Some(ControlKind::Boolean));
        assert_eq!(disabled.category, Some(Category::Attributes));
        assert_eq!(helpers.args["disabled"], json!(false));
        assert!(helpers.arg_types.contains_key("default-slot"));

        // Rendering at the defaults emits no bindings.
        let markup = helpers.template(Some(&helpers.args), None);
        assert_eq!(markup, "<x-button></x-button>");

        // Toggling the boolean and filling the slot.
        let mut args = helpers.args.clone();
        args.insert("disabled".to_string(), json!(true));
        args.insert("default-slot".to_string(), json!("Click me"));
        let markup = helpers.template(Some(&args), None);
        assert_eq!(markup, "<x-button disabled>\n  Click me\n</x-button>");
    }

    #[test]
    fn test_live_sync_round_trip() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
              "modules": [{
                "declarations": [{
                  "kind": "class",
                  "name": "XToggle",
                  "tagName": "x-toggle",
                  "members": [
                    {
                      "kind": "field",
                      "name": "checked",
                      "type": { "text": "boolean" },
                      "default": "false"
                    }
                  ],
                  "attributes": [{ "name": "checked", "fieldName": "checked" }]
                }]
              }]
            }"#,
        )
        .unwrap();

        let config = HelpersConfig::default();
        let helpers = StoryHelpers::for_component(
            &manifest,
            "x-toggle",
            config.clone(),
            &StoryOptions::default(),
        )
        .unwrap();

        let mut sync = maquette::ControlSync::new();
        sync.retarget(helpers.component(), &config);

        // The host reports the instance gaining the attribute; the update
        // flows back into the value set as a typed boolean.
        let updates = sync.apply(&[maquette::AttributeMutation {
            attribute: "checked".to_string(),
            value: Some(String::new()),
        }]);
        let mut args = helpers.args.clone();
        for update in updates {
            args.insert(update.key, update.value);
        }
        assert_eq!(args["checked"], json!(true));

        let markup = helpers.template(Some(&args), None);
        assert_eq!(markup, "<x-toggle checked></x-toggle>");
    }
}
