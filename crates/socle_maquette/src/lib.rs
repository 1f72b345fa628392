//! # socle_maquette
//!
//! Maquette - Live example markup rendering for Socle.
//!
//! Turns a component description, its assembled control schema, and a live
//! value set into an example markup fragment: a scoped style block, the tag
//! with attribute/property bindings, slotted children, and an optional
//! instrumentation script. The [`sync`] module feeds observed attribute
//! mutations back into the value set.
//!
//! ## Usage
//!
//! ```rust
//! use socle_manifest::Manifest;
//! use socle_palette::{arg_types, initial_args, HelpersConfig};
//! use socle_maquette::{render_template, RenderOptions};
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
//!         "type": { "text": "string" }
//!       }],
//!       "attributes": [{ "name": "label", "fieldName": "label" }]
//!     }]
//!   }]
//! }"#).unwrap();
//!
//! let component = manifest.component_by_tag("x-badge").unwrap();
//! let config = HelpersConfig::default();
//! let schema = arg_types(component, &config, &[]);
//! let mut args = initial_args(&schema);
//! args.insert("label".into(), serde_json::json!("new"));
//!
//! let markup = render_template(
//!     component, Some(&args), &schema, &config, &RenderOptions::default(), None,
//! );
//! assert_eq!(markup, r#"<x-badge label="new"></x-badge>"#);
//! ```

mod slots;
mod style;
pub mod sync;
mod template;

pub use slots::slots_template;
pub use style::style_template;
pub use sync::{ArgUpdate, AttributeMutation, ControlSync};
pub use template::{
    component_variable_script, render_template, template_operators, Operators, RenderOptions,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use socle_manifest::Manifest;
    use socle_palette::{arg_types, initial_args, HelpersConfig};

    #[test]
    fn test_full_fragment() {
        let manifest: Manifest = serde_json::from_str(
            r##"{
              "modules": [{
                "declarations": [{
                  "kind": "class",
                  "name": "MyElement",
                  "tagName": "my-element",
                  "members": [
                    {
                      "kind": "field",
                      "name": "count",
                      "type": { "text": "number" },
                      "default": "0"
                    },
                    {
                      "kind": "field",
                      "name": "disabled",
                      "type": { "text": "boolean" }
                    }
                  ],
                  "attributes": [
                    { "name": "count", "fieldName": "count" },
                    { "name": "disabled", "fieldName": "disabled" }
                  ],
                  "slots": [{ "name": "" }, { "name": "button-content" }],
                  "cssProperties": [{ "name": "--card-border-color", "default": "#ccc" }],
                  "cssParts": [{ "name": "button" }]
                }]
              }]
            }"##,
        )
        .unwrap();
        let component = manifest.component_by_tag("my-element").unwrap();
        let config = HelpersConfig::default();
        let schema = arg_types(component, &config, &[]);
        let mut args = initial_args(&schema);
        args.insert("count".to_string(), json!(5));
        args.insert("disabled".to_string(), json!(true));
        args.insert("default-slot".to_string(), json!("Hello"));
        args.insert("button-content-slot".to_string(), json!("<b>Go</b>"));
        args.insert("button-part".to_string(), json!("color: red;"));

        let markup = render_template(
            component,
            Some(&args),
            &schema,
            &config,
            &RenderOptions::default(),
            None,
        );

        insta::assert_snapshot!(markup, @r###"
        <style>
          my-element::part(button) {
            color: red;
          }
        </style>
        <my-element count="5" disabled>
          Hello
          <b slot="button-content">Go</b>
        </my-element>
        "###);
    }
}
