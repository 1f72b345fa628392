//! # socle_manifest
//!
//! Manifest - The Custom Elements Manifest data surface for Socle.
//!
//! This crate models the subset of the Custom Elements Manifest format that
//! documentation tooling consumes: per-tag component declarations with their
//! members, attribute bindings, slots, CSS custom properties, CSS shadow
//! parts, CSS states, events, and public methods.
//!
//! The manifest is treated as an opaque upstream input. Deserialization is
//! permissive: absent collections become empty, unknown member fields are
//! retained in [`Member::extra`] so alternate type annotations (for example
//! `parsedType`) stay reachable.
//!
//! ## Usage
//!
//! ```rust
//! use socle_manifest::Manifest;
//!
//! let manifest: Manifest = serde_json::from_str(r#"{
//!   "schemaVersion": "2.1.1",
//!   "modules": [{
//!     "kind": "javascript-module",
//!     "declarations": [{
//!       "kind": "class",
//!       "name": "MyButton",
//!       "tagName": "my-button",
//!       "customElement": true
//!     }]
//!   }]
//! }"#).unwrap();
//!
//! let component = manifest.component_by_tag("my-button").unwrap();
//! assert_eq!(component.name, "MyButton");
//! ```

mod query;
mod types;

pub use query::{member_description, remove_quotes};
pub use types::{
    AttributeBinding, Component, CssPart, CssProperty, CssState, Deprecation, Event, Manifest,
    ManifestModule, Member, MemberKind, Parameter, Privacy, ReturnType, Slot, TypeText,
};
