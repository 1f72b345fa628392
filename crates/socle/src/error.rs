//! Error types for helper setup.
//!
//! Both variants are fatal and raised eagerly so a misconfigured story
//! fails at setup time. Every other edge case in the pipeline degrades
//! gracefully instead of erroring.

/// Errors raised while building story helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelpersError {
    #[error(
        "Custom Elements Manifest not found. Register the manifest with \
         `socle::set_manifest` (or pass it explicitly to \
         `StoryHelpers::for_component`) before requesting story helpers."
    )]
    ManifestMissing,

    #[error(
        "A component with the tag name \"{tag}\" was not found in the Custom \
         Elements Manifest. If it's missing from the manifest, it's often the \
         result of a missing `@tag` or `@tagName` annotation in the \
         component's source documentation."
    )]
    TagNotFound { tag: String },
}
