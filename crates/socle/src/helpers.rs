//! Story helper assembly.
//!
//! One [`StoryHelpers`] value bundles everything a story needs for a given
//! tag: the assembled control schema, the initial value set, the
//! framework-wrapper variants, the declared event names, and the two
//! rendering entry points.

use socle_manifest::{Component, Manifest};
use socle_maquette::{render_template, style_template, RenderOptions};
use socle_palette::{
    arg_types, initial_args, wrapper_arg_types, Args, ArgTypes, Category, HelpersConfig,
};

use crate::config;
use crate::error::HelpersError;

/// Per-story options.
#[derive(Debug, Clone, Default)]
pub struct StoryOptions {
    /// Categories excluded from this story's schema and rendering.
    pub exclude_categories: Vec<Category>,

    /// Override the global instrumentation-script setting for this story.
    pub set_component_variable: Option<bool>,
}

/// Helpers for one component, derived from the manifest.
#[derive(Debug, Clone)]
pub struct StoryHelpers {
    component: Component,
    config: HelpersConfig,
    exclude_categories: Vec<Category>,
    set_component_variable: bool,

    /// Initial value set, seeded from the schema defaults.
    pub args: Args,

    /// Assembled control schema.
    pub arg_types: ArgTypes,

    /// Initial value set for the framework-wrapper schema.
    pub wrapper_args: Args,

    /// Framework-wrapper control schema (bare property keys, `on*` events).
    pub wrapper_arg_types: ArgTypes,

    /// Declared event names.
    pub events: Vec<String>,
}

impl StoryHelpers {
    /// Build helpers for a tag from an explicit manifest and configuration.
    pub fn for_component(
        manifest: &Manifest,
        tag_name: &str,
        config: HelpersConfig,
        options: &StoryOptions,
    ) -> Result<Self, HelpersError> {
        let component = manifest
            .component_by_tag(tag_name)
            .ok_or_else(|| HelpersError::TagNotFound {
                tag: tag_name.to_string(),
            })?
            .clone();

        let exclude_categories = options.exclude_categories.clone();
        let schema = arg_types(&component, &config, &exclude_categories);
        let wrapper_schema = wrapper_arg_types(&component, &config, &exclude_categories);
        let events: Vec<String> = component
            .events
            .iter()
            .map(|event| event.name.clone())
            .collect();

        tracing::debug!(
            tag = tag_name,
            entries = schema.len(),
            events = events.len(),
            "assembled control schema"
        );

        Ok(Self {
            args: initial_args(&schema),
            wrapper_args: initial_args(&wrapper_schema),
            arg_types: schema,
            wrapper_arg_types: wrapper_schema,
            events,
            set_component_variable: options
                .set_component_variable
                .unwrap_or(config.set_component_variable),
            exclude_categories,
            config,
            component,
        })
    }

    /// The component description the helpers were derived from.
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Render the full example fragment for a value set. `None` renders a
    /// bare tag pair; `slot` appends extra child content.
    pub fn template(&self, args: Option<&Args>, slot: Option<&str>) -> String {
        tracing::debug!(tag = ?self.component.tag_name, "rendering template");
        render_template(
            &self.component,
            args,
            &self.arg_types,
            &self.config,
            &self.render_options(),
            slot,
        )
    }

    /// Render only the scoped style block for a value set.
    pub fn style_template(&self, args: Option<&Args>) -> String {
        style_template(
            &self.component,
            args,
            &self.config,
            &self.exclude_categories,
        )
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            exclude_categories: self.exclude_categories.clone(),
            set_component_variable: self.set_component_variable,
            container_selector: None,
        }
    }
}

/// Build helpers for a tag from the process-wide registries.
pub fn story_helpers(tag_name: &str, options: &StoryOptions) -> Result<StoryHelpers, HelpersError> {
    let manifest = config::manifest().ok_or(HelpersError::ManifestMissing)?;
    StoryHelpers::for_component(&manifest, tag_name, config::config_snapshot(), options)
}

/// Session cache for derived helpers.
///
/// Helpers are derived per tag on first request and kept until a different
/// tag is requested; there is no explicit eviction.
#[derive(Debug, Default)]
pub struct HelpersSession {
    current: Option<StoryHelpers>,
}

impl HelpersSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helpers for a tag, reusing the cached entry when the tag matches.
    pub fn helpers(
        &mut self,
        manifest: &Manifest,
        tag_name: &str,
        config: HelpersConfig,
        options: &StoryOptions,
    ) -> Result<&StoryHelpers, HelpersError> {
        let cached = self
            .current
            .as_ref()
            .is_some_and(|helpers| helpers.component.tag_name.as_deref() == Some(tag_name));

        if !cached {
            self.current = Some(StoryHelpers::for_component(
                manifest, tag_name, config, options,
            )?);
        }

        Ok(self.current.as_ref().expect("cache populated above"))
    }
}
