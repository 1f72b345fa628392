//! Process-wide registries for the composition boundary.
//!
//! The pure mapping crates take their configuration as explicit arguments;
//! these registries exist only so the outermost integration layer (story
//! files) can set things up once. Registration is two-phase and
//! synchronous: [`register_config`] makes the configuration visible to
//! every subsequent [`config_snapshot`] call, with no deferred turn.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use socle_manifest::Manifest;
use socle_palette::HelpersConfig;

static CONFIG: Lazy<RwLock<Option<HelpersConfig>>> = Lazy::new(|| RwLock::new(None));
static MANIFEST: Lazy<RwLock<Option<Arc<Manifest>>>> = Lazy::new(|| RwLock::new(None));

/// Register the process-wide helper configuration.
///
/// Unset fields keep their defaults; calling again replaces the previous
/// registration.
pub fn register_config(config: HelpersConfig) {
    *CONFIG.write().expect("config registry poisoned") = Some(config);
}

/// Snapshot the registered configuration, or the defaults when none was
/// registered. Helpers capture this once at construction and thread it
/// explicitly from there.
pub fn config_snapshot() -> HelpersConfig {
    CONFIG
        .read()
        .expect("config registry poisoned")
        .clone()
        .unwrap_or_default()
}

/// Register the process-wide manifest document.
pub fn set_manifest(manifest: Manifest) {
    *MANIFEST.write().expect("manifest registry poisoned") = Some(Arc::new(manifest));
}

/// The registered manifest, if any.
pub fn manifest() -> Option<Arc<Manifest>> {
    MANIFEST.read().expect("manifest registry poisoned").clone()
}
