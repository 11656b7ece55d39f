//! Built-in settings registration
//!
//! Each feature registers its own sections, subsections and settings.
//! Invalid items are logged and skipped; the pass always completes.

pub mod emails;
pub mod general;
pub mod payment_confirmations;
pub mod stripe;

use crate::prelude::*;
use crate::settings::{FrozenSettingsRegistry, SettingsRegistry};

/// Register all built-in settings
pub fn register_settings(registry: &mut SettingsRegistry) {
	general::register_settings(registry);
	stripe::register_settings(registry);
	payment_confirmations::register_settings(registry);
	emails::register_settings(registry);
}

/// Registry holding every built-in setting, frozen
pub fn default_registry() -> FrozenSettingsRegistry {
	let mut registry = SettingsRegistry::new();
	register_settings(&mut registry);
	debug!("Registered {} built-in settings", registry.len());
	registry.freeze()
}


// vim: ts=4
