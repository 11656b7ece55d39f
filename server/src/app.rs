//! App state type

use std::sync::Arc;

use simpay_core::settings::{FieldRenderer, FrozenSettingsRegistry, SettingsService};
use simpay_types::options_adapter::OptionsAdapter;

use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub settings: Arc<SettingsService>,
	pub settings_registry: Arc<FrozenSettingsRegistry>,
	pub renderer: FieldRenderer,
	pub admin_token: Option<String>,
}

pub type App = Arc<AppState>;

impl AppState {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		options: Arc<dyn OptionsAdapter>,
		admin_token: Option<String>,
	) -> SpResult<App> {
		let settings = Arc::new(SettingsService::new(Arc::clone(&registry), options));
		let renderer = FieldRenderer::new()?;

		info!("Simple Pay settings server v{} with {} settings", VERSION, registry.len());
		Ok(Arc::new(Self { settings, settings_registry: registry, renderer, admin_token }))
	}
}

// vim: ts=4
