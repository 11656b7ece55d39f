//! Settings service with caching, validation and form persistence

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use simpay_types::options_adapter::OptionsAdapter;

use crate::prelude::*;

use super::registry::FrozenSettingsRegistry;
use super::render::{FieldRenderer, parse_field_name};
use super::schema::{coerce_form_value, validate_value};
use super::setting::Setting;

/// Value stored for checkboxes left unchecked in a submitted form
pub const UNCHECKED: &str = "no";

/// Settings service - main interface for reading and persisting setting values
pub struct SettingsService {
	registry: Arc<FrozenSettingsRegistry>,
	options: Arc<dyn OptionsAdapter>,
	cache: RwLock<Option<Arc<SettingsMap>>>,
	write_lock: Mutex<()>,
}

impl SettingsService {
	pub fn new(registry: Arc<FrozenSettingsRegistry>, options: Arc<dyn OptionsAdapter>) -> Self {
		Self { registry, options, cache: RwLock::new(None), write_lock: Mutex::new(()) }
	}

	/// Get reference to registry (for listing all settings)
	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}

	/// All persisted values
	pub async fn load(&self) -> SpResult<Arc<SettingsMap>> {
		if let Some(map) = self.cached() {
			return Ok(map);
		}

		// Fill under the write lock so a read started before a write cannot
		// replace the newer map cached by that write
		let _guard = self.write_lock.lock().await;
		if let Some(map) = self.cached() {
			return Ok(map);
		}
		let map = Arc::new(self.read_stored().await?);
		*self.cache.write() = Some(Arc::clone(&map));
		Ok(map)
	}

	fn cached(&self) -> Option<Arc<SettingsMap>> {
		self.cache.read().clone()
	}

	async fn read_stored(&self) -> SpResult<SettingsMap> {
		match self.options.read_option(SETTINGS_OPTION).await? {
			None => Ok(SettingsMap::new()),
			Some(serde_json::Value::Object(obj)) => {
				Ok(obj.into_iter().map(|(k, v)| (k, SettingValue::from(v))).collect())
			}
			Some(other) => {
				warn!("Option '{}' is not a map, ignoring stored {}", SETTINGS_OPTION, other);
				Ok(SettingsMap::new())
			}
		}
	}

	async fn store(&self, map: SettingsMap) -> SpResult<Arc<SettingsMap>> {
		let json = serde_json::to_value(&map)?;
		self.options.update_option(SETTINGS_OPTION, Some(json)).await?;

		let map = Arc::new(map);
		*self.cache.write() = Some(Arc::clone(&map));
		Ok(map)
	}

	/// Drop cached values so the next read goes to the options store
	pub fn invalidate(&self) {
		*self.cache.write() = None;
	}

	/// Get setting value (persisted -> schema default)
	pub async fn get(&self, key: &str) -> SpResult<Option<SettingValue>> {
		if let Some(value) = self.load().await?.get(key) {
			return Ok(Some(value.clone()));
		}
		Ok(self.registry.setting(key).and_then(Setting::schema_default))
	}

	pub async fn get_or(&self, key: &str, default: impl Into<SettingValue>) -> SpResult<SettingValue> {
		Ok(self.get(key).await?.unwrap_or_else(|| default.into()))
	}

	pub async fn get_string(&self, key: &str) -> SpResult<Option<String>> {
		match self.get(key).await? {
			None => Ok(None),
			Some(SettingValue::String(s)) => Ok(Some(s)),
			Some(SettingValue::Json(serde_json::Value::String(s))) => Ok(Some(s)),
			Some(v) => Err(Error::ValidationError(format!(
				"Setting '{}' is not a string, got {}",
				key,
				v.type_name()
			))),
		}
	}

	pub async fn get_int(&self, key: &str) -> SpResult<Option<i64>> {
		match self.get(key).await? {
			None => Ok(None),
			Some(SettingValue::Int(i)) => Ok(Some(i)),
			// Form submissions persist numbers as strings
			Some(SettingValue::String(s)) if s.is_empty() => Ok(None),
			Some(SettingValue::String(s)) => s.trim().parse().map(Some).map_err(|_| {
				Error::ValidationError(format!("Setting '{}' is not an integer: {}", key, s))
			}),
			Some(v) => Err(Error::ValidationError(format!(
				"Setting '{}' is not an integer, got {}",
				key,
				v.type_name()
			))),
		}
	}

	/// Checkbox style lookup: `"yes"` or `true`
	pub async fn is_enabled(&self, key: &str) -> SpResult<bool> {
		Ok(self.get(key).await?.is_some_and(|v| v.is_enabled()))
	}

	/// Value displayed in a setting's control (persisted -> registered -> schema default)
	pub fn value_for_render(&self, setting: &Setting, stored: &SettingsMap) -> Option<SettingValue> {
		stored
			.get(&setting.id)
			.cloned()
			.or_else(|| setting.value.clone())
			.or_else(|| setting.schema_default())
	}

	/// Set a single registered setting
	pub async fn update(&self, key: &str, value: SettingValue) -> SpResult<()> {
		let def = self
			.registry
			.setting(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;
		if let Some(schema) = &def.schema {
			validate_value(key, schema, &value.to_json())?;
		}

		let _guard = self.write_lock.lock().await;
		let mut map = self.read_stored().await?;
		map.insert(key.to_string(), value);
		self.store(map).await?;

		info!("Setting '{}' updated", key);
		Ok(())
	}

	/// Remove a persisted value (falls back to the schema default)
	pub async fn delete(&self, key: &str) -> SpResult<bool> {
		let _guard = self.write_lock.lock().await;
		let mut map = self.read_stored().await?;
		let removed = map.remove(key).is_some();
		if removed {
			self.store(map).await?;
			info!("Setting '{}' deleted", key);
		}
		Ok(removed)
	}

	/// Persist a submitted settings form for one subsection
	///
	/// Submitted values are converted to their schema type and validated; a
	/// single invalid value rejects the whole submission. Valid values are
	/// merged over the saved ones and blank values remove the saved value.
	/// Checkbox settings of the subsection that are absent from the
	/// submission are stored as `"no"`; other settings keep their saved value.
	pub async fn save_form_submission<I>(
		&self,
		section: &str,
		subsection: &str,
		fields: I,
	) -> SpResult<Arc<SettingsMap>>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		if self.registry.subsection(section, subsection).is_none() {
			return Err(Error::NotFound);
		}

		let mut submitted: BTreeMap<String, serde_json::Value> = BTreeMap::new();
		for (name, value) in fields {
			let Some(id) = parse_field_name(&name) else {
				continue;
			};
			if self.registry.setting(id).is_none() {
				warn!("Ignoring submitted value for unregistered setting '{}'", id);
				continue;
			}
			if name.ends_with("[]") {
				let entry = submitted
					.entry(id.to_string())
					.or_insert_with(|| serde_json::Value::Array(Vec::new()));
				if let serde_json::Value::Array(values) = entry {
					values.push(serde_json::Value::String(value));
				}
			} else {
				submitted.insert(id.to_string(), serde_json::Value::String(value));
			}
		}

		let mut incoming = SettingsMap::new();
		let mut cleared = Vec::new();
		for (id, raw) in &submitted {
			let schema = self.registry.setting(id).and_then(|s| s.schema.as_ref());
			let value = match schema {
				Some(schema) => coerce_form_value(id, schema, raw.clone())?,
				None => Some(raw.clone()),
			};
			match value {
				Some(value) => {
					incoming.insert(id.clone(), SettingValue::from(value));
				}
				None => cleared.push(id.clone()),
			}
		}

		let _guard = self.write_lock.lock().await;
		let mut map = self.read_stored().await?;
		for setting in self.registry.settings_of(section, subsection) {
			if setting.kind.is_checkbox() && !submitted.contains_key(&setting.id) {
				map.insert(setting.id.clone(), SettingValue::from(UNCHECKED));
			}
		}
		for id in &cleared {
			map.remove(id);
		}
		let updated = incoming.len();
		map.extend(incoming);
		let map = self.store(map).await?;

		info!(
			"Saved {} settings for {}/{} ({} cleared)",
			updated,
			section,
			subsection,
			cleared.len()
		);
		Ok(map)
	}

	/// Values exposed through the REST settings surface
	pub async fn rest_values(&self) -> SpResult<SettingsMap> {
		let stored = self.load().await?;
		Ok(self.registry.pre_validate_rest(&stored))
	}

	/// Validate and persist a REST settings payload
	///
	/// Keys without a registered schema are stripped before validation.
	pub async fn update_from_rest(
		&self,
		payload: serde_json::Map<String, serde_json::Value>,
	) -> SpResult<SettingsMap> {
		let mut incoming = SettingsMap::new();
		for (key, value) in payload {
			let Some(schema) = self.registry.setting(&key).and_then(|s| s.schema.as_ref()) else {
				debug!("Stripping '{}' from REST payload: no registered schema", key);
				continue;
			};
			validate_value(&key, schema, &value)?;
			incoming.insert(key, SettingValue::from(value));
		}

		let _guard = self.write_lock.lock().await;
		let mut map = self.read_stored().await?;
		map.extend(incoming);
		let map = self.store(map).await?;
		Ok(self.registry.pre_validate_rest(&map))
	}

	/// Render every setting of a subsection as form-table rows
	pub async fn render_subsection(
		&self,
		renderer: &FieldRenderer,
		section: &str,
		subsection: &str,
	) -> SpResult<String> {
		if self.registry.subsection(section, subsection).is_none() {
			return Err(Error::NotFound);
		}

		let stored = self.load().await?;
		let mut html = String::new();
		for setting in self.registry.settings_of(section, subsection) {
			let value = self.value_for_render(setting, &stored);
			html.push_str(&renderer.render_row(setting, value.as_ref())?);
		}
		Ok(html)
	}
}


// vim: ts=4
