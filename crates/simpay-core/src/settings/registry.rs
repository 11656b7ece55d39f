//! Registration context for sections, subsections and settings
//!
//! Registration happens on a mutable [`SettingsRegistry`]. Once every feature
//! has registered its items the registry is frozen: subsections are resolved
//! per section at that point and the result is shared read-only.

use std::collections::HashMap;

use crate::prelude::*;

use super::collection::{Collection, CollectionItem};
use super::schema;
use super::section::{Section, Subsection, subsection_key};
use super::setting::{Setting, SettingBuilder};

/// Mutable registry used during app initialization
#[derive(Debug, Default)]
pub struct SettingsRegistry {
	sections: Collection<Section>,
	subsections: Collection<Subsection>,
	settings: Collection<Setting>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register_section(&mut self, section: Section) -> SpResult<()> {
		self.sections.add(section)
	}

	/// Register a subsection; its parent section must already be registered
	pub fn register_subsection(&mut self, subsection: Subsection) -> SpResult<()> {
		if subsection.section.is_empty() {
			return Err(Error::MissingParameter("section"));
		}
		if !self.sections.contains(&subsection.section) {
			return Err(Error::UnknownParent { kind: "section", id: subsection.section });
		}
		self.subsections.add(subsection)
	}

	/// Register a setting; its section and subsection must already be registered
	pub fn register_setting(&mut self, setting: Setting) -> SpResult<()> {
		if setting.id.is_empty() {
			return Err(Error::MissingParameter("id"));
		}
		if !self.sections.contains(&setting.section) {
			return Err(Error::UnknownParent { kind: "section", id: setting.section });
		}
		if !self.subsections.contains(&subsection_key(&setting.section, &setting.subsection)) {
			return Err(Error::UnknownParent {
				kind: "subsection",
				id: subsection_key(&setting.section, &setting.subsection),
			});
		}
		self.settings.add(setting)
	}

	/// Registrar for one feature module, reporting invalid items as warnings
	pub fn registrar(&mut self, feature: &'static str) -> Registrar<'_> {
		Registrar { registry: self, feature, rejected: Vec::new() }
	}

	pub fn section(&self, id: &str) -> Option<&Section> {
		self.sections.get_item(id)
	}

	pub fn sections(&self) -> Vec<&Section> {
		self.sections.get_items()
	}

	/// Subsections currently registered for a section
	///
	/// Queried live on every call, so items registered in between are seen.
	pub fn subsections_of(&self, section: &str) -> Vec<&Subsection> {
		self.subsections.by("section", section)
	}

	pub fn setting(&self, id: &str) -> Option<&Setting> {
		self.settings.get_item(id)
	}

	pub fn settings(&self) -> Vec<&Setting> {
		self.settings.get_items()
	}

	/// Number of registered settings
	pub fn len(&self) -> usize {
		self.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.is_empty()
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		info!(
			"Freezing settings registry with {} sections, {} subsections, {} settings",
			self.sections.len(),
			self.subsections.len(),
			self.settings.len()
		);

		let subsections_by_section = self
			.sections
			.get_items()
			.into_iter()
			.map(|section| {
				let subsections =
					self.subsections.by("section", &section.id).into_iter().cloned().collect();
				(section.id.clone(), subsections)
			})
			.collect();

		FrozenSettingsRegistry {
			sections: self.sections,
			subsections: self.subsections,
			settings: self.settings,
			subsections_by_section,
		}
	}
}

/// Registers items for one feature, logging and skipping invalid ones
pub struct Registrar<'a> {
	registry: &'a mut SettingsRegistry,
	feature: &'static str,
	rejected: Vec<String>,
}

impl Registrar<'_> {
	pub fn section(&mut self, section: Section) -> &mut Self {
		let id = section.id.clone();
		let res = self.registry.register_section(section);
		self.report("section", &id, res)
	}

	pub fn subsection(&mut self, subsection: Subsection) -> &mut Self {
		let id = subsection.key();
		let res = self.registry.register_subsection(subsection);
		self.report("subsection", &id, res)
	}

	pub fn setting(&mut self, builder: SettingBuilder) -> &mut Self {
		let id = builder.id().to_string();
		let res = builder.build().and_then(|setting| self.registry.register_setting(setting));
		self.report("setting", &id, res)
	}

	/// Ids of the items this registrar skipped
	pub fn rejected(&self) -> &[String] {
		&self.rejected
	}

	fn report(&mut self, kind: &str, id: &str, res: SpResult<()>) -> &mut Self {
		if let Err(err) = res {
			self.rejected.push(id.to_string());
			warn!("Doing it wrong: {} registered invalid {} '{}': {}", self.feature, kind, id, err);
		}
		self
	}
}

/// Immutable registry shared by the settings service and the HTTP surface
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	sections: Collection<Section>,
	subsections: Collection<Subsection>,
	settings: Collection<Setting>,
	subsections_by_section: HashMap<String, Vec<Subsection>>,
}

impl FrozenSettingsRegistry {
	pub fn section(&self, id: &str) -> Option<&Section> {
		self.sections.get_item(id)
	}

	pub fn sections(&self) -> Vec<&Section> {
		self.sections.get_items()
	}

	pub fn subsection(&self, section: &str, id: &str) -> Option<&Subsection> {
		self.subsections.get_item(&subsection_key(section, id))
	}

	/// Subsections of a section in priority order, resolved at freeze time
	pub fn subsections_of(&self, section: &str) -> &[Subsection] {
		self.subsections_by_section.get(section).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn setting(&self, id: &str) -> Option<&Setting> {
		self.settings.get_item(id)
	}

	/// All settings in priority order
	pub fn settings(&self) -> Vec<&Setting> {
		self.settings.get_items()
	}

	/// Settings of one subsection in priority order
	pub fn settings_of(&self, section: &str, subsection: &str) -> Vec<&Setting> {
		self.settings.filter(|s| s.section == section && s.subsection == subsection)
	}

	/// Schema exposed through the REST settings surface
	pub fn api_schema(&self) -> serde_json::Value {
		schema::api_schema(&self.settings.get_items())
	}

	/// Stored values that may be handed to REST schema validation
	pub fn pre_validate_rest(&self, stored: &SettingsMap) -> SettingsMap {
		schema::pre_validate_rest(self, stored)
	}

	pub fn len(&self) -> usize {
		self.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.is_empty()
	}
}


// vim: ts=4
