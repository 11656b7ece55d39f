//! Settings sections and subsections

use serde::Serialize;

use super::collection::CollectionItem;
use super::registry::FrozenSettingsRegistry;

pub const DEFAULT_PRIORITY: i32 = 10;

/// Top-level settings grouping (e.g. "Stripe", "General")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
	pub id: String,
	pub label: String,
	pub priority: i32,
}

impl Section {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self { id: id.into(), label: label.into(), priority: DEFAULT_PRIORITY }
	}

	pub fn priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	/// Subsections of this section, resolved when the registry was frozen
	pub fn subsections<'a>(&self, registry: &'a FrozenSettingsRegistry) -> &'a [Subsection] {
		registry.subsections_of(&self.id)
	}
}

impl CollectionItem for Section {
	const KIND: &'static str = "section";

	fn id(&self) -> &str {
		&self.id
	}

	fn priority(&self) -> i32 {
		self.priority
	}

	fn attribute(&self, name: &str) -> Option<&str> {
		match name {
			"id" => Some(&self.id),
			"label" => Some(&self.label),
			_ => None,
		}
	}
}

pub(crate) fn subsection_key(section: &str, id: &str) -> String {
	format!("{}/{}", section, id)
}

/// Grouping within a section (e.g. "Account", "Currency")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
	pub id: String,
	pub label: String,
	/// Parent section id
	pub section: String,
	pub priority: i32,
}

impl Subsection {
	pub fn new(id: impl Into<String>, section: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			section: section.into(),
			priority: DEFAULT_PRIORITY,
		}
	}

	pub fn priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}
}

impl CollectionItem for Subsection {
	const KIND: &'static str = "subsection";

	fn id(&self) -> &str {
		&self.id
	}

	/// Subsection ids are only unique within their section
	fn key(&self) -> String {
		subsection_key(&self.section, &self.id)
	}

	fn priority(&self) -> i32 {
		self.priority
	}

	fn attribute(&self, name: &str) -> Option<&str> {
		match name {
			"id" => Some(&self.id),
			"label" => Some(&self.label),
			"section" => Some(&self.section),
			_ => None,
		}
	}
}

// vim: ts=4
