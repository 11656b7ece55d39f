//! Setting definitions and their control kinds

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use crate::prelude::*;

use super::collection::CollectionItem;
use super::section::DEFAULT_PRIORITY;

/// Renderer for [`SettingKind::Custom`] settings, given the current value
pub type CustomRenderer = Arc<dyn Fn(&Setting, Option<&SettingValue>) -> String + Send + Sync>;

/// JSON-schema type of a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
	String,
	Boolean,
	Integer,
	Number,
	Array,
	Object,
}

impl SchemaType {
	pub fn name(self) -> &'static str {
		match self {
			SchemaType::String => "string",
			SchemaType::Boolean => "boolean",
			SchemaType::Integer => "integer",
			SchemaType::Number => "number",
			SchemaType::Array => "array",
			SchemaType::Object => "object",
		}
	}
}

/// Type descriptor exposed through the REST settings schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSchema {
	#[serde(rename = "type")]
	pub typ: SchemaType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<serde_json::Value>,
	#[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
	pub allowed: Option<Vec<serde_json::Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub items: Option<Box<SettingSchema>>,
}

impl SettingSchema {
	pub fn new(typ: SchemaType) -> Self {
		Self { typ, default: None, allowed: None, items: None }
	}

	pub fn string() -> Self {
		Self::new(SchemaType::String)
	}

	pub fn integer() -> Self {
		Self::new(SchemaType::Integer)
	}

	pub fn default(mut self, value: impl Into<serde_json::Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Restrict the value to a fixed set of strings
	pub fn allowed<I, S>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.allowed =
			Some(values.into_iter().map(|v| serde_json::Value::String(v.into())).collect());
		self
	}

	pub fn items(mut self, items: SettingSchema) -> Self {
		self.items = Some(Box::new(items));
		self
	}
}

/// `type` attribute of an input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
	Text,
	Password,
	Email,
	Url,
	Number,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputField {
	pub input_type: Option<InputType>,
	pub placeholder: Option<String>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub step: Option<f64>,
	pub readonly: bool,
	pub classes: Vec<String>,
}

/// One value/label pair of a select or radio control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingOption {
	pub value: String,
	pub label: String,
}

impl SettingOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self { value: value.into(), label: label.into() }
	}
}

/// Control used to edit a setting
#[derive(Clone)]
pub enum SettingKind {
	Input(InputField),
	Select { options: Vec<SettingOption> },
	Radio { options: Vec<SettingOption> },
	/// Checked submits `"yes"`, unchecked is stored as `"no"`
	Checkbox { input_label: String },
	Custom(CustomRenderer),
}

impl SettingKind {
	pub fn name(&self) -> &'static str {
		match self {
			SettingKind::Input(_) => "input",
			SettingKind::Select { .. } => "select",
			SettingKind::Radio { .. } => "radio",
			SettingKind::Checkbox { .. } => "checkbox",
			SettingKind::Custom(_) => "custom",
		}
	}

	pub fn is_checkbox(&self) -> bool {
		matches!(self, SettingKind::Checkbox { .. })
	}
}

impl Debug for SettingKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SettingKind::Input(input) => f.debug_tuple("Input").field(input).finish(),
			SettingKind::Select { options } => {
				f.debug_struct("Select").field("options", options).finish()
			}
			SettingKind::Radio { options } => {
				f.debug_struct("Radio").field("options", options).finish()
			}
			SettingKind::Checkbox { input_label } => {
				f.debug_struct("Checkbox").field("input_label", input_label).finish()
			}
			SettingKind::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

/// A single persisted, renderable configuration value
#[derive(Debug, Clone)]
pub struct Setting {
	pub id: String,
	pub section: String,
	pub subsection: String,
	pub label: String,
	pub description: Option<String>,
	pub priority: i32,
	pub schema: Option<SettingSchema>,
	/// Shown when nothing is persisted for this setting
	pub value: Option<SettingValue>,
	pub kind: SettingKind,
}

impl Setting {
	/// Create a builder for constructing a Setting
	pub fn builder(id: impl Into<String>) -> SettingBuilder {
		SettingBuilder::new(id)
	}

	/// Default value declared by the schema
	pub fn schema_default(&self) -> Option<SettingValue> {
		self.schema.as_ref().and_then(|s| s.default.clone()).map(SettingValue::from)
	}
}

impl CollectionItem for Setting {
	const KIND: &'static str = "setting";

	fn id(&self) -> &str {
		&self.id
	}

	fn priority(&self) -> i32 {
		self.priority
	}

	fn attribute(&self, name: &str) -> Option<&str> {
		match name {
			"id" => Some(&self.id),
			"section" => Some(&self.section),
			"subsection" => Some(&self.subsection),
			"label" => Some(&self.label),
			"kind" => Some(self.kind.name()),
			_ => None,
		}
	}
}

/// Builder for Setting with fluent API
pub struct SettingBuilder {
	id: String,
	section: Option<String>,
	subsection: Option<String>,
	label: Option<String>,
	description: Option<String>,
	priority: i32,
	schema: Option<SettingSchema>,
	value: Option<SettingValue>,
	kind: SettingKind,
}

impl SettingBuilder {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			section: None,
			subsection: None,
			label: None,
			description: None,
			priority: DEFAULT_PRIORITY,
			schema: None,
			value: None,
			kind: SettingKind::Input(InputField::default()),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn section(mut self, section: impl Into<String>) -> Self {
		self.section = Some(section.into());
		self
	}

	pub fn subsection(mut self, subsection: impl Into<String>) -> Self {
		self.subsection = Some(subsection.into());
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	pub fn schema(mut self, schema: SettingSchema) -> Self {
		self.schema = Some(schema);
		self
	}

	pub fn value(mut self, value: impl Into<SettingValue>) -> Self {
		self.value = Some(value.into());
		self
	}

	pub fn input(mut self, input: InputField) -> Self {
		self.kind = SettingKind::Input(input);
		self
	}

	pub fn select(mut self, options: Vec<SettingOption>) -> Self {
		self.kind = SettingKind::Select { options };
		self
	}

	pub fn radio(mut self, options: Vec<SettingOption>) -> Self {
		self.kind = SettingKind::Radio { options };
		self
	}

	pub fn checkbox(mut self, input_label: impl Into<String>) -> Self {
		self.kind = SettingKind::Checkbox { input_label: input_label.into() };
		self
	}

	pub fn custom<F>(mut self, render: F) -> Self
	where
		F: Fn(&Setting, Option<&SettingValue>) -> String + Send + Sync + 'static,
	{
		self.kind = SettingKind::Custom(Arc::new(render));
		self
	}

	/// Build the Setting, failing on the first missing required parameter
	pub fn build(self) -> SpResult<Setting> {
		if self.id.is_empty() {
			return Err(Error::MissingParameter("id"));
		}
		let section =
			self.section.filter(|s| !s.is_empty()).ok_or(Error::MissingParameter("section"))?;
		let subsection = self
			.subsection
			.filter(|s| !s.is_empty())
			.ok_or(Error::MissingParameter("subsection"))?;

		Ok(Setting {
			label: self.label.unwrap_or_else(|| self.id.clone()),
			id: self.id,
			section,
			subsection,
			description: self.description,
			priority: self.priority,
			schema: self.schema,
			value: self.value,
			kind: self.kind,
		})
	}
}


// vim: ts=4
