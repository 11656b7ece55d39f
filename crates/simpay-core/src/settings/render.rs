//! Form control rendering for settings
//!
//! Built-in controls are Handlebars templates, so every value, label and
//! attribute is HTML escaped. Field names follow the options API form
//! convention `simpay_settings[<id>]`, which [`parse_field_name`] reverses.

use handlebars::Handlebars;
use serde::Serialize;

use crate::prelude::*;

use super::registry::FrozenSettingsRegistry;
use super::setting::{InputType, Setting, SettingKind, SettingOption};

const INPUT_TEMPLATE: &str = r#"<input type="{{input_type}}" name="{{name}}" id="{{id}}" value="{{value}}"{{#if classes}} class="{{classes}}"{{/if}}{{#if placeholder}} placeholder="{{placeholder}}"{{/if}}{{#if min}} min="{{min}}"{{/if}}{{#if max}} max="{{max}}"{{/if}}{{#if step}} step="{{step}}"{{/if}}{{#if readonly}} readonly{{/if}} />"#;

const SELECT_TEMPLATE: &str = r#"<select name="{{name}}" id="{{id}}">{{#each options}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}</select>"#;

const RADIO_TEMPLATE: &str = r#"<fieldset id="{{id}}">{{#each options}}<label><input type="radio" name="{{../name}}" value="{{value}}"{{#if selected}} checked{{/if}} /> {{label}}</label><br />{{/each}}</fieldset>"#;

const CHECKBOX_TEMPLATE: &str = r#"<input type="checkbox" name="{{name}}" id="{{id}}" value="yes"{{#if checked}} checked{{/if}} /> <label for="{{id}}">{{input_label}}</label>"#;

const ROW_TEMPLATE: &str = r#"<tr><th scope="row"><label for="{{id}}">{{label}}</label></th><td>{{{control}}}{{#if description}}<p class="description">{{description}}</p>{{/if}}</td></tr>"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8" /><title>{{section_label}} &lsaquo; Simple Pay Settings</title></head>
<body><div class="wrap simpay-settings">
{{#if updated}}<div class="notice notice-success"><p>Settings saved.</p></div>{{/if}}
<form method="post" action="{{action}}"><h2>{{subsection_label}}</h2><table class="form-table">{{{rows}}}</table>
<p class="submit"><input type="submit" class="button button-primary" value="Save Changes" /></p></form>
</div></body></html>"#;

/// `name` attribute of a setting's form control
pub fn field_name(id: &str) -> String {
	format!("{}[{}]", SETTINGS_OPTION, id)
}

/// Recover the setting id from a `name` attribute built by [`field_name`]
///
/// Array-style names (`simpay_settings[id][]`) resolve to the same id.
pub fn parse_field_name(name: &str) -> Option<&str> {
	let rest = name.strip_prefix(SETTINGS_OPTION)?.strip_prefix('[')?;
	let end = rest.find(']')?;
	let id = &rest[..end];
	let tail = &rest[end + 1..];
	if id.is_empty() || !(tail.is_empty() || tail == "[]") {
		return None;
	}
	Some(id)
}

/// `id` attribute of a setting's form control
pub fn field_id(setting: &Setting) -> String {
	format!(
		"{}-{}-{}-{}",
		SETTINGS_OPTION.replace('_', "-"),
		setting.section,
		setting.subsection,
		setting.id
	)
}

/// Text representation of a value inside an attribute
fn display_value(value: Option<&SettingValue>) -> String {
	match value {
		None => String::new(),
		Some(SettingValue::String(s)) => s.clone(),
		Some(SettingValue::Int(i)) => i.to_string(),
		Some(SettingValue::Bool(b)) => String::from(if *b { "yes" } else { "no" }),
		Some(SettingValue::Json(serde_json::Value::String(s))) => s.clone(),
		Some(SettingValue::Json(serde_json::Value::Null)) => String::new(),
		Some(SettingValue::Json(j)) => j.to_string(),
	}
}

fn number_attr(value: Option<f64>) -> Option<String> {
	value.map(|v| v.to_string())
}

#[derive(Serialize)]
struct InputContext<'a> {
	input_type: &'static str,
	name: String,
	id: String,
	value: String,
	classes: String,
	placeholder: Option<&'a str>,
	min: Option<String>,
	max: Option<String>,
	step: Option<String>,
	readonly: bool,
}

#[derive(Serialize)]
struct OptionContext<'a> {
	value: &'a str,
	label: &'a str,
	selected: bool,
}

#[derive(Serialize)]
struct ChoiceContext<'a> {
	name: String,
	id: String,
	options: Vec<OptionContext<'a>>,
}

#[derive(Serialize)]
struct CheckboxContext<'a> {
	name: String,
	id: String,
	checked: bool,
	input_label: &'a str,
}

#[derive(Serialize)]
struct PageContext<'a> {
	section_label: &'a str,
	subsection_label: &'a str,
	action: String,
	rows: String,
	updated: bool,
}

/// URL of the settings form of a subsection
pub fn settings_url(section: &str, subsection: &str) -> String {
	format!("/settings/{}/{}", section, subsection)
}

#[derive(Serialize)]
struct RowContext<'a> {
	id: String,
	label: &'a str,
	control: String,
	description: Option<&'a str>,
}

/// Renders setting controls
pub struct FieldRenderer {
	handlebars: Handlebars<'static>,
}

impl FieldRenderer {
	pub fn new() -> SpResult<Self> {
		let mut handlebars = Handlebars::new();
		for (name, template) in [
			("input", INPUT_TEMPLATE),
			("select", SELECT_TEMPLATE),
			("radio", RADIO_TEMPLATE),
			("checkbox", CHECKBOX_TEMPLATE),
			("row", ROW_TEMPLATE),
			("page", PAGE_TEMPLATE),
		] {
			handlebars.register_template_string(name, template).map_err(|e| {
				Error::ConfigError(format!("Invalid field template '{}': {}", name, e))
			})?;
		}

		Ok(Self { handlebars })
	}

	fn render_template<T: Serialize>(&self, name: &str, data: &T) -> SpResult<String> {
		self.handlebars.render(name, data).map_err(|e| {
			warn!("Failed to render field template '{}': {}", name, e);
			Error::ValidationError(format!("Failed to render field: {}", e))
		})
	}

	/// Render the control of a setting with its current value
	pub fn render(&self, setting: &Setting, value: Option<&SettingValue>) -> SpResult<String> {
		let name = field_name(&setting.id);
		let id = field_id(setting);

		match &setting.kind {
			SettingKind::Input(input) => {
				let input_type = match input.input_type.unwrap_or(InputType::Text) {
					InputType::Text => "text",
					InputType::Password => "password",
					InputType::Email => "email",
					InputType::Url => "url",
					InputType::Number => "number",
				};
				self.render_template(
					"input",
					&InputContext {
						input_type,
						name,
						id,
						value: display_value(value),
						classes: input.classes.join(" "),
						placeholder: input.placeholder.as_deref(),
						min: number_attr(input.min),
						max: number_attr(input.max),
						step: number_attr(input.step),
						readonly: input.readonly,
					},
				)
			}
			SettingKind::Select { options } => {
				self.render_template("select", &choice_context(name, id, options, value))
			}
			SettingKind::Radio { options } => {
				self.render_template("radio", &choice_context(name, id, options, value))
			}
			SettingKind::Checkbox { input_label } => self.render_template(
				"checkbox",
				&CheckboxContext {
					name,
					id,
					checked: value.is_some_and(SettingValue::is_enabled),
					input_label,
				},
			),
			SettingKind::Custom(render) => Ok(render(setting, value)),
		}
	}

	/// Render a form-table row: label, control and description
	pub fn render_row(&self, setting: &Setting, value: Option<&SettingValue>) -> SpResult<String> {
		let control = self.render(setting, value)?;
		self.render_template(
			"row",
			&RowContext {
				id: field_id(setting),
				label: &setting.label,
				control,
				description: setting.description.as_deref(),
			},
		)
	}

	/// Render the settings page of a subsection around its form-table rows
	pub fn render_page(
		&self,
		registry: &FrozenSettingsRegistry,
		section: &str,
		subsection: &str,
		rows: String,
		updated: bool,
	) -> SpResult<String> {
		let current_section = registry.section(section).ok_or(Error::NotFound)?;
		let current = registry.subsection(section, subsection).ok_or(Error::NotFound)?;

		self.render_template(
			"page",
			&PageContext {
				section_label: &current_section.label,
				subsection_label: &current.label,
				action: settings_url(section, subsection),
				rows,
				updated,
			},
		)
	}
}

fn choice_context<'a>(
	name: String,
	id: String,
	options: &'a [SettingOption],
	value: Option<&SettingValue>,
) -> ChoiceContext<'a> {
	let current = display_value(value);
	ChoiceContext {
		name,
		id,
		options: options
			.iter()
			.map(|o| OptionContext { value: &o.value, label: &o.label, selected: o.value == current })
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::setting::InputField;

	fn setting(builder: crate::settings::setting::SettingBuilder) -> Setting {
		builder.section("general").subsection("currency").label("Label").build().unwrap()
	}

	#[test]
	fn test_field_name_roundtrip() {
		for id in ["currency", "test_secret_key", "a-b"] {
			let name = field_name(id);
			assert_eq!(name, format!("simpay_settings[{}]", id));
			assert_eq!(parse_field_name(&name), Some(id));
		}
		assert_eq!(parse_field_name("simpay_settings[list][]"), Some("list"));
		assert_eq!(parse_field_name("simpay_settings[]"), None);
		assert_eq!(parse_field_name("other[currency]"), None);
		assert_eq!(parse_field_name("simpay_settings[a][b]"), None);
		assert_eq!(parse_field_name("_wpnonce"), None);
	}

	#[test]
	fn test_field_id() {
		let s = setting(Setting::builder("currency"));
		assert_eq!(field_id(&s), "simpay-settings-general-currency-currency");
	}

	#[test]
	fn test_render_input_escapes_value() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("name").input(InputField {
			placeholder: Some("Your name".into()),
			..InputField::default()
		}));
		let html = renderer.render(&s, Some(&SettingValue::from("\"><script>"))).unwrap();

		assert!(html.starts_with(r#"<input type="text" name="simpay_settings[name]""#));
		assert!(html.contains(r#"placeholder="Your name""#));
		assert!(!html.contains("<script>"));
		assert!(!html.contains("readonly"));
	}

	#[test]
	fn test_render_number_input() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("success_page").input(InputField {
			input_type: Some(InputType::Number),
			min: Some(0.0),
			step: Some(1.0),
			..InputField::default()
		}));
		let html = renderer.render(&s, Some(&SettingValue::Int(42))).unwrap();

		assert!(html.contains(r#"type="number""#));
		assert!(html.contains(r#"value="42""#));
		assert!(html.contains(r#"min="0""#));
		assert!(html.contains(r#"step="1""#));
		assert!(!html.contains("max="));
	}

	#[test]
	fn test_render_select_marks_selected() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("currency").select(vec![
			SettingOption::new("USD", "US Dollar"),
			SettingOption::new("EUR", "Euro"),
		]));
		let html = renderer.render(&s, Some(&SettingValue::from("EUR"))).unwrap();

		assert!(html.contains(r#"<option value="USD">US Dollar</option>"#));
		assert!(html.contains(r#"<option value="EUR" selected>Euro</option>"#));
	}

	#[test]
	fn test_render_radio() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("test_mode").radio(vec![
			SettingOption::new("enabled", "Enabled"),
			SettingOption::new("disabled", "Disabled"),
		]));
		let html = renderer.render(&s, Some(&SettingValue::from("enabled"))).unwrap();

		assert!(html.contains(
			r#"<input type="radio" name="simpay_settings[test_mode]" value="enabled" checked />"#
		));
		assert!(html.contains(r#"value="disabled" />"#));
	}

	#[test]
	fn test_render_checkbox() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("separator").checkbox("Use a comma"));

		let checked = renderer.render(&s, Some(&SettingValue::from("yes"))).unwrap();
		assert!(checked.contains(r#"value="yes" checked"#));
		assert!(checked.contains("Use a comma</label>"));

		let unchecked = renderer.render(&s, Some(&SettingValue::from("no"))).unwrap();
		assert!(!unchecked.contains("checked"));
		let missing = renderer.render(&s, None).unwrap();
		assert!(!missing.contains("checked"));
	}

	#[test]
	fn test_render_custom() {
		let renderer = FieldRenderer::new().unwrap();
		let s = setting(Setting::builder("details").custom(|setting, value| {
			format!("<textarea name=\"{}\">{}</textarea>", field_name(&setting.id), display_value(value))
		}));
		let html = renderer.render(&s, Some(&SettingValue::from("Thanks"))).unwrap();
		assert_eq!(html, r#"<textarea name="simpay_settings[details]">Thanks</textarea>"#);
	}

	#[test]
	fn test_render_page() {
		use crate::settings::registry::SettingsRegistry;
		use crate::settings::section::{Section, Subsection};

		let mut registry = SettingsRegistry::new();
		registry
			.registrar("test")
			.section(Section::new("general", "General"))
			.section(Section::new("stripe", "Stripe & Co"))
			.subsection(Subsection::new("currency", "general", "Currency"))
			.subsection(Subsection::new("locale", "stripe", "Locale"));
		let frozen = registry.freeze();
		let renderer = FieldRenderer::new().unwrap();

		let html = renderer
			.render_page(&frozen, "stripe", "locale", "<tr></tr>".into(), true)
			.unwrap();
		assert!(html.contains("<title>Stripe &amp; Co &lsaquo; Simple Pay Settings</title>"));
		assert!(html.contains("<h2>Locale</h2>"));
		assert!(html.contains(r#"action="/settings/stripe/locale""#));
		assert!(html.contains("<table class=\"form-table\"><tr></tr></table>"));
		assert!(html.contains("Settings saved."));

		let html = renderer.render_page(&frozen, "general", "currency", String::new(), false).unwrap();
		assert!(!html.contains("Settings saved."));

		let res = renderer.render_page(&frozen, "general", "locale", String::new(), false);
		assert!(matches!(res, Err(Error::NotFound)));
	}

	#[test]
	fn test_render_row_with_description() {
		let renderer = FieldRenderer::new().unwrap();
		let s = Setting::builder("currency")
			.section("general")
			.subsection("currency")
			.label("Currency")
			.description("Used for all payments")
			.build()
			.unwrap();
		let html = renderer.render_row(&s, Some(&SettingValue::from("USD"))).unwrap();

		assert!(html.starts_with("<tr><th scope=\"row\"><label for=\"simpay-settings-general-currency-currency\">Currency</label>"));
		assert!(html.contains(r#"<input type="text""#));
		assert!(html.contains(r#"<p class="description">Used for all payments</p>"#));
	}
}

// vim: ts=4
