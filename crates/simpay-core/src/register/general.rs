//! General settings: currency formatting and plugin behaviour

use crate::settings::{
	Section, Setting, SettingOption, SettingSchema, SettingsRegistry, Subsection,
};

/// Currencies offered in the currency select, in display order
const CURRENCIES: &[(&str, &str)] = &[
	("USD", "United States Dollar"),
	("EUR", "Euro"),
	("GBP", "British Pound"),
	("CAD", "Canadian Dollar"),
	("AUD", "Australian Dollar"),
	("CHF", "Swiss Franc"),
	("JPY", "Japanese Yen"),
	("SEK", "Swedish Krona"),
	("NZD", "New Zealand Dollar"),
	("MXN", "Mexican Peso"),
];

/// Register all general settings
pub fn register_settings(registry: &mut SettingsRegistry) {
	let currencies: Vec<SettingOption> = CURRENCIES
		.iter()
		.map(|(code, name)| SettingOption::new(*code, format!("{} ({})", name, code)))
		.collect();

	registry
		.registrar("general")
		.section(Section::new("general", "General").priority(10))
		.subsection(Subsection::new("currency", "general", "Currency").priority(10))
		.subsection(Subsection::new("advanced", "general", "Advanced").priority(30))
		.setting(
			Setting::builder("currency")
				.section("general")
				.subsection("currency")
				.label("Currency")
				.priority(10)
				.schema(SettingSchema::string().allowed(CURRENCIES.iter().map(|(c, _)| *c)))
				.select(currencies)
				.value("USD"),
		)
		.setting(
			Setting::builder("currency_position")
				.section("general")
				.subsection("currency")
				.label("Currency Position")
				.priority(20)
				.schema(
					SettingSchema::string()
						.allowed(["left", "right", "left_space", "right_space"])
						.default("left"),
				)
				.select(vec![
					SettingOption::new("left", "Left ($99.99)"),
					SettingOption::new("right", "Right (99.99$)"),
					SettingOption::new("left_space", "Left with space ($ 99.99)"),
					SettingOption::new("right_space", "Right with space (99.99 $)"),
				]),
		)
		.setting(
			Setting::builder("separator")
				.section("general")
				.subsection("currency")
				.label("Separators")
				.priority(30)
				.schema(SettingSchema::string().allowed(["yes", "no"]).default("no"))
				.checkbox("Use a comma when formatting decimal amounts and use a period to separate thousands."),
		)
		.setting(
			Setting::builder("default_plugin_styles")
				.section("general")
				.subsection("advanced")
				.label("Opinionated Styles")
				.priority(10)
				.schema(SettingSchema::string().allowed(["enabled", "disabled"]).default("enabled"))
				.radio(vec![
					SettingOption::new("enabled", "Enabled"),
					SettingOption::new("disabled", "Disabled"),
				])
				.description("Apply the plugin's payment form styles instead of the theme's."),
		)
		.setting(
			Setting::builder("save_settings")
				.section("general")
				.subsection("advanced")
				.label("Save Settings")
				.priority(20)
				.schema(SettingSchema::string().allowed(["yes", "no"]).default("yes"))
				.checkbox("Keep settings and payment form data when the plugin is uninstalled."),
		);
}

// vim: ts=4
