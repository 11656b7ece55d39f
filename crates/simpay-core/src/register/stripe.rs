//! Stripe account settings: API keys, test mode and checkout locale

use crate::settings::{
	InputField, InputType, Section, Setting, SettingOption, SettingSchema, SettingsRegistry,
	Subsection,
};

const LOCALES: &[(&str, &str)] = &[
	("auto", "Auto-detect"),
	("da", "Danish"),
	("de", "German"),
	("en", "English"),
	("es", "Spanish"),
	("fi", "Finnish"),
	("fr", "French"),
	("it", "Italian"),
	("ja", "Japanese"),
	("nb", "Norwegian"),
	("nl", "Dutch"),
	("pl", "Polish"),
	("pt", "Portuguese"),
	("sv", "Swedish"),
	("zh", "Chinese"),
];

const COUNTRIES: &[(&str, &str)] = &[
	("US", "United States"),
	("AU", "Australia"),
	("AT", "Austria"),
	("BE", "Belgium"),
	("CA", "Canada"),
	("DK", "Denmark"),
	("FI", "Finland"),
	("FR", "France"),
	("DE", "Germany"),
	("IE", "Ireland"),
	("IT", "Italy"),
	("JP", "Japan"),
	("NL", "Netherlands"),
	("NZ", "New Zealand"),
	("NO", "Norway"),
	("ES", "Spain"),
	("SE", "Sweden"),
	("CH", "Switzerland"),
	("GB", "United Kingdom"),
];

fn options(pairs: &[(&str, &str)]) -> Vec<SettingOption> {
	pairs.iter().map(|(value, label)| SettingOption::new(*value, *label)).collect()
}

fn key_input(placeholder: &str, secret: bool) -> InputField {
	InputField {
		input_type: Some(if secret { InputType::Password } else { InputType::Text }),
		placeholder: Some(placeholder.to_string()),
		classes: vec!["regular-text".into()],
		..InputField::default()
	}
}

/// Register all Stripe settings
pub fn register_settings(registry: &mut SettingsRegistry) {
	let mut r = registry.registrar("stripe");
	r.section(Section::new("stripe", "Stripe").priority(20))
		.subsection(Subsection::new("account", "stripe", "Account").priority(10))
		.subsection(Subsection::new("locale", "stripe", "Locale").priority(20))
		.setting(
			Setting::builder("test_mode")
				.section("stripe")
				.subsection("account")
				.label("Test Mode")
				.priority(10)
				.schema(SettingSchema::string().allowed(["enabled", "disabled"]).default("enabled"))
				.radio(vec![
					SettingOption::new("enabled", "Enabled"),
					SettingOption::new("disabled", "Disabled"),
				])
				.description("While in test mode no live payments are processed."),
		);

	// API keys, test keys first
	for (id, label, placeholder, secret, priority) in [
		("test_publishable_key", "Test Publishable Key", "pk_test_", false, 20),
		("test_secret_key", "Test Secret Key", "sk_test_", true, 30),
		("live_publishable_key", "Live Publishable Key", "pk_live_", false, 40),
		("live_secret_key", "Live Secret Key", "sk_live_", true, 50),
	] {
		r.setting(
			Setting::builder(id)
				.section("stripe")
				.subsection("account")
				.label(label)
				.priority(priority)
				.schema(SettingSchema::string())
				.input(key_input(placeholder, secret)),
		);
	}

	r.setting(
		Setting::builder("stripe_checkout_locale")
			.section("stripe")
			.subsection("locale")
			.label("Stripe Checkout Locale")
			.priority(10)
			.schema(SettingSchema::string().allowed(LOCALES.iter().map(|(l, _)| *l)).default("auto"))
			.select(options(LOCALES)),
	)
	.setting(
		Setting::builder("account_country")
			.section("stripe")
			.subsection("locale")
			.label("Account Country")
			.priority(20)
			.schema(SettingSchema::string().allowed(COUNTRIES.iter().map(|(c, _)| *c)).default("US"))
			.select(options(COUNTRIES)),
	);
}


// vim: ts=4
