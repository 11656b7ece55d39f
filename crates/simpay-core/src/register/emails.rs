//! Email settings: sender identity and payment receipt

use crate::settings::{
	InputField, InputType, Section, Setting, SettingSchema, SettingsRegistry, Subsection,
};

/// Register all email settings
pub fn register_settings(registry: &mut SettingsRegistry) {
	registry
		.registrar("emails")
		.section(Section::new("emails", "Emails").priority(40))
		.subsection(Subsection::new("general", "emails", "General").priority(10))
		.subsection(Subsection::new("payment-confirmation", "emails", "Payment Receipt").priority(20))
		.setting(
			Setting::builder("email_from_name")
				.section("emails")
				.subsection("general")
				.label("From Name")
				.priority(10)
				.schema(SettingSchema::string())
				.input(InputField { classes: vec!["regular-text".into()], ..InputField::default() })
				.description("The name emails are said to come from."),
		)
		.setting(
			Setting::builder("email_from_address")
				.section("emails")
				.subsection("general")
				.label("From Address")
				.priority(20)
				.schema(SettingSchema::string())
				.input(InputField {
					input_type: Some(InputType::Email),
					classes: vec!["regular-text".into()],
					..InputField::default()
				}),
		)
		.setting(
			Setting::builder("email_payment_confirmation")
				.section("emails")
				.subsection("payment-confirmation")
				.label("Enable")
				.priority(10)
				.schema(SettingSchema::string().allowed(["yes", "no"]).default("yes"))
				.checkbox("Send a payment receipt to the customer after a successful payment."),
		)
		.setting(
			Setting::builder("email_payment_confirmation_subject")
				.section("emails")
				.subsection("payment-confirmation")
				.label("Subject")
				.priority(20)
				.schema(SettingSchema::string().default("Payment Receipt for {form-title}"))
				.input(InputField { classes: vec!["regular-text".into()], ..InputField::default() }),
		);
}

// vim: ts=4
