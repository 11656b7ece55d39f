//! Payment confirmation settings: redirect pages and confirmation message

use crate::prelude::*;
use crate::settings::{
	InputField, InputType, Section, Setting, SettingSchema, SettingsRegistry, Subsection,
	field_id, field_name,
};

const DEFAULT_ONE_TIME_DETAILS: &str = "Thanks for your purchase. Here are the details of your payment:\n\n{charge-date}\n{total-amount}";

fn page_input() -> InputField {
	InputField {
		input_type: Some(InputType::Number),
		min: Some(0.0),
		step: Some(1.0),
		classes: vec!["small-text".into()],
		..InputField::default()
	}
}

/// Textarea for the confirmation message template
fn render_details(setting: &Setting, value: Option<&SettingValue>) -> String {
	let text = value.and_then(SettingValue::as_str).unwrap_or_default();
	format!(
		r#"<textarea name="{}" id="{}" rows="10" class="large-text">{}</textarea>"#,
		field_name(&setting.id),
		field_id(setting),
		handlebars::html_escape(text)
	)
}

/// Register all payment confirmation settings
pub fn register_settings(registry: &mut SettingsRegistry) {
	registry
		.registrar("payment-confirmations")
		.section(Section::new("payment-confirmations", "Payment Confirmations").priority(30))
		.subsection(Subsection::new("pages", "payment-confirmations", "Pages").priority(10))
		.subsection(
			Subsection::new("one-time", "payment-confirmations", "One-Time Payment").priority(20),
		)
		.setting(
			Setting::builder("success_page")
				.section("payment-confirmations")
				.subsection("pages")
				.label("Success Page")
				.priority(10)
				.schema(SettingSchema::integer())
				.input(page_input())
				.description("Page ID customers are sent to after a successful payment."),
		)
		.setting(
			Setting::builder("failure_page")
				.section("payment-confirmations")
				.subsection("pages")
				.label("Failure Page")
				.priority(20)
				.schema(SettingSchema::integer())
				.input(page_input())
				.description("Page ID customers are sent to when a payment fails."),
		)
		.setting(
			Setting::builder("one_time_payment_details")
				.section("payment-confirmations")
				.subsection("one-time")
				.label("Payment Details")
				.priority(10)
				.schema(SettingSchema::string().default(DEFAULT_ONE_TIME_DETAILS))
				.custom(render_details),
		);
}


// vim: ts=4
