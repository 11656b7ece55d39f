//! HTTP tests for the settings API and settings forms

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::*;
use simpay_types::options_adapter::OptionsAdapter;

#[tokio::test]
async fn test_get_settings_empty() {
	let t = test_app(None);
	let res = t.send(get("/api/settings")).await;

	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(body_json(res).await, json!({"simpay_settings": {}}));
}

#[tokio::test]
async fn test_post_settings_strips_unknown_keys() {
	let t = test_app(None);
	let res = t
		.send(post_json(
			"/api/settings",
			json!({"simpay_settings": {"currency": "EUR", "legacy_key": "x"}}),
		))
		.await;

	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(body_json(res).await, json!({"simpay_settings": {"currency": "EUR"}}));

	let res = t.send(get("/api/settings")).await;
	assert_eq!(body_json(res).await, json!({"simpay_settings": {"currency": "EUR"}}));

	let stored = t.options.read_option("simpay_settings").await.unwrap().unwrap();
	assert_eq!(stored, json!({"currency": "EUR"}));
}

#[tokio::test]
async fn test_post_settings_rejects_invalid_value() {
	let t = test_app(None);
	let res = t
		.send(post_json("/api/settings", json!({"simpay_settings": {"currency": "XYZ"}})))
		.await;

	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	let body = body_json(res).await;
	assert_eq!(body["code"], "invalid_param");
	assert!(t.options.read_option("simpay_settings").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_settings_schema() {
	let t = test_app(None);
	let res = t.send(get("/api/settings/schema")).await;

	assert_eq!(res.status(), StatusCode::OK);
	let body = body_json(res).await;
	assert_eq!(body["name"], "simpay_settings");
	assert_eq!(body["schema"]["properties"]["currency"]["type"], "string");
	assert_eq!(body["schema"]["default"]["currency_position"], "left");
	assert!(body["schema"]["default"].get("currency").is_none());
}

#[tokio::test]
async fn test_get_settings_form() {
	let t = test_app(None);
	let res = t.send(get("/settings/general/currency")).await;

	assert_eq!(res.status(), StatusCode::OK);
	let html = body_string(res).await;
	assert!(html.contains(r#"name="simpay_settings[currency]""#));
	assert!(html.contains(r#"<option value="USD" selected>"#));
	assert!(html.contains(r#"action="/settings/general/currency""#));
	assert!(!html.contains("Settings saved."));
}

#[tokio::test]
async fn test_unknown_subsection_is_not_found() {
	let t = test_app(None);

	let res = t.send(get("/settings/general/nope")).await;
	assert_eq!(res.status(), StatusCode::NOT_FOUND);

	let res = t.send(post_form("/settings/nope/currency", "simpay_settings%5Bcurrency%5D=EUR")).await;
	assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_settings_form_redirects() {
	let t = test_app(None);
	let res = t
		.send(post_form(
			"/settings/general/currency",
			"simpay_settings%5Bcurrency%5D=EUR&simpay_settings%5Bcurrency_position%5D=right",
		))
		.await;

	assert_eq!(res.status(), StatusCode::SEE_OTHER);
	assert_eq!(
		res.headers().get(header::LOCATION).unwrap(),
		"/settings/general/currency?settings-updated=true"
	);

	let stored = t.options.read_option("simpay_settings").await.unwrap().unwrap();
	assert_eq!(stored, json!({"currency": "EUR", "currency_position": "right", "separator": "no"}));

	let res = t.send(get("/settings/general/currency?settings-updated=true")).await;
	let html = body_string(res).await;
	assert!(html.contains("Settings saved."));
	assert!(html.contains(r#"<option value="EUR" selected>"#));
	assert!(html.contains(r#"<option value="right" selected>"#));
}

#[tokio::test]
async fn test_form_values_round_trip_through_rest() {
	let t = test_app(None);
	let res = t
		.send(post_form(
			"/settings/payment-confirmations/pages",
			"simpay_settings%5Bsuccess_page%5D=12&simpay_settings%5Bfailure_page%5D=",
		))
		.await;
	assert_eq!(res.status(), StatusCode::SEE_OTHER);
	t.send(post_form("/settings/general/currency", "simpay_settings%5Bcurrency%5D=EUR")).await;

	let res = t.send(get("/api/settings")).await;
	let body = body_json(res).await;
	assert_eq!(
		body,
		json!({"simpay_settings": {"currency": "EUR", "separator": "no", "success_page": 12}})
	);

	let res = t.send(post_json("/api/settings", body.clone())).await;
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(body_json(res).await, body);
}

#[tokio::test]
async fn test_invalid_form_values_rejected() {
	let t = test_app(None);

	let res = t
		.send(post_form("/settings/payment-confirmations/pages", "simpay_settings%5Bsuccess_page%5D=abc"))
		.await;
	assert_eq!(res.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(res).await["code"], "invalid_param");

	let res = t.send(post_form("/settings/general/currency", "simpay_settings%5Bcurrency%5D=XYZ")).await;
	assert_eq!(res.status(), StatusCode::BAD_REQUEST);

	assert!(t.options.read_option("simpay_settings").await.unwrap().is_none());
	let res = t.send(get("/api/settings")).await;
	assert_eq!(body_json(res).await, json!({"simpay_settings": {}}));
}

#[tokio::test]
async fn test_unchecked_checkbox_stored_as_no() {
	let t = test_app(None);
	t.send(post_form("/settings/general/currency", "simpay_settings%5Bseparator%5D=yes")).await;
	assert_eq!(t.app.settings.get_string("separator").await.unwrap().as_deref(), Some("yes"));

	t.send(post_form("/settings/general/currency", "simpay_settings%5Bcurrency%5D=GBP")).await;
	assert_eq!(t.app.settings.get_string("separator").await.unwrap().as_deref(), Some("no"));
	assert_eq!(t.app.settings.get_string("currency").await.unwrap().as_deref(), Some("GBP"));
}

#[tokio::test]
async fn test_form_submission_keeps_other_subsections() {
	let t = test_app(None);
	t.send(post_form("/settings/general/currency", "simpay_settings%5Bseparator%5D=yes")).await;

	let res = t
		.send(post_form(
			"/settings/stripe/account",
			"simpay_settings%5Btest_mode%5D=disabled&simpay_settings%5Bcurrency%5D=JPY&_wpnonce=abc",
		))
		.await;
	assert_eq!(res.status(), StatusCode::SEE_OTHER);

	let settings = &t.app.settings;
	assert_eq!(settings.get_string("separator").await.unwrap().as_deref(), Some("yes"));
	assert_eq!(settings.get_string("test_mode").await.unwrap().as_deref(), Some("disabled"));
	// currency is registered, so a stray field from another form still lands
	assert_eq!(settings.get_string("currency").await.unwrap().as_deref(), Some("JPY"));
}

#[tokio::test]
async fn test_admin_token_required() {
	let t = test_app(Some("s3cret"));

	let res = t.send(get("/api/settings")).await;
	assert_eq!(res.status(), StatusCode::FORBIDDEN);

	let mut req = get("/api/settings");
	req.headers_mut().insert(header::AUTHORIZATION, "Bearer wrong".parse().unwrap());
	assert_eq!(t.send(req).await.status(), StatusCode::FORBIDDEN);

	let mut req = get("/api/settings");
	req.headers_mut().insert(header::AUTHORIZATION, "Bearer s3cret".parse().unwrap());
	assert_eq!(t.send(req).await.status(), StatusCode::OK);
}

// vim: ts=4
