//! Settings handlers

use std::collections::HashMap;

use axum::{
	Form, Json,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use simpay_core::settings::settings_url;
use simpay_types::types::SETTINGS_OPTION;

use crate::prelude::*;

/// REST representation of the `simpay_settings` option
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsBody {
	pub simpay_settings: Map<String, Value>,
}

fn to_body(values: SettingsMap) -> SettingsBody {
	SettingsBody {
		simpay_settings: values.into_iter().map(|(k, v)| (k, v.to_json())).collect(),
	}
}

/// GET /api/settings - Persisted settings that pass REST validation
pub async fn get_settings(State(app): State<App>) -> SpResult<(StatusCode, Json<SettingsBody>)> {
	let values = app.settings.rest_values().await?;
	Ok((StatusCode::OK, Json(to_body(values))))
}

/// POST /api/settings - Validate and merge a settings payload
pub async fn post_settings(
	State(app): State<App>,
	Json(body): Json<SettingsBody>,
) -> SpResult<(StatusCode, Json<SettingsBody>)> {
	info!("POST /api/settings with {} keys", body.simpay_settings.len());
	let values = app.settings.update_from_rest(body.simpay_settings).await?;
	Ok((StatusCode::OK, Json(to_body(values))))
}

/// GET /api/settings/schema - Schema of the `simpay_settings` option
pub async fn get_settings_schema(State(app): State<App>) -> (StatusCode, Json<Value>) {
	let schema = serde_json::json!({
		"name": SETTINGS_OPTION,
		"schema": app.settings_registry.api_schema(),
	});
	(StatusCode::OK, Json(schema))
}

/// GET /settings/{section}/{subsection} - Settings form of a subsection
pub async fn get_settings_form(
	State(app): State<App>,
	Path((section, subsection)): Path<(String, String)>,
	Query(query): Query<HashMap<String, String>>,
) -> SpResult<Html<String>> {
	let rows = app.settings.render_subsection(&app.renderer, &section, &subsection).await?;
	let updated = query.contains_key("settings-updated");
	let page =
		app.renderer.render_page(&app.settings_registry, &section, &subsection, rows, updated)?;
	Ok(Html(page))
}

/// POST /settings/{section}/{subsection} - Save a submitted settings form
pub async fn post_settings_form(
	State(app): State<App>,
	Path((section, subsection)): Path<(String, String)>,
	Form(fields): Form<Vec<(String, String)>>,
) -> SpResult<Redirect> {
	app.settings.save_form_submission(&section, &subsection, fields).await?;
	Ok(Redirect::to(&format!("{}?settings-updated=true", settings_url(&section, &subsection))))
}

// vim: ts=4
