use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use crate::route_auth::require_admin;
use crate::settings::handler;

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/settings", get(handler::get_settings).post(handler::post_settings))
		.route("/api/settings/schema", get(handler::get_settings_schema))
		.route(
			"/settings/{section}/{subsection}",
			get(handler::get_settings_form).post(handler::post_settings_form),
		)
		.layer(middleware::from_fn_with_state(app.clone(), require_admin))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
