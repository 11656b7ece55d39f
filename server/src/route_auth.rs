//! Bearer token guard for the settings routes

use axum::{
	extract::{Request, State},
	http::header::AUTHORIZATION,
	middleware::Next,
	response::Response,
};

use crate::prelude::*;

pub async fn require_admin(State(app): State<App>, req: Request, next: Next) -> SpResult<Response> {
	if let Some(expected) = app.admin_token.as_deref() {
		let token = req
			.headers()
			.get(AUTHORIZATION)
			.and_then(|h| h.to_str().ok())
			.and_then(|h| h.strip_prefix("Bearer "));

		if token != Some(expected) {
			warn!("Rejected {} {}: missing or invalid admin token", req.method(), req.uri().path());
			return Err(Error::PermissionDenied);
		}
	}

	Ok(next.run(req).await)
}

// vim: ts=4
