//! Shared setup for server integration tests

use std::sync::Arc;

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use simpay_server::{App, AppState, routes};
use simpay_types::options_adapter::{MemoryOptionsAdapter, OptionsAdapter};

pub struct TestApp {
	pub app: App,
	pub options: Arc<MemoryOptionsAdapter>,
	pub router: Router,
}

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// App over the default registry and an in-memory options store
pub fn test_app(admin_token: Option<&str>) -> TestApp {
	setup_test_logging();
	let options = Arc::new(MemoryOptionsAdapter::new());
	let registry = Arc::new(simpay_core::register::default_registry());
	let app = AppState::new(
		registry,
		Arc::clone(&options) as Arc<dyn OptionsAdapter>,
		admin_token.map(str::to_string),
	)
	.expect("app state");
	let router = routes::init(app.clone());

	TestApp { app, options, router }
}

impl TestApp {
	pub async fn send(&self, req: Request<Body>) -> Response {
		self.router.clone().oneshot(req).await.expect("request")
	}
}

pub async fn body_string(res: Response) -> String {
	let bytes = res.into_body().collect().await.expect("body").to_bytes();
	String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(res: Response) -> serde_json::Value {
	serde_json::from_str(&body_string(res).await).expect("json body")
}

pub fn get(uri: &str) -> Request<Body> {
	Request::get(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
	Request::post(uri)
		.header("content-type", "application/json")
		.body(Body::from(body.to_string()))
		.expect("request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
	Request::post(uri)
		.header("content-type", "application/x-www-form-urlencoded")
		.body(Body::from(body.to_string()))
		.expect("request")
}

// vim: ts=4
