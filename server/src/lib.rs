//! HTTP server for Simple Pay settings.
//!
//! Serves the REST settings API and the per-subsection settings forms on top
//! of the registry built by [`simpay_core::register`], persisting values in
//! an SQLite options store.

pub mod app;
pub mod config;
pub mod prelude;
pub mod route_auth;
pub mod routes;
pub mod settings;

use std::sync::Arc;

use simpay_options_adapter_sqlite::OptionsAdapterSqlite;

use crate::config::Config;
use crate::prelude::*;

pub use crate::app::{App, AppState};

/// Open the options store, build the registry and serve until ctrl-c
pub async fn run(config: Config) -> SpResult<()> {
	let options = Arc::new(OptionsAdapterSqlite::new(&config.db_dir).await?);
	let registry = Arc::new(simpay_core::register::default_registry());
	let app = AppState::new(registry, options, config.admin_token.clone())?;
	if app.admin_token.is_none() {
		warn!("SIMPAY_ADMIN_TOKEN is not set, settings routes are unauthenticated");
	}

	let router = routes::init(app);
	let listener = tokio::net::TcpListener::bind(config.listen).await?;
	info!("Listening on HTTP {}", config.listen);

	axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
	info!("Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		error!("Failed to listen for shutdown signal: {}", err);
	}
}

// vim: ts=4
