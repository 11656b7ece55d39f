//! SQLite-backed options store

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use simpay::{options_adapter::OptionsAdapter, prelude::*};

mod option;
mod schema;

#[derive(Debug)]
pub struct OptionsAdapterSqlite {
	db: SqlitePool,
}

impl OptionsAdapterSqlite {
	/// Open (or create) the options database in `dir`
	pub async fn new(dir: impl AsRef<Path>) -> SpResult<Self> {
		tokio::fs::create_dir_all(dir.as_ref()).await?;
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.as_ref().join("options.db"))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		info!("Options database opened at {}", dir.as_ref().display());
		Ok(Self { db })
	}
}

#[async_trait]
impl OptionsAdapter for OptionsAdapterSqlite {
	async fn read_option(&self, name: &str) -> SpResult<Option<serde_json::Value>> {
		option::read(&self.db, name).await
	}

	async fn update_option(&self, name: &str, value: Option<serde_json::Value>) -> SpResult<()> {
		option::update(&self.db, name, value).await
	}

	async fn list_options(&self) -> SpResult<Vec<String>> {
		option::list(&self.db).await
	}
}

// vim: ts=4
