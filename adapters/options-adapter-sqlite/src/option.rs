//! Option key-value store
//!
//! Each option is one row holding a JSON document.

use sqlx::{Row, SqlitePool};

use simpay::prelude::*;

/// List the names of all stored options
pub(crate) async fn list(db: &SqlitePool) -> SpResult<Vec<String>> {
	let rows = sqlx::query("SELECT name FROM options ORDER BY name")
		.fetch_all(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(rows.iter().map(|row| row.get("name")).collect())
}

/// Read a single option by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> SpResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM options WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	let Some(row) = row else {
		return Ok(None);
	};
	let value: Option<String> = row.get("value");
	match value {
		None => Ok(None),
		Some(v) => serde_json::from_str(&v).map(Some).map_err(|err| {
			warn!("Option '{}' holds invalid JSON: {}", name, err);
			Error::Parse
		}),
	}
}

/// Update or create an option
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> SpResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query(
			"INSERT INTO options (name, value, updated_at) VALUES (?, ?, unixepoch())
			ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
		)
		.bind(name)
		.bind(value_str)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;
	} else {
		// Delete option if value is None
		sqlx::query("DELETE FROM options WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
