//! Adapter that persists named options (the `simpay_settings` row among them)
//!
//! Options are opaque JSON documents keyed by name. Writes replace the whole
//! document; there is no optimistic concurrency control at this layer.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait OptionsAdapter: Debug + Send + Sync {
	/// Read an option, `None` if it was never written
	async fn read_option(&self, name: &str) -> SpResult<Option<serde_json::Value>>;

	/// Create or replace an option, `None` deletes it
	async fn update_option(&self, name: &str, value: Option<serde_json::Value>) -> SpResult<()>;

	/// List the names of all stored options
	async fn list_options(&self) -> SpResult<Vec<String>>;
}

/// Process-local options store
#[derive(Debug, Default)]
pub struct MemoryOptionsAdapter {
	options: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryOptionsAdapter {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl OptionsAdapter for MemoryOptionsAdapter {
	async fn read_option(&self, name: &str) -> SpResult<Option<serde_json::Value>> {
		Ok(self.options.read().get(name).cloned())
	}

	async fn update_option(&self, name: &str, value: Option<serde_json::Value>) -> SpResult<()> {
		let mut options = self.options.write();
		match value {
			Some(value) => {
				options.insert(name.to_string(), value);
			}
			None => {
				options.remove(name);
			}
		}
		Ok(())
	}

	async fn list_options(&self) -> SpResult<Vec<String>> {
		let mut names: Vec<String> = self.options.read().keys().cloned().collect();
		names.sort();
		Ok(names)
	}
}


// vim: ts=4
