//! Server configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::prelude::*;

pub const DEFAULT_DB_DIR: &str = "./data";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
	/// Directory holding `options.db`
	pub db_dir: PathBuf,
	pub listen: SocketAddr,
	/// Bearer token required on every request when set
	pub admin_token: Option<String>,
}

impl Config {
	/// Read `SIMPAY_DB_DIR`, `SIMPAY_LISTEN` and `SIMPAY_ADMIN_TOKEN`
	pub fn from_env() -> SpResult<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup<F>(lookup: F) -> SpResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let db_dir = PathBuf::from(lookup("SIMPAY_DB_DIR").unwrap_or_else(|| DEFAULT_DB_DIR.into()));
		let listen_str = lookup("SIMPAY_LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.into());
		let listen = listen_str.parse().map_err(|_| {
			Error::ConfigError(format!("SIMPAY_LISTEN is not a socket address: {}", listen_str))
		})?;
		let admin_token = lookup("SIMPAY_ADMIN_TOKEN").filter(|t| !t.is_empty());

		Ok(Self { db_dir, listen, admin_token })
	}
}


// vim: ts=4
