//! Setting value types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the option row holding every setting value
pub const SETTINGS_OPTION: &str = "simpay_settings";

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from the setting schema
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
	Json(serde_json::Value),
}

impl SettingValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::String(_) => "string",
			SettingValue::Int(_) => "int",
			SettingValue::Bool(_) => "bool",
			SettingValue::Json(_) => "json",
		}
	}

	/// Empty values are never exposed through the REST surface
	pub fn is_empty(&self) -> bool {
		match self {
			SettingValue::String(s) => s.is_empty(),
			SettingValue::Json(serde_json::Value::Null) => true,
			SettingValue::Json(serde_json::Value::String(s)) => s.is_empty(),
			SettingValue::Json(serde_json::Value::Array(a)) => a.is_empty(),
			SettingValue::Json(serde_json::Value::Object(o)) => o.is_empty(),
			SettingValue::Bool(_) | SettingValue::Int(_) | SettingValue::Json(_) => false,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			SettingValue::String(s) => Some(s),
			_ => None,
		}
	}

	/// Checkbox semantics: `"yes"` or `true` is enabled
	pub fn is_enabled(&self) -> bool {
		match self {
			SettingValue::Bool(b) => *b,
			SettingValue::String(s) => s == "yes",
			SettingValue::Int(i) => *i != 0,
			SettingValue::Json(_) => false,
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		match self {
			SettingValue::Bool(b) => serde_json::Value::Bool(*b),
			SettingValue::Int(i) => serde_json::Value::from(*i),
			SettingValue::String(s) => serde_json::Value::String(s.clone()),
			SettingValue::Json(j) => j.clone(),
		}
	}
}

impl From<serde_json::Value> for SettingValue {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Bool(b) => SettingValue::Bool(b),
			serde_json::Value::String(s) => SettingValue::String(s),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => SettingValue::Int(i),
				None => SettingValue::Json(serde_json::Value::Number(n)),
			},
			other => SettingValue::Json(other),
		}
	}
}

impl From<&str> for SettingValue {
	fn from(value: &str) -> Self {
		SettingValue::String(value.to_string())
	}
}

impl From<String> for SettingValue {
	fn from(value: String) -> Self {
		SettingValue::String(value)
	}
}

impl From<bool> for SettingValue {
	fn from(value: bool) -> Self {
		SettingValue::Bool(value)
	}
}

impl From<i64> for SettingValue {
	fn from(value: i64) -> Self {
		SettingValue::Int(value)
	}
}

/// Flat id -> value map stored in the `simpay_settings` option
pub type SettingsMap = BTreeMap<String, SettingValue>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_untagged_deserialize() {
		let map: SettingsMap =
			serde_json::from_str(r#"{"a":"USD","b":true,"c":5,"d":[1,2],"e":1.5}"#).unwrap();
		assert_eq!(map["a"], SettingValue::String("USD".into()));
		assert_eq!(map["b"], SettingValue::Bool(true));
		assert_eq!(map["c"], SettingValue::Int(5));
		assert_eq!(map["d"], SettingValue::Json(serde_json::json!([1, 2])));
		assert_eq!(map["e"], SettingValue::Json(serde_json::json!(1.5)));
	}

	#[test]
	fn test_is_empty() {
		assert!(SettingValue::from("").is_empty());
		assert!(SettingValue::Json(serde_json::Value::Null).is_empty());
		assert!(SettingValue::Json(serde_json::json!([])).is_empty());
		assert!(!SettingValue::from("USD").is_empty());
		assert!(!SettingValue::Bool(false).is_empty());
		assert!(!SettingValue::Int(0).is_empty());
	}

	#[test]
	fn test_is_enabled() {
		assert!(SettingValue::from("yes").is_enabled());
		assert!(!SettingValue::from("no").is_enabled());
		assert!(SettingValue::Bool(true).is_enabled());
	}
}

// vim: ts=4
