//! REST schema built from registered setting schemas

use serde_json::{Map, Value};

use crate::prelude::*;

use super::registry::FrozenSettingsRegistry;
use super::setting::{SchemaType, Setting, SettingSchema};

/// Build `{"properties": {...}, "default": {...}}` from settings with a schema
///
/// Settings without a schema are not exposed. Only schemas declaring a
/// default contribute to the default map.
pub fn api_schema(settings: &[&Setting]) -> Value {
	let mut properties = Map::new();
	let mut defaults = Map::new();

	for setting in settings {
		let Some(schema) = &setting.schema else {
			continue;
		};
		match serde_json::to_value(schema) {
			Ok(value) => {
				properties.insert(setting.id.clone(), value);
			}
			Err(err) => {
				warn!("Skipping schema of setting '{}': {}", setting.id, err);
				continue;
			}
		}
		if let Some(default) = &schema.default {
			defaults.insert(setting.id.clone(), default.clone());
		}
	}

	serde_json::json!({
		"properties": properties,
		"default": defaults,
	})
}

/// Strip stored values that would fail REST validation
///
/// Keeps only keys with a registered schema and a non-empty value that
/// validates against it.
pub fn pre_validate_rest(registry: &FrozenSettingsRegistry, stored: &SettingsMap) -> SettingsMap {
	stored
		.iter()
		.filter(|(key, value)| {
			let Some(schema) = registry.setting(key).and_then(|s| s.schema.as_ref()) else {
				debug!("Stripping unregistered setting '{}' from REST output", key);
				return false;
			};
			if value.is_empty() {
				return false;
			}
			match validate_value(key, schema, &value.to_json()) {
				Ok(()) => true,
				Err(err) => {
					warn!("Stripping stored setting from REST output: {}", err);
					false
				}
			}
		})
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect()
}

fn not_of_type(key: &str, schema: &SettingSchema) -> Error {
	Error::ValidationError(format!("{} is not of type {}", key, schema.typ.name()))
}

/// Validate a value against a setting schema
pub fn validate_value(key: &str, schema: &SettingSchema, value: &Value) -> SpResult<()> {
	let type_ok = match schema.typ {
		SchemaType::String => value.is_string(),
		SchemaType::Boolean => value.is_boolean(),
		SchemaType::Integer => value.is_i64() || value.is_u64(),
		SchemaType::Number => value.is_number(),
		SchemaType::Array => value.is_array(),
		SchemaType::Object => value.is_object(),
	};
	if !type_ok {
		return Err(not_of_type(key, schema));
	}

	if let Some(allowed) = &schema.allowed {
		if !allowed.contains(value) {
			return Err(Error::ValidationError(format!("{} is not one of the allowed values", key)));
		}
	}

	if let (Some(items), Value::Array(values)) = (&schema.items, value) {
		for (i, item) in values.iter().enumerate() {
			validate_value(&format!("{}[{}]", key, i), items, item)?;
		}
	}

	Ok(())
}

/// Convert a submitted form value to its schema type and validate it
///
/// Form fields arrive as strings, or arrays of strings for `[]` names. Blank
/// values yield `None`, meaning the persisted value is removed.
pub fn coerce_form_value(key: &str, schema: &SettingSchema, raw: Value) -> SpResult<Option<Value>> {
	let value = match raw {
		Value::String(s) => {
			let trimmed = s.trim();
			if trimmed.is_empty() {
				return Ok(None);
			}
			match schema.typ {
				SchemaType::Integer => {
					trimmed.parse::<i64>().map(Value::from).map_err(|_| not_of_type(key, schema))?
				}
				SchemaType::Number => trimmed
					.parse::<f64>()
					.ok()
					.and_then(serde_json::Number::from_f64)
					.map(Value::Number)
					.ok_or_else(|| not_of_type(key, schema))?,
				SchemaType::Boolean => match trimmed {
					"yes" | "true" | "1" => Value::Bool(true),
					"no" | "false" | "0" => Value::Bool(false),
					_ => return Err(not_of_type(key, schema)),
				},
				_ => Value::String(s),
			}
		}
		Value::Array(items) => {
			let mut values = Vec::with_capacity(items.len());
			for (i, item) in items.into_iter().enumerate() {
				let item_key = format!("{}[{}]", key, i);
				let coerced = match &schema.items {
					Some(items_schema) => coerce_form_value(&item_key, items_schema, item)?,
					None => Some(item),
				};
				values.extend(coerced);
			}
			if values.is_empty() {
				return Ok(None);
			}
			Value::Array(values)
		}
		other => other,
	};

	validate_value(key, schema, &value)?;
	Ok(Some(value))
}


// vim: ts=4
