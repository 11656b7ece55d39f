//! Priority-ordered keyed store for registered settings items

use indexmap::IndexMap;

use crate::prelude::*;

/// Item that can be stored in a [`Collection`]
pub trait CollectionItem {
	/// Item kind used in diagnostics ("section", "subsection", "setting")
	const KIND: &'static str;

	fn id(&self) -> &str;

	/// Storage key, unique within a collection
	fn key(&self) -> String {
		self.id().to_string()
	}

	fn priority(&self) -> i32;

	/// Look up a named attribute for [`Collection::by`]
	fn attribute(&self, name: &str) -> Option<&str>;
}

/// Keyed store of items, retrieved in ascending priority order
///
/// Ties in priority keep insertion order. Re-adding an existing key replaces
/// the stored item and moves it to the end of the insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
	items: IndexMap<String, T>,
}

impl<T: CollectionItem> Collection<T> {
	pub fn new() -> Self {
		Self { items: IndexMap::new() }
	}

	/// Store an item under its key, rejecting an empty id
	pub fn add(&mut self, item: T) -> SpResult<()> {
		if item.id().is_empty() {
			return Err(Error::MissingParameter("id"));
		}

		let key = item.key();
		if self.items.shift_remove(&key).is_some() {
			warn!("Replacing already registered {} '{}'", T::KIND, key);
		}
		debug!("Registering {}: {}", T::KIND, key);
		self.items.insert(key, item);
		Ok(())
	}

	pub fn get_item(&self, key: &str) -> Option<&T> {
		self.items.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.items.contains_key(key)
	}

	/// All items sorted by priority
	pub fn get_items(&self) -> Vec<&T> {
		let mut items: Vec<&T> = self.items.values().collect();
		items.sort_by_key(|item| item.priority());
		items
	}

	/// Items whose `attribute` equals `value`, sorted by priority
	pub fn by(&self, attribute: &str, value: &str) -> Vec<&T> {
		self.filter(|item| item.attribute(attribute) == Some(value))
	}

	/// Items matching a predicate, sorted by priority
	pub fn filter<F>(&self, pred: F) -> Vec<&T>
	where
		F: Fn(&T) -> bool,
	{
		let mut items: Vec<&T> = self.items.values().filter(|item| pred(item)).collect();
		items.sort_by_key(|item| item.priority());
		items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T: CollectionItem> Default for Collection<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone)]
	struct Item {
		id: String,
		group: String,
		priority: i32,
	}

	impl CollectionItem for Item {
		const KIND: &'static str = "item";

		fn id(&self) -> &str {
			&self.id
		}

		fn priority(&self) -> i32 {
			self.priority
		}

		fn attribute(&self, name: &str) -> Option<&str> {
			match name {
				"id" => Some(&self.id),
				"group" => Some(&self.group),
				_ => None,
			}
		}
	}

	fn item(id: &str, group: &str, priority: i32) -> Item {
		Item { id: id.into(), group: group.into(), priority }
	}

	fn ids(items: &[&Item]) -> Vec<String> {
		items.iter().map(|i| i.id.clone()).collect()
	}

	#[test]
	fn test_get_items_sorted_by_priority() {
		let mut c = Collection::new();
		c.add(item("c", "x", 30)).unwrap();
		c.add(item("a", "x", 10)).unwrap();
		c.add(item("b", "y", 20)).unwrap();
		c.add(item("z", "y", -5)).unwrap();

		let items = c.get_items();
		assert_eq!(ids(&items), vec!["z", "a", "b", "c"]);
		assert!(items.windows(2).all(|w| w[0].priority <= w[1].priority));
	}

	#[test]
	fn test_ties_keep_insertion_order() {
		let mut c = Collection::new();
		for id in ["first", "second", "third"] {
			c.add(item(id, "x", 10)).unwrap();
		}
		c.add(item("early", "x", 5)).unwrap();

		assert_eq!(ids(&c.get_items()), vec!["early", "first", "second", "third"]);
	}

	#[test]
	fn test_empty_id_rejected() {
		let mut c = Collection::new();
		let res = c.add(item("", "x", 10));
		assert!(matches!(res, Err(Error::MissingParameter("id"))));
		assert!(c.is_empty());
	}

	#[test]
	fn test_duplicate_id_last_write_wins() {
		let mut c = Collection::new();
		c.add(item("a", "old", 10)).unwrap();
		c.add(item("b", "x", 10)).unwrap();
		c.add(item("a", "new", 10)).unwrap();

		assert_eq!(c.len(), 2);
		assert_eq!(c.get_item("a").map(|i| i.group.as_str()), Some("new"));
		assert_eq!(ids(&c.get_items()), vec!["b", "a"]);
	}

	#[test]
	fn test_by_attribute() {
		let mut c = Collection::new();
		c.add(item("a", "x", 20)).unwrap();
		c.add(item("b", "y", 10)).unwrap();
		c.add(item("c", "x", 10)).unwrap();

		assert_eq!(ids(&c.by("group", "x")), vec!["c", "a"]);
		assert!(c.by("group", "nope").is_empty());
		assert!(c.by("unknown", "x").is_empty());
	}

	#[test]
	fn test_get_item_missing() {
		let c: Collection<Item> = Collection::new();
		assert!(c.get_item("missing").is_none());
		assert!(!c.contains("missing"));
	}
}

// vim: ts=4
