use crate::json::*;
use anyhow::{Context, Result};
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>` in document order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Serializes the array to compact JSON.
	///
	/// ```rust
	/// use geojson_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from(2.5)]);
	/// assert_eq!(arr.stringify(), "[1,2.5]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	/// Converts every element to a number, failing on the first non-number.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self
			.0
			.iter()
			.enumerate()
			.map(|(index, value)| value.as_number().with_context(|| format!("at index {index}")))
			.collect()
	}

	/// Applies `f` to every element, annotating a failure with its index.
	pub fn map_entries<T>(&self, mut f: impl FnMut(&JsonValue) -> Result<T>) -> Result<Vec<T>> {
		self
			.0
			.iter()
			.enumerate()
			.map(|(index, value)| f(value).with_context(|| format!("at index {index}")))
			.collect()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> FromIterator<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		JsonArray(iter.into_iter().map(JsonValue::from).collect())
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify_mixed() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
			JsonValue::Null,
		]);
		assert_eq!(array.stringify(), r#"["hello",42,true,null]"#);
		assert_eq!(JsonArray::new().stringify(), "[]");
	}

	#[test]
	fn as_number_vec() {
		assert_eq!(JsonArray::from(vec![1.2, 3.4]).as_number_vec().unwrap(), vec![1.2, 3.4]);

		let error = JsonArray(vec![JsonValue::from(1), JsonValue::from("a")])
			.as_number_vec()
			.unwrap_err();
		assert_eq!(format!("{error:#}"), "at index 1: expected a number, found string");
	}

	#[test]
	fn map_entries_reports_index() {
		let array = JsonArray::from(vec![1, 2, 3]);
		let doubled = array.map_entries(|v| Ok(v.as_number()? * 2.0)).unwrap();
		assert_eq!(doubled, vec![2.0, 4.0, 6.0]);

		let error = array
			.map_entries(|v| v.as_str().map(str::to_owned))
			.unwrap_err();
		assert_eq!(error.to_string(), "at index 0");
	}

	#[test]
	fn push_and_iterate() {
		let mut array = JsonArray::new();
		array.push(1);
		array.push("two");
		assert_eq!(array.len(), 2);
		assert!(!array.is_empty());
		let types: Vec<&str> = array.iter().map(JsonValue::type_as_str).collect();
		assert_eq!(types, vec!["number", "string"]);
	}

	#[test]
	fn collect_from_iterator() {
		let array: JsonArray = (1..=3_i32).collect();
		assert_eq!(array, JsonArray::from(vec![1, 2, 3]));
	}

	#[test]
	fn debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}
}
