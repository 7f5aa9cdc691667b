use anyhow::Result;
use geojson_core::json::{JsonObject, JsonValue};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// The `properties` member of a feature: string keys mapped to arbitrary JSON values.
/// Values are carried through unchanged and never validated.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, JsonValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert<T>(&mut self, key: String, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.insert(key, JsonValue::from(value));
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.to_string(), v.clone());
		}
	}
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.properties.get(key)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
		self.properties.iter()
	}

	/// Reads a `properties` member. Only objects are accepted.
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		Ok(json.as_object()?.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect::<JsonObject>(),
		)
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, JsonValue);
	type IntoIter = btree_map::IntoIter<String, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<T> From<Vec<(&str, T)>> for GeoProperties
where
	JsonValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), JsonValue::from(v)))
				.collect(),
		}
	}
}

impl From<JsonObject> for GeoProperties {
	fn from(value: JsonObject) -> Self {
		value.into_iter().collect()
	}
}

impl FromIterator<(String, JsonValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
