use super::*;
use crate::GeoJsonPayload;
use anyhow::{Result, bail, ensure};
use geojson_core::json::{JsonObject, JsonValue};
use std::fmt::Display;

/// The `id` member of a feature: either a string or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	String(String),
	Number(f64),
}

impl FeatureId {
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		match json {
			JsonValue::String(s) => Ok(FeatureId::String(s.clone())),
			JsonValue::Number(n) => {
				ensure!(n.is_finite(), "a numeric feature id must be finite");
				Ok(FeatureId::Number(*n))
			}
			other => bail!("a feature id must be a string or a number, found {}", other.type_as_str()),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			FeatureId::String(s) => JsonValue::from(s),
			FeatureId::Number(n) => JsonValue::from(*n),
		}
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => f.write_str(s),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<u32> for FeatureId {
	fn from(value: u32) -> Self {
		FeatureId::Number(f64::from(value))
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(value as f64)
	}
}

impl From<f64> for FeatureId {
	fn from(value: f64) -> Self {
		FeatureId::Number(value)
	}
}

/// A GeoJSON feature: an optional geometry, optional properties and an optional id.
///
/// `None` for geometry or properties is encoded as `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub geometry: Option<Geometry>,
	pub properties: Option<GeoProperties>,
}

impl GeoFeature {
	pub fn new(geometry: impl Into<Geometry>) -> Self {
		Self {
			id: None,
			geometry: Some(geometry.into()),
			properties: None,
		}
	}

	pub fn set_id(&mut self, id: impl Into<FeatureId>) {
		self.id = Some(id.into());
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = Some(properties);
	}

	/// Sets a single property, creating the properties map if there is none.
	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.get_or_insert_with(GeoProperties::new).insert(key, value);
	}

	#[must_use]
	pub fn property(&self, key: &str) -> Option<&JsonValue> {
		self.properties.as_ref().and_then(|p| p.get(key))
	}

	/// Encodes the complete feature object including `"type":"Feature"`.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", "Feature");
		self.write_members(&mut object, precision);
		object
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(FeatureId::Number(13.0)),
			geometry: Some(Geometry::new_example()),
			properties: Some(GeoProperties::from(vec![
				("name", JsonValue::from("Nice")),
				("population", JsonValue::from(348085)),
				("is_nice", JsonValue::from(true)),
			])),
		}
	}
}
