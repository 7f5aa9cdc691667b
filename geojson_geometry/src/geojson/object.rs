use crate::*;
use geojson_core::json::{JsonObject, JsonValue};

/// The content of a successfully decoded GeoJSON root: exactly one of the nine object kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJsonObject {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJsonObject {
	#[must_use]
	pub fn geojson_type(&self) -> GeoJsonType {
		match self {
			GeoJsonObject::Geometry(g) => g.geojson_type(),
			GeoJsonObject::Feature(_) => GeoJsonType::Feature,
			GeoJsonObject::FeatureCollection(_) => GeoJsonType::FeatureCollection,
		}
	}

	/// Encodes the complete object with its `type` member.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		match self {
			GeoJsonObject::Geometry(g) => g.to_json(precision),
			GeoJsonObject::Feature(f) => f.to_json(precision),
			GeoJsonObject::FeatureCollection(c) => c.to_json(precision),
		}
	}
}

impl GeoJsonPayload for GeoJsonObject {
	fn prefix(&self) -> &'static str {
		self.geojson_type().prefix()
	}

	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
		match self {
			GeoJsonObject::Geometry(g) => g.encode_with_precision(precision),
			GeoJsonObject::Feature(f) => f.encode_with_precision(precision),
			GeoJsonObject::FeatureCollection(c) => c.encode_with_precision(precision),
		}
	}

	fn write_members(&self, object: &mut JsonObject, precision: Option<u8>) {
		match self {
			GeoJsonObject::Geometry(g) => g.write_members(object, precision),
			GeoJsonObject::Feature(f) => f.write_members(object, precision),
			GeoJsonObject::FeatureCollection(c) => c.write_members(object, precision),
		}
	}
}

impl<T> From<T> for GeoJsonObject
where
	Geometry: From<T>,
{
	fn from(geometry: T) -> Self {
		GeoJsonObject::Geometry(Geometry::from(geometry))
	}
}

impl From<GeoFeature> for GeoJsonObject {
	fn from(feature: GeoFeature) -> Self {
		GeoJsonObject::Feature(feature)
	}
}

impl From<GeoCollection> for GeoJsonObject {
	fn from(collection: GeoCollection) -> Self {
		GeoJsonObject::FeatureCollection(collection)
	}
}
