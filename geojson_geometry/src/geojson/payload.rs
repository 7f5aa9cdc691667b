use crate::*;
use geojson_core::json::{JsonObject, JsonValue};

/// The part of a GeoJSON object that depends on its type: the member it nests under
/// (`prefix`) and the JSON value stored there (`encode`).
///
/// Encoding performs no validation; values built through the validating constructors
/// or decoded from JSON are valid by construction.
pub trait GeoJsonPayload {
	/// `"coordinates"` for plain geometries, `"geometries"` for geometry collections,
	/// `"geometry"` for features and `"features"` for feature collections.
	fn prefix(&self) -> &'static str;

	/// Encodes the payload, rounding coordinates to `precision` decimals if given.
	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue;

	/// Encodes the payload with full precision.
	fn encode(&self) -> JsonValue {
		self.encode_with_precision(None)
	}

	/// Writes every type-specific member into `object`. Most types only have the payload.
	fn write_members(&self, object: &mut JsonObject, precision: Option<u8>) {
		object.set(self.prefix(), self.encode_with_precision(precision));
	}
}

macro_rules! impl_coordinates_payload {
	($($t:ty),* $(,)?) => {$(
		impl GeoJsonPayload for $t {
			fn prefix(&self) -> &'static str {
				"coordinates"
			}

			fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
				self.to_coord_json(precision)
			}
		}
	)*}
}

impl_coordinates_payload!(
	PointGeometry,
	MultiPointGeometry,
	LineStringGeometry,
	MultiLineStringGeometry,
	PolygonGeometry,
	MultiPolygonGeometry,
);

impl GeoJsonPayload for GeometryCollection {
	fn prefix(&self) -> &'static str {
		"geometries"
	}

	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
		self.to_geometries_json(precision)
	}
}

impl GeoJsonPayload for Geometry {
	fn prefix(&self) -> &'static str {
		self.geojson_type().prefix()
	}

	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
		match self {
			Geometry::Point(g) => g.encode_with_precision(precision),
			Geometry::MultiPoint(g) => g.encode_with_precision(precision),
			Geometry::LineString(g) => g.encode_with_precision(precision),
			Geometry::MultiLineString(g) => g.encode_with_precision(precision),
			Geometry::Polygon(g) => g.encode_with_precision(precision),
			Geometry::MultiPolygon(g) => g.encode_with_precision(precision),
			Geometry::GeometryCollection(g) => g.encode_with_precision(precision),
		}
	}
}

impl GeoJsonPayload for GeoFeature {
	fn prefix(&self) -> &'static str {
		"geometry"
	}

	/// The geometry object, or `null`.
	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.geometry.as_ref().map(|g| g.to_json(precision)))
	}

	fn write_members(&self, object: &mut JsonObject, precision: Option<u8>) {
		object.set(self.prefix(), self.encode_with_precision(precision));
		object.set("properties", JsonValue::from(self.properties.as_ref().map(GeoProperties::to_json)));
		object.set_optional("id", self.id.as_ref().map(FeatureId::to_json));
	}
}

impl GeoJsonPayload for GeoCollection {
	fn prefix(&self) -> &'static str {
		"features"
	}

	fn encode_with_precision(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn plain_geometries_nest_under_coordinates() {
		assert_eq!(PointGeometry::from([0, 0]).prefix(), "coordinates");
		assert_eq!(MultiLineStringGeometry::new().prefix(), "coordinates");
		assert_eq!(Geometry::new_example().prefix(), "coordinates");
	}

	#[test]
	fn containers_have_their_own_prefix() {
		assert_eq!(GeometryCollection::new().prefix(), "geometries");
		assert_eq!(Geometry::from(GeometryCollection::new()).prefix(), "geometries");
		assert_eq!(GeoFeature::default().prefix(), "geometry");
		assert_eq!(GeoCollection::new().prefix(), "features");
	}

	#[test]
	fn encode_multi_line_string() {
		let a = PointGeometry::from([0.0, 0.0]);
		let b = PointGeometry::from([1.0, 1.0]);
		let multi = MultiLineStringGeometry(vec![
			LineStringGeometry(vec![a.0, b.0]),
			LineStringGeometry(vec![b.0, a.0]),
		]);
		assert_eq!(multi.encode().stringify(), "[[[0,0],[1,1]],[[1,1],[0,0]]]");
		assert_eq!(MultiLineStringGeometry::new().encode().stringify(), "[]");
	}

	#[test]
	fn encode_empty_containers() {
		assert_eq!(MultiPointGeometry::new().encode().stringify(), "[]");
		assert_eq!(MultiPolygonGeometry::new().encode().stringify(), "[]");
		assert_eq!(GeometryCollection::new().encode().stringify(), "[]");
		assert_eq!(GeoCollection::new().encode().stringify(), "[]");
	}

	#[test]
	fn encode_with_precision() {
		let point = PointGeometry::from([1.23456, 2.34567]);
		assert_eq!(point.encode_with_precision(Some(2)).stringify(), "[1.23,2.35]");
		assert_eq!(point.encode().stringify(), "[1.23456,2.34567]");
	}

	#[test]
	fn feature_members() {
		let mut feature = GeoFeature::default();
		feature.set_id("x");
		let mut object = JsonObject::new();
		feature.write_members(&mut object, None);
		assert_eq!(object.stringify(), r#"{"geometry":null,"id":"x","properties":null}"#);
	}
}
