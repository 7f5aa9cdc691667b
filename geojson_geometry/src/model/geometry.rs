use super::*;
use crate::{GeoJsonPayload, GeoJsonType, GeometryError};
use geojson_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// Any of the seven GeoJSON geometry objects.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn geojson_type(&self) -> GeoJsonType {
		match self {
			Geometry::Point(_) => GeoJsonType::Point,
			Geometry::MultiPoint(_) => GeoJsonType::MultiPoint,
			Geometry::LineString(_) => GeoJsonType::LineString,
			Geometry::MultiLineString(_) => GeoJsonType::MultiLineString,
			Geometry::Polygon(_) => GeoJsonType::Polygon,
			Geometry::MultiPolygon(_) => GeoJsonType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeoJsonType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geojson_type().as_str()
	}

	pub fn verify(&self) -> Result<(), GeometryError> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	/// Wraps single geometries into their multi form. Everything else is returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::GeometryCollection(_) => self,
		}
	}

	/// Encodes the complete geometry object, e.g. `{"coordinates":[1,2],"type":"Point"}`.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", self.type_name());
		self.write_members(&mut object, precision);
		object
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_from_geometry {
	($($variant:ident($t:ty)),* $(,)?) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*}
}

impl_from_geometry!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
);

impl From<&Geometry> for Geometry {
	fn from(geometry: &Geometry) -> Self {
		geometry.clone()
	}
}

/// An ordered, possibly empty, sequence of geometries of any kind, including nested
/// collections.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Validating constructor: every member must be valid.
	pub fn try_from_vec(geometries: Vec<Geometry>) -> Result<Self, GeometryError> {
		let collection = Self(geometries);
		collection.verify()?;
		Ok(collection)
	}

	pub fn verify(&self) -> Result<(), GeometryError> {
		for (index, geometry) in self.0.iter().enumerate() {
			geometry.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
		self.0.iter()
	}

	pub fn push(&mut self, geometry: impl Into<Geometry>) {
		self.0.push(geometry.into());
	}

	/// Encodes the `geometries` array: one complete geometry object per member.
	#[must_use]
	pub fn to_geometries_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|geometry| geometry.to_json(precision))
				.collect::<Vec<_>>(),
		)
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(GeometryCollection, Geometry);

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn geojson_type_and_name() {
		assert_eq!(Geometry::new_point([1, 2]).geojson_type(), GeoJsonType::Point);
		assert_eq!(Geometry::new_example().type_name(), "MultiPolygon");
		assert_eq!(
			Geometry::from(GeometryCollection::new()).type_name(),
			"GeometryCollection"
		);
	}

	#[test]
	fn into_multi() {
		let multi = Geometry::new_point([1, 2]).into_multi();
		assert_eq!(multi, Geometry::new_multi_point(vec![[1, 2]]));

		let multi = Geometry::new_line_string(vec![[0, 0], [1, 1]]).into_multi();
		assert_eq!(multi, Geometry::new_multi_line_string(vec![vec![[0, 0], [1, 1]]]));

		let example = Geometry::new_example();
		assert_eq!(example.clone().into_multi(), example);
	}

	#[test]
	fn verify() {
		assert!(Geometry::new_example().verify().is_ok());
		assert_eq!(
			Geometry::new_line_string(vec![[0, 0]]).verify(),
			Err(GeometryError::TooFewPositions(1))
		);
	}

	#[test]
	fn to_json() {
		let json = Geometry::new_point([1.5, 2.0]).to_json(None);
		assert_eq!(json.stringify(), r#"{"coordinates":[1.5,2],"type":"Point"}"#);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point([1, 2])), "Point([1.0, 2.0])");
	}

	#[test]
	fn collection_to_json() {
		let mut collection = GeometryCollection::new();
		collection.push(PointGeometry::from([1, 2]));
		collection.push(GeometryCollection::from(vec![Geometry::new_line_string(vec![[0, 0], [1, 1]])]));

		assert_eq!(collection.len(), 2);
		assert_eq!(
			Geometry::from(collection).to_json(None).stringify(),
			concat!(
				r#"{"geometries":[{"coordinates":[1,2],"type":"Point"},"#,
				r#"{"geometries":[{"coordinates":[[0,0],[1,1]],"type":"LineString"}],"type":"GeometryCollection"}],"#,
				r#""type":"GeometryCollection"}"#
			)
		);
	}

	#[test]
	fn collection_verify_reports_member() {
		let collection = GeometryCollection::from(vec![
			Geometry::new_point([0, 0]),
			Geometry::new_polygon(vec![vec![[0, 0], [1, 0], [0, 0]]]),
		]);
		assert_eq!(
			collection.verify(),
			Err(GeometryError::RingTooShort(3).at_index(0).at_index(1))
		);
		assert!(GeometryCollection::try_from_vec(collection.0).is_err());
		assert!(GeometryCollection::try_from_vec(vec![]).unwrap().is_empty());
	}
}
