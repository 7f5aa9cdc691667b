use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives: validation and the conversion
/// between a geometry and its GeoJSON `coordinates` payload.
pub trait GeometryTrait: Debug + Clone + PartialEq + Sized {
	/// Verifies the structural invariants of the geometry, e.g. the minimum number of
	/// positions of a line string or the closure of a ring.
	fn verify(&self) -> Result<(), GeometryError>;

	/// Converts the geometry into the JSON value of its `coordinates` member.
	/// Optionally rounds coordinate values to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Reads the geometry from the JSON value of a `coordinates` member and verifies it.
	fn from_coord_json(json: &JsonValue) -> Result<Self>;
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are sequences of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: GeometryTrait {
	/// Wraps `items` without checking any invariant.
	fn from_vec(items: Vec<Item>) -> Self;

	/// Returns an immutable reference to the inner sequence of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Consumes the composite geometry and returns the inner sequence of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Creates a new, empty composite geometry.
	fn new() -> Self {
		Self::from_vec(Vec::new())
	}

	/// Validating constructor: wraps `items` and verifies the result.
	fn try_from_vec(items: Vec<Item>) -> Result<Self, GeometryError> {
		let geometry = Self::from_vec(items);
		geometry.verify()?;
		Ok(geometry)
	}

	/// Returns an iterator over the elements.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn get(&self, index: usize) -> Option<&Item> {
		self.as_vec().get(index)
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
