use super::{Coordinates, GeometryTrait, MultiPointGeometry, traits};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;
use traits::SingleGeometryTrait;

/// A single position, the simplest GeoJSON geometry.
///
/// This is also the building block of line strings, rings and multi points.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(position: Coordinates) -> Self {
		Self(position)
	}

	/// Validating constructor from 2 or 3 numbers.
	pub fn try_from_slice(values: &[f64]) -> Result<Self, GeometryError> {
		Coordinates::try_from_slice(values).map(Self)
	}

	/// Longitude.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	/// Latitude.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Altitude, if present.
	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.z()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<(), GeometryError> {
		self.0.verify()
	}

	/// `[x, y]` or `[x, y, z]`.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		self.0.to_json(precision)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Coordinates::from_json(json).map(Self)
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<&PointGeometry> for geo::Point {
	fn from(value: &PointGeometry) -> Self {
		geo::Point(geo::Coord::from(&value.0))
	}
}
