use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// A linear ring, one boundary of a polygon. At least four positions, and the last one
/// repeats the first.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Length is checked before closure, closure before the positions themselves.
	/// Closure compares all components, altitude included.
	fn verify(&self) -> Result<(), GeometryError> {
		if self.0.len() < 4 {
			return Err(GeometryError::RingTooShort(self.0.len()));
		}
		if self.0.first() != self.0.last() {
			return Err(GeometryError::RingNotClosed);
		}
		for (index, c) in self.0.iter().enumerate() {
			c.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|position| position.to_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		let ring = Self(json.as_array()?.map_entries(Coordinates::from_json)?);
		ring.verify()?;
		Ok(ring)
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn from_vec(items: Vec<Coordinates>) -> Self {
		Self(items)
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

/// Unchecked: a `geo::LineString` need not be closed.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(line: geo::LineString<f64>) -> Self {
		Self(line.0.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(value: &RingGeometry) -> Self {
		geo::LineString(value.0.iter().map(geo::Coord::from).collect())
	}
}
