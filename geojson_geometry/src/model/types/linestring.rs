use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a sequence of connected positions forming a line, typically used for paths.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two finite positions.
	fn verify(&self) -> Result<(), GeometryError> {
		if self.0.len() < 2 {
			return Err(GeometryError::TooFewPositions(self.0.len()));
		}
		for (index, c) in self.0.iter().enumerate() {
			c.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	/// Converts the line's positions into a JSON array of position arrays.
	///
	/// Optionally rounds the coordinates to the specified precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		let line = Self(json.as_array()?.map_entries(Coordinates::from_json)?);
		line.verify()?;
		Ok(line)
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn from_vec(items: Vec<Coordinates>) -> Self {
		Self(items)
	}
	/// Returns a reference to the internal vector of positions.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Consumes the `LineStringGeometry` and returns the internal vector of positions.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	/// Prints the list of positions in a developer-friendly format.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString> for LineStringGeometry {
	fn from(geometry: geo::LineString) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&LineStringGeometry> for geo::LineString {
	fn from(value: &LineStringGeometry) -> Self {
		geo::LineString(value.0.iter().map(geo::Coord::from).collect())
	}
}
