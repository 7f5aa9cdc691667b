use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// A sequence of independent line strings. Lines may differ in length; an empty
/// sequence is valid.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<(), GeometryError> {
		for (index, line) in self.0.iter().enumerate() {
			line.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|line| line.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		json.as_array()?.map_entries(LineStringGeometry::from_coord_json).map(Self)
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn from_vec(items: Vec<LineStringGeometry>) -> Self {
		Self(items)
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}

impl From<&MultiLineStringGeometry> for geo::MultiLineString<f64> {
	fn from(value: &MultiLineStringGeometry) -> Self {
		geo::MultiLineString(value.0.iter().map(geo::LineString::from).collect())
	}
}
