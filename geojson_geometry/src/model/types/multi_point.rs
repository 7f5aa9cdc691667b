use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<(), GeometryError> {
		for (index, point) in self.0.iter().enumerate() {
			point.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|point| point.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		json.as_array()?.map_entries(PointGeometry::from_coord_json).map(Self)
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn from_vec(items: Vec<PointGeometry>) -> Self {
		Self(items)
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}

impl From<&MultiPointGeometry> for geo::MultiPoint<f64> {
	fn from(value: &MultiPointGeometry) -> Self {
		geo::MultiPoint(value.0.iter().map(geo::Point::from).collect())
	}
}
