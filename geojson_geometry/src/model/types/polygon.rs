use super::{CompositeGeometryTrait, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// A polygon: the first ring is the exterior, any further rings are holes.
///
/// Each ring is checked on its own. No relation between rings (orientation, nesting)
/// is enforced.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or(&[])
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<(), GeometryError> {
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|ring| ring.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		json.as_array()?.map_entries(RingGeometry::from_coord_json).map(Self)
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn from_vec(items: Vec<RingGeometry>) -> Self {
		Self(items)
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = vec![RingGeometry::from(exterior)];
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(value: &PolygonGeometry) -> Self {
		let exterior = value.exterior().map(geo::LineString::from).unwrap_or_else(|| geo::LineString(vec![]));
		let interiors = value.interiors().iter().map(geo::LineString::from).collect();
		geo::Polygon::new(exterior, interiors)
	}
}
