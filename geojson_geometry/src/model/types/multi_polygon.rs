use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use crate::GeometryError;
use anyhow::Result;
use geojson_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<(), GeometryError> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().map_err(|e| e.at_index(index))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|polygon| polygon.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		json.as_array()?.map_entries(PolygonGeometry::from_coord_json).map(Self)
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn from_vec(items: Vec<PolygonGeometry>) -> Self {
		Self(items)
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

impl From<&MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(value: &MultiPolygonGeometry) -> Self {
		geo::MultiPolygon(value.0.iter().map(geo::Polygon::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn example() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]],
		])
	}

	#[test]
	fn verify() {
		assert!(example().verify().is_ok());
		assert!(MultiPolygonGeometry::new().verify().is_ok());
	}

	#[test]
	fn coord_json_round_trip() {
		let json = example().to_coord_json(None);
		assert_eq!(
			json.stringify(),
			"[[[[0,0],[5,0],[2.5,4],[0,0]],[[2,1],[2.5,2],[3,1],[2,1]]],[[[6,0],[9,0],[9,4],[6,4],[6,0]]]]"
		);
		assert_eq!(MultiPolygonGeometry::from_coord_json(&json).unwrap(), example());
	}

	#[test]
	fn from_coord_json_reports_nested_index() {
		let json = JsonValue::parse_str("[[[[0,0],[1,0],[1,1],[0,0]]],[[[0,0],[1,0],[1,1],[2,2]]]]").unwrap();
		let error = MultiPolygonGeometry::from_coord_json(&json).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"at index 1: at index 0: a linear ring must start and end at the same position"
		);
	}

	#[test]
	fn geo_round_trip() {
		let geo_multi: geo::MultiPolygon = geo::MultiPolygon::from(&example());
		assert_eq!(geo_multi.0.len(), 2);
		assert_eq!(MultiPolygonGeometry::from(geo_multi), example());
	}
}
