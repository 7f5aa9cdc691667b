use crate::GeometryError;
use anyhow::{Context, Result};
use geojson_core::json::JsonValue;
use std::fmt::Debug;

/// A GeoJSON position: longitude, latitude and an optional altitude.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_with_altitude(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	/// Validating constructor: `values` must hold 2 or 3 finite numbers.
	pub fn try_from_slice(values: &[f64]) -> Result<Self, GeometryError> {
		let coordinates = match *values {
			[x, y] => Self::new(x, y),
			[x, y, z] => Self::new_with_altitude(x, y, z),
			_ => return Err(GeometryError::InvalidPositionArity(values.len())),
		};
		coordinates.verify()?;
		Ok(coordinates)
	}

	/// Longitude.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	/// Latitude.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	/// Altitude, if the position has one.
	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_altitude(&self) -> bool {
		self.z.is_some()
	}

	/// Fails on the first component that is NaN or infinite.
	pub fn verify(&self) -> Result<(), GeometryError> {
		for (index, value) in self.values().iter().enumerate() {
			if !value.is_finite() {
				return Err(GeometryError::NonFiniteComponent(index));
			}
		}
		Ok(())
	}

	fn values(&self) -> Vec<f64> {
		match self.z {
			Some(z) => vec![self.x, self.y, z],
			None => vec![self.x, self.y],
		}
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonValue {
		if let Some(prec) = precision {
			let factor = 10f64.powi(prec as i32);
			JsonValue::from(
				self
					.values()
					.into_iter()
					.map(|v| (v * factor).round() / factor)
					.collect::<Vec<_>>(),
			)
		} else {
			JsonValue::from(self.values())
		}
	}

	/// Reads a position array such as `[13.4, 52.5]` or `[13.4, 52.5, 34.0]`.
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		let values = json.as_array()?.as_number_vec()?;
		Coordinates::try_from_slice(&values).with_context(|| format!("invalid position {json}"))
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Into<f64>,
{
	fn from([x, y]: [T; 2]) -> Self {
		Coordinates::new(x.into(), y.into())
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<T> From<[T; 3]> for Coordinates
where
	T: Into<f64>,
{
	fn from([x, y, z]: [T; 3]) -> Self {
		Coordinates::new_with_altitude(x.into(), y.into(), z.into())
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinates::new_with_altitude(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<geo::Point> for Coordinates {
	fn from(value: geo::Point) -> Self {
		Coordinates::new(value.x(), value.y())
	}
}

/// Drops the altitude: `geo` coordinates are two-dimensional.
impl From<&Coordinates> for geo::Coord {
	fn from(value: &Coordinates) -> Self {
		geo::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.values().fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.z(), None);
		assert!(!c.has_altitude());

		let c = Coordinates::new_with_altitude(1.0, 2.0, 3.0);
		assert_eq!(c.z(), Some(3.0));
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
		assert_eq!(format!("{:?}", Coordinates::from([1, 2, 3])), "[1.0, 2.0, 3.0]");
	}

	#[rstest]
	#[case(&[1.0, 2.0], Ok(Coordinates::new(1.0, 2.0)))]
	#[case(&[1.0, 2.0, 3.0], Ok(Coordinates::new_with_altitude(1.0, 2.0, 3.0)))]
	#[case(&[1.0], Err(GeometryError::InvalidPositionArity(1)))]
	#[case(&[], Err(GeometryError::InvalidPositionArity(0)))]
	#[case(&[1.0, 2.0, 3.0, 4.0], Err(GeometryError::InvalidPositionArity(4)))]
	#[case(&[f64::NAN, 2.0], Err(GeometryError::NonFiniteComponent(0)))]
	#[case(&[1.0, 2.0, f64::INFINITY], Err(GeometryError::NonFiniteComponent(2)))]
	fn try_from_slice(#[case] values: &[f64], #[case] expected: Result<Coordinates, GeometryError>) {
		assert_eq!(Coordinates::try_from_slice(values), expected);
	}

	#[test]
	fn to_json_without_precision() {
		let c = Coordinates::new(1.23456789, 9.87654321);
		assert_eq!(c.to_json(None), JsonValue::from([1.23456789, 9.87654321]));
		assert_eq!(Coordinates::from([0, 0]).to_json(None).stringify(), "[0,0]");
	}

	#[rstest]
	#[case(0, [1.0, 2.0])]
	#[case(1, [1.2, 2.3])]
	#[case(3, [1.235, 2.346])]
	fn to_json_with_precision(#[case] prec: u8, #[case] expected: [f64; 2]) {
		let c = Coordinates::new(1.23456, 2.34567);
		assert_eq!(c.to_json(Some(prec)), JsonValue::from(expected));
	}

	#[test]
	fn to_json_keeps_altitude() {
		let c = Coordinates::new_with_altitude(1.0, 2.5, 100.0);
		assert_eq!(c.to_json(None).stringify(), "[1,2.5,100]");
	}

	#[test]
	fn from_json() {
		let json = JsonValue::parse_str("[1.5, -2]").unwrap();
		assert_eq!(Coordinates::from_json(&json).unwrap(), Coordinates::new(1.5, -2.0));

		let json = JsonValue::parse_str("[1, 2, 3]").unwrap();
		assert_eq!(Coordinates::from_json(&json).unwrap().z(), Some(3.0));
	}

	#[rstest]
	#[case("[1]", "invalid position [1]: a position must have 2 or 3 components, found 1")]
	#[case("[1, \"a\"]", "at index 1: expected a number, found string")]
	#[case("{\"x\": 1}", "expected an array, found object")]
	#[case("[1e400, 0]", "invalid position [null,0]: position component 0 is not a finite number")]
	fn from_json_errors(#[case] json: &str, #[case] message: &str) {
		let json = JsonValue::parse_str(json).unwrap();
		let error = Coordinates::from_json(&json).unwrap_err();
		assert_eq!(format!("{error:#}"), message);
	}

	#[test]
	fn from_tuple_and_ref_tuple() {
		let c1 = Coordinates::from((3.0f64, 4.0f64));
		let c2 = Coordinates::from(&(5.0f64, 6.0f64));
		assert_eq!(c1, Coordinates::new(3.0, 4.0));
		assert_eq!(c2, Coordinates::new(5.0, 6.0));
	}

	#[test]
	fn geo_conversions() {
		let c = Coordinates::from(geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(c, Coordinates::new(11.0, 22.0));

		let c = Coordinates::from(geo::Point::new(1.0, 2.0));
		assert_eq!(c, Coordinates::new(1.0, 2.0));

		let coord = geo::Coord::from(&Coordinates::new_with_altitude(3.0, 4.0, 5.0));
		assert_eq!(coord, geo::Coord { x: 3.0, y: 4.0 });
	}
}
