use anyhow::{Error, Result, anyhow};
use std::{fmt::Display, str::FromStr};

/// The value of the `type` member of a GeoJSON object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

impl GeoJsonType {
	pub const ALL: [GeoJsonType; 9] = [
		GeoJsonType::Point,
		GeoJsonType::MultiPoint,
		GeoJsonType::LineString,
		GeoJsonType::MultiLineString,
		GeoJsonType::Polygon,
		GeoJsonType::MultiPolygon,
		GeoJsonType::GeometryCollection,
		GeoJsonType::Feature,
		GeoJsonType::FeatureCollection,
	];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use GeoJsonType::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// True for the seven geometry types, false for `Feature` and `FeatureCollection`.
	#[must_use]
	pub fn is_geometry(&self) -> bool {
		!matches!(self, GeoJsonType::Feature | GeoJsonType::FeatureCollection)
	}

	/// The member that carries the payload of an object of this type.
	#[must_use]
	pub fn prefix(&self) -> &'static str {
		match self {
			GeoJsonType::GeometryCollection => "geometries",
			GeoJsonType::Feature => "geometry",
			GeoJsonType::FeatureCollection => "features",
			_ => "coordinates",
		}
	}
}

impl FromStr for GeoJsonType {
	type Err = Error;

	/// Type names are case-sensitive, as in the GeoJSON grammar.
	fn from_str(s: &str) -> Result<Self> {
		GeoJsonType::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| anyhow!("unknown GeoJSON type '{s}'"))
	}
}

impl Display for GeoJsonType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
