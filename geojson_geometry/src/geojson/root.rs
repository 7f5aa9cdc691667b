use crate::*;
use anyhow::{Context, Result};
use geojson_core::json::{JsonObject, JsonValue, parse_json_str};
use std::fmt::Display;

/// A decoded GeoJSON document.
///
/// Decoding never panics and never returns early: the root either holds exactly one
/// GeoJSON object or a [`GeoJsonError`] explaining why there is none. Foreign members
/// `bbox` and `crs` of the top-level object are kept and written back on encode.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoJson {
	content: Result<GeoJsonObject, GeoJsonError>,
	bbox: Option<Vec<f64>>,
	crs: Option<JsonValue>,
}

impl GeoJson {
	pub fn new(object: impl Into<GeoJsonObject>) -> Self {
		Self {
			content: Ok(object.into()),
			bbox: None,
			crs: None,
		}
	}

	#[must_use]
	pub fn from_error(error: GeoJsonError) -> Self {
		Self {
			content: Err(error),
			bbox: None,
			crs: None,
		}
	}

	/// Parses and decodes a GeoJSON text with the default configuration.
	#[must_use]
	pub fn parse_str(text: &str) -> Self {
		Self::parse_str_with_config(text, &GeoJsonConfig::default())
	}

	#[must_use]
	pub fn parse_str_with_config(text: &str, config: &GeoJsonConfig) -> Self {
		match parse_json_str(text) {
			Ok(json) => Self::from_json_with_config(&json, config),
			Err(error) => {
				log::debug!("rejecting GeoJSON text: {error:#}");
				Self::from_error(GeoJsonError::invalid_json(&error))
			}
		}
	}

	/// Decodes an already parsed JSON value with the default configuration.
	#[must_use]
	pub fn from_json(json: &JsonValue) -> Self {
		Self::from_json_with_config(json, &GeoJsonConfig::default())
	}

	#[must_use]
	pub fn from_json_with_config(json: &JsonValue, config: &GeoJsonConfig) -> Self {
		match Self::decode(json, config) {
			Ok(root) => root,
			Err(error) => {
				log::debug!("rejecting GeoJSON object: {error:#}");
				Self::from_error(GeoJsonError::invalid_object(&error))
			}
		}
	}

	fn decode(json: &JsonValue, config: &GeoJsonConfig) -> Result<Self> {
		let object = decode_geojson_object(json, config)?;
		let members = json.as_object()?;
		let bbox = match members.get("bbox") {
			Some(value) if !value.is_null() => Some(decode_bbox(value).context("in 'bbox'")?),
			_ => None,
		};
		let crs = members.get("crs").filter(|value| !value.is_null()).cloned();
		Ok(Self {
			content: Ok(object),
			bbox,
			crs,
		})
	}

	#[must_use]
	pub fn with_bbox(mut self, bbox: Vec<f64>) -> Self {
		self.bbox = Some(bbox);
		self
	}

	#[must_use]
	pub fn with_crs(mut self, crs: JsonValue) -> Self {
		self.crs = Some(crs);
		self
	}

	pub fn object(&self) -> Option<&GeoJsonObject> {
		self.content.as_ref().ok()
	}

	pub fn error(&self) -> Option<&GeoJsonError> {
		self.content.as_ref().err()
	}

	pub fn into_result(self) -> Result<GeoJsonObject, GeoJsonError> {
		self.content
	}

	/// The discriminant of the decoded object, `None` if decoding failed.
	#[must_use]
	pub fn geojson_type(&self) -> Option<GeoJsonType> {
		self.object().map(GeoJsonObject::geojson_type)
	}

	/// `true` for the seven geometry kinds, `false` for features, collections of
	/// features and failed roots.
	#[must_use]
	pub fn is_geometry(&self) -> bool {
		self.geojson_type().is_some_and(|t| t.is_geometry())
	}

	pub fn geometry(&self) -> Option<&Geometry> {
		match self.object()? {
			GeoJsonObject::Geometry(geometry) => Some(geometry),
			_ => None,
		}
	}

	pub fn point(&self) -> Option<&PointGeometry> {
		match self.geometry()? {
			Geometry::Point(g) => Some(g),
			_ => None,
		}
	}

	pub fn multi_point(&self) -> Option<&MultiPointGeometry> {
		match self.geometry()? {
			Geometry::MultiPoint(g) => Some(g),
			_ => None,
		}
	}

	pub fn line_string(&self) -> Option<&LineStringGeometry> {
		match self.geometry()? {
			Geometry::LineString(g) => Some(g),
			_ => None,
		}
	}

	pub fn multi_line_string(&self) -> Option<&MultiLineStringGeometry> {
		match self.geometry()? {
			Geometry::MultiLineString(g) => Some(g),
			_ => None,
		}
	}

	pub fn polygon(&self) -> Option<&PolygonGeometry> {
		match self.geometry()? {
			Geometry::Polygon(g) => Some(g),
			_ => None,
		}
	}

	pub fn multi_polygon(&self) -> Option<&MultiPolygonGeometry> {
		match self.geometry()? {
			Geometry::MultiPolygon(g) => Some(g),
			_ => None,
		}
	}

	pub fn geometry_collection(&self) -> Option<&GeometryCollection> {
		match self.geometry()? {
			Geometry::GeometryCollection(g) => Some(g),
			_ => None,
		}
	}

	pub fn feature(&self) -> Option<&GeoFeature> {
		match self.object()? {
			GeoJsonObject::Feature(f) => Some(f),
			_ => None,
		}
	}

	pub fn feature_collection(&self) -> Option<&GeoCollection> {
		match self.object()? {
			GeoJsonObject::FeatureCollection(c) => Some(c),
			_ => None,
		}
	}

	pub fn bbox(&self) -> Option<&[f64]> {
		self.bbox.as_deref()
	}

	pub fn crs(&self) -> Option<&JsonValue> {
		self.crs.as_ref()
	}

	/// Encodes the root as a JSON object. A failed root encodes as `null`.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		self.to_json_with_config(&GeoJsonConfig::default())
	}

	#[must_use]
	pub fn to_json_with_config(&self, config: &GeoJsonConfig) -> JsonValue {
		let Some(object) = self.object() else {
			return JsonValue::Null;
		};
		let mut json: JsonObject = object.to_json(config.precision);
		json.set_optional("bbox", self.bbox.clone());
		json.set_optional("crs", self.crs.clone());
		JsonValue::Object(json)
	}
}

impl Display for GeoJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_json().stringify())
	}
}

macro_rules! impl_from_object {
	($($t:ty),* $(,)?) => {$(
		impl From<$t> for GeoJson {
			fn from(value: $t) -> Self {
				GeoJson::new(value)
			}
		}
	)*}
}

impl_from_object!(
	GeoJsonObject,
	Geometry,
	PointGeometry,
	MultiPointGeometry,
	LineStringGeometry,
	MultiLineStringGeometry,
	PolygonGeometry,
	MultiPolygonGeometry,
	GeometryCollection,
	GeoFeature,
	GeoCollection,
);

impl From<GeoJsonError> for GeoJson {
	fn from(error: GeoJsonError) -> Self {
		GeoJson::from_error(error)
	}
}
