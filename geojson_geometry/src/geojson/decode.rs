//! Decoding of JSON value trees into the typed GeoJSON model.
//!
//! Every function here returns `anyhow::Result` and stops at the first failure. The
//! context chain records where the failure happened (`in 'features': at index 2: ...`);
//! turning it into a [`GeoJsonError`](crate::GeoJsonError) is left to the root.

use crate::*;
use anyhow::{Context, Result, anyhow, bail, ensure};
use geojson_core::json::{JsonObject, JsonValue};

/// Decodes any of the nine GeoJSON object kinds.
pub fn decode_geojson_object(json: &JsonValue, config: &GeoJsonConfig) -> Result<GeoJsonObject> {
	decode_object(json, config, 0)
}

/// Decodes an object that must be one of the seven geometry kinds.
pub fn decode_geometry(json: &JsonValue, config: &GeoJsonConfig) -> Result<Geometry> {
	decode_geometry_at(json, config, 0)
}

/// Decodes an object that must be a `Feature`.
pub fn decode_feature(json: &JsonValue, config: &GeoJsonConfig) -> Result<GeoFeature> {
	decode_feature_at(json, config, 0)
}

/// Reads a `bbox` member: `2 * n` numbers with `n >= 2`.
pub fn decode_bbox(json: &JsonValue) -> Result<Vec<f64>> {
	let values = json.as_array()?.as_number_vec()?;
	ensure!(
		values.len() >= 4 && values.len() % 2 == 0,
		"a bounding box must have 2*n values with n >= 2, found {}",
		values.len()
	);
	ensure!(
		values.iter().all(|value| value.is_finite()),
		"a bounding box must only contain finite numbers"
	);
	Ok(values)
}

fn decode_object(json: &JsonValue, config: &GeoJsonConfig, depth: usize) -> Result<GeoJsonObject> {
	ensure!(
		depth <= config.max_depth,
		"maximum nesting depth of {} exceeded",
		config.max_depth
	);

	let object = json.as_object()?;
	let geojson_type = read_type(object)?;
	log::trace!("decoding {geojson_type} at depth {depth}");

	Ok(match geojson_type {
		GeoJsonType::Point => GeoJsonObject::from(decode_coordinates::<PointGeometry>(object)?),
		GeoJsonType::MultiPoint => GeoJsonObject::from(decode_coordinates::<MultiPointGeometry>(object)?),
		GeoJsonType::LineString => GeoJsonObject::from(decode_coordinates::<LineStringGeometry>(object)?),
		GeoJsonType::MultiLineString => GeoJsonObject::from(decode_coordinates::<MultiLineStringGeometry>(object)?),
		GeoJsonType::Polygon => GeoJsonObject::from(decode_coordinates::<PolygonGeometry>(object)?),
		GeoJsonType::MultiPolygon => GeoJsonObject::from(decode_coordinates::<MultiPolygonGeometry>(object)?),
		GeoJsonType::GeometryCollection => GeoJsonObject::from(decode_geometry_collection(object, config, depth)?),
		GeoJsonType::Feature => GeoJsonObject::from(decode_feature_members(object, config, depth)?),
		GeoJsonType::FeatureCollection => GeoJsonObject::from(decode_feature_collection(object, config, depth)?),
	})
}

fn read_type(object: &JsonObject) -> Result<GeoJsonType> {
	object
		.get_str("type")
		.context("in 'type'")?
		.ok_or_else(|| anyhow!("missing member 'type'"))?
		.parse()
}

fn payload<'a>(object: &'a JsonObject, key: &str) -> Result<&'a JsonValue> {
	object.get(key).ok_or_else(|| anyhow!("missing member '{key}'"))
}

/// Looks up an optional member; `null` counts as absent.
fn optional_member<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
	object.get(key).filter(|value| !value.is_null())
}

fn decode_coordinates<G: GeometryTrait>(object: &JsonObject) -> Result<G> {
	G::from_coord_json(payload(object, "coordinates")?).context("in 'coordinates'")
}

fn decode_geometry_at(json: &JsonValue, config: &GeoJsonConfig, depth: usize) -> Result<Geometry> {
	match decode_object(json, config, depth)? {
		GeoJsonObject::Geometry(geometry) => Ok(geometry),
		other => bail!("expected a geometry, found {}", other.geojson_type()),
	}
}

fn decode_feature_at(json: &JsonValue, config: &GeoJsonConfig, depth: usize) -> Result<GeoFeature> {
	match decode_object(json, config, depth)? {
		GeoJsonObject::Feature(feature) => Ok(feature),
		other => bail!("expected a Feature, found {}", other.geojson_type()),
	}
}

fn decode_geometry_collection(object: &JsonObject, config: &GeoJsonConfig, depth: usize) -> Result<GeometryCollection> {
	payload(object, "geometries")?
		.as_array()
		.and_then(|members| members.map_entries(|member| decode_geometry_at(member, config, depth + 1)))
		.map(GeometryCollection)
		.context("in 'geometries'")
}

fn decode_feature_members(object: &JsonObject, config: &GeoJsonConfig, depth: usize) -> Result<GeoFeature> {
	let geometry = optional_member(object, "geometry")
		.map(|json| decode_geometry_at(json, config, depth + 1))
		.transpose()
		.context("in 'geometry'")?;

	let properties = optional_member(object, "properties")
		.map(GeoProperties::from_json)
		.transpose()
		.context("in 'properties'")?;

	let id = optional_member(object, "id")
		.map(FeatureId::from_json)
		.transpose()
		.context("in 'id'")?;

	Ok(GeoFeature {
		id,
		geometry,
		properties,
	})
}

fn decode_feature_collection(object: &JsonObject, config: &GeoJsonConfig, depth: usize) -> Result<GeoCollection> {
	payload(object, "features")?
		.as_array()
		.and_then(|members| members.map_entries(|member| decode_feature_at(member, config, depth + 1)))
		.map(GeoCollection::from)
		.context("in 'features'")
}
