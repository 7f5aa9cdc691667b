use super::GeoFeature;
use crate::GeoJsonPayload;
use geojson_core::json::JsonObject;

/// A GeoJSON feature collection: an ordered, possibly empty, list of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn new() -> Self {
		Self { features: Vec::new() }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	/// Encodes the complete collection object including `"type":"FeatureCollection"`.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("type", "FeatureCollection");
		self.write_members(&mut obj, precision);
		obj
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(iter: I) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}
