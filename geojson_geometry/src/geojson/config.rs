/// Options for decoding and encoding GeoJSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeoJsonConfig {
	/// Round coordinates to this many decimals when encoding. `None` keeps full precision.
	pub precision: Option<u8>,
	/// How deeply geometry collections, features and feature collections may nest while
	/// decoding. The root object is at depth 0.
	pub max_depth: usize,
}

impl GeoJsonConfig {
	pub const DEFAULT_MAX_DEPTH: usize = 64;

	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}

impl Default for GeoJsonConfig {
	fn default() -> Self {
		Self {
			precision: None,
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}
}
