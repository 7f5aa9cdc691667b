//! Error taxonomy of the GeoJSON model.
//!
//! Two layers exist. [`GeometryError`] is returned by the validating constructors of the
//! geometry types. [`GeoJsonError`] is what a decoded [`GeoJson`](crate::GeoJson) root
//! carries when decoding failed; it pairs the fixed [`GEOJSON_ERROR_DOMAIN`] with an
//! [`ErrorCode`].

use std::fmt::Display;
use thiserror::Error;

/// Identifies this library as the origin of a [`GeoJsonError`].
pub const GEOJSON_ERROR_DOMAIN: &str = "GeoJSONErrorDomain";

/// Numeric error codes exposed by [`GeoJsonError::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
	/// The input text is not JSON.
	InvalidJson = 998,
	/// The input is JSON, but not a valid GeoJSON object.
	InvalidGeoJsonObject = 999,
}

impl ErrorCode {
	#[must_use]
	pub fn as_i32(self) -> i32 {
		self as i32
	}
}

impl Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_i32())
	}
}

/// An invariant violated while constructing a geometry from typed parts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
	#[error("a position must have 2 or 3 components, found {0}")]
	InvalidPositionArity(usize),

	#[error("position component {0} is not a finite number")]
	NonFiniteComponent(usize),

	#[error("a line string must have at least 2 positions, found {0}")]
	TooFewPositions(usize),

	#[error("a linear ring must have at least 4 positions, found {0}")]
	RingTooShort(usize),

	#[error("a linear ring must start and end at the same position")]
	RingNotClosed,

	#[error("element {index}: {source}")]
	InvalidElement { index: usize, source: Box<GeometryError> },
}

impl GeometryError {
	/// Wraps `self` as the failure of element `index` of a composite geometry.
	#[must_use]
	pub fn at_index(self, index: usize) -> Self {
		GeometryError::InvalidElement {
			index,
			source: Box::new(self),
		}
	}
}

/// The error attached to a [`GeoJson`](crate::GeoJson) root whose decoding failed.
///
/// All structural failures share [`ErrorCode::InvalidGeoJsonObject`]; the message keeps
/// the full reason, e.g. `at index 0: a line string must have at least 2 positions, found 1`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeoJsonError {
	#[error("invalid JSON: {0}")]
	InvalidJson(String),

	#[error("invalid GeoJSON object: {0}")]
	InvalidGeoJsonObject(String),
}

impl GeoJsonError {
	/// Builds an `InvalidJson` error from a parser error, keeping its context chain.
	pub(crate) fn invalid_json(error: &anyhow::Error) -> Self {
		GeoJsonError::InvalidJson(format!("{error:#}"))
	}

	/// Builds an `InvalidGeoJsonObject` error, keeping the context chain of `error`.
	pub(crate) fn invalid_object(error: &anyhow::Error) -> Self {
		GeoJsonError::InvalidGeoJsonObject(format!("{error:#}"))
	}

	#[must_use]
	pub fn domain(&self) -> &'static str {
		GEOJSON_ERROR_DOMAIN
	}

	#[must_use]
	pub fn code(&self) -> ErrorCode {
		match self {
			GeoJsonError::InvalidJson(_) => ErrorCode::InvalidJson,
			GeoJsonError::InvalidGeoJsonObject(_) => ErrorCode::InvalidGeoJsonObject,
		}
	}

	/// The reason without the kind prefix.
	#[must_use]
	pub fn message(&self) -> &str {
		match self {
			GeoJsonError::InvalidJson(message) | GeoJsonError::InvalidGeoJsonObject(message) => message,
		}
	}
}
