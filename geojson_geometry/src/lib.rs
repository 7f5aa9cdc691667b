//! GeoJSON object model and codec.
//!
//! Documents are decoded into a [`GeoJson`] root that always exists: it either holds one
//! of the nine GeoJSON object kinds or the [`GeoJsonError`] that stopped decoding.
//!
//! ```rust
//! use geojson_geometry::{GeoJson, GeoJsonType};
//!
//! let geojson = GeoJson::parse_str(r#"{"type":"Point","coordinates":[13.4,52.5]}"#);
//! assert_eq!(geojson.geojson_type(), Some(GeoJsonType::Point));
//! assert!(geojson.is_geometry());
//! assert_eq!(geojson.to_json().stringify(), r#"{"coordinates":[13.4,52.5],"type":"Point"}"#);
//! ```

pub mod error;
mod model;
pub mod geojson;

pub use error::*;
pub use model::*;
pub use geojson::*;
