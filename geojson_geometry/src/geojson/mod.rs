//! Reading and writing GeoJSON documents.
//!
//! [`GeoJson`] is the entry point. The decoder functions are public for callers that
//! already hold a [`JsonValue`](geojson_core::json::JsonValue) and want the typed object
//! without a root.

mod config;
mod decode;
mod geojson_type;
mod object;
mod payload;
mod read;
mod root;

pub use config::*;
pub use decode::*;
pub use geojson_type::*;
pub use object::*;
pub use payload::*;
pub use read::*;
pub use root::*;
