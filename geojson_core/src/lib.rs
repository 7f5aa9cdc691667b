//! Generic JSON layer of the GeoJSON codec.
//!
//! [`json::JsonValue`] is the wire representation every GeoJSON object is decoded from and
//! encoded to. Parsing is built on the small token helpers in [`byte_iterator`].

pub mod byte_iterator;
pub mod json;
