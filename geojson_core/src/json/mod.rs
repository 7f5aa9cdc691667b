//! JSON value tree with a strict parser and a compact stringifier.
//!
//! ```
//! use geojson_core::json::{JsonValue, parse_json_str};
//! let value = parse_json_str(r#"{"coordinates":[1.0,2.5]}"#).unwrap();
//! assert_eq!(value.stringify(), r#"{"coordinates":[1,2.5]}"#);
//! ```

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_NESTING_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
