use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};

/// Arrays and objects nested deeper than this are rejected instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete JSON document. Anything but whitespace after the root value is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_str(json, true);
	let value = parse_json_iter(&mut iter).context("while parsing JSON")?;
	iter.expect_end().context("while parsing JSON")?;
	Ok(value)
}

/// Parses one JSON value at the cursor and leaves the cursor right after it.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_NESTING_DEPTH => Err(iter.format_error("maximum nesting depth exceeded")),
		b'[' => parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1)).map(|i| JsonValue::Array(JsonArray(i))),
		b'{' => parse_object(iter, depth),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		let value = parse_value(iter2, depth + 1)?;
		object.0.insert(key, value);
		Ok(())
	})?;
	Ok(JsonValue::Object(object))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	fn o<T>(input: Vec<(&str, T)>) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::Object(JsonObject::from(input))
	}

	fn last_error(json: &str) -> String {
		parse_json_str(json).unwrap_err().chain().last().unwrap().to_string()
	}

	#[test]
	fn geojson_document() {
		let data = r#"{"type":"MultiLineString","coordinates":[[[0.0,0.0],[0.0,1.0]],[[1.0,0.0],[1.0,1.0]]]}"#;
		assert_eq!(
			parse_json_str(data).unwrap(),
			o(vec![
				("type", v("MultiLineString")),
				(
					"coordinates",
					v(vec![
						v(vec![v([0.0, 0.0]), v([0.0, 1.0])]),
						v(vec![v([1.0, 0.0]), v([1.0, 1.0])])
					])
				),
			])
		);
	}

	#[test]
	fn whitespace_between_tokens() -> Result<()> {
		let result = o(vec![(
			"a",
			v(vec![
				o(vec![("b", v(7)), ("c", v(true))]),
				o(vec![("d", v(false)), ("e", JsonValue::Null), ("f", v("g"))]),
			]),
		)]);

		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_,_"f"_:_"g"_}_]_}_"#;

		for ws in ["", " ", "\t", "\n", "\r"] {
			assert_eq!(parse_json_str(&data.replace('_', ws))?, result);
		}
		Ok(())
	}

	#[test]
	fn scalars_and_empty_containers() -> Result<()> {
		assert_eq!(parse_json_str("{}")?, JsonValue::new_object());
		assert_eq!(parse_json_str("[]")?, JsonValue::new_array());
		assert_eq!(parse_json_str(" null ")?, JsonValue::Null);
		assert_eq!(parse_json_str("-1.5e2")?, v(-150.0));
		assert_eq!(parse_json_str(r#""text""#)?, v("text"));
		Ok(())
	}

	#[test]
	fn duplicate_keys_keep_last() -> Result<()> {
		assert_eq!(parse_json_str(r#"{"a":1,"a":2}"#)?, o(vec![("a", 2)]));
		Ok(())
	}

	#[test]
	fn error_missing_colon() {
		assert_eq!(
			last_error(r#"{"city":"Nantes","country","France"}"#),
			"expected ':' at position 27: ntes\",\"country\","
		);
	}

	#[test]
	fn error_unclosed_brace() {
		assert_eq!(
			last_error(r#"{"key": "value""#),
			"unexpected end at position 15: {\"key\": \"value\"<EOF>"
		);
	}

	#[test]
	fn error_trailing_characters() {
		assert_eq!(last_error("[1] x"), "unexpected trailing characters at position 4: [1] ");
	}

	#[test]
	fn error_trailing_comma() {
		assert!(parse_json_str(r#"{"features":[{"type":"Feature"},]}"#).is_err());
	}

	#[test]
	fn error_context() {
		let error = parse_json_str("{").unwrap_err();
		assert_eq!(error.to_string(), "while parsing JSON");
	}

	#[test]
	fn nesting_depth_limit() {
		let ok = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
		assert!(parse_json_str(&ok).is_ok());

		let deep = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH + 1), "]".repeat(MAX_NESTING_DEPTH + 1));
		assert!(last_error(&deep).starts_with("maximum nesting depth exceeded"));
	}
}
