use super::JsonValue;

/// Serializes `json` to compact JSON text.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => stringify_number(*n),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

/// Formats a number in its shortest round-trippable form.
///
/// Integral values carry no fractional part (`1.0` becomes `1`). Magnitudes from `1e21`
/// upwards and below `1e-7` use exponent notation (`1e300`, `1.5e-8`). JSON has no literal
/// for NaN or infinity, so those are written as `null`.
#[must_use]
pub fn stringify_number(n: f64) -> String {
	if !n.is_finite() {
		return String::from("null");
	}
	let magnitude = n.abs();
	if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-7) {
		format!("{n:e}")
	} else {
		n.to_string()
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}
