//! Token helpers built on top of [`ByteIterator`].
//!
//! Each helper consumes exactly one JSON token (or one object/array frame) and leaves the
//! iterator on the first byte after it:
//! - `parse_tag` for the literals `true`, `false` and `null`
//! - `parse_quoted_json_string` for string literals including `\uXXXX` and surrogate pairs
//! - `parse_number_as_string` / `parse_number_as` for the JSON number grammar
//! - `parse_object_entries` / `parse_array_entries` to walk containers
//!
//! Errors carry the byte position from [`ByteIterator::format_error`].

use super::iterator::ByteIterator;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Matches the fixed ASCII `tag` at the cursor.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut code = 0u16;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid hex digit in unicode escape")),
		};
		code = (code << 4) | u16::from(digit);
	}
	Ok(code)
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let high = parse_hex4(iter)?;
	let code_point = match high {
		0xD800..=0xDBFF => {
			if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
				return Err(iter.format_error("expected a low surrogate after a high surrogate"));
			}
			let low = parse_hex4(iter)?;
			if !(0xDC00..=0xDFFF).contains(&low) {
				return Err(iter.format_error("invalid low surrogate"));
			}
			0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(iter.format_error("unpaired low surrogate")),
		_ => u32::from(high),
	};
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Parses a quoted JSON string literal, resolving all escapes.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let c = parse_unicode_escape(iter)?;
					bytes.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c if c < 0x20 => return Err(iter.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("string is not valid UTF-8")
}

fn push_digits(iter: &mut ByteIterator, number: &mut Vec<u8>) -> usize {
	let mut count = 0;
	while let Some(b @ b'0'..=b'9') = iter.peek() {
		number.push(b);
		iter.advance();
		count += 1;
	}
	count
}

/// Parses a JSON number and returns its literal text.
///
/// Follows the JSON grammar: optional `-`, an integer part without superfluous leading
/// zeros, an optional fraction and an optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if iter.peek() == Some(b'-') {
		number.push(b'-');
		iter.advance();
	}

	let integer_digits = push_digits(iter, &mut number);
	if integer_digits == 0 {
		return Err(iter.format_error("expected digits in number"));
	}
	let integer_start = usize::from(number[0] == b'-');
	if integer_digits > 1 && number[integer_start] == b'0' {
		return Err(iter.format_error("leading zeros are not allowed in numbers"));
	}

	if iter.peek() == Some(b'.') {
		number.push(b'.');
		iter.advance();
		if push_digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(e @ (b'e' | b'E')) = iter.peek() {
		number.push(e);
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(sign);
			iter.advance();
		}
		if push_digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).context("number is not valid UTF-8")
}

/// Parses a JSON number and converts it with `R::from_str`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks a `{ ... }` frame, handing every key and the cursor positioned at its value to
/// `parse_value`, which must consume the value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("expected '\"' while parsing an object key"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b'}' => break,
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Walks a `[ ... ]` frame and collects what `parse_value` returns for every element.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b']' => break,
			_ => return Err(iter.format_error("expected ',' or ']'")),
		}
	}

	Ok(result)
}
