//! A cursor over an in-memory byte slice with peeking and positioned error messages.
//!
//! GeoJSON documents are decoded from complete strings, so the iterator borrows the input
//! instead of buffering a reader. Errors report how many bytes were consumed and, when
//! debug mode is enabled, the last few of them.

use anyhow::{Error, Result, anyhow};

const DEBUG_SNAPSHOT_SIZE: usize = 16;

/// Peeking byte cursor used by all JSON token helpers.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates a cursor positioned at the first byte of `bytes`.
	///
	/// With `debug` enabled, [`format_error`](Self::format_error) appends the last
	/// consumed bytes to the message.
	#[must_use]
	pub fn from_slice(bytes: &'a [u8], debug: bool) -> Self {
		ByteIterator {
			bytes,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Creates a cursor over the UTF-8 bytes of `text`.
	#[must_use]
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(text: &'a str, debug: bool) -> Self {
		Self::from_slice(text.as_bytes(), debug)
	}

	/// Builds an error tagged with the number of bytes consumed so far.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if !self.is_debug_enabled {
			return anyhow!("{msg} at position {}", self.position);
		}

		let start = self.position.saturating_sub(DEBUG_SNAPSHOT_SIZE);
		let mut snapshot = String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned();
		if self.peek().is_none() {
			snapshot.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snapshot}", self.position)
	}

	/// Number of bytes consumed so far, i.e. the offset of the byte under the cursor.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves past the byte under the cursor. Does nothing at the end of input.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Returns the byte under the cursor and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Like [`consume`](Self::consume), but the end of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.consume() {
			Some(byte) => Ok(byte),
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but the end of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Fails unless only whitespace remains.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			None => Ok(()),
			Some(_) => Err(self.format_error("unexpected trailing characters")),
		}
	}
}
