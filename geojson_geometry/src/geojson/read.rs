use crate::{GeoJson, GeoJsonError};
use anyhow::{Context, Error};
use std::io::{BufRead, Read};

/// Reads a complete GeoJSON document. Read failures produce an `InvalidJson` root.
pub fn read_geojson(mut reader: impl Read) -> GeoJson {
	let mut buffer = String::new();
	match reader.read_to_string(&mut buffer).context("while reading GeoJSON") {
		Ok(_) => GeoJson::parse_str(&buffer),
		Err(error) => GeoJson::from_error(GeoJsonError::invalid_json(&error)),
	}
}

fn process_line(line: std::io::Result<String>, index: usize) -> Option<GeoJson> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some(GeoJson::parse_str(&line)),
		Err(e) => {
			let error = Error::from(e).context(format!("line {}", index + 1));
			Some(GeoJson::from_error(GeoJsonError::invalid_json(&error)))
		}
	}
}

/// Reads newline-delimited GeoJSON: one root per non-empty line.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = GeoJson> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index))
}
