//! Byte-level cursor over JSON text and the token helpers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
