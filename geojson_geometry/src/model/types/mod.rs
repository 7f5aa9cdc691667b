// Geometry primitives of the GeoJSON model: positions, points, line strings, rings,
// polygons and their multi-geometry counterparts. They share `GeometryTrait` for
// validation and coordinate JSON conversion, `CompositeGeometryTrait` for sequence
// access, and `SingleGeometryTrait` for wrapping a single geometry into its multi form.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
