mod line_segment;
mod point;
mod polygon;
mod shape;
mod vector;

pub use line_segment::{Intersection, LineSegment};
pub use point::Point;
pub use polygon::Polygon;
pub use shape::Shape;
pub use vector::Vector;
