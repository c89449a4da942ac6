pub mod error;
pub mod geometry;
pub mod math;
pub mod streetgraph;

pub use error::{CityError, Result};
pub use geometry::{Intersection, LineSegment, Point, Polygon, Shape, Vector};
pub use math::{EPSILON, PI};
pub use streetgraph::Path;
