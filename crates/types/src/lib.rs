pub mod geometry;

pub use geometry::{Point, Rect, Size};
