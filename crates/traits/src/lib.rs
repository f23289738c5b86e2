pub mod measure;

pub use measure::{LayoutNode, Measure, MeasureFn};
