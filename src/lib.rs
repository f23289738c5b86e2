//! flowkit: wrapped flow layout for rectangular items.
//!
//! The algorithm lives in `flowkit-layout`; this crate re-exports the whole
//! stack and adds JSON scene documents for tools and fixtures.

pub mod error;
pub mod scene;

pub use error::SceneError;
pub use scene::{ConfigSource, LayoutReport, Scene};

pub use flowkit_layout::{
    AlignContent, AlignItems, BridgeError, Distribution, FlowConfig, FlowLayout,
    FlowLayoutResult, JustifyContent, LayoutNode, Line, LineData, Measure, MeasureFn, Point,
    Rect, Size, SpanExtent, align_items, distribute, layout, partition, taffy_reference_layout,
};
pub use flowkit_style::StyleParseError;
