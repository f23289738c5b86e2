//! Row-wrapping flow layout.
//!
//! Items are measured, broken into lines greedily, the lines are distributed
//! down the container, and each line's items are distributed across it and
//! aligned within its height.

pub mod distribute;
pub mod engine;
pub mod partition;
pub mod taffy_bridge;
pub mod util;

pub use self::distribute::{Distribution, SpanExtent, align_items, align_items_into, distribute};
pub use self::engine::{FlowLayout, FlowLayoutResult, layout};
pub use self::partition::{Line, LineData, partition};
pub use self::taffy_bridge::{BridgeError, taffy_reference_layout};

// Re-export the value types used in signatures to prevent type mismatches
pub use flowkit_style::{AlignContent, AlignItems, FlowConfig, JustifyContent};
pub use flowkit_traits::{LayoutNode, Measure, MeasureFn};
pub use flowkit_types::{Point, Rect, Size};

#[cfg(test)]
mod test_utils;
