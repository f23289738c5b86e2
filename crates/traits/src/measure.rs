//! The measurement seam between flow layout and whatever owns the items.
//!
//! The layout engine never inspects an item beyond asking it for a measured
//! node. The node is handed back to the caller together with the frames, so
//! expensive measurements (shaped text, decoded images) are not repeated.

use flowkit_types::Size;

/// The result of measuring one item.
pub trait LayoutNode {
    /// Natural size of the measured item. Expected to be finite and
    /// non-negative.
    fn size(&self) -> Size;
}

/// An item that can report its natural size inside a bounding box.
///
/// The bound is a hint: flow layout passes the container width and an
/// unbounded height, and an item may report a width larger than the bound.
/// Implementations may touch external caches, so a single item must not be
/// measured from two threads at once.
pub trait Measure {
    type Node: LayoutNode;

    fn measure(&self, max: Size) -> Self::Node;
}

impl LayoutNode for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// A fixed-size item ignores the bound.
impl Measure for Size {
    type Node = Size;

    fn measure(&self, _max: Size) -> Size {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    type Node = T::Node;

    fn measure(&self, max: Size) -> Self::Node {
        (**self).measure(max)
    }
}

impl<T: Measure + ?Sized> Measure for Box<T> {
    type Node = T::Node;

    fn measure(&self, max: Size) -> Self::Node {
        (**self).measure(max)
    }
}

/// Adapts a closure into a measurable item.
pub struct MeasureFn<F>(pub F);

impl<F> Measure for MeasureFn<F>
where
    F: Fn(Size) -> Size,
{
    type Node = Size;

    fn measure(&self, max: Size) -> Size {
        (self.0)(max)
    }
}
