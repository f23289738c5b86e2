//! Wrapped flow layout: measure, break into lines, distribute lines, then
//! distribute and align the items of each line.

use crate::distribute::{Distribution, align_items_into, distribute};
use crate::partition::{Line, LineData, partition};
use flowkit_style::FlowConfig;
use flowkit_traits::{LayoutNode, Measure};
use flowkit_types::{Rect, Size};

/// Output of one layout pass.
///
/// `frames[i]` and `nodes[i]` both belong to the i-th input item.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayoutResult<N> {
    pub nodes: Vec<N>,
    pub frames: Vec<Rect>,
    pub lines: Vec<Line>,
    pub content_size: Size,
}

impl<N> FlowLayoutResult<N> {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Frames belonging to one line, or `None` past the last line.
    pub fn line_frames(&self, line: usize) -> Option<&[Rect]> {
        let line = self.lines.get(line)?;
        self.frames.get(line.range())
    }
}

/// A row-wrapping layout, configured once and run against any number of
/// item lists. Holds no state between passes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Measures every item against `(container.width, ∞)` and places it.
    pub fn layout<T>(&self, items: &[T], container: Size) -> FlowLayoutResult<T::Node>
    where
        T: Measure,
    {
        let container = container.non_negative();
        let bound = Size::bounded_width(container.width);
        let nodes: Vec<T::Node> = items.iter().map(|item| item.measure(bound)).collect();
        let sizes: Vec<Size> = nodes.iter().map(LayoutNode::size).collect();

        let (frames, lines, content_size) = self.place(&sizes, container);
        FlowLayoutResult {
            nodes,
            frames,
            lines,
            content_size,
        }
    }

    /// Places items whose sizes are already known. The sizes double as the
    /// returned nodes.
    pub fn layout_sizes(&self, sizes: &[Size], container: Size) -> FlowLayoutResult<Size> {
        let container = container.non_negative();
        let (frames, lines, content_size) = self.place(sizes, container);
        FlowLayoutResult {
            nodes: sizes.to_vec(),
            frames,
            lines,
            content_size,
        }
    }

    /// Size the wrapped content would need at `max_width`, including the
    /// minimum line spacing, without producing frames.
    pub fn measure_content(&self, sizes: &[Size], max_width: f32) -> Size {
        let data = partition(
            sizes.iter().copied(),
            max_width.max(0.0),
            self.config.interitem_spacing,
        );
        let gaps = data.len().saturating_sub(1) as f32;
        Size::new(
            data.max_width(self.config.interitem_spacing),
            data.total_height + self.config.line_spacing * gaps,
        )
    }

    fn place(&self, sizes: &[Size], container: Size) -> (Vec<Rect>, Vec<Line>, Size) {
        let config = &self.config;
        let LineData {
            total_height,
            lines,
        } = partition(
            sizes.iter().copied(),
            container.width,
            config.interitem_spacing,
        );

        let Distribution {
            offset: mut y,
            spacing: line_gap,
        } = distribute(
            config.align_content,
            container.height,
            total_height,
            config.line_spacing,
            lines.len(),
        );

        let mut frames = Vec::with_capacity(sizes.len());
        let mut content_size = Size::zero();
        for line in &lines {
            let Distribution { offset: x, spacing } = distribute(
                config.justify_content,
                container.width,
                line.size.width,
                config.interitem_spacing,
                line.count,
            );
            let line_bottom = y + line.size.height;
            let extent = align_items_into(
                &mut frames,
                config.align_items,
                x,
                spacing,
                sizes[line.range()].iter().copied(),
                y..=line_bottom,
            );
            content_size.width = content_size.width.max(extent.main_end);
            content_size.height = content_size.height.max(line_bottom);
            y = line_bottom + line_gap;
        }

        log::debug!(
            "flow layout: {} items in {} lines, content {}x{} within {}x{}",
            sizes.len(),
            lines.len(),
            content_size.width,
            content_size.height,
            container.width,
            container.height
        );
        (frames, lines, content_size)
    }
}

/// One-shot form of [`FlowLayout::layout`].
pub fn layout<T>(items: &[T], container: Size, config: FlowConfig) -> FlowLayoutResult<T::Node>
where
    T: Measure,
{
    FlowLayout::new(config).layout(items, container)
}
