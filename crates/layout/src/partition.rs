//! Greedy line breaking for wrapped flow layout.

use flowkit_types::Size;

/// One row of items produced by [`partition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Index of the first item on this line.
    pub start: usize,
    /// Number of items on this line; at least one.
    pub count: usize,
    /// Items-only width (no gaps) and the tallest item's height.
    pub size: Size,
}

impl Line {
    /// Item indices covered by this line.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.count
    }

    /// Width including the gaps between this line's items.
    pub fn outer_width(&self, interitem_spacing: f32) -> f32 {
        self.size.width + interitem_spacing * self.count.saturating_sub(1) as f32
    }
}

/// The lines of a layout pass and their summed height (without line gaps).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineData {
    pub total_height: f32,
    pub lines: Vec<Line>,
}

impl LineData {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|line| line.count).sum()
    }

    /// Outer width of the widest line.
    pub fn max_width(&self, interitem_spacing: f32) -> f32 {
        self.lines
            .iter()
            .map(|line| line.outer_width(interitem_spacing))
            .fold(0.0, f32::max)
    }
}

/// Running state of the line being filled.
#[derive(Debug, Default)]
struct OpenLine {
    start: usize,
    count: usize,
    /// Item widths plus one trailing gap per item.
    width: f32,
    max_height: f32,
}

impl OpenLine {
    fn would_overflow(&self, item_width: f32, max_width: f32) -> bool {
        self.count != 0 && self.width + item_width > max_width
    }

    fn push(&mut self, size: Size, interitem_spacing: f32) {
        self.max_height = self.max_height.max(size.height);
        self.width += size.width + interitem_spacing;
        self.count += 1;
    }

    /// Closes the line and starts the next one at `next_start`.
    fn flush(&mut self, data: &mut LineData, interitem_spacing: f32, next_start: usize) {
        let line = Line {
            start: self.start,
            count: self.count,
            size: Size::new(
                self.width - interitem_spacing * self.count as f32,
                self.max_height,
            ),
        };
        log::trace!("flushed line {}: {:?}", data.lines.len(), line);
        data.total_height += line.size.height;
        data.lines.push(line);
        *self = OpenLine {
            start: next_start,
            ..OpenLine::default()
        };
    }
}

/// Assigns items to lines in order, starting a new line whenever the next
/// item would push the running width past `max_width`.
///
/// A line always takes at least one item, so an item wider than `max_width`
/// ends up alone on its own line instead of being dropped. The spacing
/// counts toward the break test but is stripped from the reported widths.
pub fn partition<I>(sizes: I, max_width: f32, interitem_spacing: f32) -> LineData
where
    I: IntoIterator<Item = Size>,
{
    let mut data = LineData::default();
    let mut open = OpenLine::default();

    for (index, size) in sizes.into_iter().enumerate() {
        if open.would_overflow(size.width, max_width) {
            open.flush(&mut data, interitem_spacing, index);
        }
        open.push(size, interitem_spacing);
    }
    if open.count > 0 {
        let end = open.start + open.count;
        open.flush(&mut data, interitem_spacing, end);
    }
    data
}
