//! Space distribution shared by line placement and item placement.
//!
//! The same policy switch serves both axes: `distribute` turns a policy and
//! the free space of a run into a start offset plus the gap between
//! consecutive members, and `align_items_into` turns one line's sizes into
//! frames.

use flowkit_style::{AlignItems, JustifyContent};
use flowkit_types::{Rect, Size};
use std::ops::RangeInclusive;

/// Where a run starts and how far apart its members are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub offset: f32,
    pub spacing: f32,
}

/// Computes the start offset and gap for `count` members whose combined
/// extent (without gaps) is `total_primary`, inside `max_primary`.
///
/// Free space is clamped at zero, so an overflowing run always starts at the
/// start edge and keeps `minimum_spacing` between members. An unbounded
/// `max_primary` has no free space to hand out.
pub fn distribute(
    policy: JustifyContent,
    max_primary: f32,
    total_primary: f32,
    minimum_spacing: f32,
    count: usize,
) -> Distribution {
    let packed = Distribution {
        offset: 0.0,
        spacing: minimum_spacing,
    };
    if count == 0 {
        return packed;
    }
    if count == 1 && !policy.is_packing() {
        return packed;
    }

    let gaps = (count - 1) as f32;
    let slack = if max_primary.is_finite() {
        (max_primary - total_primary - minimum_spacing * gaps).max(0.0)
    } else {
        0.0
    };

    let distribution = match policy {
        JustifyContent::Start => packed,
        JustifyContent::End => Distribution {
            offset: slack,
            spacing: minimum_spacing,
        },
        JustifyContent::Center => Distribution {
            offset: slack / 2.0,
            spacing: minimum_spacing,
        },
        JustifyContent::SpaceBetween => Distribution {
            offset: 0.0,
            spacing: minimum_spacing + slack / gaps,
        },
        JustifyContent::SpaceAround => {
            let share = slack / count as f32;
            Distribution {
                offset: share / 2.0,
                spacing: minimum_spacing + share,
            }
        }
        JustifyContent::SpaceEvenly => {
            let share = slack / (count + 1) as f32;
            Distribution {
                offset: share,
                spacing: minimum_spacing + share,
            }
        }
    };
    log::trace!(
        "distribute {:?}: max={} total={} count={} -> {:?}",
        policy,
        max_primary,
        total_primary,
        count,
        distribution
    );
    distribution
}

/// How much of each axis an aligned run used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpanExtent {
    /// Main-axis coordinate of the trailing edge of the last frame.
    pub main_end: f32,
    /// Largest cross-axis extent among the produced frames.
    pub cross_used: f32,
}

/// Places one line of items: main-axis origins accumulate from `start_offset`
/// with `spacing` between frames, and the cross-axis origin follows `policy`
/// within `cross_range`. Frames are appended to `frames` in input order.
pub fn align_items_into<I>(
    frames: &mut Vec<Rect>,
    policy: AlignItems,
    start_offset: f32,
    spacing: f32,
    sizes: I,
    cross_range: RangeInclusive<f32>,
) -> SpanExtent
where
    I: IntoIterator<Item = Size>,
{
    let (cross_start, cross_end) = (*cross_range.start(), *cross_range.end());
    let cross_length = cross_end - cross_start;

    let mut offset = start_offset;
    let mut extent = SpanExtent {
        main_end: start_offset,
        cross_used: 0.0,
    };

    for size in sizes {
        let frame = match policy {
            AlignItems::Start => Rect::new(offset, cross_start, size.width, size.height),
            AlignItems::End => Rect::new(offset, cross_end - size.height, size.width, size.height),
            AlignItems::Center => Rect::new(
                offset,
                cross_start + (cross_length - size.height) / 2.0,
                size.width,
                size.height,
            ),
            AlignItems::Stretch => {
                Rect::new(offset, cross_start, size.width, cross_length.max(0.0))
            }
        };
        extent.main_end = frame.max_x();
        extent.cross_used = extent.cross_used.max(frame.height());
        frames.push(frame);
        offset += size.width + spacing;
    }
    extent
}

/// Allocating form of [`align_items_into`].
pub fn align_items<I>(
    policy: AlignItems,
    start_offset: f32,
    spacing: f32,
    sizes: I,
    cross_range: RangeInclusive<f32>,
) -> (Vec<Rect>, SpanExtent)
where
    I: IntoIterator<Item = Size>,
{
    let mut frames = Vec::new();
    let extent = align_items_into(
        &mut frames,
        policy,
        start_offset,
        spacing,
        sizes,
        cross_range,
    );
    (frames, extent)
}
