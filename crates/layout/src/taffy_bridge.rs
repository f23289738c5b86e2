//! Expresses a flow configuration as a taffy flexbox style.
//!
//! A `row` + `wrap` flex container with fixed-size, non-shrinking children
//! breaks lines and distributes space the same way `FlowLayout` does, which
//! makes taffy a useful reference for the shared policies. The two differ on
//! purpose in a few places: taffy stretches only auto-sized items, and it
//! centers a lone item under `space-around`/`space-evenly`.

use flowkit_style::{AlignItems, FlowConfig, JustifyContent};
use flowkit_types::{Rect, Size};
use taffy::style::{AvailableSpace, Dimension, LengthPercentage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Taffy layout failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
    #[error("align-items: {0:?} has no fixed-size taffy equivalent")]
    UnsupportedAlignment(AlignItems),
}

pub fn to_taffy_content(j: JustifyContent) -> taffy::style::AlignContent {
    match j {
        JustifyContent::Start => taffy::style::AlignContent::FlexStart,
        JustifyContent::End => taffy::style::AlignContent::FlexEnd,
        JustifyContent::Center => taffy::style::AlignContent::Center,
        JustifyContent::SpaceBetween => taffy::style::AlignContent::SpaceBetween,
        JustifyContent::SpaceAround => taffy::style::AlignContent::SpaceAround,
        JustifyContent::SpaceEvenly => taffy::style::AlignContent::SpaceEvenly,
    }
}

pub fn to_taffy_align_items(a: AlignItems) -> taffy::style::AlignItems {
    match a {
        AlignItems::Start => taffy::style::AlignItems::FlexStart,
        AlignItems::End => taffy::style::AlignItems::FlexEnd,
        AlignItems::Center => taffy::style::AlignItems::Center,
        AlignItems::Stretch => taffy::style::AlignItems::Stretch,
    }
}

fn to_taffy_size(size: Size) -> taffy::geometry::Size<Dimension> {
    taffy::geometry::Size {
        width: Dimension::length(size.width),
        height: Dimension::length(size.height),
    }
}

/// Container style: a wrapping flex row of exactly `container` size.
pub fn to_taffy_style(config: &FlowConfig, container: Size) -> taffy::style::Style {
    let config = config.sanitized();
    taffy::style::Style {
        display: taffy::style::Display::Flex,
        flex_direction: taffy::style::FlexDirection::Row,
        flex_wrap: taffy::style::FlexWrap::Wrap,
        size: to_taffy_size(container),
        gap: taffy::geometry::Size {
            width: LengthPercentage::length(config.interitem_spacing),
            height: LengthPercentage::length(config.line_spacing),
        },
        justify_content: Some(to_taffy_content(config.justify_content)),
        align_items: Some(to_taffy_align_items(config.align_items)),
        align_content: Some(to_taffy_content(config.align_content)),
        ..Default::default()
    }
}

/// Item style: fixed size, never grows or shrinks.
pub fn to_taffy_item_style(size: Size) -> taffy::style::Style {
    taffy::style::Style {
        size: to_taffy_size(size),
        flex_grow: 0.0,
        flex_shrink: 0.0,
        ..Default::default()
    }
}

/// Lays out fixed-size items with taffy, returning frames in item order.
pub fn taffy_reference_layout(
    sizes: &[Size],
    container: Size,
    config: &FlowConfig,
) -> Result<Vec<Rect>, BridgeError> {
    if config.align_items == AlignItems::Stretch {
        return Err(BridgeError::UnsupportedAlignment(config.align_items));
    }

    let mut tree: taffy::TaffyTree<()> = taffy::TaffyTree::new();
    tree.disable_rounding();

    let children = sizes
        .iter()
        .map(|size| tree.new_leaf(to_taffy_item_style(*size)))
        .collect::<Result<Vec<_>, _>>()?;
    let root = tree.new_with_children(to_taffy_style(config, container), &children)?;
    let available = taffy::geometry::Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available)?;

    let mut frames = Vec::with_capacity(children.len());
    for child in children {
        let layout = tree.layout(child)?;
        frames.push(Rect::new(
            layout.location.x,
            layout.location.y,
            layout.size.width,
            layout.size.height,
        ));
    }
    log::debug!("taffy reference layout placed {} items", frames.len());
    Ok(frames)
}
