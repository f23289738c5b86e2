use crate::flex::{AlignContent, AlignItems, JustifyContent};
use crate::parsers::{StyleParseError, parse_declarations};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for one wrapped flow layout pass.
///
/// Every field has a default, so partial JSON documents and partial
/// declaration blocks are both valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowConfig {
    /// Minimum space between consecutive lines.
    pub line_spacing: f32,
    /// Minimum space between consecutive items on a line.
    pub interitem_spacing: f32,
    /// Distribution of items along each line.
    pub justify_content: JustifyContent,
    /// Placement of each item within its line's height.
    pub align_items: AlignItems,
    /// Distribution of lines within the container height.
    pub align_content: AlignContent,
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the same spacing between lines and between items.
    pub fn with_spacing(spacing: f32) -> Self {
        Self {
            line_spacing: spacing,
            interitem_spacing: spacing,
            ..Self::default()
        }
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    pub fn justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    pub fn align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    pub fn align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self
    }

    /// Returns a copy with negative or non-finite spacing replaced by zero.
    pub fn sanitized(self) -> Self {
        Self {
            line_spacing: sanitize_spacing("line_spacing", self.line_spacing),
            interitem_spacing: sanitize_spacing("interitem_spacing", self.interitem_spacing),
            ..self
        }
    }
}

fn sanitize_spacing(field: &str, spacing: f32) -> f32 {
    if spacing.is_finite() && spacing >= 0.0 {
        spacing
    } else {
        log::warn!("FlowConfig.{} = {} is not a valid spacing; using 0", field, spacing);
        0.0
    }
}

impl FromStr for FlowConfig {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_declarations(s)
    }
}
