//! Distribution and alignment policies for wrapped flow layout.
use crate::parsers::{StyleParseError, parse_align_items, parse_justify_content};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How free space is shared out along an axis: between items on a line, or
/// between lines in the container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    #[serde(alias = "flex-end")]
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Lines are distributed with the same rules as items on a line.
pub type AlignContent = JustifyContent;

/// Placement of an item inside the cross extent of its line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    #[serde(alias = "flex-end")]
    End,
    Center,
    Stretch,
}

impl JustifyContent {
    /// Policies that only move the whole run and never widen the gaps.
    pub fn is_packing(self) -> bool {
        matches!(
            self,
            JustifyContent::Start | JustifyContent::End | JustifyContent::Center
        )
    }
}

impl FromStr for JustifyContent {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_justify_content(s)
    }
}

impl FromStr for AlignItems {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_align_items(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_content_serde_is_kebab_case() {
        let value: JustifyContent = serde_json::from_str("\"space-between\"").unwrap();
        assert_eq!(value, JustifyContent::SpaceBetween);
        assert_eq!(
            serde_json::to_string(&JustifyContent::SpaceEvenly).unwrap(),
            "\"space-evenly\""
        );
    }

    #[test]
    fn test_flex_aliases_deserialize() {
        let start: AlignItems = serde_json::from_str("\"flex-start\"").unwrap();
        let end: JustifyContent = serde_json::from_str("\"flex-end\"").unwrap();
        assert_eq!(start, AlignItems::Start);
        assert_eq!(end, JustifyContent::End);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Center".parse::<JustifyContent>().unwrap(), JustifyContent::Center);
        assert_eq!(" stretch ".parse::<AlignItems>().unwrap(), AlignItems::Stretch);
        assert!("baseline".parse::<AlignItems>().is_err());
    }

    #[test]
    fn test_packing_policies() {
        assert!(JustifyContent::End.is_packing());
        assert!(!JustifyContent::SpaceAround.is_packing());
    }
}
