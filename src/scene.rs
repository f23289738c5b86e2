//! JSON scene documents: a container, a flow configuration and a list of
//! fixed-size items.
//!
//! ```json
//! {
//!   "container": { "width": 320, "height": 200 },
//!   "config": "gap: 8; justify-content: space-between",
//!   "items": [{ "width": 100, "height": 40 }, { "width": 60, "height": 20 }]
//! }
//! ```
//!
//! `config` may also be a JSON object with camelCase fields.

use crate::error::SceneError;
use flowkit_layout::{FlowConfig, FlowLayout, FlowLayoutResult, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A flow configuration written either as declarations or as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigSource {
    Declarations(String),
    Config(FlowConfig),
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Config(FlowConfig::default())
    }
}

impl ConfigSource {
    pub fn resolve(&self) -> Result<FlowConfig, SceneError> {
        match self {
            ConfigSource::Declarations(declarations) => Ok(declarations.parse()?),
            ConfigSource::Config(config) => Ok(*config),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub container: Size,
    #[serde(default)]
    pub config: ConfigSource,
    #[serde(default)]
    pub items: Vec<Size>,
}

/// Serializable summary of a laid-out scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub frames: Vec<Rect>,
    pub content_size: Size,
    pub line_count: usize,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn layout(&self) -> Result<FlowLayoutResult<Size>, SceneError> {
        let flow = FlowLayout::new(self.config.resolve()?);
        Ok(flow.layout(&self.items, self.container))
    }

    pub fn report(&self) -> Result<LayoutReport, SceneError> {
        let result = self.layout()?;
        Ok(LayoutReport {
            line_count: result.line_count(),
            content_size: result.content_size,
            frames: result.frames,
        })
    }
}
