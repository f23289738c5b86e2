pub mod config;
pub mod flex;
pub mod parsers;

pub use config::FlowConfig;
pub use flex::{AlignContent, AlignItems, JustifyContent};
pub use parsers::StyleParseError;
