pub mod fixtures;

use flowkit::{FlowConfig, FlowLayout, FlowLayoutResult, Size};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lays out fixed-size items given as `(width, height)` pairs.
pub fn layout_pairs(
    pairs: &[(f32, f32)],
    container: (f32, f32),
    config: FlowConfig,
) -> FlowLayoutResult<Size> {
    let items: Vec<Size> = pairs.iter().map(|&(w, h)| Size::new(w, h)).collect();
    FlowLayout::new(config).layout(&items, Size::new(container.0, container.1))
}
