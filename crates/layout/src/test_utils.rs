use flowkit_types::Size;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds fixed-size items from `(width, height)` pairs.
pub fn sizes(pairs: &[(f32, f32)]) -> Vec<Size> {
    pairs.iter().map(|&(w, h)| Size::new(w, h)).collect()
}
