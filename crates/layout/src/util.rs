use flowkit_types::Rect;

/// Robust floating point comparison for layout calculations.
pub fn floats_fuzzy_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.01;
    (a - b).abs() < EPSILON
}

/// Compares two frame lists edge by edge within the layout epsilon.
pub fn rects_fuzzy_eq(a: &[Rect], b: &[Rect]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| {
        floats_fuzzy_eq(x.min_x(), y.min_x())
            && floats_fuzzy_eq(x.min_y(), y.min_y())
            && floats_fuzzy_eq(x.width(), y.width())
            && floats_fuzzy_eq(x.height(), y.height())
    })
}
