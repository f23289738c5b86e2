use flowkit::Size;
use serde_json::{Value, json};

/// A deterministic mix of widths and heights, like a tag cloud.
pub fn tag_cloud(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::new(20.0 + ((i * 37) % 80) as f32, 10.0 + ((i * 11) % 4) as f32 * 5.0))
        .collect()
}

/// A scene document with the given config value.
pub fn scene_json(config: Value, items: &[(f32, f32)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|&(w, h)| json!({ "width": w, "height": h }))
        .collect();
    json!({
        "container": { "width": 100, "height": 100 },
        "config": config,
        "items": items
    })
}
