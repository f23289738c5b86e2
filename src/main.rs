use flowkit::{Scene, SceneError};
use std::env;

/// Lays out a scene file and prints the resulting frames as JSON.
fn main() -> Result<(), SceneError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Lays out a JSON scene with wrapped flow layout.");
        eprintln!();
        eprintln!("Usage: {} <path/to/scene.json>", args[0]);
        eprintln!();
        eprintln!("Set RUST_LOG=debug to see per-pass summaries.");
        std::process::exit(1);
    }

    let scene = Scene::load(&args[1])?;
    let report = scene.report()?;
    log::info!(
        "{} items in {} lines, content {}x{}",
        report.frames.len(),
        report.line_count,
        report.content_size.width,
        report.content_size.height
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
