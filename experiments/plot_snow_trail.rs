// group the snow trail dataset into segments and plot every segment
// as a connected line with markers, written to snow_trail.svg

use log::{debug, error, info, log_enabled, Level};
use snow_trail::constants::{DEFAULT_OUTPUT_FILE, SNOW_TRAIL};
use snow_trail::modules::export::{json, plot};
use snow_trail::{build_segments_from_raw, TraceResult};
use std::process;
use std::time::Instant;

fn run() -> TraceResult<()> {
    let start_time = Instant::now();

    let segments = build_segments_from_raw(SNOW_TRAIL)?;
    info!(
        "Grouped {} coordinates into {} segments",
        SNOW_TRAIL.len(),
        segments.len()
    );
    for (index, segment) in segments.iter().enumerate() {
        debug!("segment {}: {} points", index, segment.len());
    }
    if log_enabled!(Level::Debug) {
        debug!("segments as json: {}", json::segments_to_json(&segments)?);
    }

    let config = plot::PlotConfig {
        caption: Some("Tracks in the snow".to_string()),
        ..plot::PlotConfig::default()
    };
    plot::render_svg_file(&segments, &config, DEFAULT_OUTPUT_FILE)?;

    info!("Done in {:.2?}", start_time.elapsed());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("Failed to plot snow trail: {}", e);
        process::exit(1);
    }
}
