use snow_trail::constants::SNOW_TRAIL;
use snow_trail::modules::export::{json, plot};
use snow_trail::modules::navigate::{Instruction, Navigator};
use snow_trail::{build_segments, build_segments_from_raw, pt, TraceEntry, TraceError};

#[test]
fn test_complete_workflow() {
    // Group the dataset
    let segments = build_segments_from_raw(SNOW_TRAIL).unwrap();
    assert_eq!(segments.len(), 11);

    // Render it to memory and check every point got a marker
    let svg = plot::render_svg(&segments, &plot::PlotConfig::default()).unwrap();
    let points: usize = segments.iter().map(|s| s.len()).sum();
    assert_eq!(svg.matches("<circle").count(), points);

    // The json dump reads back to the same segments
    let text = json::segments_to_json(&segments).unwrap();
    assert_eq!(json::segments_from_json(&text).unwrap(), segments);
}

#[test]
fn test_navigation_to_plot() {
    let mut nav = Navigator::new();
    nav.run(&[
        Instruction::Walk(6),
        Instruction::Turn(135),
        Instruction::Walk(3),
        Instruction::Turn(-90),
        Instruction::Walk(3),
        Instruction::Turn(135),
        Instruction::Walk(6),
        Instruction::Jump(2),
    ])
    .unwrap();

    // an "M" ending on the ground, then a fresh trail with just the landing spot
    let segments = build_segments(&nav.trail_entries()).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].len(), 18);
    assert_eq!(segments[0].last(), Some(&pt!(6, 0)));
    assert_eq!(segments[1].points(), &[pt!(6, -2)]);
    assert_eq!(nav.manhattan_distance(), 8);

    let svg = plot::render_svg(&segments, &plot::PlotConfig::default()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 19);
}

#[test]
fn test_malformed_trace_fails_fast() {
    let entries = [TraceEntry::Point(pt!(0, 0)), TraceEntry::EndOfSegment];
    let err = build_segments(&entries).unwrap_err();
    assert!(matches!(err, TraceError::NoActiveSegment { index: 0 }));
}

#[test]
fn test_svg_file_output() {
    let segments = build_segments_from_raw(SNOW_TRAIL).unwrap();
    let path = std::env::temp_dir().join(format!("snow_trail_{}.svg", std::process::id()));

    plot::render_svg_file(&segments, &plot::PlotConfig::default(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(written.starts_with("<svg"));
    assert_eq!(written.matches("<circle").count(), 57);
}
