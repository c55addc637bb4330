//! Plot segments as connected lines with point markers
//!
//! Every non-empty segment is drawn as a polyline through its points in
//! order, with a filled circle on each point. All segments share one canvas
//! whose coordinate range covers every point plus some padding. Empty
//! segments draw nothing; a single-point segment shows up as a lone marker.
//!
//! # Example
//!
//! ```rust
//! use snow_trail::modules::export::plot::{render_svg, PlotConfig};
//! use snow_trail::{build_segments, trail};
//!
//! let segments = build_segments(&trail![(-1, -1), (0, 0), (0, 6), (3, 3), (-1, -1), (6, 5)]).unwrap();
//! let svg = render_svg(&segments, &PlotConfig::default()).unwrap();
//!
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<circle").count(), 4);
//! ```

use crate::constants::{
    DEFAULT_LABEL_AREA, DEFAULT_MARKER_SIZE, DEFAULT_PADDING, DEFAULT_PLOT_HEIGHT,
    DEFAULT_PLOT_MARGIN, DEFAULT_PLOT_WIDTH, DEFAULT_STROKE_WIDTH,
};
use crate::data::{Point, Segment};
use crate::error::{TraceError, TraceResult};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

/// Canvas and styling options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub margin: u32,
    /// Data units added around the coordinate range
    pub padding: u32,
    /// Marker radius in pixels
    pub marker_size: u32,
    pub stroke_width: u32,
    pub caption: Option<String>,
    pub show_mesh: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            margin: DEFAULT_PLOT_MARGIN,
            padding: DEFAULT_PADDING,
            marker_size: DEFAULT_MARKER_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            caption: None,
            show_mesh: true,
        }
    }
}

impl PlotConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(text: &str) -> TraceResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Coordinate range of the canvas
///
/// `min` and `max` are the corner coordinates; `max` is always strictly
/// greater than `min` on both axes. Padding saturates at the edges of the
/// i32 grid, so points there sit on the border of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Range used when there is nothing to draw
    pub const UNIT: Bounds = Bounds {
        min: Point { x: 0, y: 0 },
        max: Point { x: 1, y: 1 },
    };

    /// Bounds of all points in all segments, grown by `padding` on every side
    pub fn of(segments: &[Segment], padding: u32) -> Bounds {
        let extent = segments
            .iter()
            .filter_map(Segment::extent)
            .reduce(|(lo, hi), (l, h)| {
                (
                    Point::new(lo.x.min(l.x), lo.y.min(l.y)),
                    Point::new(hi.x.max(h.x), hi.y.max(h.y)),
                )
            });

        match extent {
            Some((lo, hi)) => {
                let (min_x, max_x) = padded_axis(lo.x, hi.x, padding);
                let (min_y, max_y) = padded_axis(lo.y, hi.y, padding);
                Bounds {
                    min: Point::new(min_x, min_y),
                    max: Point::new(max_x, max_y),
                }
            }
            None => Bounds::UNIT,
        }
    }

    /// Horizontal axis range; plotters maps `end` onto the right edge
    pub fn x_range(&self) -> Range<i32> {
        self.min.x..self.max.x
    }

    /// Vertical axis range; plotters maps `end` onto the top edge
    pub fn y_range(&self) -> Range<i32> {
        self.min.y..self.max.y
    }

    pub fn contains(&self, p: &Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Width over height of the coordinate range
    pub fn aspect_ratio(&self) -> f64 {
        let w = (i64::from(self.max.x) - i64::from(self.min.x)).max(1) as f64;
        let h = (i64::from(self.max.y) - i64::from(self.min.y)).max(1) as f64;
        w / h
    }
}

/// Grow `lo..=hi` by `padding` on both sides without leaving the i32 range,
/// keeping the result at least one unit wide
fn padded_axis(lo: i32, hi: i32, padding: u32) -> (i32, i32) {
    let lo = lo.saturating_sub_unsigned(padding);
    let hi = hi.saturating_add_unsigned(padding);
    if lo < hi {
        (lo, hi)
    } else if hi < i32::MAX {
        (lo, hi + 1)
    } else {
        (lo - 1, hi)
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> TraceError {
    TraceError::Render(e.to_string())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    segments: &[Segment],
    config: &PlotConfig,
) -> TraceResult<()> {
    let bounds = Bounds::of(segments, config.padding);
    debug!("plot bounds {} to {}", bounds.min, bounds.max);

    root.fill(&WHITE).map_err(render_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(config.margin)
        .x_label_area_size(DEFAULT_LABEL_AREA)
        .y_label_area_size(DEFAULT_LABEL_AREA);
    if let Some(caption) = &config.caption {
        builder.caption(caption, ("sans-serif", 24));
    }

    let mut chart = builder
        .build_cartesian_2d(bounds.x_range(), bounds.y_range())
        .map_err(render_error)?;

    if config.show_mesh {
        chart.configure_mesh().draw().map_err(render_error)?;
    }

    // colors follow the segment index so empty segments still use up a color
    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let color = Palette99::pick(index);

        chart
            .draw_series(LineSeries::new(
                segment.iter().map(|p| (p.x, p.y)),
                color.stroke_width(config.stroke_width),
            ))
            .map_err(render_error)?;

        chart
            .draw_series(
                segment
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), config.marker_size, color.filled())),
            )
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Render segments to an SVG document held in memory
pub fn render_svg(segments: &[Segment], config: &PlotConfig) -> TraceResult<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        draw(root, segments, config)?;
    }
    Ok(buffer)
}

/// Render segments to an SVG file
pub fn render_svg_file<P: AsRef<Path>>(
    segments: &[Segment],
    config: &PlotConfig,
    path: P,
) -> TraceResult<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    draw(root, segments, config)?;
    info!("wrote {} segments to {}", segments.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SNOW_TRAIL;
    use crate::modules::group::build_segments_from_raw;
    use crate::{pt, segment};
    use approx::assert_relative_eq;

    fn bare_config() -> PlotConfig {
        PlotConfig {
            width: 400,
            height: 200,
            show_mesh: false,
            ..PlotConfig::default()
        }
    }

    #[test]
    fn test_bounds_cover_every_point() {
        let segments = build_segments_from_raw(SNOW_TRAIL).unwrap();
        let bounds = Bounds::of(&segments, 1);

        assert_eq!(bounds.min, pt!(-1, -1));
        assert_eq!(bounds.max, pt!(47, 7));
        assert!(segments.iter().flat_map(|s| s.iter()).all(|p| bounds.contains(p)));
        assert_relative_eq!(bounds.aspect_ratio(), 6.0);
    }

    #[test]
    fn test_bounds_without_points() {
        assert_eq!(Bounds::of(&[], 1), Bounds::UNIT);
        assert_eq!(Bounds::of(&[segment![], segment![]], 3), Bounds::UNIT);
        assert_relative_eq!(Bounds::UNIT.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_bounds_of_single_point() {
        let bounds = Bounds::of(&[segment![(6, 5)]], 2);
        assert_eq!(bounds.x_range(), 4..8);
        assert_eq!(bounds.y_range(), 3..7);
    }

    #[test]
    fn test_bounds_at_grid_edges() {
        let bounds = Bounds::of(&[segment![(i32::MAX, 0)]], 1);
        assert_eq!(bounds.min, pt!(i32::MAX - 1, -1));
        assert_eq!(bounds.max, pt!(i32::MAX, 1));

        let bounds = Bounds::of(&[segment![(i32::MIN, i32::MAX)], segment![(i32::MAX, i32::MIN)]], 5);
        assert_eq!(bounds.min, pt!(i32::MIN, i32::MIN));
        assert_eq!(bounds.max, pt!(i32::MAX, i32::MAX));
        assert_relative_eq!(bounds.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_bounds_without_padding_stay_open() {
        let bounds = Bounds::of(&[segment![(3, 4)]], 0);
        assert_eq!((bounds.min, bounds.max), (pt!(3, 4), pt!(4, 5)));

        let bounds = Bounds::of(&[segment![(i32::MAX, i32::MAX)]], 0);
        assert_eq!(bounds.min, pt!(i32::MAX - 1, i32::MAX - 1));
        assert_eq!(bounds.max, pt!(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_render_point_at_grid_edge() {
        let svg = render_svg(&[segment![(i32::MAX, 0)]], &bare_config()).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_one_marker_per_point() {
        let segments = vec![segment![(0, 0), (0, 6), (3, 3)], segment![], segment![(6, 5)]];
        let svg = render_svg(&segments, &bare_config()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn test_empty_segments_draw_nothing() {
        let empty = render_svg(&[segment![], segment![]], &bare_config()).unwrap();
        let nothing = render_svg(&[], &bare_config()).unwrap();

        assert_eq!(empty.matches("<circle").count(), 0);
        assert_eq!(empty.matches("<polyline").count(), 0);
        assert_eq!(empty, nothing);
    }

    #[test]
    fn test_dataset_with_mesh_and_caption() {
        let segments = build_segments_from_raw(SNOW_TRAIL).unwrap();
        let config = PlotConfig {
            caption: Some("snow trail".to_string()),
            ..PlotConfig::default()
        };
        let svg = render_svg(&segments, &config).unwrap();

        assert_eq!(svg.matches("<circle").count(), 57);
        assert!(svg.contains("snow trail"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let segments = build_segments_from_raw(SNOW_TRAIL).unwrap();
        assert_eq!(
            render_svg(&segments, &bare_config()).unwrap(),
            render_svg(&segments, &bare_config()).unwrap()
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = PlotConfig::from_json(r#"{"width": 800, "caption": "trail"}"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, DEFAULT_PLOT_HEIGHT);
        assert_eq!(config.caption.as_deref(), Some("trail"));
        assert!(config.show_mesh);

        assert!(PlotConfig::from_json("{\"width\": -3}").is_err());
        let err = PlotConfig::from_json(r#"{"padding": -5}"#).unwrap_err();
        assert!(matches!(err, TraceError::Json(_)));
    }
}
