//! Fixed values: the raw boundary marker, plot defaults and the snow trail dataset.

/// Raw coordinate pair that marks the start of a new segment.
pub const SENTINEL: (i32, i32) = (-1, -1);

// 25 x 5 figure at 100 pixels per unit
pub const DEFAULT_PLOT_WIDTH: u32 = 2500;
pub const DEFAULT_PLOT_HEIGHT: u32 = 500;
pub const DEFAULT_PLOT_MARGIN: u32 = 20;
pub const DEFAULT_LABEL_AREA: u32 = 30;

/// Data units added around the coordinate range on every side.
pub const DEFAULT_PADDING: u32 = 1;
pub const DEFAULT_MARKER_SIZE: u32 = 4;
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

pub const DEFAULT_OUTPUT_FILE: &str = "snow_trail.svg";

/// Trails left in the snow, as produced by the navigation program.
/// Every trail starts with [`SENTINEL`].
#[rustfmt::skip]
pub const SNOW_TRAIL: &[(i32, i32)] = &[
    (-1, -1), (42, 0), (42, 6), (42, 3), (46, 3), (46, 6), (46, 0),
    (-1, -1), (9, 0), (9, 5), (10, 6), (12, 6), (13, 5), (13, 3), (10, 3),
    (13, 3), (13, 0), (-1, -1), (0, 0), (0, 6), (3, 3), (6, 6), (6, 0),
    (-1, -1), (6, 5), (-1, -1), (39, 5), (38, 6), (36, 6), (35, 5),
    (35, 1), (36, 0), (38, 0), (39, 1), (-1, -1), (39, 6), (-1, -1),
    (20, 6), (18, 6), (16, 4), (16, 2), (18, 0), (20, 0), (20, 3),
    (19, 3), (-1, -1), (24, 3), (-1, -1), (24, 0), (23, 0), (25, 0),
    (24, 0), (24, 6), (25, 6), (23, 6), (-1, -1), (28, 6), (-1, -1),
    (28, 0), (31, 0), (32, 1), (32, 2), (31, 3), (29, 3), (28, 4),
    (28, 5), (29, 6), (32, 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snow_trail_starts_with_sentinel() {
        assert_eq!(SNOW_TRAIL[0], SENTINEL);
        assert_eq!(SNOW_TRAIL.iter().filter(|&&p| p == SENTINEL).count(), 11);
    }
}
