//! Error type shared by every module of the crate.

use crate::data::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    /// A point arrived before any end-of-segment marker opened a segment.
    #[error("no active segment to append to (point at index {index} precedes the first segment boundary)")]
    NoActiveSegment { index: usize },

    /// Moving from `from` by `steps` steps of `offset` leaves the i32 grid.
    #[error("moving {steps} steps of {offset} from {from} leaves the grid")]
    OutOfRange {
        from: Point,
        offset: Point,
        steps: u32,
    },

    #[error("failed to render plot: {0}")]
    Render(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
