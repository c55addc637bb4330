// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::entry::TraceEntry;
pub use data::point::Point;
pub use data::segment::Segment;
pub use error::{TraceError, TraceResult};
pub use modules::group::{build_segments, build_segments_from_raw};
