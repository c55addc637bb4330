//! Export segments to various formats
//!
//! This module provides functionality to export built segments for
//! visualization or inspection.
//!
//! # Available Export Formats
//!
//! - [Plot](plot/index.html) - Draw segments as connected lines with markers (SVG)
//! - [JSON](json/index.html) - Dump segments as nested arrays of points

pub mod json;
pub mod plot;
