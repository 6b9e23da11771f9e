//! # Formats Module
//!
//! Text formats for catalogs. File I/O operations are in the app layer.

mod catalog_file;

pub use catalog_file::*;
