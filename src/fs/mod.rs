//! Filesystem utilities for jotter.
//!
//! The data file is always replaced whole, through [`atomic_write_file`], so
//! a crash mid-save leaves either the old list or the new one on disk.

pub mod atomic;

pub use atomic::{atomic_write_file, ensure_file};
