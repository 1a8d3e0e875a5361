//! Configuration for jotter.
//!
//! Settings live in an optional `jotter.yaml` in the working directory.
//! Every field has a default, unknown fields are ignored, and command-line
//! flags take precedence over file values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{CONFIG_FILE_NAME, Config};
