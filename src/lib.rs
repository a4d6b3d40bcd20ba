//! Crosshair icon library
//!
//! Builds the fixed 9x9 crosshair raster and writes it as a PNG

pub mod config;
pub mod error;
pub mod generator;
pub mod pattern;

pub use error::IconError;
pub use generator::{encode_png, generate, generate_to, render, verify_icon};
