/// Compile-time settings for the crosshair generator.
///
/// Nothing here is read from disk or the environment: the icon size and the
/// output location are fixed. Relative paths resolve against the current
/// working directory of the process.
use std::path::PathBuf;

/// Width and height of the icon in pixels
pub const ICON_SIZE: u32 = 9;

/// Where `generate()` writes the icon
pub const OUTPUT_PATH: &str = "public/images/crosshair_8.png";

/// Output path as an owned `PathBuf`
pub fn output_path() -> PathBuf {
    PathBuf::from(OUTPUT_PATH)
}
