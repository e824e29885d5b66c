//! Output layout constants.

/// Directory that holds one subdirectory per font family.
pub const DEFAULT_FONTS_DIR: &str = "applib/fonts";

/// Atlas image written into each size directory.
pub const BITMAP_FILENAME: &str = "bitmap.png";

/// Metrics descriptor written next to the atlas image.
pub const DESCRIPTOR_FILENAME: &str = "spec.json";
