//! applib asset generation CLI library.

pub mod clean;
pub mod cli;
pub mod credits;
pub mod fonts;

// Re-export from the tool crates for convenience
pub use font_atlas::{FontData, SizeDescriptor, render_family, render_size};
pub use icon_credits::{Credits, write_readme};
