//! The JSON metrics file stored next to each atlas.

use serde::{Deserialize, Serialize};

use crate::{Result, atlas::AtlasMetrics};

/// Per-size atlas description.
///
/// Field order is the serialized key order. `size` is left out by the
/// single-size variant, which encodes the size only in the directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub nb_chars: u32,
    pub char_h: u32,
    pub char_w: u32,
    pub base_y: u32,
}

impl SizeDescriptor {
    pub fn new(metrics: &AtlasMetrics, size: Option<u32>) -> Self {
        Self {
            size,
            nb_chars: metrics.glyph_count,
            char_h: metrics.glyph_height,
            char_w: metrics.glyph_width,
            base_y: metrics.baseline_offset,
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
