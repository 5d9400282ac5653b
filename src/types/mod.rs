//! Shared types used throughout the library.

mod color;
mod direction;

pub use color::{ColorValue, MapColor};
pub use direction::Direction;

use serde::{Deserialize, Serialize};

/// Render pass a block is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLayer {
    /// Alpha-tested geometry, sampled with mipmapping.
    CutoutMipped,
    /// Alpha-blended geometry.
    Translucent,
}

impl std::fmt::Display for RenderLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderLayer::CutoutMipped => write!(f, "cutout_mipped"),
            RenderLayer::Translucent => write!(f, "translucent"),
        }
    }
}
