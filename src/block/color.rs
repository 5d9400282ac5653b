//! Color variant behavior.
//!
//! A colored block carries a `color` property with one of the 16 dye
//! colors. The color is persisted as its metadata code, picks a distinct
//! texture per color (or a single texture tinted at render time), and
//! decides the map color and the dropped item variant.

use crate::error::InvalidMetadataError;
use crate::pack::BlockDescriptor;
use crate::resolver::TextureNameResolver;
use crate::types::{ColorValue, MapColor};

/// Joins a base texture name and a color name.
pub const COLOR_SEPARATOR: &str = "_";

/// Tint meaning "leave the texture as is".
pub const NO_TINT: u32 = 0xFFFFFF;

/// Color variant component of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorComponent {
    use_color_multiplier: bool,
}

impl ColorComponent {
    pub fn new(use_color_multiplier: bool) -> Self {
        Self {
            use_color_multiplier,
        }
    }

    /// Whether color is applied as a render-time tint rather than baked
    /// into per-color textures.
    pub fn use_color_multiplier(&self) -> bool {
        self.use_color_multiplier
    }

    /// Color of a freshly placed block.
    pub fn default_color() -> ColorValue {
        ColorValue::White
    }

    pub fn metadata_of(color: ColorValue) -> u8 {
        color.metadata()
    }

    /// Strict decoding; see [`ColorComponent::metadata_to_state`] for the
    /// lenient boundary version.
    pub fn color_from_metadata(code: i32) -> Result<ColorValue, InvalidMetadataError> {
        ColorValue::from_metadata(code)
    }

    /// Encode a color for persistence.
    pub fn state_to_metadata(&self, color: ColorValue) -> u8 {
        Self::metadata_of(color)
    }

    /// Decode a persisted color. Corrupt codes degrade to the default color.
    pub fn metadata_to_state(&self, code: i32) -> ColorValue {
        Self::color_from_metadata(code).unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, Self::default_color());
            Self::default_color()
        })
    }

    /// Texture name for one color: `<base texture>_<color>`.
    ///
    /// The base is the descriptor's resolved base texture, or the descriptor
    /// name when it declares none.
    pub fn texture_name_for(descriptor: &BlockDescriptor, color: ColorValue) -> String {
        let base = TextureNameResolver::new(descriptor)
            .resolve_base()
            .unwrap_or_else(|| descriptor.name());
        format!("{}{}{}", base, COLOR_SEPARATOR, color.unlocalized_name())
    }

    /// Render tint of a color, from the static tint table.
    pub fn tint_for(color: ColorValue) -> u32 {
        color.tint()
    }

    /// Tint to apply to a block of this color. Blocks with per-color
    /// textures are never tinted.
    pub fn color_multiplier(&self, color: ColorValue) -> u32 {
        if self.use_color_multiplier {
            Self::tint_for(color)
        } else {
            NO_TINT
        }
    }

    pub fn map_color_for(color: ColorValue) -> MapColor {
        color.map_color()
    }

    /// Translation key of a colored variant, e.g. `tile.castle_wool.lightBlue`.
    pub fn unlocalized_name(&self, block_unlocalized_name: &str, color: ColorValue) -> String {
        format!("{}.{}", block_unlocalized_name, color.unlocalized_name())
    }

    /// Item variant dropped when the block is broken.
    pub fn damage_dropped(&self, color: ColorValue) -> u8 {
        Self::metadata_of(color)
    }

    /// Metadata of every item variant, in color order.
    pub fn sub_block_metadata(&self) -> impl Iterator<Item = u8> {
        ColorValue::ALL.into_iter().map(Self::metadata_of)
    }
}
