//! The 16 dye colors and their static lookup tables.
//!
//! Each color carries a stable metadata code (0-15), which is also its
//! enum discriminant, so the color/metadata mapping is a bijection that
//! costs an array index in either direction.

use crate::error::InvalidMetadataError;
use serde::{Deserialize, Serialize};

/// A dye color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorValue {
    #[default]
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    LightGray = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

/// Color shown for a block on maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapColor {
    /// Index into the host's map palette.
    pub index: u8,
    /// 24-bit RGB.
    pub rgb: u32,
}

struct ColorInfo {
    name: &'static str,
    unlocalized_name: &'static str,
    map_color: MapColor,
    tint: u32,
}

const fn info(name: &'static str, unlocalized_name: &'static str, map_index: u8, map_rgb: u32, tint: u32) -> ColorInfo {
    ColorInfo {
        name,
        unlocalized_name,
        map_color: MapColor { index: map_index, rgb: map_rgb },
        tint,
    }
}

/// Indexed by metadata code.
static COLOR_TABLE: [ColorInfo; 16] = [
    info("white", "white", 8, 0xFFFFFF, 0xF0F0F0),
    info("orange", "orange", 15, 0xD87F33, 0xEB8844),
    info("magenta", "magenta", 16, 0xB24CD8, 0xC354CD),
    info("light_blue", "lightBlue", 17, 0x6699D8, 0x6689D3),
    info("yellow", "yellow", 18, 0xE5E533, 0xDECF2A),
    info("lime", "lime", 19, 0x7FCC19, 0x41CD34),
    info("pink", "pink", 20, 0xF27FA5, 0xD88198),
    info("gray", "gray", 21, 0x4C4C4C, 0x434343),
    info("light_gray", "silver", 22, 0x999999, 0xABABAB),
    info("cyan", "cyan", 23, 0x4C7F99, 0x287697),
    info("purple", "purple", 24, 0x7F3FB2, 0x7B2FBE),
    info("blue", "blue", 25, 0x334CB2, 0x253192),
    info("brown", "brown", 26, 0x664C33, 0x51301A),
    info("green", "green", 27, 0x667F33, 0x3B511A),
    info("red", "red", 28, 0x993333, 0xB3312C),
    info("black", "black", 29, 0x191919, 0x1E1B1B),
];

impl ColorValue {
    /// All colors in metadata order.
    pub const ALL: [ColorValue; 16] = [
        ColorValue::White,
        ColorValue::Orange,
        ColorValue::Magenta,
        ColorValue::LightBlue,
        ColorValue::Yellow,
        ColorValue::Lime,
        ColorValue::Pink,
        ColorValue::Gray,
        ColorValue::LightGray,
        ColorValue::Cyan,
        ColorValue::Purple,
        ColorValue::Blue,
        ColorValue::Brown,
        ColorValue::Green,
        ColorValue::Red,
        ColorValue::Black,
    ];

    /// Stable metadata code in `0..=15`.
    pub fn metadata(self) -> u8 {
        self as u8
    }

    /// Decode a metadata code.
    pub fn from_metadata(code: i32) -> Result<Self, InvalidMetadataError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(InvalidMetadataError(code))
    }

    /// Snake-case name, e.g. `light_blue`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Legacy unlocalized name, e.g. `lightBlue`. Used in texture and
    /// translation keys.
    pub fn unlocalized_name(self) -> &'static str {
        self.info().unlocalized_name
    }

    pub fn map_color(self) -> MapColor {
        self.info().map_color
    }

    /// 24-bit RGB tint applied at render time.
    pub fn tint(self) -> u32 {
        self.info().tint
    }

    /// Parse from either the snake-case or the unlocalized name.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s || c.unlocalized_name() == s)
    }

    fn info(self) -> &'static ColorInfo {
        &COLOR_TABLE[self as usize]
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_round_trip() {
        for color in ColorValue::ALL {
            assert_eq!(ColorValue::from_metadata(color.metadata() as i32), Ok(color));
        }
    }

    #[test]
    fn test_table_matches_enum_order() {
        for (code, color) in ColorValue::ALL.iter().enumerate() {
            assert_eq!(color.metadata() as usize, code);
        }
    }

    #[test]
    fn test_from_metadata_out_of_range() {
        assert_eq!(ColorValue::from_metadata(16), Err(InvalidMetadataError(16)));
        assert_eq!(ColorValue::from_metadata(-1), Err(InvalidMetadataError(-1)));
    }

    #[test]
    fn test_names() {
        assert_eq!(ColorValue::LightBlue.name(), "light_blue");
        assert_eq!(ColorValue::LightBlue.unlocalized_name(), "lightBlue");
        assert_eq!(ColorValue::LightGray.unlocalized_name(), "silver");
        assert_eq!(ColorValue::from_name("silver"), Some(ColorValue::LightGray));
        assert_eq!(ColorValue::from_name("red"), Some(ColorValue::Red));
        assert_eq!(ColorValue::from_name("chartreuse"), None);
    }

    #[test]
    fn test_map_colors_are_distinct() {
        let mut indices: Vec<u8> = ColorValue::ALL.iter().map(|c| c.map_color().index).collect();
        indices.dedup();
        assert_eq!(indices.len(), 16);
        assert_eq!(ColorValue::Red.map_color().rgb, 0x993333);
    }
}
