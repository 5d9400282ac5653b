//! Block descriptor parsing.
//!
//! A descriptor declares one block of a pack: its shape category, the
//! textures it references and a handful of render properties. Descriptors
//! are immutable once built; the shape category in particular never changes
//! and alone decides which icon resolution algorithm runs.

use crate::types::Direction;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Highest light emission a block may declare.
pub const MAX_LIGHT_VALUE: u8 = 15;

/// Structural archetype of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeCategory {
    #[default]
    #[serde(alias = "PLAIN")]
    Plain,
    #[serde(alias = "DIRECTIONAL")]
    Directional,
    #[serde(alias = "STAIRS")]
    Stairs,
    #[serde(alias = "COLORED")]
    Colored,
    #[serde(alias = "WALL")]
    Wall,
    #[serde(alias = "PANE")]
    Pane,
    #[serde(alias = "MEGATEXTURE")]
    Megatexture,
    #[serde(alias = "CONNECTED")]
    Connected,
}

impl ShapeCategory {
    pub const ALL: [ShapeCategory; 8] = [
        ShapeCategory::Plain,
        ShapeCategory::Directional,
        ShapeCategory::Stairs,
        ShapeCategory::Colored,
        ShapeCategory::Wall,
        ShapeCategory::Pane,
        ShapeCategory::Megatexture,
        ShapeCategory::Connected,
    ];
}

impl std::fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShapeCategory::Plain => "plain",
            ShapeCategory::Directional => "directional",
            ShapeCategory::Stairs => "stairs",
            ShapeCategory::Colored => "colored",
            ShapeCategory::Wall => "wall",
            ShapeCategory::Pane => "pane",
            ShapeCategory::Megatexture => "megatexture",
            ShapeCategory::Connected => "connected",
        };
        f.write_str(s)
    }
}

/// A validated block descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DescriptorFile", into = "DescriptorFile")]
pub struct BlockDescriptor {
    name: String,
    shape: ShapeCategory,
    base_texture_name: Option<String>,
    per_direction_texture: BTreeMap<Direction, String>,
    named_slot_texture: BTreeMap<String, String>,
    use_color_multiplier: bool,
    num_sub_blocks: u32,
    opaque: bool,
    translucent: bool,
    light_value: u8,
    hardness: f32,
    material: Option<String>,
    sound: Option<String>,
}

impl BlockDescriptor {
    /// Create a descriptor with no textures and default render properties.
    pub fn new(name: impl Into<String>, shape: ShapeCategory) -> Self {
        Self {
            name: name.into(),
            shape,
            base_texture_name: None,
            per_direction_texture: BTreeMap::new(),
            named_slot_texture: BTreeMap::new(),
            use_color_multiplier: true,
            num_sub_blocks: 1,
            opaque: true,
            translucent: false,
            light_value: 0,
            hardness: 1.0,
            material: None,
            sound: None,
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.base_texture_name = non_empty(texture.into());
        self
    }

    pub fn with_face_texture(mut self, direction: Direction, texture: impl Into<String>) -> Self {
        match non_empty(texture.into()) {
            Some(texture) => self.per_direction_texture.insert(direction, texture),
            None => self.per_direction_texture.remove(&direction),
        };
        self
    }

    pub fn with_slot_texture(mut self, slot: impl Into<String>, texture: impl Into<String>) -> Self {
        let slot = slot.into();
        match non_empty(texture.into()) {
            Some(texture) => self.named_slot_texture.insert(slot, texture),
            None => self.named_slot_texture.remove(&slot),
        };
        self
    }

    pub fn with_color_multiplier(mut self, use_color_multiplier: bool) -> Self {
        self.use_color_multiplier = use_color_multiplier;
        self
    }

    /// Sub-block span of a megatexture. Values below 1 become 1.
    pub fn with_sub_blocks(mut self, num_sub_blocks: u32) -> Self {
        self.num_sub_blocks = num_sub_blocks.max(1);
        self
    }

    pub fn with_opacity(mut self, opaque: bool, translucent: bool) -> Self {
        self.opaque = opaque;
        self.translucent = translucent;
        self
    }

    /// Light emission, clamped to `0..=15`.
    pub fn with_light_value(mut self, light_value: i32) -> Self {
        self.light_value = clamp_light(light_value);
        self
    }

    pub fn with_hardness(mut self, hardness: f32) -> Self {
        self.hardness = hardness;
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Identifier, unique within the owning pack.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> ShapeCategory {
        self.shape
    }

    pub fn base_texture_name(&self) -> Option<&str> {
        self.base_texture_name.as_deref()
    }

    pub fn face_texture(&self, direction: Direction) -> Option<&str> {
        self.per_direction_texture.get(&direction).map(String::as_str)
    }

    pub fn slot_texture(&self, slot: &str) -> Option<&str> {
        self.named_slot_texture.get(slot).map(String::as_str)
    }

    pub fn per_direction_texture(&self) -> &BTreeMap<Direction, String> {
        &self.per_direction_texture
    }

    pub fn named_slot_texture(&self) -> &BTreeMap<String, String> {
        &self.named_slot_texture
    }

    pub fn use_color_multiplier(&self) -> bool {
        self.use_color_multiplier
    }

    pub fn num_sub_blocks(&self) -> u32 {
        self.num_sub_blocks
    }

    pub fn opaque(&self) -> bool {
        self.opaque
    }

    pub fn translucent(&self) -> bool {
        self.translucent
    }

    pub fn light_value(&self) -> u8 {
        self.light_value
    }

    pub fn hardness(&self) -> f32 {
        self.hardness
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }
}

fn clamp_light(light_value: i32) -> u8 {
    light_value.clamp(0, MAX_LIGHT_VALUE as i32) as u8
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// On-disk descriptor layout.
///
/// Faces and slots share one `textures` map; keys naming a direction are
/// face overrides, everything else is a named slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorFile {
    name: String,
    #[serde(rename = "type", default)]
    shape: ShapeCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    texture: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    textures: BTreeMap<String, String>,
    #[serde(default = "default_true")]
    use_color_multiplier: bool,
    #[serde(default = "default_sub_blocks", alias = "numSubBlocks")]
    num_blocks: u32,
    #[serde(default = "default_true")]
    opaque: bool,
    #[serde(default)]
    translucent: bool,
    #[serde(default, deserialize_with = "deserialize_light_value")]
    light_value: i32,
    #[serde(default = "default_hardness")]
    hardness: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sound: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_sub_blocks() -> u32 {
    1
}

fn default_hardness() -> f32 {
    1.0
}

/// Accepts any JSON number and clamps it into `0..=15`.
fn deserialize_light_value<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.clamp(0.0, MAX_LIGHT_VALUE as f64) as i32)
}

impl From<DescriptorFile> for BlockDescriptor {
    fn from(file: DescriptorFile) -> Self {
        let mut descriptor = BlockDescriptor::new(file.name, file.shape)
            .with_color_multiplier(file.use_color_multiplier)
            .with_sub_blocks(file.num_blocks)
            .with_opacity(file.opaque, file.translucent)
            .with_light_value(file.light_value)
            .with_hardness(file.hardness);

        if let Some(texture) = file.texture {
            descriptor = descriptor.with_texture(texture);
        }
        // Exact direction names win over aliases such as `top` or `UP`.
        let mut aliased = Vec::new();
        for (key, texture) in file.textures {
            match Direction::from_str(&key) {
                Some(direction) if direction.as_str() == key => {
                    descriptor = descriptor.with_face_texture(direction, texture);
                }
                Some(direction) => aliased.push((key, direction, texture)),
                None => descriptor = descriptor.with_slot_texture(key, texture),
            }
        }
        for (key, direction, texture) in aliased {
            if descriptor.face_texture(direction).is_some() {
                log::warn!(
                    "Descriptor {}: texture key '{}' duplicates '{}', ignoring it",
                    descriptor.name(),
                    key,
                    direction
                );
            } else {
                descriptor = descriptor.with_face_texture(direction, texture);
            }
        }
        descriptor.material = file.material;
        descriptor.sound = file.sound;
        descriptor
    }
}

impl From<BlockDescriptor> for DescriptorFile {
    fn from(descriptor: BlockDescriptor) -> Self {
        let mut textures = descriptor.named_slot_texture;
        for (direction, texture) in descriptor.per_direction_texture {
            textures.insert(direction.to_string(), texture);
        }

        Self {
            name: descriptor.name,
            shape: descriptor.shape,
            texture: descriptor.base_texture_name,
            textures,
            use_color_multiplier: descriptor.use_color_multiplier,
            num_blocks: descriptor.num_sub_blocks,
            opaque: descriptor.opaque,
            translucent: descriptor.translucent,
            light_value: descriptor.light_value as i32,
            hardness: descriptor.hardness,
            material: descriptor.material,
            sound: descriptor.sound,
        }
    }
}
