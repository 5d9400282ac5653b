//! Icon resolution.
//!
//! Turns a descriptor into an [`IconAssignment`]: which texture goes on
//! which face, color or part of a block. The shape category picks exactly
//! one algorithm, and every algorithm ends in a non-empty assignment, so
//! resolution cannot fail.

use crate::block::color::ColorComponent;
use crate::pack::{BlockDescriptor, ShapeCategory};
use crate::resolver::TextureNameResolver;
use crate::types::{ColorValue, Direction};
use serde::Serialize;
use std::collections::BTreeMap;

/// Slot naming the inner surface of a wall.
pub const INSIDE_SLOT: &str = "inside";
/// Slot naming the outer surface of a wall.
pub const OUTSIDE_SLOT: &str = "outside";
/// Slot naming an explicit second texture for connected blocks.
pub const CONNECTED_PART_SLOT: &str = "part2";
/// Suffix appended to the base texture when a connected block declares no
/// second part.
pub const CONNECTED_SUFFIX: &str = "2";

/// A logical texture reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Icon {
    /// Registration name, unique per block and slot.
    pub name: String,
    /// Texture file name (without extension) inside the pack.
    pub texture: String,
}

impl Icon {
    pub fn new(name: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
        }
    }
}

/// Which part of an assignment is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentShape {
    /// Only the default icon.
    DefaultOnly,
    /// Per-face icons, backed by the default icon.
    PerFace,
    /// One icon per color.
    PerColor,
    /// Two-part icon (connected blocks, walls).
    Pair,
}

/// The icons of one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IconAssignment {
    /// Icon used where nothing more specific applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon: Option<Icon>,
    /// Face overrides. Missing faces use `default_icon`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub per_face_icon: BTreeMap<Direction, Icon>,
    /// Per-color icons of colored blocks with baked textures.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub per_color_icon: BTreeMap<ColorValue, Icon>,
    /// Ordered two-part icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_icon: Option<(Icon, Icon)>,
    /// Megatexture span: the renderer tiles the face texture over this many
    /// blocks per axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub megatexture_span: Option<u32>,
}

impl IconAssignment {
    fn with_default(icon: Icon) -> Self {
        Self {
            default_icon: Some(icon),
            ..Default::default()
        }
    }

    fn with_pair(first: Icon, second: Icon) -> Self {
        Self {
            pair_icon: Some((first, second)),
            ..Default::default()
        }
    }

    /// The active part of the assignment.
    pub fn shape(&self) -> AssignmentShape {
        if self.pair_icon.is_some() {
            AssignmentShape::Pair
        } else if !self.per_color_icon.is_empty() {
            AssignmentShape::PerColor
        } else if !self.per_face_icon.is_empty() {
            AssignmentShape::PerFace
        } else {
            AssignmentShape::DefaultOnly
        }
    }

    /// Icon to draw on `face` of a block with optional `color`, applying
    /// the consumption-time fallbacks. A missing color means the default
    /// color.
    pub fn icon_for(&self, face: Direction, color: Option<ColorValue>) -> Option<&Icon> {
        self.per_color_icon
            .get(&color.unwrap_or_default())
            .or_else(|| self.per_face_icon.get(&face))
            .or_else(|| self.pair_icon.as_ref().map(|(first, _)| first))
            .or(self.default_icon.as_ref())
    }

    /// Every icon in the assignment, each once, in a stable order.
    pub fn icons(&self) -> Vec<&Icon> {
        let mut icons: Vec<&Icon> = Vec::new();
        let candidates = self
            .default_icon
            .iter()
            .chain(self.per_face_icon.values())
            .chain(self.per_color_icon.values())
            .chain(self.pair_icon.iter().flat_map(|(a, b)| [a, b]));
        for icon in candidates {
            if !icons.contains(&icon) {
                icons.push(icon);
            }
        }
        icons
    }
}

/// Resolve the icons of a descriptor, using its own name as block id.
pub fn resolve(descriptor: &BlockDescriptor) -> IconAssignment {
    resolve_icons(descriptor.name(), descriptor)
}

/// Resolve the icons of a descriptor. `block_id` is the namespaced block
/// identifier icon names are derived from.
pub fn resolve_icons(block_id: &str, descriptor: &BlockDescriptor) -> IconAssignment {
    let textures = TextureNameResolver::new(descriptor);

    match descriptor.shape() {
        ShapeCategory::Megatexture => resolve_megatexture(block_id, descriptor, &textures),
        ShapeCategory::Connected => resolve_connected(block_id, descriptor, &textures),
        ShapeCategory::Colored if !descriptor.use_color_multiplier() => {
            resolve_color_set(block_id, descriptor)
        }
        ShapeCategory::Colored => {
            log::trace!("{}: tinted colored block, single texture", block_id);
            IconAssignment::with_default(Icon::new(block_id, base_or_name(descriptor, &textures)))
        }
        ShapeCategory::Wall => resolve_wall(block_id, descriptor, &textures),
        ShapeCategory::Plain
        | ShapeCategory::Directional
        | ShapeCategory::Stairs
        | ShapeCategory::Pane => resolve_sides(block_id, descriptor, &textures, None),
    }
}

fn base_or_name<'a>(descriptor: &'a BlockDescriptor, textures: &TextureNameResolver<'a>) -> &'a str {
    textures.resolve_base().unwrap_or_else(|| descriptor.name())
}

/// Same texture on all six faces, tiled over `num_sub_blocks`.
fn resolve_megatexture(
    block_id: &str,
    descriptor: &BlockDescriptor,
    textures: &TextureNameResolver<'_>,
) -> IconAssignment {
    log::trace!("{}: megatexture over {} blocks", block_id, descriptor.num_sub_blocks());
    let icon = Icon::new(block_id, base_or_name(descriptor, textures));

    let mut assignment = IconAssignment::with_default(icon.clone());
    for direction in Direction::ALL {
        assignment.per_face_icon.insert(direction, icon.clone());
    }
    assignment.megatexture_span = Some(descriptor.num_sub_blocks());
    assignment
}

/// Base texture plus its second part, declared or `<base>2`.
fn resolve_connected(
    block_id: &str,
    descriptor: &BlockDescriptor,
    textures: &TextureNameResolver<'_>,
) -> IconAssignment {
    let base = base_or_name(descriptor, textures);
    let second = match textures.resolve_slot(CONNECTED_PART_SLOT) {
        Some(declared) => declared.to_string(),
        None => format!("{}{}", base, CONNECTED_SUFFIX),
    };
    log::trace!("{}: connected parts {} / {}", block_id, base, second);

    IconAssignment::with_pair(
        Icon::new(block_id, base),
        Icon::new(format!("{}{}", block_id, CONNECTED_SUFFIX), second),
    )
}

/// One baked texture per color.
fn resolve_color_set(block_id: &str, descriptor: &BlockDescriptor) -> IconAssignment {
    log::trace!("{}: per-color textures", block_id);
    let per_color_icon = ColorValue::ALL
        .into_iter()
        .map(|color| {
            let name = format!("{}_{}", block_id, color.unlocalized_name());
            let icon = Icon::new(name, ColorComponent::texture_name_for(descriptor, color));
            (color, icon)
        })
        .collect();

    IconAssignment {
        per_color_icon,
        ..Default::default()
    }
}

/// Inside/outside pair when both are declared, otherwise the side algorithm
/// seeded with whichever one is.
fn resolve_wall(
    block_id: &str,
    descriptor: &BlockDescriptor,
    textures: &TextureNameResolver<'_>,
) -> IconAssignment {
    let inside = textures.resolve_slot(INSIDE_SLOT);
    let outside = textures.resolve_slot(OUTSIDE_SLOT);

    match (inside, outside) {
        (Some(inside), Some(outside)) => {
            log::trace!("{}: wall pair {} / {}", block_id, outside, inside);
            IconAssignment::with_pair(
                Icon::new(format!("{}_{}", block_id, OUTSIDE_SLOT), outside),
                Icon::new(format!("{}_{}", block_id, INSIDE_SLOT), inside),
            )
        }
        (Some(single), None) | (None, Some(single)) => {
            resolve_sides(block_id, descriptor, textures, Some(single))
        }
        (None, None) => resolve_sides(block_id, descriptor, textures, None),
    }
}

/// Default icon plus every declared face override.
///
/// The default is the `seed` if given, else the first face override in
/// scan order, else the declared base texture, else the descriptor's own
/// name.
fn resolve_sides(
    block_id: &str,
    descriptor: &BlockDescriptor,
    textures: &TextureNameResolver<'_>,
    seed: Option<&str>,
) -> IconAssignment {
    let default_texture = seed
        .or_else(|| textures.first_face())
        .or_else(|| descriptor.base_texture_name())
        .unwrap_or_else(|| descriptor.name());
    log::trace!("{}: sides with default {}", block_id, default_texture);

    let mut assignment = IconAssignment::with_default(Icon::new(block_id, default_texture));
    for direction in Direction::ALL {
        if let Some(texture) = textures.resolve_face(direction) {
            let name = format!("{}_{}", block_id, direction);
            assignment.per_face_icon.insert(direction, Icon::new(name, texture));
        }
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(icon: Option<&Icon>) -> Option<&str> {
        icon.map(|i| i.texture.as_str())
    }

    #[test]
    fn test_megatexture_all_faces_equal_default() {
        let descriptor = BlockDescriptor::new("mural", ShapeCategory::Megatexture)
            .with_texture("mural")
            .with_sub_blocks(4);
        let assignment = resolve(&descriptor);

        assert_eq!(assignment.per_face_icon.len(), 6);
        for icon in assignment.per_face_icon.values() {
            assert_eq!(Some(icon), assignment.default_icon.as_ref());
        }
        assert_eq!(texture(assignment.default_icon.as_ref()), Some("mural"));
        assert_eq!(assignment.megatexture_span, Some(4));
        assert_eq!(assignment.shape(), AssignmentShape::PerFace);
    }

    #[test]
    fn test_connected_synthesizes_second_part() {
        let descriptor = BlockDescriptor::new("glass", ShapeCategory::Connected).with_texture("glass");
        let assignment = resolve(&descriptor);

        let (first, second) = assignment.pair_icon.clone().unwrap();
        assert_eq!(first.texture, "glass");
        assert_eq!(second.texture, format!("{}2", first.texture));
        assert_eq!(second.name, "glass2");
        assert_eq!(assignment.default_icon, None);
        assert_eq!(assignment.shape(), AssignmentShape::Pair);
    }

    #[test]
    fn test_connected_uses_declared_second_part() {
        let descriptor = BlockDescriptor::new("glass", ShapeCategory::Connected)
            .with_texture("glass")
            .with_slot_texture(CONNECTED_PART_SLOT, "glass_border");
        let (_, second) = resolve(&descriptor).pair_icon.unwrap();

        assert_eq!(second.texture, "glass_border");
    }

    #[test]
    fn test_colored_baked_textures() {
        let descriptor = BlockDescriptor::new("wool", ShapeCategory::Colored)
            .with_texture("wool")
            .with_color_multiplier(false);
        let assignment = resolve_icons("castle_wool", &descriptor);

        assert_eq!(assignment.per_color_icon.len(), 16);
        for color in ColorValue::ALL {
            let icon = &assignment.per_color_icon[&color];
            assert_eq!(icon.texture, format!("wool_{}", color.unlocalized_name()));
            assert_eq!(icon.name, format!("castle_wool_{}", color.unlocalized_name()));
        }
        assert_eq!(assignment.default_icon, None);
        assert_eq!(assignment.shape(), AssignmentShape::PerColor);
    }

    #[test]
    fn test_colored_tinted_single_texture() {
        let descriptor = BlockDescriptor::new("wool", ShapeCategory::Colored)
            .with_texture("wool_plain")
            .with_color_multiplier(true);
        let assignment = resolve(&descriptor);

        assert!(assignment.per_color_icon.is_empty());
        assert_eq!(texture(assignment.default_icon.as_ref()), Some("wool_plain"));
        assert!(ColorValue::ALL
            .iter()
            .any(|c| *c != ColorValue::White && ColorComponent::tint_for(*c) != 0xFFFFFF));
    }

    #[test]
    fn test_wall_pair_outside_first() {
        let descriptor = BlockDescriptor::new("wall", ShapeCategory::Wall)
            .with_slot_texture(INSIDE_SLOT, "brick_in")
            .with_slot_texture(OUTSIDE_SLOT, "brick_out");
        let (first, second) = resolve(&descriptor).pair_icon.unwrap();

        assert_eq!(first.texture, "brick_out");
        assert_eq!(second.texture, "brick_in");
    }

    #[test]
    fn test_wall_without_slots_uses_base() {
        let descriptor = BlockDescriptor::new("wall", ShapeCategory::Wall).with_texture("stonewall");
        let assignment = resolve(&descriptor);

        assert_eq!(assignment.pair_icon, None);
        assert_eq!(texture(assignment.default_icon.as_ref()), Some("stonewall"));
    }

    #[test]
    fn test_wall_single_slot_seeds_default() {
        // The seed wins over both the base texture and face overrides
        let descriptor = BlockDescriptor::new("wall", ShapeCategory::Wall)
            .with_texture("stonewall")
            .with_face_texture(Direction::Up, "wall_top")
            .with_slot_texture(OUTSIDE_SLOT, "brick_out");
        let assignment = resolve(&descriptor);

        assert_eq!(assignment.pair_icon, None);
        assert_eq!(texture(assignment.default_icon.as_ref()), Some("brick_out"));
        assert_eq!(texture(assignment.per_face_icon.get(&Direction::Up)), Some("wall_top"));
        assert_eq!(assignment.per_face_icon.len(), 1);
    }

    #[test]
    fn test_sides_single_override() {
        let descriptor = BlockDescriptor::new("crate", ShapeCategory::Plain)
            .with_face_texture(Direction::North, "n_tex");
        let assignment = resolve(&descriptor);

        assert_eq!(texture(assignment.default_icon.as_ref()), Some("n_tex"));
        assert_eq!(texture(assignment.per_face_icon.get(&Direction::North)), Some("n_tex"));
        for direction in Direction::ALL {
            if direction != Direction::North {
                assert!(!assignment.per_face_icon.contains_key(&direction));
            }
        }
    }

    #[test]
    fn test_sides_self_reference_fallback() {
        let descriptor = BlockDescriptor::new("mystery", ShapeCategory::Plain);
        let assignment = resolve(&descriptor);

        assert_eq!(texture(assignment.default_icon.as_ref()), Some("mystery"));
        assert!(assignment.per_face_icon.is_empty());
        assert_eq!(assignment.shape(), AssignmentShape::DefaultOnly);
    }

    #[test]
    fn test_sides_first_override_beats_base() {
        let descriptor = BlockDescriptor::new("log", ShapeCategory::Directional)
            .with_texture("log_side")
            .with_face_texture(Direction::Up, "log_top")
            .with_face_texture(Direction::Down, "log_bottom");
        let assignment = resolve_icons("forest_log", &descriptor);

        assert_eq!(texture(assignment.default_icon.as_ref()), Some("log_bottom"));
        assert_eq!(assignment.per_face_icon[&Direction::Up].name, "forest_log_up");
        assert_eq!(texture(assignment.icon_for(Direction::North, None)), Some("log_bottom"));
        assert_eq!(texture(assignment.icon_for(Direction::Up, None)), Some("log_top"));
    }

    #[test]
    fn test_sides_single_override_beats_base() {
        let descriptor = BlockDescriptor::new("log", ShapeCategory::Directional)
            .with_texture("log_side")
            .with_face_texture(Direction::Up, "log_top");

        assert_eq!(texture(resolve(&descriptor).default_icon.as_ref()), Some("log_top"));
    }

    #[test]
    fn test_sides_base_without_overrides() {
        let descriptor = BlockDescriptor::new("stone", ShapeCategory::Stairs).with_texture("cobble");
        let assignment = resolve(&descriptor);

        assert_eq!(texture(assignment.default_icon.as_ref()), Some("cobble"));
        assert!(assignment.per_face_icon.is_empty());
    }

    #[test]
    fn test_wall_seed_beats_overrides_and_base() {
        let descriptor = BlockDescriptor::new("wall", ShapeCategory::Wall)
            .with_texture("stonewall")
            .with_face_texture(Direction::Down, "wall_bottom")
            .with_face_texture(Direction::North, "wall_north")
            .with_slot_texture(INSIDE_SLOT, "brick_in");
        let assignment = resolve(&descriptor);

        assert_eq!(texture(assignment.default_icon.as_ref()), Some("brick_in"));
        assert_eq!(texture(assignment.per_face_icon.get(&Direction::Down)), Some("wall_bottom"));
        assert_eq!(texture(assignment.icon_for(Direction::East, None)), Some("brick_in"));
        assert_eq!(assignment.per_face_icon.len(), 2);
    }

    #[test]
    fn test_every_shape_resolves_non_empty() {
        for shape in ShapeCategory::ALL {
            let descriptor = BlockDescriptor::new("bare", shape);
            let assignment = resolve(&descriptor);
            for direction in Direction::ALL {
                assert!(
                    assignment.icon_for(direction, Some(ColorValue::Red)).is_some(),
                    "{} has no icon for {}",
                    shape,
                    direction
                );
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let descriptor = BlockDescriptor::new("wool", ShapeCategory::Colored)
            .with_texture("wool")
            .with_color_multiplier(false);

        assert_eq!(resolve(&descriptor), resolve(&descriptor));
    }

    #[test]
    fn test_icons_deduplicated() {
        let descriptor = BlockDescriptor::new("mural", ShapeCategory::Megatexture).with_texture("mural");
        assert_eq!(resolve(&descriptor).icons().len(), 1);
    }

    #[test]
    fn test_icon_for_prefers_color() {
        let descriptor = BlockDescriptor::new("wool", ShapeCategory::Colored)
            .with_texture("wool")
            .with_color_multiplier(false);
        let assignment = resolve(&descriptor);

        assert_eq!(
            texture(assignment.icon_for(Direction::Up, Some(ColorValue::Pink))),
            Some("wool_pink")
        );
        assert_eq!(
            texture(assignment.icon_for(Direction::Up, None)),
            Some("wool_white")
        );
    }
}
