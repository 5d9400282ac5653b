//! Block assembly.
//!
//! Turns descriptors into blocks: namespaces the identifier, attaches the
//! shape behavior, derives render properties and resolves icons.

pub mod color;
pub mod component;

pub use color::ColorComponent;
pub use component::Behavior;

use crate::icon_registry::{IconRegistry, TextureHandle};
use crate::pack::{BlockDescriptor, BlockPack, PackInfo, ShapeCategory};
use crate::resolver::{resolve_icons, IconAssignment};
use crate::types::{ColorValue, RenderLayer};
use std::collections::BTreeMap;

/// Light opacity of a fully opaque block.
pub const FULL_LIGHT_OPACITY: u8 = 255;

/// A block assembled from a descriptor.
#[derive(Debug, Clone)]
pub struct Block {
    id: String,
    descriptor: BlockDescriptor,
    texture_directory: String,
    behavior: Option<Behavior>,
    render_layer: RenderLayer,
    full_block: bool,
    light_value: u8,
    icons: IconAssignment,
}

impl Block {
    /// Namespaced identifier, `<pack>_<name>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Translation key.
    pub fn unlocalized_name(&self) -> String {
        format!("tile.{}", self.id)
    }

    /// Translation key of one color variant. Falls back to the block key
    /// for blocks without color.
    pub fn variant_unlocalized_name(&self, color: ColorValue) -> String {
        match self.color_component() {
            Some(component) => component.unlocalized_name(&self.unlocalized_name(), color),
            None => self.unlocalized_name(),
        }
    }

    pub fn descriptor(&self) -> &BlockDescriptor {
        &self.descriptor
    }

    pub fn shape_category(&self) -> ShapeCategory {
        self.descriptor.shape()
    }

    pub fn behavior(&self) -> Option<&Behavior> {
        self.behavior.as_ref()
    }

    pub fn color_component(&self) -> Option<&ColorComponent> {
        self.behavior.as_ref().and_then(Behavior::color_component)
    }

    pub fn icon_assignment(&self) -> &IconAssignment {
        &self.icons
    }

    /// Opaque and not translucent.
    pub fn is_fully_opaque(&self) -> bool {
        self.full_block
    }

    pub fn is_opaque_cube(&self) -> bool {
        self.full_block
    }

    pub fn light_opacity(&self) -> u8 {
        if self.full_block {
            FULL_LIGHT_OPACITY
        } else {
            0
        }
    }

    /// Light emission in `0..=15`.
    pub fn light_value(&self) -> u8 {
        self.light_value
    }

    pub fn render_layer(&self) -> RenderLayer {
        self.render_layer
    }

    pub fn can_render_in_layer(&self, layer: RenderLayer) -> bool {
        self.render_layer == layer
    }

    pub fn hardness(&self) -> f32 {
        self.descriptor.hardness()
    }

    /// Persisted code of a color. `None` for blocks without color.
    pub fn state_to_metadata(&self, color: ColorValue) -> Option<u8> {
        self.color_component().map(|c| c.state_to_metadata(color))
    }

    /// Color stored under a persisted code. Invalid codes give the default
    /// color; `None` for blocks without color.
    pub fn metadata_to_state(&self, code: i32) -> Option<ColorValue> {
        self.color_component().map(|c| c.metadata_to_state(code))
    }

    /// Render tint for a color. Blocks without color, or with per-color
    /// textures, are untinted.
    pub fn color_multiplier(&self, color: ColorValue) -> u32 {
        self.color_component()
            .map(|c| c.color_multiplier(color))
            .unwrap_or(color::NO_TINT)
    }

    /// Register every icon of the block and map icon names to handles.
    pub fn register_icons(&self, registry: &mut dyn IconRegistry) -> BTreeMap<String, TextureHandle> {
        self.icons
            .icons()
            .into_iter()
            .map(|icon| {
                let handle = registry.register_icon(&icon.name, &self.texture_directory, &icon.texture);
                (icon.name.clone(), handle)
            })
            .collect()
    }
}

/// Builds blocks for the descriptors of one pack.
pub struct BlockAssembler<'a> {
    pack: &'a dyn PackInfo,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(pack: &'a dyn PackInfo) -> Self {
        Self { pack }
    }

    /// Namespaced identifier of a descriptor.
    pub fn block_id(&self, descriptor: &BlockDescriptor) -> String {
        format!("{}_{}", self.pack.pack_name(), descriptor.name())
    }

    /// Assemble one block.
    pub fn assemble(&self, descriptor: &BlockDescriptor) -> Block {
        let id = self.block_id(descriptor);
        let behavior = Behavior::for_shape(descriptor.shape(), descriptor.use_color_multiplier());

        let render_layer = if descriptor.translucent() {
            RenderLayer::Translucent
        } else {
            RenderLayer::CutoutMipped
        };
        let full_block = descriptor.opaque() && !descriptor.translucent();

        let icons = resolve_icons(&id, descriptor);
        log::debug!(
            "Assembled block {} ({}, {:?}, {:?} icons)",
            id,
            descriptor.shape(),
            behavior,
            icons.shape()
        );

        Block {
            id,
            descriptor: descriptor.clone(),
            texture_directory: self.pack.texture_directory().to_string(),
            behavior,
            render_layer,
            full_block,
            light_value: descriptor.light_value(),
            icons,
        }
    }

    /// Assemble every descriptor, in order.
    pub fn assemble_all<'d>(&self, descriptors: impl IntoIterator<Item = &'d BlockDescriptor>) -> Vec<Block> {
        descriptors.into_iter().map(|d| self.assemble(d)).collect()
    }
}

/// Assemble every block of a pack.
pub fn assemble_pack(pack: &BlockPack) -> Vec<Block> {
    BlockAssembler::new(pack).assemble_all(pack.descriptors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_registry::InMemoryIconRegistry;
    use crate::resolver::AssignmentShape;
    use crate::types::Direction;

    fn pack() -> BlockPack {
        BlockPack::new("castle", "castle/textures")
    }

    #[test]
    fn test_block_id_is_namespaced() {
        let pack = pack();
        let block = BlockAssembler::new(&pack).assemble(&BlockDescriptor::new("wall", ShapeCategory::Wall));

        assert_eq!(block.id(), "castle_wall");
        assert_eq!(block.unlocalized_name(), "tile.castle_wall");
    }

    #[test]
    fn test_behavior_attached_by_shape() {
        let pack = pack();
        let assembler = BlockAssembler::new(&pack);

        let stairs = assembler.assemble(&BlockDescriptor::new("steps", ShapeCategory::Stairs));
        let pane = assembler.assemble(&BlockDescriptor::new("glass", ShapeCategory::Pane));
        let wool = assembler.assemble(
            &BlockDescriptor::new("wool", ShapeCategory::Colored).with_color_multiplier(false),
        );

        assert_eq!(stairs.behavior(), Some(&Behavior::Stairs));
        assert_eq!(pane.behavior(), None);
        assert_eq!(wool.color_component(), Some(&ColorComponent::new(false)));
    }

    #[test]
    fn test_render_properties() {
        let pack = pack();
        let assembler = BlockAssembler::new(&pack);

        let solid = assembler.assemble(&BlockDescriptor::new("stone", ShapeCategory::Plain));
        let glass = assembler.assemble(
            &BlockDescriptor::new("glass", ShapeCategory::Connected).with_opacity(true, true),
        );
        let leaves = assembler.assemble(
            &BlockDescriptor::new("leaves", ShapeCategory::Plain).with_opacity(false, false),
        );

        assert!(solid.is_fully_opaque());
        assert_eq!(solid.light_opacity(), 255);
        assert_eq!(solid.render_layer(), RenderLayer::CutoutMipped);

        assert!(!glass.is_fully_opaque());
        assert_eq!(glass.light_opacity(), 0);
        assert_eq!(glass.render_layer(), RenderLayer::Translucent);
        assert!(glass.can_render_in_layer(RenderLayer::Translucent));
        assert!(!glass.can_render_in_layer(RenderLayer::CutoutMipped));

        assert!(!leaves.is_opaque_cube());
        assert_eq!(leaves.render_layer(), RenderLayer::CutoutMipped);
    }

    #[test]
    fn test_light_value_clamped() {
        let pack = pack();
        let assembler = BlockAssembler::new(&pack);

        let dark = assembler.assemble(&BlockDescriptor::new("a", ShapeCategory::Plain).with_light_value(-5));
        let bright = assembler.assemble(&BlockDescriptor::new("b", ShapeCategory::Plain).with_light_value(99));

        assert_eq!(dark.light_value(), 0);
        assert_eq!(bright.light_value(), 15);
    }

    #[test]
    fn test_icons_resolved_with_block_id() {
        let pack = pack();
        let block = BlockAssembler::new(&pack).assemble(
            &BlockDescriptor::new("wall", ShapeCategory::Wall)
                .with_slot_texture("inside", "brick_in")
                .with_slot_texture("outside", "brick_out"),
        );

        let (outside, inside) = block.icon_assignment().pair_icon.clone().unwrap();
        assert_eq!(outside.name, "castle_wall_outside");
        assert_eq!(inside.name, "castle_wall_inside");
        assert_eq!(block.icon_assignment().shape(), AssignmentShape::Pair);
    }

    #[test]
    fn test_color_metadata_boundary() {
        let pack = pack();
        let assembler = BlockAssembler::new(&pack);
        let wool = assembler.assemble(&BlockDescriptor::new("wool", ShapeCategory::Colored));
        let stone = assembler.assemble(&BlockDescriptor::new("stone", ShapeCategory::Plain));

        assert_eq!(wool.state_to_metadata(ColorValue::Lime), Some(5));
        assert_eq!(wool.metadata_to_state(5), Some(ColorValue::Lime));
        assert_eq!(wool.metadata_to_state(99), Some(ColorValue::White));
        assert_eq!(stone.metadata_to_state(5), None);
        assert_eq!(stone.color_multiplier(ColorValue::Red), color::NO_TINT);
        assert_ne!(wool.color_multiplier(ColorValue::Red), color::NO_TINT);
        assert_eq!(
            wool.variant_unlocalized_name(ColorValue::Red),
            "tile.castle_wool.red"
        );
    }

    #[test]
    fn test_register_icons() {
        let pack = pack();
        let block = BlockAssembler::new(&pack).assemble(
            &BlockDescriptor::new("log", ShapeCategory::Directional)
                .with_texture("log_side")
                .with_face_texture(Direction::Up, "log_top"),
        );

        let mut registry = InMemoryIconRegistry::new();
        let handles = block.register_icons(&mut registry);

        assert_eq!(handles.len(), 2);
        let handle = handles["castle_log_up"];
        assert_eq!(registry.get(handle).unwrap().location, "castle/textures/log_top.png");
        assert_eq!(
            registry.get(handles["castle_log"]).unwrap().location,
            "castle/textures/log_top.png"
        );
    }

    #[test]
    fn test_assemble_pack() {
        let mut pack = pack();
        pack.add_descriptor(BlockDescriptor::new("a", ShapeCategory::Plain)).unwrap();
        pack.add_descriptor(BlockDescriptor::new("b", ShapeCategory::Megatexture)).unwrap();

        let blocks = assemble_pack(&pack);
        let ids: Vec<_> = blocks.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["castle_a", "castle_b"]);
    }
}
