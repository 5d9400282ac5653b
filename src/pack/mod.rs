//! Block pack loading and descriptors.
//!
//! A block pack is a named set of block descriptors plus the directory
//! their textures live in. Packs are loaded from a directory or a ZIP
//! archive.

pub mod descriptor;
pub mod loader;

pub use descriptor::{BlockDescriptor, ShapeCategory, MAX_LIGHT_VALUE};
pub use loader::LoadOptions;

use crate::error::{BlockPackError, Result};

/// What block assembly needs to know about the pack a descriptor came from.
pub trait PackInfo {
    /// Pack name, used to namespace block identifiers.
    fn pack_name(&self) -> &str;

    /// Directory textures are registered from.
    fn texture_directory(&self) -> &str;
}

/// A loaded block pack.
#[derive(Debug, Clone, Default)]
pub struct BlockPack {
    /// Pack name.
    pub name: String,
    /// Optional description from the pack manifest.
    pub description: Option<String>,
    /// Texture directory, relative to wherever the host resolves packs.
    pub texture_directory: String,
    /// Descriptors in load order.
    descriptors: Vec<BlockDescriptor>,
}

impl BlockPack {
    pub fn new(name: impl Into<String>, texture_directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            texture_directory: texture_directory.into(),
            descriptors: Vec::new(),
        }
    }

    /// Add a descriptor. Names must be unique within the pack.
    pub fn add_descriptor(&mut self, descriptor: BlockDescriptor) -> Result<()> {
        if self.get_descriptor(descriptor.name()).is_some() {
            return Err(BlockPackError::DuplicateBlock(descriptor.name().to_string()));
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Get a descriptor by its (un-namespaced) name.
    pub fn get_descriptor(&self, name: &str) -> Option<&BlockDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    pub fn descriptors(&self) -> &[BlockDescriptor] {
        &self.descriptors
    }

    pub fn descriptor_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Number of descriptors per shape category, in category order.
    pub fn shape_counts(&self) -> Vec<(ShapeCategory, usize)> {
        ShapeCategory::ALL
            .iter()
            .map(|shape| {
                let count = self.descriptors.iter().filter(|d| d.shape() == *shape).count();
                (*shape, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl PackInfo for BlockPack {
    fn pack_name(&self) -> &str {
        &self.name
    }

    fn texture_directory(&self) -> &str {
        &self.texture_directory
    }
}
