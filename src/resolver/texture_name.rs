//! Texture name lookups on a descriptor.
//!
//! Pure lookups: absence is `None`, never an error. Fallback policy belongs
//! to the caller.

use crate::pack::BlockDescriptor;
use crate::types::Direction;

/// Resolves logical texture names from a descriptor.
pub struct TextureNameResolver<'a> {
    descriptor: &'a BlockDescriptor,
}

impl<'a> TextureNameResolver<'a> {
    pub fn new(descriptor: &'a BlockDescriptor) -> Self {
        Self { descriptor }
    }

    /// The block's base texture: the declared base name, else the first face
    /// override in scan order.
    pub fn resolve_base(&self) -> Option<&'a str> {
        self.descriptor
            .base_texture_name()
            .filter(|s| !s.is_empty())
            .or_else(|| self.first_face())
    }

    /// The override declared for one face, if any.
    pub fn resolve_face(&self, direction: Direction) -> Option<&'a str> {
        self.descriptor
            .face_texture(direction)
            .filter(|s| !s.is_empty())
    }

    /// The texture declared for a named slot, if any.
    pub fn resolve_slot(&self, slot: &str) -> Option<&'a str> {
        self.descriptor.slot_texture(slot).filter(|s| !s.is_empty())
    }

    /// First face override in scan order.
    pub fn first_face(&self) -> Option<&'a str> {
        Direction::ALL.iter().find_map(|d| self.resolve_face(*d))
    }
}
