//! # Declarative Blocks
//!
//! Generate families of blocks from declarative pack descriptors and
//! resolve which texture goes on which face, color or part of each block.
//!
//! ## Overview
//!
//! A block pack is a directory or ZIP archive of JSON descriptors. Each
//! descriptor names a shape category (plain, directional, stairs, colored,
//! wall, pane, megatexture, connected) and a sparse set of textures. The
//! shape category alone decides how icons are resolved and which behavior
//! the block gets.
//!
//! ## Quick Start
//!
//! ```ignore
//! use declarative_blocks::{assemble_pack, load_block_pack, InMemoryIconRegistry, LoadOptions};
//!
//! let pack = load_block_pack("packs/castle", &LoadOptions::default())?;
//! let mut registry = InMemoryIconRegistry::new();
//!
//! for block in assemble_pack(&pack) {
//!     let handles = block.register_icons(&mut registry);
//!     println!("{}: {:?} -> {:?}", block.id(), block.icon_assignment().shape(), handles);
//! }
//! ```
//!
//! Resolution alone needs no pack at all:
//!
//! ```ignore
//! use declarative_blocks::{resolve, BlockDescriptor, ShapeCategory};
//!
//! let descriptor = BlockDescriptor::new("glass", ShapeCategory::Connected).with_texture("glass");
//! let (first, second) = resolve(&descriptor).pair_icon.unwrap();
//! assert_eq!(second.texture, "glass2");
//! ```

pub mod error;
pub mod types;
pub mod pack;
pub mod resolver;
pub mod block;
pub mod icon_registry;

// Re-export main types for convenience
pub use error::{BlockPackError, InvalidMetadataError, Result};
pub use types::{ColorValue, Direction, MapColor, RenderLayer};
pub use pack::{BlockDescriptor, BlockPack, LoadOptions, PackInfo, ShapeCategory};
pub use resolver::{resolve, resolve_icons, AssignmentShape, Icon, IconAssignment, TextureNameResolver};
pub use block::{assemble_pack, Behavior, Block, BlockAssembler, ColorComponent};
pub use icon_registry::{IconRegistry, InMemoryIconRegistry, TextureHandle};

/// Load a block pack from a file path (ZIP or directory).
pub fn load_block_pack<P: AsRef<std::path::Path>>(path: P, options: &LoadOptions) -> Result<BlockPack> {
    pack::loader::load_from_path(path, options)
}

/// Load a block pack from ZIP bytes.
pub fn load_block_pack_from_bytes(data: &[u8], name: &str, options: &LoadOptions) -> Result<BlockPack> {
    pack::loader::load_from_bytes(data, name, options)
}
