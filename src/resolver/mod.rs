//! Texture name and icon resolution.
//!
//! [`TextureNameResolver`] answers "which texture does this descriptor name
//! for this face or slot"; [`icon`] turns a whole descriptor into an
//! [`IconAssignment`] according to its shape category.

pub mod icon;
pub mod texture_name;

pub use icon::{resolve, resolve_icons, AssignmentShape, Icon, IconAssignment};
pub use texture_name::TextureNameResolver;
