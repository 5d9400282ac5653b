//! Shape behavior units.
//!
//! A block carries at most one behavior unit, chosen from its shape
//! category when the block is assembled and never swapped afterwards.

use super::color::ColorComponent;
use crate::pack::ShapeCategory;
use crate::types::ColorValue;

/// Behavior attached to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Faces the placer horizontally.
    Directional,
    /// Stair shape with facing and upper/lower half.
    Stairs,
    /// Dye color variants.
    Colored(ColorComponent),
    /// Joins with neighboring walls.
    Wall,
}

impl Behavior {
    /// Behavior unit for a shape category, if the category has one.
    pub fn for_shape(shape: ShapeCategory, use_color_multiplier: bool) -> Option<Behavior> {
        match shape {
            ShapeCategory::Directional => Some(Behavior::Directional),
            ShapeCategory::Stairs => Some(Behavior::Stairs),
            ShapeCategory::Colored => Some(Behavior::Colored(ColorComponent::new(use_color_multiplier))),
            ShapeCategory::Wall => Some(Behavior::Wall),
            ShapeCategory::Pane
            | ShapeCategory::Megatexture
            | ShapeCategory::Connected
            | ShapeCategory::Plain => None,
        }
    }

    pub fn color_component(&self) -> Option<&ColorComponent> {
        match self {
            Behavior::Colored(component) => Some(component),
            _ => None,
        }
    }

    /// Default color for colored behaviors.
    pub fn default_color(&self) -> Option<ColorValue> {
        self.color_component().map(|_| ColorComponent::default_color())
    }
}
