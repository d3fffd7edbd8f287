//! Layer descriptor

use super::Color;

/// Colour transform: `(color, timestamp, x, y) -> color`
///
/// Must be pure; stores may call it any number of times, including zero.
pub type LayerFn = fn(Color, u64, usize, usize) -> Color;

/// An immutable, indexed, named colour transform
///
/// Two layers are equal when their index, name and transform all match, so
/// copies of a layer are interchangeable.
#[derive(Clone, Copy)]
pub struct Layer {
    /// Position in the catalog; 0 is a valid index
    pub index: usize,
    /// Name used for lexicographic ordering
    pub name: &'static str,
    apply: LayerFn,
}

impl Layer {
    pub const fn new(index: usize, name: &'static str, apply: LayerFn) -> Self {
        Self { index, name, apply }
    }

    /// Run the transform over `color`
    pub fn apply(&self, color: Color, timestamp: u64, x: usize, y: usize) -> Color {
        (self.apply)(color, timestamp, x, y)
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.name == other.name
            && self.apply as usize == other.apply as usize
    }
}

impl Eq for Layer {}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}
