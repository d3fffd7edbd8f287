//! Colour layers
//!
//! A layer is an immutable, named, indexed colour transform. Stores compose
//! layers per cell; the transforms themselves live here along with the
//! built-in catalog used by the sequence store.

mod catalog;
mod color;
mod layer;

pub use catalog::{catalog, layer_by_index, layer_by_name, CATALOG_SIZE};
pub use color::Color;
pub use layer::{Layer, LayerFn};
