//! Set layer store
//!
//! Holds at most one layer.
//! - add: replace the held layer (no change if it is the same layer)
//! - erase: clear the held layer, whatever is passed in
//! - special: toggle inversion of the output colour

use log::trace;

use super::LayerStore;
use crate::layers::{Color, Layer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetLayerStore {
    layer: Option<Layer>,
    inverted: bool,
}

impl SetLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer currently held
    pub fn layer(&self) -> Option<Layer> {
        self.layer
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetLayerStore {
    fn add(&mut self, layer: Layer) -> bool {
        if self.layer == Some(layer) {
            return false;
        }
        trace!("set store: {:?} -> {}", self.layer.map(|l| l.name), layer.name);
        self.layer = Some(layer);
        true
    }

    fn erase(&mut self, _layer: Layer) -> bool {
        self.layer.take().is_some()
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        let color = match self.layer {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            color.inverted()
        } else {
            color
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }
}
