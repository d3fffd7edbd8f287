//! Sequence layer store
//!
//! Each catalog layer is either active or not, and active layers apply in
//! catalog index order regardless of when they were added.
//! - add: activate the layer
//! - erase: deactivate the layer
//! - special: of the active layers, deactivate the one with the median name;
//!   with an even count the lexicographically smaller middle name goes

use log::{debug, warn};

use super::LayerStore;
use crate::containers::{BoundedIntSet, SortedList};
use crate::layers::{Color, Layer, CATALOG_SIZE};

/// Membership slot reserved for catalog index 0
const ZERO_INDEX_SLOT: usize = CATALOG_SIZE + 1;

#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    active: BoundedIntSet,
    /// Active layers keyed by catalog index
    layers: SortedList<usize, Layer>,
}

impl Default for SequenceLayerStore {
    fn default() -> Self {
        Self {
            active: BoundedIntSet::new(ZERO_INDEX_SLOT),
            layers: SortedList::new(CATALOG_SIZE),
        }
    }
}

impl SequenceLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership slot for a catalog index, or `None` outside the catalog
    fn slot_for(index: usize) -> Option<usize> {
        match index {
            0 => Some(ZERO_INDEX_SLOT),
            i if i < CATALOG_SIZE => Some(i + 1),
            _ => None,
        }
    }

    pub fn is_active(&self, layer: &Layer) -> bool {
        Self::slot_for(layer.index).is_some_and(|slot| self.active.contains(slot))
    }

    /// Active layers in catalog order
    pub fn active_layers(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.values()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerStore for SequenceLayerStore {
    fn add(&mut self, layer: Layer) -> bool {
        let Some(slot) = Self::slot_for(layer.index) else {
            warn!(
                "layer {} has index {} outside a catalog of {}",
                layer.name, layer.index, CATALOG_SIZE
            );
            return false;
        };
        match self.active.insert(slot) {
            Ok(true) => self.layers.add(layer.index, layer),
            Ok(false) => false,
            Err(err) => {
                warn!("sequence store rejected {}: {}", layer.name, err);
                false
            }
        }
    }

    fn erase(&mut self, layer: Layer) -> bool {
        let Some(slot) = Self::slot_for(layer.index) else {
            return false;
        };
        if !self.active.remove(slot) {
            return false;
        }
        if let Some(rank) = self.layers.index_of(&layer.index) {
            self.layers.delete_at_index(rank);
        }
        true
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.layers
            .values()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        let count = self.layers.len();
        if count == 0 {
            return;
        }

        let mut by_name = SortedList::new(count);
        for layer in self.layers.values() {
            by_name.add(layer.name, *layer);
        }

        let median = if count % 2 == 1 { count / 2 } else { count / 2 - 1 };
        if let Some((_, &layer)) = by_name.get(median) {
            debug!("sequence store: removing median layer {}", layer.name);
            self.erase(layer);
        }
    }
}
