//! Additive layer store
//!
//! Layers apply oldest-first, each consuming the previous result.
//! - add: append as the newest layer (no-op at capacity)
//! - erase: drop the oldest layer, whatever is passed in
//! - special: reverse the order of the held layers

use log::{debug, trace};

use super::LayerStore;
use crate::config::DEFAULT_ADDITIVE_CAPACITY;
use crate::containers::BoundedQueue;
use crate::layers::{Color, Layer};

#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    layers: BoundedQueue<Layer>,
}

impl Default for AdditiveLayerStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ADDITIVE_CAPACITY)
    }
}

impl AdditiveLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: BoundedQueue::new(capacity),
        }
    }

    /// Held layers, oldest first
    pub fn layers(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.layers.capacity()
    }
}

impl LayerStore for AdditiveLayerStore {
    fn add(&mut self, layer: Layer) -> bool {
        let added = self.layers.append(layer);
        if !added {
            debug!(
                "additive store full ({} layers), dropped {}",
                self.layers.capacity(),
                layer.name
            );
        }
        added
    }

    fn erase(&mut self, _layer: Layer) -> bool {
        match self.layers.serve() {
            Some(oldest) => {
                trace!("additive store: erased oldest layer {}", oldest.name);
                true
            }
            None => false,
        }
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.layers
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        self.layers.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::layer_by_name;

    const START: Color = Color::rgb(10, 20, 30);

    fn names(store: &AdditiveLayerStore) -> Vec<&'static str> {
        store.layers().map(|layer| layer.name).collect()
    }

    #[test]
    fn test_folds_oldest_first() {
        let mut store = AdditiveLayerStore::new();
        store.add(layer_by_name("black").unwrap());
        store.add(layer_by_name("lighten").unwrap());
        assert_eq!(store.get_color(START, 0, 0, 0), Color::rgb(40, 40, 40));

        store.special();
        assert_eq!(names(&store), vec!["lighten", "black"]);
        assert_eq!(store.get_color(START, 0, 0, 0), Color::BLACK);
    }

    #[test]
    fn test_get_color_leaves_order_untouched() {
        let mut store = AdditiveLayerStore::new();
        for name in ["red", "invert", "darken"] {
            store.add(layer_by_name(name).unwrap());
        }
        let first = store.get_color(START, 5, 2, 2);
        for _ in 0..4 {
            assert_eq!(store.get_color(START, 5, 2, 2), first);
        }
        assert_eq!(names(&store), vec!["red", "invert", "darken"]);
    }

    #[test]
    fn test_erase_removes_oldest() {
        let mut store = AdditiveLayerStore::new();
        store.add(layer_by_name("red").unwrap());
        store.add(layer_by_name("blue").unwrap());
        assert!(store.erase(layer_by_name("blue").unwrap()));
        assert_eq!(names(&store), vec!["blue"]);
        assert!(store.erase(layer_by_name("red").unwrap()));
        assert!(!store.erase(layer_by_name("red").unwrap()));
        assert_eq!(store.get_color(START, 0, 0, 0), START);
    }

    #[test]
    fn test_add_at_capacity_is_noop() {
        let mut store = AdditiveLayerStore::with_capacity(2);
        let red = layer_by_name("red").unwrap();
        assert!(store.add(red));
        assert!(store.add(red));
        assert!(!store.add(layer_by_name("black").unwrap()));
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["red", "red"]);
    }
}
