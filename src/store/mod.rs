//! Per-cell layer stores
//!
//! Each grid cell owns one store. The store decides how added layers are
//! kept and how they composite into the colour the cell shows:
//! - `SetLayerStore`: one layer at a time, special inverts the output
//! - `AdditiveLayerStore`: layers fold oldest-first, special reverses them
//! - `SequenceLayerStore`: catalog layers toggle on/off, special drops the median name
//!
//! The strategy is chosen once per grid through [`DrawStyle`] and every
//! cell holds the matching [`CellStore`] variant.

mod additive;
mod sequence;
mod set;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::TesseraError;
use crate::layers::{Color, Layer};

pub use additive::AdditiveLayerStore;
pub use sequence::SequenceLayerStore;
pub use set::SetLayerStore;

/// Operations every per-cell store supports
pub trait LayerStore {
    /// Add a layer. Returns true if the store actually changed.
    fn add(&mut self, layer: Layer) -> bool;

    /// Erase according to the store's policy. Returns true if the store changed.
    fn erase(&mut self, layer: Layer) -> bool;

    /// Colour this cell shows given the layers currently held
    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color;

    /// Store-specific transformation (invert, reverse, remove median)
    fn special(&mut self);
}

/// Compositing strategy selected at grid construction
///
/// Serialized upper-case; parsed case-insensitively through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DrawStyle {
    #[serde(rename = "SET")]
    Set,
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "SEQUENCE")]
    Sequence,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Add, DrawStyle::Sequence];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Set => "SET",
            DrawStyle::Add => "ADD",
            DrawStyle::Sequence => "SEQUENCE",
        }
    }
}

impl std::fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawStyle {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TesseraError::UnknownDrawStyle {
                style: s.to_string(),
            })
    }
}

impl TryFrom<String> for DrawStyle {
    type Error = TesseraError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The store held by one grid cell
#[derive(Debug, Clone)]
pub enum CellStore {
    Set(SetLayerStore),
    Additive(AdditiveLayerStore),
    Sequence(SequenceLayerStore),
}

impl CellStore {
    /// Empty store of the variant matching `style`
    pub fn for_style(style: DrawStyle, config: &EngineConfig) -> Self {
        match style {
            DrawStyle::Set => CellStore::Set(SetLayerStore::new()),
            DrawStyle::Add => {
                CellStore::Additive(AdditiveLayerStore::with_capacity(config.additive_capacity))
            }
            DrawStyle::Sequence => CellStore::Sequence(SequenceLayerStore::new()),
        }
    }

    pub fn draw_style(&self) -> DrawStyle {
        match self {
            CellStore::Set(_) => DrawStyle::Set,
            CellStore::Additive(_) => DrawStyle::Add,
            CellStore::Sequence(_) => DrawStyle::Sequence,
        }
    }

    fn as_store(&self) -> &dyn LayerStore {
        match self {
            CellStore::Set(store) => store,
            CellStore::Additive(store) => store,
            CellStore::Sequence(store) => store,
        }
    }

    fn as_store_mut(&mut self) -> &mut dyn LayerStore {
        match self {
            CellStore::Set(store) => store,
            CellStore::Additive(store) => store,
            CellStore::Sequence(store) => store,
        }
    }
}

impl LayerStore for CellStore {
    fn add(&mut self, layer: Layer) -> bool {
        self.as_store_mut().add(layer)
    }

    fn erase(&mut self, layer: Layer) -> bool {
        self.as_store_mut().erase(layer)
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.as_store().get_color(start, timestamp, x, y)
    }

    fn special(&mut self) {
        self.as_store_mut().special()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::layer_by_name;

    #[test]
    fn test_draw_style_parsing() {
        assert_eq!("SET".parse::<DrawStyle>().unwrap(), DrawStyle::Set);
        assert_eq!("add".parse::<DrawStyle>().unwrap(), DrawStyle::Add);
        assert_eq!("Sequence".parse::<DrawStyle>().unwrap(), DrawStyle::Sequence);
        assert!(matches!(
            "MULTIPLY".parse::<DrawStyle>(),
            Err(TesseraError::UnknownDrawStyle { .. })
        ));
    }

    #[test]
    fn test_draw_style_serde() {
        let json = serde_json::to_string(&DrawStyle::Sequence).unwrap();
        assert_eq!(json, "\"SEQUENCE\"");
        let style: DrawStyle = serde_json::from_str("\"add\"").unwrap();
        assert_eq!(style, DrawStyle::Add);
        let style: DrawStyle = serde_json::from_str("\"Sequence\"").unwrap();
        assert_eq!(style, DrawStyle::Sequence);
        let err = serde_json::from_str::<DrawStyle>("\"MULTIPLY\"").unwrap_err();
        assert!(err.to_string().contains("MULTIPLY"));
    }

    #[test]
    fn test_cell_store_matches_style() {
        let config = EngineConfig::default();
        for style in DrawStyle::ALL {
            assert_eq!(CellStore::for_style(style, &config).draw_style(), style);
        }
    }

    #[test]
    fn test_add_then_erase_restores_output() {
        let config = EngineConfig::default();
        let layer = layer_by_name("lighten").unwrap();
        let start = Color::rgb(12, 34, 56);

        for style in DrawStyle::ALL {
            let mut store = CellStore::for_style(style, &config);
            let before = store.get_color(start, 7, 1, 2);
            assert!(store.add(layer), "{style} add");
            assert_ne!(store.get_color(start, 7, 1, 2), before);
            assert!(store.erase(layer), "{style} erase");
            assert_eq!(store.get_color(start, 7, 1, 2), before, "{style} restored");
        }
    }
}
