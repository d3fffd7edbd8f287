//! RGB colour value

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise complement; applying it twice yields the original colour
    pub fn inverted(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    pub fn lightened(self, amount: u8) -> Self {
        Self::rgb(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn darkened(self, amount: u8) -> Self {
        Self::rgb(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Raw bytes in r, g, b order
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_is_self_inverse() {
        let color = Color::rgb(10, 128, 250);
        assert_eq!(color.inverted(), Color::rgb(245, 127, 5));
        assert_eq!(color.inverted().inverted(), color);
    }

    #[test]
    fn test_lighten_darken_saturate() {
        assert_eq!(Color::rgb(250, 0, 100).lightened(40), Color::rgb(255, 40, 140));
        assert_eq!(Color::rgb(250, 0, 100).darkened(40), Color::rgb(210, 0, 60));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }
}
