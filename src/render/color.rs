use crate::error::{Error, Result};

/// RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse an `AARRGGBB` hex string (the look-and-feel file format).
    pub fn from_argb_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches("0x").trim_start_matches('#');
        if hex.len() != 8 {
            return Err(Error::parse(format!("colour '{s}' is not AARRGGBB hex")));
        }
        let argb = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::parse(format!("colour '{s}' is not AARRGGBB hex")))?;
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
        Ok(Self { a: channel(24), r: channel(16), g: channel(8), b: channel(0) })
    }

    /// Component-wise product, used when a section colour tints an image.
    pub fn modulate(&self, other: &Color) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_argb() {
        let c = Color::from_argb_hex("80FF0000").unwrap();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rejects_short_hex() {
        assert!(matches!(Color::from_argb_hex("FFF"), Err(Error::Parse(_))));
        assert!(Color::from_argb_hex("GGFFFFFF").is_err());
    }
}
