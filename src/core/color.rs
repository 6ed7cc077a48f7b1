use super::error::{FieldError, Result};
use crate::constants::DEFAULT_COLOR;

/// Linear RGB color with channels in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a color-picker style string: `#rrggbb`, `rrggbb` or `#rgb`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || FieldError::InvalidColor(input.to_string());
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channels = match hex.len() {
            6 => [&hex[0..2], &hex[2..4], &hex[4..6]]
                .map(|c| u8::from_str_radix(c, 16).map_err(|_| invalid())),
            3 => [&hex[0..1], &hex[1..2], &hex[2..3]]
                .map(|c| u8::from_str_radix(c, 16).map(|v| v * 17).map_err(|_| invalid())),
            _ => return Err(invalid()),
        };
        let [r, g, b] = channels;
        Ok(Self::from_bytes([r?, g?, b?]))
    }

    pub fn from_bytes([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::from_bytes(DEFAULT_COLOR)
    }
}
