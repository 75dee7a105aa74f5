use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected a 6-digit hex color, got {0:?}")]
    BadFormat(String),
}

/// 8-bit sRGB color used for dot fills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parse `"#rrggbb"` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadFormat(hex.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadFormat(hex.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parse a hex color, falling back to black on malformed input.
    pub fn from_hex_or_black(hex: &str) -> Rgb {
        match Rgb::from_hex(hex) {
            Ok(rgb) => rgb,
            Err(e) => {
                log::warn!("[color] {e}; using black");
                Rgb::BLACK
            }
        }
    }

    /// Per-channel linear interpolation toward `other`, rounded to the
    /// nearest integer channel value. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// CSS fill-style form, e.g. `rgb(32,14,86)`.
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}
