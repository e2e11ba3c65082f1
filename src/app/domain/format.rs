use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 100;

/// Font size in points, always within `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub fn new(points: u32) -> Option<Self> {
        (MIN_FONT_SIZE..=MAX_FONT_SIZE)
            .contains(&points)
            .then_some(Self(points))
    }

    /// Like `new`, but pulls out-of-range values to the nearest bound.
    pub fn clamped(points: u32) -> Self {
        Self(points.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(12)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = String;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::new(points).ok_or_else(|| {
            format!("font size must be between {} and {}, got {}", MIN_FONT_SIZE, MAX_FONT_SIZE, points)
        })
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses `#rrggbb` (the leading `#` is optional) or one of a few color names.
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::new(255, 255, 255)),
            "red" => return Ok(Self::new(255, 0, 0)),
            "green" => return Ok(Self::new(0, 128, 0)),
            "blue" => return Ok(Self::new(0, 0, 255)),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color '{}'", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid color '{}'", s))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Display format applied uniformly to the whole buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatState {
    pub font_family: String,
    pub font_size: FontSize,
    pub color: Rgb,
}

impl Default for FormatState {
    fn default() -> Self {
        Self {
            font_family: "Courier".to_string(),
            font_size: FontSize::default(),
            color: Rgb::BLACK,
        }
    }
}
