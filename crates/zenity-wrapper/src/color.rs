//! Colour conversion between hex, zenity input and zenity output forms
//!
//! zenity takes initial colours as 16-bit channels (`rgb(0-65535,...)`) but
//! prints the picked colour with 8-bit channels (`rgb(0-255,...)`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ZenityError;

/// Factor that widens an 8-bit channel to 16 bits (0xFF * 257 = 0xFFFF)
const CHANNEL_SCALE: u32 = 257;

/// An 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RRGGBB`; trailing characters (e.g. alpha) are ignored
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let digits = digits.get(0..6)?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
        Some(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    /// Format as zenity's 16-bit `--color` input
    pub fn to_zenity(&self) -> String {
        format!(
            "rgb({},{},{})",
            u32::from(self.red) * CHANNEL_SCALE,
            u32::from(self.green) * CHANNEL_SCALE,
            u32::from(self.blue) * CHANNEL_SCALE
        )
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ZenityError;

    /// Accepts `#RRGGBB`, `rgb(r,g,b)` and `rgba(r,g,b,a)` with 8-bit channels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s).ok_or_else(|| ZenityError::InvalidOutput(s.to_string()));
        }

        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ZenityError::InvalidOutput(s.to_string()))?;

        let channels: Vec<u8> = inner
            .split(',')
            .take(3)
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| ZenityError::InvalidOutput(s.to_string()))?;

        match channels.as_slice() {
            [red, green, blue] => Ok(Self::new(*red, *green, *blue)),
            _ => Err(ZenityError::InvalidOutput(s.to_string())),
        }
    }
}

/// Normalise a colour for `--color=`
///
/// `#RRGGBB` becomes `rgb(R*257,G*257,B*257)`; anything else, including
/// malformed hex, is passed through unchanged.
pub fn normalize_color(color: &str) -> String {
    if color.starts_with('#') && color.len() >= 7 {
        if let Some(rgb) = Rgb::from_hex(color) {
            return rgb.to_zenity();
        }
    }
    color.to_string()
}
