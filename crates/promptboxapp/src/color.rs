//! # Ordering Engine: Color Similarity and Contrast
//!
//! Prompts are shown as colored swatches. Two pure functions decide how:
//!
//! - [`sort_by_similarity`] orders prompts by how far their color is from a base
//!   color (the neutral `#444444` by default). Quiet, gray-ish prompts come first
//!   and loud ones last. The sort is stable, so equal distances keep the stored
//!   order.
//! - [`contrast_text_color`] picks black or white text for a swatch from its
//!   perceived luminance `0.299R + 0.587G + 0.114B`: black above 160, white
//!   otherwise.
//!
//! Both work on integers. Distances are compared squared, and luminance is
//! computed in thousandths (`299R + 587G + 114B` against `160_000`), so the
//! threshold is exact: `#A0A0A0` sits at exactly 160 and gets white text.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;
use crate::model::Prompt;

/// Luminance threshold, in thousandths.
const CONTRAST_THRESHOLD: u32 = 160_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#444444`, the default prompt color and default ordering base.
    pub const NEUTRAL: Rgb = Rgb::new(0x44, 0x44, 0x44);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (hex digits in any case). Nothing else is accepted:
    /// no shorthand, no missing `#`, no alpha.
    pub fn from_hex(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidColor(value.to_string());

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    fn distance_squared(&self, other: &Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    fn luminance_millis(&self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Perceived luminance, 0.0 to 255.0.
    pub fn luminance(&self) -> f64 {
        f64::from(self.luminance_millis()) / 1000.0
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl FromStr for Rgb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Text color to draw on top of a colored background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn rgb(&self) -> Rgb {
        match self {
            TextColor::Black => Rgb::BLACK,
            TextColor::White => Rgb::WHITE,
        }
    }

    pub fn as_hex(&self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#FFFFFF",
        }
    }
}

pub fn contrast_text_color(background: Rgb) -> TextColor {
    if background.luminance_millis() > CONTRAST_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Returns the prompts ordered by color distance to `base`, closest first.
pub fn sort_by_similarity(prompts: &[Prompt], base: Rgb) -> Vec<Prompt> {
    let mut sorted = prompts.to_vec();
    sorted.sort_by_cached_key(|prompt| prompt.rgb().distance_squared(&base));
    sorted
}
