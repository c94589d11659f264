//! Color types and color space conversions.
//!
//! Provides hex, RGB, HSL and Oklab representations with conversions between
//! them. [`HexColor`] is the canonical wire form (`#rrggbb`); the other types
//! are working representations for editing widgets and color math.
//!
//! Every conversion is total over valid input. Text that is not a six-digit
//! hex color is rejected with [`Error::InvalidHex`]; numeric values outside a
//! type's nominal range are normalized or clamped, never rejected.
//!
//! # References
//!
//! - Ottosson, B. (2020). "A perceptual color space for image processing."
//!   <https://bottosson.github.io/posts/oklab/>
//! - IEC 61966-2-1:1999. sRGB transfer function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from floating-point channels on the 0-255 scale.
    ///
    /// Each channel is rounded to the nearest integer and clamped to [0, 255].
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(quantize(r), quantize(g), quantize(b))
    }

    /// Add `amount` to every channel, clamping each to [0, 255].
    #[must_use]
    pub fn offset(self, amount: i16) -> Self {
        let shift = |c: u8| (i16::from(c) + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to the canonical hex representation.
    #[must_use]
    pub const fn to_hex(self) -> HexColor {
        HexColor(self)
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max_c = self.r.max(self.g).max(self.b);
        let min_c = self.r.min(self.g).min(self.b);
        let max = f64::from(max_c) / 255.0;
        let min = f64::from(min_c) / 255.0;
        let l = (max + min) / 2.0;

        if max_c == min_c {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max_c == self.r {
            (g - b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max_c == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// Convert to Oklab.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);

        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab::new(
            0.210_454_255_3 * l_ + 0.793_617_785 * m_ - 0.004_072_046_8 * s_,
            1.977_998_495_1 * l_ - 2.428_592_205 * m_ + 0.450_593_709_9 * s_,
            0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766 * s_,
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// HSL color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue (0.0-360.0 degrees).
    pub h: f64,
    /// Saturation (0.0-100.0 percent).
    pub s: f64,
    /// Lightness (0.0-100.0 percent).
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB.
    ///
    /// Hue is taken modulo 360 and saturation/lightness are clamped to
    /// [0, 100], so any finite input yields a defined color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let (r, g, b) = if s <= 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;

            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Convert to the canonical hex representation.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        self.to_rgb().to_hex()
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Oklab color (perceptually uniform).
///
/// `l` is roughly in [0, 1] and `a`/`b` roughly in [-0.4, 0.4], but any
/// coordinates are accepted; conversion back to RGB clamps out-of-gamut
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Perceptual lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to RGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let l_ = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m_ = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s_ = self.l - 0.089_484_177_5 * self.a - 1.291_485_548 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
        let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701 * s;

        Rgb::from_channels(
            linear_to_srgb(r) * 255.0,
            linear_to_srgb(g) * 255.0,
            linear_to_srgb(b) * 255.0,
        )
    }

    /// Convert to the canonical hex representation.
    #[must_use]
    pub fn to_hex(self) -> HexColor {
        self.to_rgb().to_hex()
    }

    /// Euclidean distance to another Oklab color.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.040_45 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

pub(crate) fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn quantize(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

/// A validated `#rrggbb` color.
///
/// Parsing accepts either case and an optional leading `#`; formatting always
/// produces lowercase with the `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    /// `#000000`.
    pub const BLACK: Self = Self(Rgb::BLACK);
    /// `#ffffff`.
    pub const WHITE: Self = Self(Rgb::WHITE);

    /// Parse a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] unless the input matches
    /// `^#?[0-9A-Fa-f]{6}$`.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(input.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidHex(input.to_string()))
        };
        Ok(Self(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }

    /// Create from RGB components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    /// The RGB components of this color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        self.0.to_hsl()
    }

    /// Convert to Oklab.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        self.0.to_oklab()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl From<Hsl> for HexColor {
    fn from(hsl: Hsl) -> Self {
        hsl.to_hex()
    }
}

impl From<Oklab> for HexColor {
    fn from(lab: Oklab) -> Self {
        lab.to_hex()
    }
}

// ============================================================================
// String-level conversions
// ============================================================================

/// Parse a hex string into RGB components.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    HexColor::parse(hex).map(HexColor::rgb)
}

/// Encode floating-point channels (0-255 scale) as a hex color.
///
/// Channels are rounded and clamped before encoding.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    Rgb::from_channels(r, g, b).to_hex()
}

/// Parse a hex string into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    HexColor::parse(hex).map(HexColor::to_hsl)
}

/// Encode an HSL triple as a hex color.
///
/// `h` is taken modulo 360 and `s`/`l` are clamped to [0, 100].
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    Hsl::new(h, s, l).to_hex()
}

/// Parse a hex string into Oklab.
pub fn hex_to_oklab(hex: &str) -> Result<Oklab> {
    HexColor::parse(hex).map(HexColor::to_oklab)
}

/// Encode Oklab coordinates as a hex color, clamping out-of-gamut results.
#[must_use]
pub fn oklab_to_hex(l: f64, a: f64, b: f64) -> HexColor {
    Oklab::new(l, a, b).to_hex()
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
