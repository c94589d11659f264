//! Color vision deficiency simulation.
//!
//! Dichromacies (protanopia, deuteranopia, tritanopia) are simulated with
//! severity-1.0 matrices applied in linear RGB. Achromatopsia maps a color to
//! the grey of equal relative luminance; grayscale uses Rec. 601 luma on the
//! gamma-encoded channels, the way image editors desaturate.
//!
//! # References
//!
//! - Machado, G. M., Oliveira, M. M., Fernandes, L. A. F. (2009). "A
//!   physiologically-based model for simulation of color vision deficiency."
//! - ITU-R BT.601. Luma coefficients.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{linear_to_srgb, srgb_to_linear, HexColor, Rgb};
use crate::error::{Error, Result};

/// Color vision deficiency to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBlindness {
    /// Red-blind (missing L cones).
    Protanopia,
    /// Green-blind (missing M cones).
    Deuteranopia,
    /// Blue-blind (missing S cones).
    Tritanopia,
    /// Complete color blindness; only luminance is seen.
    Achromatopsia,
    /// Plain desaturation, for checking a palette in print or e-ink.
    Grayscale,
}

impl ColorBlindness {
    /// Every simulation, in display order.
    pub const ALL: [Self; 5] = [
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
        Self::Grayscale,
    ];

    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia (Red-Blind)",
            Self::Deuteranopia => "Deuteranopia (Green-Blind)",
            Self::Tritanopia => "Tritanopia (Blue-Blind)",
            Self::Achromatopsia => "Achromatopsia (No Color)",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Lowercase identifier, as used in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
            Self::Grayscale => "grayscale",
        }
    }

    const fn matrix(self) -> Option<&'static [[f64; 3]; 3]> {
        match self {
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Achromatopsia | Self::Grayscale => None,
        }
    }
}

impl fmt::Display for ColorBlindness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorBlindness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidSimulation(s.to_string()))
    }
}

// Rows sum to 1, so neutrals map to themselves.
const PROTANOPIA: [[f64; 3]; 3] = [
    [0.152_286, 1.052_583, -0.204_868],
    [0.114_503, 0.786_281, 0.099_216],
    [-0.003_882, -0.048_116, 1.051_998],
];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.367_322, 0.860_646, -0.227_968],
    [0.280_085, 0.672_501, 0.047_413],
    [-0.011_820, 0.042_940, 0.968_881],
];

const TRITANOPIA: [[f64; 3]; 3] = [
    [1.255_528, -0.076_749, -0.178_779],
    [-0.078_411, 0.930_809, 0.147_602],
    [0.004_733, 0.691_367, 0.303_900],
];

fn linear_channels(rgb: Rgb) -> [f64; 3] {
    rgb.to_array().map(|c| srgb_to_linear(f64::from(c) / 255.0))
}

fn encode(linear: f64) -> f64 {
    linear_to_srgb(linear.clamp(0.0, 1.0)) * 255.0
}

/// How `color` appears with the given color vision deficiency.
#[must_use]
pub fn simulate_color_blindness(color: HexColor, kind: ColorBlindness) -> HexColor {
    let rgb = color.rgb();

    if let Some(m) = kind.matrix() {
        let [r, g, b] = linear_channels(rgb);
        let row = |i: usize| encode(m[i][0] * r + m[i][1] * g + m[i][2] * b);
        return Rgb::from_channels(row(0), row(1), row(2)).to_hex();
    }

    let grey = match kind {
        ColorBlindness::Grayscale => {
            0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)
        }
        _ => {
            let [r, g, b] = linear_channels(rgb);
            encode(0.2126 * r + 0.7152 * g + 0.0722 * b)
        }
    };
    Rgb::from_channels(grey, grey, grey).to_hex()
}

/// `color` under every simulation, keyed by deficiency.
#[must_use]
pub fn simulate_all(color: HexColor) -> BTreeMap<ColorBlindness, HexColor> {
    ColorBlindness::ALL
        .into_iter()
        .map(|kind| (kind, simulate_color_blindness(color, kind)))
        .collect()
}
