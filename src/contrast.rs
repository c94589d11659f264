//! Photometric analysis: luminance, WCAG contrast and perceptual distance.
//!
//! Implements the WCAG 2.x relative luminance and contrast ratio formulas,
//! the tiered WCAG level classification, and a quick perceived-brightness
//! heuristic for choosing light or dark text.
//!
//! # References
//!
//! - W3C (2018). *Web Content Accessibility Guidelines (WCAG) 2.1*,
//!   "relative luminance" and "contrast ratio" definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// WCAG contrast thresholds.
pub mod thresholds {
    /// Minimum ratio for level AAA (normal text).
    pub const AAA: f64 = 7.0;
    /// Minimum ratio for level AA (normal text).
    pub const AA: f64 = 4.5;
    /// Minimum ratio for level A (large text AA).
    pub const A: f64 = 3.0;
    /// Lowest possible contrast ratio (identical colors).
    pub const MIN_RATIO: f64 = 1.0;
    /// Highest possible contrast ratio (black on white).
    pub const MAX_RATIO: f64 = 21.0;
}

/// WCAG conformance tier for a contrast ratio.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below 3.0:1.
    Fail,
    /// At least 3.0:1.
    A,
    /// At least 4.5:1.
    AA,
    /// At least 7.0:1.
    AAA,
}

impl WcagLevel {
    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= thresholds::AAA {
            Self::AAA
        } else if ratio >= thresholds::AA {
            Self::AA
        } else if ratio >= thresholds::A {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// Label as shown on accessibility badges.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WCAG level together with the normal/large text pass flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagAssessment {
    /// Conformance tier.
    pub level: WcagLevel,
    /// Passes AA for normal-size text (ratio >= 4.5).
    pub normal_text: bool,
    /// Passes AA for large text (ratio >= 3.0).
    pub large_text: bool,
}

/// Contrast ratio between two colors and its WCAG tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio in [1, 21].
    pub ratio: f64,
    /// WCAG tier of `ratio`.
    pub level: WcagLevel,
}

/// WCAG 2.x relative luminance in [0, 1].
#[must_use]
pub fn relative_luminance(color: HexColor) -> f64 {
    let rgb = color.rgb();
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio in [1, 21]. Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(c1: HexColor, c2: HexColor) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio and WCAG tier between two colors.
#[must_use]
pub fn contrast(c1: HexColor, c2: HexColor) -> ContrastResult {
    let ratio = contrast_ratio(c1, c2);
    ContrastResult {
        ratio,
        level: WcagLevel::from_ratio(ratio),
    }
}

/// Classify a contrast ratio into its WCAG tier and text-size pass flags.
#[must_use]
pub fn wcag_level(ratio: f64) -> WcagAssessment {
    WcagAssessment {
        level: WcagLevel::from_ratio(ratio),
        normal_text: ratio >= thresholds::AA,
        large_text: ratio >= thresholds::A,
    }
}

/// Perceived brightness on the 0-255 scale: `(R*299 + G*587 + B*114) / 1000`.
///
/// A quick heuristic for text color choice, not a WCAG measure.
#[must_use]
pub fn color_brightness(color: HexColor) -> f64 {
    let rgb = color.rgb();
    (f64::from(rgb.r) * 299.0 + f64::from(rgb.g) * 587.0 + f64::from(rgb.b) * 114.0) / 1000.0
}

/// Whether a color is light enough to carry dark text.
#[must_use]
pub fn is_light_color(color: HexColor) -> bool {
    color_brightness(color) > 128.0
}

/// Pure white or pure black, whichever contrasts more with `background`.
///
/// Ties go to black.
#[must_use]
pub fn better_contrast_color(background: HexColor) -> HexColor {
    let white = contrast_ratio(background, HexColor::WHITE);
    let black = contrast_ratio(background, HexColor::BLACK);
    if white > black {
        HexColor::WHITE
    } else {
        HexColor::BLACK
    }
}

/// Euclidean distance between two colors in Oklab space.
#[must_use]
pub fn perceptual_distance(c1: HexColor, c2: HexColor) -> f64 {
    c1.to_oklab().distance(c2.to_oklab())
}

/// Visual weight in [0, 1] from HSL lightness and saturation (percent).
///
/// Dark, saturated colors weigh more; lightness contributes 70%.
#[must_use]
pub fn visual_weight(l: f64, s: f64) -> f64 {
    let l_weight = 1.0 - l / 100.0;
    let s_weight = s / 100.0;
    l_weight * 0.7 + s_weight * 0.3
}
