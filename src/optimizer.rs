//! Palette-wide optimization.
//!
//! A single bounded pass over a palette, made of three independent stages
//! selected by [`OptimizerOptions`]:
//!
//! 1. **Accessibility fix** (default on): colors whose contrast against their
//!    paired text color is below the target are pushed away from the text
//!    color in HSL lightness, then desaturated and pushed further if needed.
//!    Two steps at most; reaching the target is not guaranteed.
//! 2. **Harmonization** (default off): non-primary colors move their
//!    saturation and (damped) lightness toward the primary color. Hue is
//!    never changed and the primary color is never touched.
//! 3. **Text settings** (default on): recommends the `main` text policy from
//!    the palette's average contrast against white and black.
//!
//! The optimizer never fails. Callers re-check contrast afterwards to detect
//! colors that did not reach the target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::color::{HexColor, Hsl};
use crate::contrast::{contrast_ratio, thresholds};
use crate::error::{Error, Result};
use crate::palette::{Palette, PaletteColor, TextColorMode, TextColorSettings};

/// Lightness shift of the first accessibility step.
const FIRST_STEP_LIGHTNESS: f64 = 15.0;
/// Lightness shift of the second accessibility step.
const SECOND_STEP_LIGHTNESS: f64 = 10.0;
/// Saturation reduction of the second accessibility step.
const SECOND_STEP_SATURATION: f64 = 10.0;
/// Share of the lightness gap closed relative to the saturation gap.
const HARMONY_LIGHTNESS_DAMPING: f64 = 0.7;
/// Lightness bounds (percent) for harmonized colors.
const HARMONY_LIGHTNESS_RANGE: (f64, f64) = (10.0, 90.0);

/// Accepted harmonization strength range (percent).
pub const HARMONIZATION_STRENGTH_RANGE: (u8, u8) = (10, 100);

/// Minimum contrast a color must reach against its text color.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub enum AccessibilityTarget {
    /// 3.0:1.
    A,
    /// 4.5:1.
    #[default]
    AA,
    /// 7.0:1.
    AAA,
    /// A custom ratio in [1.0, 21.0].
    Custom(f64),
}

impl AccessibilityTarget {
    /// Create a custom target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] unless `ratio` is within [1.0, 21.0].
    pub fn custom(ratio: f64) -> Result<Self> {
        if (thresholds::MIN_RATIO..=thresholds::MAX_RATIO).contains(&ratio) {
            Ok(Self::Custom(ratio))
        } else {
            Err(Error::InvalidTarget(format!(
                "contrast ratio {ratio} is outside [1.0, 21.0]"
            )))
        }
    }

    /// The contrast ratio this target requires.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::A => thresholds::A,
            Self::AA => thresholds::AA,
            Self::AAA => thresholds::AAA,
            Self::Custom(ratio) => ratio.clamp(thresholds::MIN_RATIO, thresholds::MAX_RATIO),
        }
    }
}

impl FromStr for AccessibilityTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "aa" => Ok(Self::AA),
            "aaa" => Ok(Self::AAA),
            other => other
                .parse::<f64>()
                .map_err(|_| Error::InvalidTarget(format!("unknown preset {s:?}")))
                .and_then(Self::custom),
        }
    }
}

impl fmt::Display for AccessibilityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("a"),
            Self::AA => f.write_str("aa"),
            Self::AAA => f.write_str("aaa"),
            Self::Custom(ratio) => write!(f, "{ratio}"),
        }
    }
}

/// Wire form: a preset name or a bare ratio.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Ratio(f64),
    Preset(String),
}

impl TryFrom<TargetRepr> for AccessibilityTarget {
    type Error = Error;

    fn try_from(repr: TargetRepr) -> Result<Self> {
        match repr {
            TargetRepr::Ratio(ratio) => Self::custom(ratio),
            TargetRepr::Preset(name) => name.parse(),
        }
    }
}

impl From<AccessibilityTarget> for TargetRepr {
    fn from(target: AccessibilityTarget) -> Self {
        match target {
            AccessibilityTarget::Custom(ratio) => Self::Ratio(ratio),
            preset => Self::Preset(preset.to_string()),
        }
    }
}

/// Which optimizer stages run, and with what parameters.
///
/// Field names are snake_case in YAML configuration; palette-tool JSON uses
/// the camelCase aliases. Unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerOptions {
    /// Run the accessibility fix.
    #[serde(default = "default_fix_accessibility", alias = "fixAccessibility")]
    pub fix_accessibility: bool,

    /// Run harmonization toward the primary color.
    #[serde(default, alias = "harmonizeColors")]
    pub harmonize_colors: bool,

    /// Recommend text color settings.
    #[serde(
        default = "default_optimize_text_settings",
        alias = "optimizeTextSettings"
    )]
    pub optimize_text_settings: bool,

    /// Contrast target for the accessibility fix and text settings.
    #[serde(default, alias = "accessibilityLevel")]
    pub target: AccessibilityTarget,

    /// Harmonization strength in percent.
    #[serde(
        default = "default_harmonization_strength",
        alias = "harmonizationStrength"
    )]
    pub harmonization_strength: u8,
}

fn default_fix_accessibility() -> bool {
    true
}
fn default_optimize_text_settings() -> bool {
    true
}
fn default_harmonization_strength() -> u8 {
    50
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            fix_accessibility: default_fix_accessibility(),
            harmonize_colors: false,
            optimize_text_settings: default_optimize_text_settings(),
            target: AccessibilityTarget::default(),
            harmonization_strength: default_harmonization_strength(),
        }
    }
}

impl OptimizerOptions {
    /// Check the ranges the types cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] when `harmonization_strength` is outside
    /// [10, 100] or a custom target ratio is outside [1, 21].
    pub fn validate(&self) -> Result<()> {
        let (min, max) = HARMONIZATION_STRENGTH_RANGE;
        let strength = self.harmonization_strength;
        if !(min..=max).contains(&strength) {
            return Err(Error::ConfigInvalid {
                key: "harmonization_strength".to_string(),
                message: format!("{strength} is outside [{min}, {max}]"),
            });
        }

        if let AccessibilityTarget::Custom(ratio) = self.target {
            if !(thresholds::MIN_RATIO..=thresholds::MAX_RATIO).contains(&ratio) {
                return Err(Error::ConfigInvalid {
                    key: "target".to_string(),
                    message: format!("{ratio} is outside [1.0, 21.0]"),
                });
            }
        }

        Ok(())
    }
}

/// A color whose contrast against its text color is below target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityIssue {
    /// Position in the palette.
    pub index: usize,
    /// Color name.
    pub name: String,
    /// Text color paired with the color.
    pub text_color: HexColor,
    /// Measured contrast ratio.
    pub ratio: f64,
}

/// Result of an optimizer pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Optimization {
    /// The adjusted palette, including recommended text settings.
    pub palette: Palette,
    /// Indices of colors whose value changed.
    pub adjusted: Vec<usize>,
}

/// Runs the optimizer stages over whole palettes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteOptimizer {
    options: OptimizerOptions,
}

impl PaletteOptimizer {
    /// Create an optimizer with the given options.
    #[must_use]
    pub const fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    /// The options this optimizer runs with.
    #[must_use]
    pub const fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Colors that currently miss the contrast target.
    #[must_use]
    pub fn accessibility_issues(&self, palette: &Palette) -> Vec<AccessibilityIssue> {
        let target = self.options.target.ratio();
        let mode = palette.text_color_settings.main;

        palette
            .colors
            .iter()
            .enumerate()
            .filter_map(|(index, color)| {
                let text_color = mode.text_color_for(color.value);
                let ratio = contrast_ratio(color.value, text_color);
                (ratio < target).then(|| AccessibilityIssue {
                    index,
                    name: color.name.clone(),
                    text_color,
                    ratio,
                })
            })
            .collect()
    }

    /// Run the enabled stages over `palette`.
    ///
    /// `primary_index` selects the harmonization anchor; an index outside the
    /// palette skips harmonization.
    #[must_use]
    pub fn optimize(&self, palette: &Palette, primary_index: usize) -> Optimization {
        let target = self.options.target.ratio();
        let mut colors = palette.colors.clone();

        if self.options.fix_accessibility {
            let fixed = fix_accessibility(&colors, palette.text_color_settings.main, target);
            debug!(changed = count_changed(&colors, &fixed), "accessibility fix applied");
            colors = fixed;
        }

        if self.options.harmonize_colors {
            let harmonized = harmonize_with_primary(
                &colors,
                primary_index,
                f64::from(self.options.harmonization_strength),
            );
            debug!(
                changed = count_changed(&colors, &harmonized),
                primary_index,
                strength = self.options.harmonization_strength,
                "harmonization applied"
            );
            colors = harmonized;
        }

        let text_color_settings = if self.options.optimize_text_settings {
            let settings = recommend_text_settings(&palette.colors, target);
            debug!(main = ?settings.main, "text settings recommended");
            settings
        } else {
            palette.text_color_settings
        };

        let adjusted: Vec<usize> = colors
            .iter()
            .zip(&palette.colors)
            .enumerate()
            .filter(|(_, (new, old))| new.value != old.value)
            .map(|(index, _)| index)
            .collect();

        debug!(
            colors = colors.len(),
            adjusted = adjusted.len(),
            target_ratio = target,
            "palette optimized"
        );

        Optimization {
            palette: Palette {
                colors,
                text_color_settings,
            },
            adjusted,
        }
    }
}

/// Optimize a palette given as JSON, with optional JSON options.
///
/// Options accept snake_case or camelCase keys and are validated before the
/// pass. Harmonization anchors on the first `primary` color, or the first
/// color when none has that role. Returns `{"palette": ..., "adjusted": [...]}`.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed palette or options JSON (including
/// unknown option keys) and [`Error::ConfigInvalid`] for out-of-range options.
pub fn optimize_json(palette_json: &str, options_json: Option<&str>) -> Result<String> {
    let palette = Palette::from_json(palette_json)?;
    let options = match options_json {
        Some(text) => serde_json::from_str(text)?,
        None => OptimizerOptions::default(),
    };
    options.validate()?;

    let primary = palette.primary_index().unwrap_or(0);
    let result = PaletteOptimizer::new(options).optimize(&palette, primary);
    Ok(serde_json::to_string(&result)?)
}

fn count_changed(before: &[PaletteColor], after: &[PaletteColor]) -> usize {
    before
        .iter()
        .zip(after)
        .filter(|(b, a)| b.value != a.value)
        .count()
}

/// Push `color` away from `text` until it meets `target`, in at most two steps.
///
/// Step one shifts HSL lightness by 15 (darker under white text, lighter
/// otherwise). If the target is still missed, step two lowers saturation by
/// 10 and shifts lightness by a further 10 in the same direction. Colors that
/// already meet the target are returned unchanged.
#[must_use]
pub fn raise_contrast(color: HexColor, text: HexColor, target: f64) -> HexColor {
    if contrast_ratio(color, text) >= target {
        return color;
    }

    let darken = text == HexColor::WHITE;
    let shift = |l: f64, amount: f64| {
        if darken {
            (l - amount).max(0.0)
        } else {
            (l + amount).min(100.0)
        }
    };

    let mut hsl = color.to_hsl();
    hsl.l = shift(hsl.l, FIRST_STEP_LIGHTNESS);
    let first = hsl.to_hex();
    if contrast_ratio(first, text) >= target {
        return first;
    }

    hsl.s = (hsl.s - SECOND_STEP_SATURATION).max(0.0);
    hsl.l = shift(hsl.l, SECOND_STEP_LIGHTNESS);
    hsl.to_hex()
}

/// Accessibility fix over a list of colors.
///
/// Each color is paired with the text color `mode` picks for it and passed
/// through [`raise_contrast`].
#[must_use]
pub fn fix_accessibility(
    colors: &[PaletteColor],
    mode: TextColorMode,
    target: f64,
) -> Vec<PaletteColor> {
    colors
        .iter()
        .map(|color| {
            let text = mode.text_color_for(color.value);
            let value = raise_contrast(color.value, text, target);
            if value != color.value {
                trace!(name = %color.name, from = %color.value, to = %value, "raised contrast");
            }
            PaletteColor {
                value,
                ..color.clone()
            }
        })
        .collect()
}

/// Move non-primary colors' saturation and lightness toward the primary.
///
/// With `strength_percent` clamped to [0, 100] as `k`, each color closes
/// `k` of its saturation gap and `0.7 * k` of its lightness gap to the
/// primary. Saturation is clamped to [0, 100] and lightness to [10, 90]. Hue
/// is kept. Palettes with fewer than two colors or an out-of-range primary
/// index are returned unchanged.
#[must_use]
pub fn harmonize_with_primary(
    colors: &[PaletteColor],
    primary_index: usize,
    strength_percent: f64,
) -> Vec<PaletteColor> {
    if colors.len() < 2 {
        return colors.to_vec();
    }
    let Some(primary) = colors.get(primary_index) else {
        warn!(
            primary_index,
            colors = colors.len(),
            "primary index out of range, skipping harmonization"
        );
        return colors.to_vec();
    };

    let anchor = primary.value.to_hsl();
    let strength = strength_percent.clamp(0.0, 100.0) / 100.0;
    let (min_l, max_l) = HARMONY_LIGHTNESS_RANGE;

    colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            if index == primary_index {
                return color.clone();
            }
            let current = color.value.to_hsl();
            let s = current.s + (anchor.s - current.s) * strength;
            let l = current.l + (anchor.l - current.l) * strength * HARMONY_LIGHTNESS_DAMPING;
            PaletteColor {
                value: Hsl::new(current.h, s.clamp(0.0, 100.0), l.clamp(min_l, max_l)).to_hex(),
                ..color.clone()
            }
        })
        .collect()
}

/// Recommend text color policies for a palette.
///
/// `main` becomes white or black when the palette's average contrast against
/// that color meets `target` and beats the other; otherwise it stays
/// `default`. `dark` is always white and `light`/`lighter` always black: ramp
/// slots are assumed dark or light enough for those.
#[must_use]
pub fn recommend_text_settings(colors: &[PaletteColor], target: f64) -> TextColorSettings {
    let main = if colors.is_empty() {
        TextColorMode::Default
    } else {
        let count = colors.len() as f64;
        let (white, black) = colors.iter().fold((0.0, 0.0), |(w, b), color| {
            (
                w + contrast_ratio(color.value, HexColor::WHITE),
                b + contrast_ratio(color.value, HexColor::BLACK),
            )
        });
        let (avg_white, avg_black) = (white / count, black / count);

        if avg_white > avg_black && avg_white >= target {
            TextColorMode::White
        } else if avg_black >= target {
            TextColorMode::Black
        } else {
            TextColorMode::Default
        }
    };

    TextColorSettings {
        main,
        dark: TextColorMode::White,
        light: TextColorMode::Black,
        lighter: TextColorMode::Black,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_hex() -> impl Strategy<Value = HexColor> {
        any::<[u8; 3]>().prop_map(|[r, g, b]| HexColor::from_rgb(r, g, b))
    }

    fn any_colors() -> impl Strategy<Value = Vec<PaletteColor>> {
        prop::collection::vec(any_hex(), 2..12).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| PaletteColor::new(format!("c{i}"), v))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Harmonization never modifies the primary color
        #[test]
        fn prop_harmonize_keeps_primary(
            colors in any_colors(),
            pick in any::<prop::sample::Index>(),
            strength in 0.0f64..=100.0
        ) {
            let primary = pick.index(colors.len());
            let out = harmonize_with_primary(&colors, primary, strength);
            prop_assert_eq!(out.len(), colors.len());
            prop_assert_eq!(out[primary].value, colors[primary].value);
        }

        /// Harmonized lightness stays within [10, 90] up to quantization
        #[test]
        fn prop_harmonize_lightness_bounds(colors in any_colors(), strength in 0.0f64..=100.0) {
            let out = harmonize_with_primary(&colors, 0, strength);
            for color in &out[1..] {
                let l = color.value.to_hsl().l;
                prop_assert!((9.5..=90.5).contains(&l), "lightness {}", l);
            }
        }

        /// Colors already meeting the target are left alone
        #[test]
        fn prop_fix_leaves_passing_colors(color in any_hex(), target in 1.0f64..21.0) {
            let text = TextColorMode::Default.text_color_for(color);
            if contrast_ratio(color, text) >= target {
                prop_assert_eq!(raise_contrast(color, text, target), color);
            }
        }

        /// The first step alone always improves contrast against the paired text
        #[test]
        fn prop_fix_improves_failing_colors(color in any_hex()) {
            let text = TextColorMode::Default.text_color_for(color);
            let before = contrast_ratio(color, text);
            prop_assume!(before < 21.0);
            let fixed = raise_contrast(color, text, before + 1e-9);
            prop_assert!(contrast_ratio(fixed, text) >= before);
        }
    }
}
