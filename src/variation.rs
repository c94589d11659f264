//! Tonal ramps and dark/light mode counterparts.
//!
//! A ramp ([`ColorVariationSet`]) maps the four tonal [`Slot`]s to colors and
//! is derived from a single seed by additive RGB offsets. Colors that do not
//! carry a ramp are represented by a single-slot set holding only
//! [`Slot::Main`].
//!
//! Dark-mode counterparts are derived per color by a piecewise lightness
//! inversion in HSL that keeps hue and bounds lightness to [15, 85].

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{HexColor, Hsl};

/// RGB offset applied to every channel for the `dark` slot.
pub const DARK_OFFSET: i16 = -40;
/// RGB offset applied to every channel for the `light` slot.
pub const LIGHT_OFFSET: i16 = 40;
/// RGB offset applied to every channel for the `lighter` slot.
pub const LIGHTER_OFFSET: i16 = 80;

/// Lightness bounds (percent) for derived dark/light mode colors.
pub const MODE_LIGHTNESS_RANGE: (f64, f64) = (15.0, 85.0);

/// A tonal slot within a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The seed color itself.
    Main,
    /// Seed darkened by 40 per channel.
    Dark,
    /// Seed lightened by 40 per channel.
    Light,
    /// Seed lightened by 80 per channel.
    Lighter,
}

impl Slot {
    /// All slots in ramp order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Dark, Self::Light, Self::Lighter];

    /// Slot name as used in palette JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Lighter => "lighter",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from tonal slots to colors.
///
/// A standard ramp holds all four slots; a simple color holds only `main`.
/// Sets read from palette JSON may hold any subset and are carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorVariationSet(BTreeMap<Slot, HexColor>);

impl ColorVariationSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a four-slot ramp.
    #[must_use]
    pub fn standard(main: HexColor, dark: HexColor, light: HexColor, lighter: HexColor) -> Self {
        Self(BTreeMap::from([
            (Slot::Main, main),
            (Slot::Dark, dark),
            (Slot::Light, light),
            (Slot::Lighter, lighter),
        ]))
    }

    /// Create a single-slot set for a color without a ramp.
    #[must_use]
    pub fn simple(main: HexColor) -> Self {
        Self(BTreeMap::from([(Slot::Main, main)]))
    }

    /// Set a slot, returning the modified set.
    #[must_use]
    pub fn with(mut self, slot: Slot, color: HexColor) -> Self {
        self.0.insert(slot, color);
        self
    }

    /// Color at `slot`, if present.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<HexColor> {
        self.0.get(&slot).copied()
    }

    /// The `main` color, if present.
    #[must_use]
    pub fn main(&self) -> Option<HexColor> {
        self.get(Slot::Main)
    }

    /// Whether all four slots are present.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        Slot::ALL.iter().all(|slot| self.0.contains_key(slot))
    }

    /// Whether only `main` is present.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.0.len() == 1 && self.0.contains_key(&Slot::Main)
    }

    /// Number of slots present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no slot is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate slots in ramp order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, HexColor)> + '_ {
        self.0.iter().map(|(slot, color)| (*slot, *color))
    }

    /// Apply `f` to every present slot.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(HexColor) -> HexColor) -> Self {
        self.iter().map(|(slot, color)| (slot, f(color))).collect()
    }
}

impl FromIterator<(Slot, HexColor)> for ColorVariationSet {
    fn from_iter<I: IntoIterator<Item = (Slot, HexColor)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ColorVariationSet {
    type Item = (Slot, HexColor);
    type IntoIter = btree_map::IntoIter<Slot, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Derive the four-slot ramp from a seed color.
///
/// `dark`, `light` and `lighter` offset every RGB channel by -40, +40 and +80
/// respectively, clamping each channel to [0, 255]. The ramp is additive in
/// RGB and does not preserve lightness across hues.
#[must_use]
pub fn generate_variations(seed: HexColor) -> ColorVariationSet {
    let rgb = seed.rgb();
    ColorVariationSet::standard(
        seed,
        rgb.offset(DARK_OFFSET).to_hex(),
        rgb.offset(LIGHT_OFFSET).to_hex(),
        rgb.offset(LIGHTER_OFFSET).to_hex(),
    )
}

/// A four-slot ramp for `standard` colors, a single-slot set otherwise.
#[must_use]
pub fn variations_for(seed: HexColor, standard: bool) -> ColorVariationSet {
    if standard {
        generate_variations(seed)
    } else {
        ColorVariationSet::simple(seed)
    }
}

/// Derive a dark-mode counterpart for a light-mode color.
///
/// | input lightness | new lightness   | saturation |
/// |-----------------|-----------------|------------|
/// | l > 70          | (100 - l) + 15  | x1.1       |
/// | 50 < l <= 70    | (100 - l) + 10  | x1.05      |
/// | 30 < l <= 50    | l + 15          | unchanged  |
/// | l <= 30         | l + 25          | x0.9       |
///
/// Saturation is capped at 100, lightness is clamped to [15, 85] and hue is
/// kept.
#[must_use]
pub fn generate_dark_mode_color(light: HexColor) -> HexColor {
    let Hsl { h, s, l } = light.to_hsl();

    let (new_l, new_s) = if l > 70.0 {
        (100.0 - l + 15.0, (s * 1.1).min(100.0))
    } else if l > 50.0 {
        (100.0 - l + 10.0, (s * 1.05).min(100.0))
    } else if l > 30.0 {
        (l + 15.0, s)
    } else {
        (l + 25.0, (s * 0.9).max(0.0))
    };

    Hsl::new(h, new_s, clamp_mode_lightness(new_l)).to_hex()
}

/// Derive a light-mode counterpart for a dark-mode color.
///
/// Mirror image of [`generate_dark_mode_color`]:
///
/// | input lightness | new lightness   | saturation |
/// |-----------------|-----------------|------------|
/// | l < 30          | (100 - l) - 15  | x1.1       |
/// | 30 <= l < 50    | (100 - l) - 10  | x1.05      |
/// | 50 <= l < 70    | l - 15          | unchanged  |
/// | l >= 70         | l - 25          | x0.9       |
#[must_use]
pub fn generate_light_mode_color(dark: HexColor) -> HexColor {
    let Hsl { h, s, l } = dark.to_hsl();

    let (new_l, new_s) = if l < 30.0 {
        (100.0 - l - 15.0, (s * 1.1).min(100.0))
    } else if l < 50.0 {
        (100.0 - l - 10.0, (s * 1.05).min(100.0))
    } else if l < 70.0 {
        (l - 15.0, s)
    } else {
        (l - 25.0, (s * 0.9).max(0.0))
    };

    Hsl::new(h, new_s, clamp_mode_lightness(new_l)).to_hex()
}

fn clamp_mode_lightness(l: f64) -> f64 {
    l.clamp(MODE_LIGHTNESS_RANGE.0, MODE_LIGHTNESS_RANGE.1)
}

/// Derive a dark-mode set by converting every slot independently.
///
/// Each dark slot comes from its own light counterpart; the ramp is not
/// regenerated from the dark `main`, so lightness ordering between slots may
/// differ from a freshly generated ramp. Single-slot sets stay single-slot.
#[must_use]
pub fn generate_dark_mode_variations(light: &ColorVariationSet) -> ColorVariationSet {
    light.map(generate_dark_mode_color)
}
