//! Palette data model.
//!
//! A [`Palette`] is an ordered list of [`PaletteColor`]s plus the text color
//! policy for each ramp slot. It is a plain value: operations return new
//! palettes instead of mutating shared state, and the JSON shape matches the
//! palette import/export format (`darkValue`, `darkVariations`,
//! `textColorSettings`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::HexColor;
use crate::contrast::better_contrast_color;
use crate::error::Result;
use crate::variation::{
    generate_dark_mode_color, generate_dark_mode_variations, variations_for, ColorVariationSet,
    Slot,
};

/// Semantic role of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    /// Main brand color.
    Primary,
    /// Secondary accent color.
    Secondary,
    /// Success state (green family).
    Success,
    /// Error or danger state (red family).
    Danger,
    /// Warning state (yellow family).
    Warning,
    /// Informational state (blue family).
    Info,
    /// Text color.
    Text,
    /// Background color.
    Background,
    /// Border color.
    Border,
    /// Accent color.
    Accent,
    /// Neutral (grey family).
    Neutral,
    /// Anything else, including roles this version does not know.
    #[serde(other)]
    Custom,
}

/// How text on a ramp slot picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColorMode {
    /// White or black, whichever contrasts more with the background.
    #[default]
    Default,
    /// Always white.
    White,
    /// Always black.
    Black,
}

impl TextColorMode {
    /// Text color to draw on `background` under this policy.
    #[must_use]
    pub fn text_color_for(self, background: HexColor) -> HexColor {
        match self {
            Self::Default => better_contrast_color(background),
            Self::White => HexColor::WHITE,
            Self::Black => HexColor::BLACK,
        }
    }
}

/// Text color policy per ramp slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColorSettings {
    /// Policy for the `main` slot.
    pub main: TextColorMode,
    /// Policy for the `dark` slot.
    pub dark: TextColorMode,
    /// Policy for the `light` slot.
    pub light: TextColorMode,
    /// Policy for the `lighter` slot.
    pub lighter: TextColorMode,
}

impl TextColorSettings {
    /// Policy for `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> TextColorMode {
        match slot {
            Slot::Main => self.main,
            Slot::Dark => self.dark,
            Slot::Light => self.light,
            Slot::Lighter => self.lighter,
        }
    }
}

/// A named color in a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    /// Display name, unique within a palette by convention.
    pub name: String,
    /// Light-mode value.
    pub value: HexColor,
    /// Dark-mode value, when authored explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_value: Option<HexColor>,
    /// Semantic role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ColorRole>,
    /// Grouping namespace (e.g. `grey`, `common`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Explicit light-mode ramp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<ColorVariationSet>,
    /// Explicit dark-mode ramp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_variations: Option<ColorVariationSet>,
}

/// Light and dark ramps derived for one palette color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVariations {
    /// Light-mode ramp.
    pub light: ColorVariationSet,
    /// Dark-mode ramp.
    pub dark: ColorVariationSet,
}

impl PaletteColor {
    /// Create a color with no role, group or explicit variations.
    #[must_use]
    pub fn new(name: impl Into<String>, value: HexColor) -> Self {
        Self {
            name: name.into(),
            value,
            dark_value: None,
            role: None,
            group: None,
            variations: None,
            dark_variations: None,
        }
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: ColorRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the dark-mode value.
    #[must_use]
    pub fn with_dark_value(mut self, dark: HexColor) -> Self {
        self.dark_value = Some(dark);
        self
    }

    /// Set the explicit light-mode ramp.
    #[must_use]
    pub fn with_variations(mut self, variations: ColorVariationSet) -> Self {
        self.variations = Some(variations);
        self
    }

    /// Set the explicit dark-mode ramp.
    #[must_use]
    pub fn with_dark_variations(mut self, variations: ColorVariationSet) -> Self {
        self.dark_variations = Some(variations);
        self
    }

    /// Whether this color carries a four-slot ramp. See [`has_standard_variations`].
    #[must_use]
    pub fn has_standard_variations(&self) -> bool {
        has_standard_variations(self)
    }

    /// Derive the light and dark ramps for this color.
    ///
    /// Explicit ramps win. Otherwise the light ramp is generated from `value`
    /// and the dark ramp from `dark_value` when set, or converted slot-wise
    /// from the light ramp when not. Colors without standard variations get
    /// single-slot sets throughout.
    #[must_use]
    pub fn resolve_variations(&self) -> ResolvedVariations {
        let standard = self.has_standard_variations();

        let light = self
            .variations
            .clone()
            .unwrap_or_else(|| variations_for(self.value, standard));

        let dark = match (&self.dark_variations, self.dark_value) {
            (Some(explicit), _) => explicit.clone(),
            (None, Some(dark_value)) => variations_for(dark_value, standard),
            (None, None) if standard => generate_dark_mode_variations(&light),
            (None, None) => ColorVariationSet::simple(generate_dark_mode_color(self.value)),
        };

        ResolvedVariations { light, dark }
    }

    /// Fill a missing dark value (and dark ramp, when a light ramp exists).
    #[must_use]
    pub fn with_auto_dark_value(mut self) -> Self {
        if self.dark_value.is_none() {
            self.dark_value = Some(generate_dark_mode_color(self.value));
        }
        if self.dark_variations.is_none() {
            self.dark_variations = self.variations.as_ref().map(generate_dark_mode_variations);
        }
        self
    }
}

/// Whether a color carries the four-slot main/dark/light/lighter ramp.
///
/// Explicit variations decide on their own: all four slots must be present.
/// Otherwise grey-scale and common colors, text and background colors (by
/// role or by name), and colors without a role are simple colors.
#[must_use]
pub fn has_standard_variations(color: &PaletteColor) -> bool {
    if let Some(variations) = &color.variations {
        return variations.is_standard();
    }

    let excluded_group = matches!(color.group.as_deref(), Some("grey" | "common"));
    let excluded_name = color.name.starts_with("grey-")
        || color.name.starts_with("common-")
        || color.name.contains("text-")
        || color.name.contains("background-");

    if excluded_group || excluded_name {
        return false;
    }

    matches!(color.role, Some(role) if !matches!(role, ColorRole::Text | ColorRole::Background))
}

/// An ordered collection of colors with its text color policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Colors in display order.
    pub colors: Vec<PaletteColor>,
    /// Text color policy per ramp slot.
    #[serde(default)]
    pub text_color_settings: TextColorSettings,
}

impl Palette {
    /// Create a palette with default text settings.
    #[must_use]
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self {
            colors,
            text_color_settings: TextColorSettings::default(),
        }
    }

    /// Replace the text color settings.
    #[must_use]
    pub fn with_text_color_settings(mut self, settings: TextColorSettings) -> Self {
        self.text_color_settings = settings;
        self
    }

    /// The starter palette shown to new users.
    #[must_use]
    pub fn starter() -> Self {
        let color = |name: &str, (r, g, b): (u8, u8, u8), role| {
            PaletteColor::new(name, HexColor::from_rgb(r, g, b)).with_role(role)
        };
        Self::new(vec![
            color("primary", (0x3b, 0x82, 0xf6), ColorRole::Primary),
            color("secondary", (0x8b, 0x5c, 0xf6), ColorRole::Secondary),
            color("success", (0x22, 0xc5, 0x5e), ColorRole::Success),
            color("danger", (0xef, 0x44, 0x44), ColorRole::Danger),
            color("warning", (0xf5, 0x9e, 0x0b), ColorRole::Warning),
            color("info", (0x06, 0xb6, 0xd4), ColorRole::Info),
            color("background", (0xf8, 0xfa, 0xfc), ColorRole::Background),
            color("text", (0x1e, 0x29, 0x3b), ColorRole::Text),
        ])
    }

    /// Parse a palette from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let palette: Self = serde_json::from_str(json)?;
        debug!(colors = palette.colors.len(), "palette imported");
        Ok(palette)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the first color with the primary role.
    #[must_use]
    pub fn primary_index(&self) -> Option<usize> {
        self.colors
            .iter()
            .position(|c| c.role == Some(ColorRole::Primary))
    }

    /// Light and dark ramps for every color, in palette order.
    #[must_use]
    pub fn resolved_variations(&self) -> Vec<ResolvedVariations> {
        self.colors
            .iter()
            .map(PaletteColor::resolve_variations)
            .collect()
    }

    /// Copy of the palette with missing dark values generated.
    #[must_use]
    pub fn with_auto_dark_values(&self) -> Self {
        Self {
            colors: self
                .colors
                .iter()
                .cloned()
                .map(PaletteColor::with_auto_dark_value)
                .collect(),
            text_color_settings: self.text_color_settings,
        }
    }
}
