//! # Swatchsmith
//!
//! Color math for palette editors: color space conversion, WCAG contrast
//! analysis, tonal variation ramps, dark-mode derivation and whole-palette
//! optimization.
//!
//! Every operation is a pure function of its inputs. Hex strings are parsed
//! once into [`color::HexColor`]; from there on the math is total and
//! out-of-gamut values are clamped rather than reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchsmith::prelude::*;
//!
//! let blue = HexColor::parse("#3b82f6")?;
//! let ramp = generate_variations(blue);
//! assert_eq!(ramp.main(), Some(blue));
//!
//! let ratio = contrast_ratio(blue, better_contrast_color(blue));
//! assert!(ratio >= 3.0);
//! # Ok::<(), swatchsmith::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`color`]: RGB, HSL, Oklab and hex conversions
//! - [`contrast`]: luminance, WCAG contrast and levels, perceptual distance
//! - [`variation`]: tonal ramps and light/dark mode counterparts
//! - [`simulation`]: color vision deficiency simulation
//! - [`systems`]: nearest Tailwind and Material swatches
//! - [`palette`]: palette data model and JSON interchange
//! - [`optimizer`]: accessibility fix, harmonization, text settings
//! - [`config`]: YAML optimizer defaults
//!
//! ## Feature Flags
//!
//! - `wasm`: WebAssembly bindings via wasm-bindgen
//!
//! ## References
//!
//! - W3C (2018). *Web Content Accessibility Guidelines (WCAG) 2.1*.
//! - Ottosson, B. (2020). "A perceptual color space for image processing."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Channel math converts between u8, i16 and f64 throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Color Math
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Luminance, contrast and perceptual metrics.
pub mod contrast;

/// Tonal variation ramps and dark/light mode counterparts.
pub mod variation;

// ============================================================================
// Color Vision and Design Systems
// ============================================================================

/// Color vision deficiency simulation.
pub mod simulation;

/// Tailwind and Material swatch tables.
pub mod systems;

// ============================================================================
// Palettes
// ============================================================================

/// Palette data model.
pub mod palette;

/// Whole-palette optimization.
pub mod optimizer;

/// YAML configuration for optimizer defaults.
pub mod config;

// ============================================================================
// Optional Integration Modules
// ============================================================================

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for swatchsmith operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use swatchsmith::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{HexColor, Hsl, Oklab, Rgb};
    pub use crate::config::Config;
    pub use crate::contrast::{
        better_contrast_color, contrast_ratio, is_light_color, relative_luminance, wcag_level,
        WcagLevel,
    };
    pub use crate::error::{Error, Result};
    pub use crate::optimizer::{AccessibilityTarget, OptimizerOptions, PaletteOptimizer};
    pub use crate::palette::{ColorRole, Palette, PaletteColor, TextColorMode, TextColorSettings};
    pub use crate::simulation::{simulate_color_blindness, ColorBlindness};
    pub use crate::systems::{closest_material_color, closest_tailwind_color, NamedColor};
    pub use crate::variation::{
        generate_dark_mode_color, generate_light_mode_color, generate_variations,
        ColorVariationSet, Slot,
    };
}

// ============================================================================
// Tests
// ============================================================================
