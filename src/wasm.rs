//! WebAssembly bindings for swatchsmith.
//!
//! Every binding takes and returns strings: hex colors as `#rrggbb`,
//! structured results as JSON. Errors surface as JavaScript exceptions
//! carrying the error message.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { contrast_ratio, generate_variations, optimize_palette } from 'swatchsmith';
//!
//! await init();
//!
//! contrast_ratio('#767676', '#ffffff');          // 4.54
//! JSON.parse(generate_variations('#3b82f6'));    // { main, dark, light, lighter }
//! const optimized = JSON.parse(optimize_palette(paletteJson, '{"target":"aaa"}'));
//! ```

use wasm_bindgen::prelude::*;

use crate::color::{self, HexColor};
use crate::contrast;
use crate::optimizer;
use crate::simulation::{self, ColorBlindness};
use crate::systems;
use crate::variation::{self, ColorVariationSet};

// ============================================================================
// Helpers
// ============================================================================

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse(hex: &str) -> Result<HexColor, JsValue> {
    HexColor::parse(hex).map_err(js_err)
}

fn to_json(value: &impl serde::Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

// ============================================================================
// Color Space Conversion
// ============================================================================

/// Convert `#RRGGBB` to a JSON `[r, g, b]` array.
#[wasm_bindgen]
pub fn hex_to_rgb(hex: &str) -> Result<String, JsValue> {
    let rgb = color::hex_to_rgb(hex).map_err(js_err)?;
    to_json(&rgb.to_array())
}

/// Convert RGB channels (0-255, rounded and clamped) to `#rrggbb`.
#[wasm_bindgen]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    color::rgb_to_hex(r, g, b).to_string()
}

/// Convert `#RRGGBB` to a JSON `[h, s, l]` array.
#[wasm_bindgen]
pub fn hex_to_hsl(hex: &str) -> Result<String, JsValue> {
    let hsl = color::hex_to_hsl(hex).map_err(js_err)?;
    to_json(&[hsl.h, hsl.s, hsl.l])
}

/// Convert HSL (degrees, percent, percent) to `#rrggbb`.
#[wasm_bindgen]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    color::hsl_to_hex(h, s, l).to_string()
}

/// Convert `#RRGGBB` to a JSON `[l, a, b]` Oklab array.
#[wasm_bindgen]
pub fn hex_to_oklab(hex: &str) -> Result<String, JsValue> {
    let lab = color::hex_to_oklab(hex).map_err(js_err)?;
    to_json(&[lab.l, lab.a, lab.b])
}

/// Convert Oklab coordinates to `#rrggbb`, clamping out-of-gamut results.
#[wasm_bindgen]
pub fn oklab_to_hex(l: f64, a: f64, b: f64) -> String {
    color::oklab_to_hex(l, a, b).to_string()
}

// ============================================================================
// Photometric Analysis
// ============================================================================

/// WCAG relative luminance in [0, 1].
#[wasm_bindgen]
pub fn relative_luminance(hex: &str) -> Result<f64, JsValue> {
    Ok(contrast::relative_luminance(parse(hex)?))
}

/// WCAG contrast ratio in [1, 21].
#[wasm_bindgen]
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, JsValue> {
    Ok(contrast::contrast_ratio(parse(a)?, parse(b)?))
}

/// Contrast ratio and WCAG level as JSON `{ ratio, level }`.
#[wasm_bindgen]
pub fn contrast(a: &str, b: &str) -> Result<String, JsValue> {
    to_json(&contrast::contrast(parse(a)?, parse(b)?))
}

/// WCAG assessment of a ratio as JSON `{ level, normalText, largeText }`.
#[wasm_bindgen]
pub fn wcag_level(ratio: f64) -> Result<String, JsValue> {
    to_json(&contrast::wcag_level(ratio))
}

/// Whether dark text suits the background.
#[wasm_bindgen]
pub fn is_light_color(hex: &str) -> Result<bool, JsValue> {
    Ok(contrast::is_light_color(parse(hex)?))
}

/// `#ffffff` or `#000000`, whichever contrasts more with the background.
#[wasm_bindgen]
pub fn better_contrast_color(background: &str) -> Result<String, JsValue> {
    Ok(contrast::better_contrast_color(parse(background)?).to_string())
}

/// Euclidean Oklab distance.
#[wasm_bindgen]
pub fn perceptual_distance(a: &str, b: &str) -> Result<f64, JsValue> {
    Ok(contrast::perceptual_distance(parse(a)?, parse(b)?))
}

/// Visual weight in [0, 1] from HSL lightness and saturation (percent).
#[wasm_bindgen]
pub fn visual_weight(l: f64, s: f64) -> f64 {
    contrast::visual_weight(l, s)
}

// ============================================================================
// Color Vision and Design Systems
// ============================================================================

/// How a color appears with a color vision deficiency.
///
/// `kind` is one of `protanopia`, `deuteranopia`, `tritanopia`,
/// `achromatopsia` or `grayscale`.
#[wasm_bindgen]
pub fn simulate_color_blindness(hex: &str, kind: &str) -> Result<String, JsValue> {
    let kind: ColorBlindness = kind.parse().map_err(js_err)?;
    Ok(simulation::simulate_color_blindness(parse(hex)?, kind).to_string())
}

/// Every simulation of a color as a JSON object keyed by deficiency.
#[wasm_bindgen]
pub fn simulate_all_color_blindness(hex: &str) -> Result<String, JsValue> {
    to_json(&simulation::simulate_all(parse(hex)?))
}

/// Closest Tailwind swatch as JSON `{ family, shade, value, distance }`.
#[wasm_bindgen]
pub fn closest_tailwind_color(hex: &str) -> Result<String, JsValue> {
    to_json(&systems::closest_tailwind_color(parse(hex)?))
}

/// Closest Material swatch as JSON `{ family, shade, value, distance }`.
#[wasm_bindgen]
pub fn closest_material_color(hex: &str) -> Result<String, JsValue> {
    to_json(&systems::closest_material_color(parse(hex)?))
}

// ============================================================================
// Variations
// ============================================================================

/// Standard four-slot ramp as JSON.
#[wasm_bindgen]
pub fn generate_variations(seed: &str) -> Result<String, JsValue> {
    to_json(&variation::generate_variations(parse(seed)?))
}

/// Dark-mode counterpart of a light-mode color.
#[wasm_bindgen]
pub fn generate_dark_mode_color(light: &str) -> Result<String, JsValue> {
    Ok(variation::generate_dark_mode_color(parse(light)?).to_string())
}

/// Dark-mode ramp derived slot by slot from a light ramp given as JSON.
#[wasm_bindgen]
pub fn generate_dark_mode_variations(light_json: &str) -> Result<String, JsValue> {
    let light: ColorVariationSet = serde_json::from_str(light_json).map_err(js_err)?;
    to_json(&variation::generate_dark_mode_variations(&light))
}

/// Light-mode counterpart of a dark-mode color.
#[wasm_bindgen]
pub fn generate_light_mode_color(dark: &str) -> Result<String, JsValue> {
    Ok(variation::generate_light_mode_color(parse(dark)?).to_string())
}

// ============================================================================
// Palette Optimization
// ============================================================================

/// Optimize a palette given as JSON.
///
/// `options_json` is an optional JSON object with any of the optimizer
/// option fields, snake_case or camelCase. Unknown keys and out-of-range
/// values are errors. Returns `{ palette, adjusted }` as JSON.
#[wasm_bindgen]
pub fn optimize_palette(palette_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    optimizer::optimize_json(palette_json, options_json.as_deref()).map_err(js_err)
}

/// Get library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
