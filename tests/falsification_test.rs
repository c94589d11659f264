//! Falsification Tests
//!
//! Each test is a falsifiable claim about the public API that can be
//! empirically refuted. Exhaustive claims sweep the full 8-bit cube at a
//! coarse stride; randomized claims live in the per-module proptests.
//!
//! Run: cargo test --test falsification_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_abs_diff_eq;

use swatchsmith::color::{
    hex_to_hsl, hex_to_oklab, hex_to_rgb, hsl_to_hex, oklab_to_hex, rgb_to_hex, HexColor, Rgb,
};
use swatchsmith::config::Config;
use swatchsmith::contrast::{contrast_ratio, wcag_level, WcagAssessment, WcagLevel};
use swatchsmith::optimizer::{OptimizerOptions, PaletteOptimizer};
use swatchsmith::palette::{ColorRole, Palette, PaletteColor, TextColorMode, TextColorSettings};
use swatchsmith::simulation::{simulate_color_blindness, ColorBlindness};
use swatchsmith::systems::{closest_material_color, closest_tailwind_color, MATERIAL, TAILWIND};
use swatchsmith::variation::{
    generate_dark_mode_color, generate_dark_mode_variations, generate_variations, Slot,
};
use swatchsmith::Error;

/// Every 17th value per channel, endpoints included (16^3 = 4096 colors).
fn sweep() -> impl Iterator<Item = HexColor> {
    let steps = || (0..=255u8).step_by(17);
    steps().flat_map(move |r| {
        steps().flat_map(move |g| steps().map(move |b| HexColor::from_rgb(r, g, b)))
    })
}

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn channel_gap(a: HexColor, b: HexColor) -> u8 {
    let (a, b) = (a.rgb().to_array(), b.rgb().to_array());
    a.iter().zip(&b).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}

fn hue_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

// ============================================================================
// CONVERSION CLAIMS (1-8)
// ============================================================================

/// Claim 1: hex -> RGB -> hex is exact for every RGB triple
#[test]
fn claim_01_rgb_round_trip_exact() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let hex = rgb_to_hex(f64::from(r), f64::from(g), f64::from(b));
                assert_eq!(
                    hex_to_rgb(&hex.to_string()).unwrap(),
                    Rgb::new(r, g, b),
                    "Claim 1 FALSIFIED at {hex}"
                );
            }
        }
    }
}

/// Claim 2: HSL round-trip reproduces the color within one step per channel
#[test]
fn claim_02_hsl_round_trip_within_one() {
    for color in sweep() {
        let hsl = hex_to_hsl(&color.to_string()).unwrap();
        let back = hsl_to_hex(hsl.h, hsl.s, hsl.l);
        assert!(channel_gap(color, back) <= 1, "Claim 2 FALSIFIED: {color} -> {back}");
    }
}

/// Claim 3: Oklab round-trip reproduces the color within one step per channel
#[test]
fn claim_03_oklab_round_trip_within_one() {
    for color in sweep() {
        let lab = hex_to_oklab(&color.to_string()).unwrap();
        let back = oklab_to_hex(lab.l, lab.a, lab.b);
        assert!(channel_gap(color, back) <= 1, "Claim 3 FALSIFIED: {color} -> {back}");
    }
}

/// Claim 4: #3b82f6 decodes to (59, 130, 246)
#[test]
fn claim_04_known_decode() {
    assert_eq!(hex_to_rgb("#3b82f6").unwrap(), Rgb::new(59, 130, 246));
    assert_eq!(hex_to_rgb("3B82F6").unwrap(), Rgb::new(59, 130, 246));
}

/// Claim 5: malformed hex is reported as an error, never a panic
#[test]
fn claim_05_malformed_hex_rejected() {
    for bad in ["", "#", "#12345", "#1234567", "#gg0000", "blue", "#12 456", "##123456"] {
        assert!(
            matches!(hex_to_rgb(bad), Err(Error::InvalidHex(_))),
            "Claim 5 FALSIFIED: {bad:?} accepted"
        );
        assert!(hex_to_hsl(bad).is_err());
        assert!(hex_to_oklab(bad).is_err());
    }
}

/// Claim 6: output is always lowercase #rrggbb
#[test]
fn claim_06_output_case_is_lowercase() {
    let out = HexColor::parse("#ABCDEF").unwrap().to_string();
    assert_eq!(out, "#abcdef");
    assert_eq!(hsl_to_hex(0.0, 100.0, 50.0).to_string(), "#ff0000");
}

/// Claim 7: out-of-range HSL input normalizes instead of failing
#[test]
fn claim_07_hsl_normalizes_out_of_range() {
    assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
    assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), hsl_to_hex(240.0, 100.0, 50.0));
    assert_eq!(hsl_to_hex(0.0, 150.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
    assert_eq!(hsl_to_hex(0.0, 0.0, 140.0), HexColor::WHITE);
    assert_eq!(hsl_to_hex(0.0, 0.0, -5.0), HexColor::BLACK);
}

/// Claim 8: out-of-gamut Oklab and RGB input clamps to valid channels
#[test]
fn claim_08_out_of_gamut_clamps() {
    assert_eq!(oklab_to_hex(2.0, 0.0, 0.0), HexColor::WHITE);
    assert_eq!(oklab_to_hex(-1.0, 0.0, 0.0), HexColor::BLACK);
    assert_eq!(rgb_to_hex(300.0, -20.0, 127.6), HexColor::from_rgb(255, 0, 128));
}

// ============================================================================
// PHOTOMETRIC CLAIMS (9-14)
// ============================================================================

/// Claim 9: contrast ratio is symmetric
#[test]
fn claim_09_contrast_symmetric() {
    let anchors = [hex("#3b82f6"), hex("#ef4444"), hex("#f8fafc"), HexColor::BLACK];
    for a in sweep().step_by(7) {
        for b in anchors {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a), "Claim 9 FALSIFIED");
        }
    }
}

/// Claim 10: a color against itself is 1:1
#[test]
fn claim_10_self_contrast_is_one() {
    for color in sweep() {
        assert_abs_diff_eq!(contrast_ratio(color, color), 1.0);
    }
}

/// Claim 11: black on white is the 21:1 maximum
#[test]
fn claim_11_black_white_is_maximum() {
    assert_abs_diff_eq!(contrast_ratio(HexColor::BLACK, HexColor::WHITE), 21.0, epsilon = 1e-9);
    for color in sweep() {
        assert!(contrast_ratio(color, HexColor::WHITE) <= 21.0 + 1e-9);
    }
}

/// Claim 12: WCAG tier never regresses as the ratio grows
#[test]
fn claim_12_wcag_tier_monotonic() {
    let mut previous = WcagLevel::Fail;
    for step in 100..=2100 {
        let level = wcag_level(f64::from(step) / 100.0).level;
        assert!(level >= previous, "Claim 12 FALSIFIED at {}", f64::from(step) / 100.0);
        previous = level;
    }
    assert_eq!(previous, WcagLevel::AAA);
}

/// Claim 13: 4.5 is AA for both text sizes
#[test]
fn claim_13_wcag_at_4_5() {
    assert_eq!(
        wcag_level(4.5),
        WcagAssessment {
            level: WcagLevel::AA,
            normal_text: true,
            large_text: true
        }
    );
}

/// Claim 14: 2.9 fails for both text sizes
#[test]
fn claim_14_wcag_at_2_9() {
    assert_eq!(
        wcag_level(2.9),
        WcagAssessment {
            level: WcagLevel::Fail,
            normal_text: false,
            large_text: false
        }
    );
}

// ============================================================================
// VARIATION CLAIMS (15-19)
// ============================================================================

/// Claim 15: the ramp for #3b82f6 is the channel offsets -40/+40/+80, clamped
#[test]
fn claim_15_known_ramp() {
    let ramp = generate_variations(hex("#3b82f6"));
    assert!(ramp.is_standard());
    assert_eq!(ramp.get(Slot::Main), Some(hex("#3b82f6")));
    assert_eq!(ramp.get(Slot::Dark), Some(hex("#135ace")));
    assert_eq!(ramp.get(Slot::Light), Some(hex("#63aaff")));
    assert_eq!(ramp.get(Slot::Lighter), Some(hex("#8bd2ff")));
}

/// Claim 16: dark-mode lightness stays in [15, 85] (up to 8-bit quantization)
#[test]
fn claim_16_dark_mode_lightness_bounded() {
    for color in sweep() {
        let l = generate_dark_mode_color(color).to_hsl().l;
        assert!((14.5..=85.5).contains(&l), "Claim 16 FALSIFIED: {color} -> l={l}");
    }
}

/// Claim 17: dark-mode derivation keeps the hue of saturated colors
///
/// Fixed saturated seeds only. Arbitrary seeds are covered by
/// `prop_dark_mode_preserves_hue` in `src/variation.rs`, which skips outputs
/// with too little chroma for 8-bit hue to be meaningful.
#[test]
fn claim_17_dark_mode_preserves_hue() {
    for seed in [
        "#ff0000", "#00ff00", "#0000ff", "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6",
    ] {
        let seed = hex(seed);
        let dark = generate_dark_mode_color(seed);
        let gap = hue_gap(seed.to_hsl().h, dark.to_hsl().h);
        assert!(gap <= 1.0, "Claim 17 FALSIFIED: {seed} -> {dark} moved {gap} degrees");
    }
}

/// Claim 18: grey stays grey in dark mode
#[test]
fn claim_18_dark_mode_keeps_greys_neutral() {
    for v in (0..=255u8).step_by(15) {
        let dark = generate_dark_mode_color(HexColor::from_rgb(v, v, v)).rgb();
        assert!(dark.r == dark.g && dark.g == dark.b, "Claim 18 FALSIFIED at {v}");
    }
}

/// Claim 19: dark ramps are derived slot by slot, simple sets stay simple
#[test]
fn claim_19_dark_ramp_is_slotwise() {
    let light = generate_variations(hex("#3b82f6"));
    let dark = generate_dark_mode_variations(&light);
    for slot in Slot::ALL {
        assert_eq!(
            dark.get(slot),
            light.get(slot).map(generate_dark_mode_color),
            "Claim 19 FALSIFIED at {slot}"
        );
    }

    let simple = generate_dark_mode_variations(&swatchsmith::variation::variations_for(
        hex("#64748b"),
        false,
    ));
    assert!(simple.is_simple());
}

// ============================================================================
// OPTIMIZER CLAIMS (20-25)
// ============================================================================

fn sample_palette() -> Palette {
    Palette::new(vec![
        PaletteColor::new("brand", hex("#b8b8b8")).with_role(ColorRole::Primary),
        PaletteColor::new("accent", hex("#fca5a5")).with_role(ColorRole::Accent),
        PaletteColor::new("ink", hex("#1e293b")).with_role(ColorRole::Text),
        PaletteColor::new("sky", hex("#7dd3fc")),
    ])
    .with_text_color_settings(TextColorSettings {
        main: TextColorMode::White,
        ..TextColorSettings::default()
    })
}

/// Claim 20: a 2:1 color under white text gains contrast, without a convergence promise
#[test]
fn claim_20_fix_raises_contrast() {
    let input = sample_palette();
    let before = contrast_ratio(input.colors[0].value, HexColor::WHITE);
    assert_abs_diff_eq!(before, 2.0, epsilon = 0.05);

    let result = PaletteOptimizer::default().optimize(&input, 0);
    let after = contrast_ratio(result.palette.colors[0].value, HexColor::WHITE);
    assert!(after > before, "Claim 20 FALSIFIED: {before} -> {after}");
}

/// Claim 21: harmonization never moves the primary
#[test]
fn claim_21_harmonize_keeps_primary() {
    let input = sample_palette();
    let options = OptimizerOptions {
        fix_accessibility: false,
        harmonize_colors: true,
        harmonization_strength: 100,
        ..OptimizerOptions::default()
    };
    for primary in 0..input.len() {
        let result = PaletteOptimizer::new(options).optimize(&input, primary);
        assert_eq!(
            result.palette.colors[primary].value, input.colors[primary].value,
            "Claim 21 FALSIFIED for primary {primary}"
        );
        assert!(!result.adjusted.contains(&primary));
    }
}

/// Claim 22: harmonization keeps every hue
#[test]
fn claim_22_harmonize_keeps_hue() {
    let input = sample_palette();
    let options = OptimizerOptions {
        fix_accessibility: false,
        harmonize_colors: true,
        harmonization_strength: 60,
        ..OptimizerOptions::default()
    };
    let result = PaletteOptimizer::new(options).optimize(&input, 1);
    for (before, after) in input.colors.iter().zip(&result.palette.colors) {
        let (b, a) = (before.value.to_hsl(), after.value.to_hsl());
        if b.s > 20.0 && a.s > 20.0 {
            assert!(hue_gap(b.h, a.h) <= 2.0, "Claim 22 FALSIFIED for {}", before.name);
        }
    }
}

/// Claim 23: ramp slot text policies are fixed regardless of the palette
#[test]
fn claim_23_ramp_text_policies_fixed() {
    let result = PaletteOptimizer::default().optimize(&sample_palette(), 0);
    let settings = result.palette.text_color_settings;
    assert_eq!(settings.dark, TextColorMode::White);
    assert_eq!(settings.light, TextColorMode::Black);
    assert_eq!(settings.lighter, TextColorMode::Black);
}

/// Claim 24: the optimizer is deterministic and leaves its input untouched
#[test]
fn claim_24_optimizer_is_pure() {
    let input = sample_palette();
    let snapshot = input.clone();
    let first = PaletteOptimizer::default().optimize(&input, 0);
    let second = PaletteOptimizer::default().optimize(&input, 0);
    assert_eq!(input, snapshot);
    assert_eq!(first.palette, second.palette);
    assert_eq!(first.adjusted, second.adjusted);
}

/// Claim 25: an empty palette passes through
#[test]
fn claim_25_empty_palette() {
    let result = PaletteOptimizer::default().optimize(&Palette::default(), 0);
    assert!(result.palette.is_empty());
    assert!(result.adjusted.is_empty());
    assert_eq!(result.palette.text_color_settings.main, TextColorMode::Default);
}

// ============================================================================
// INTERCHANGE CLAIMS (26-28)
// ============================================================================

/// Claim 26: palette JSON survives an export/import cycle
#[test]
fn claim_26_palette_json_cycle() {
    let palette = sample_palette().with_auto_dark_values();
    let json = palette.to_json_pretty().unwrap();
    assert!(json.contains("darkValue"));
    assert!(json.contains("textColorSettings"));
    assert_eq!(Palette::from_json(&json).unwrap(), palette);
}

/// Claim 27: the starter palette names exactly one primary
#[test]
fn claim_27_starter_has_primary() {
    let starter = Palette::starter();
    let primaries = starter
        .colors
        .iter()
        .filter(|c| c.role == Some(ColorRole::Primary))
        .count();
    assert_eq!(primaries, 1);
    assert_eq!(starter.primary_index(), Some(0));
}

/// Claim 28: configuration defaults match the optimizer's defaults
#[test]
fn claim_28_config_defaults() {
    let config = Config::parse("{}").unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.optimizer_options(), OptimizerOptions::default());
}

// ============================================================================
// COLOR VISION CLAIMS (29-31)
// ============================================================================

/// Claim 29: every simulation leaves black, white and greys unchanged
#[test]
fn claim_29_simulation_fixes_neutrals() {
    for v in (0..=255u8).step_by(17) {
        let grey = HexColor::from_rgb(v, v, v);
        for kind in ColorBlindness::ALL {
            let seen = simulate_color_blindness(grey, kind);
            assert_eq!(seen, grey, "Claim 29 FALSIFIED: {kind} moved {grey} to {seen}");
        }
    }
}

/// Claim 30: achromatopsia keeps relative luminance (up to 8-bit quantization)
#[test]
fn claim_30_achromatopsia_keeps_luminance() {
    use swatchsmith::contrast::relative_luminance;

    for color in sweep() {
        let seen = simulate_color_blindness(color, ColorBlindness::Achromatopsia);
        let gap = (relative_luminance(seen) - relative_luminance(color)).abs();
        assert!(gap < 0.01, "Claim 30 FALSIFIED: {color} -> {seen} luminance moved {gap}");
    }
}

/// Claim 31: every table swatch is its own closest match
#[test]
fn claim_31_swatches_match_themselves() {
    for (family, shade, value) in TAILWIND.swatches() {
        let named = closest_tailwind_color(value);
        assert_eq!(named.value, value, "Claim 31 FALSIFIED: tailwind {family}-{shade}");
        assert!(named.distance < 1e-12);
    }
    for (family, shade, value) in MATERIAL.swatches() {
        let named = closest_material_color(value);
        assert_eq!(named.value, value, "Claim 31 FALSIFIED: material {family}-{shade}");
    }
}
