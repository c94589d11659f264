//! Design-system color tables and nearest-swatch lookup.
//!
//! Maps an arbitrary color to the closest named swatch in the Tailwind CSS
//! (v3) or Material Design (2014) palettes, so a picked color can be reported
//! as `blue-500` and snapped to a token.

use std::fmt;

use serde::Serialize;

use crate::color::HexColor;
use crate::contrast::perceptual_distance;

/// A palette of named color families sharing one shade scale.
#[derive(Debug, Clone, Copy)]
pub struct ColorSystem<const S: usize> {
    name: &'static str,
    shades: [u16; S],
    families: &'static [(&'static str, [u32; S])],
}

impl<const S: usize> ColorSystem<S> {
    const fn new(
        name: &'static str,
        shades: [u16; S],
        families: &'static [(&'static str, [u32; S])],
    ) -> Self {
        assert!(S > 0 && !families.is_empty(), "color system must not be empty");
        Self {
            name,
            shades,
            families,
        }
    }

    /// System name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Shade labels, lightest first.
    #[must_use]
    pub const fn shades(&self) -> &[u16; S] {
        &self.shades
    }

    /// Every swatch, family by family, lightest shade first.
    pub fn swatches(&self) -> impl Iterator<Item = (&'static str, u16, HexColor)> + '_ {
        self.families.iter().flat_map(move |&(family, values)| {
            self.shades
                .iter()
                .zip(values)
                .map(move |(&shade, value)| (family, shade, unpack(value)))
        })
    }

    /// The swatch perceptually closest to `color` (Oklab distance).
    ///
    /// Ties go to the swatch listed first.
    #[must_use]
    pub fn closest(&self, color: HexColor) -> NamedColor {
        let (family, values) = self.families[0];
        let first = NamedColor::measure(family, self.shades[0], unpack(values[0]), color);

        self.swatches().fold(first, |best, (family, shade, value)| {
            let candidate = NamedColor::measure(family, shade, value, color);
            if candidate.distance < best.distance {
                candidate
            } else {
                best
            }
        })
    }
}

/// A swatch from a [`ColorSystem`] and its distance to the queried color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedColor {
    /// Family name, e.g. `blue` or `deep-orange`.
    pub family: &'static str,
    /// Shade label, e.g. `500`.
    pub shade: u16,
    /// The swatch color.
    pub value: HexColor,
    /// Oklab distance from the queried color.
    pub distance: f64,
}

impl NamedColor {
    fn measure(family: &'static str, shade: u16, value: HexColor, query: HexColor) -> Self {
        Self {
            family,
            shade,
            value,
            distance: perceptual_distance(query, value),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family, self.shade)
    }
}

const fn unpack(value: u32) -> HexColor {
    HexColor::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Closest Tailwind CSS swatch.
#[must_use]
pub fn closest_tailwind_color(color: HexColor) -> NamedColor {
    TAILWIND.closest(color)
}

/// Closest Material Design swatch.
#[must_use]
pub fn closest_material_color(color: HexColor) -> NamedColor {
    MATERIAL.closest(color)
}

// ============================================================================
// Tables
// ============================================================================

/// Tailwind CSS v3 default palette.
#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
pub const TAILWIND: ColorSystem<11> = ColorSystem::new(
    "tailwind",
    [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950],
    &[
        ("slate", [0xf8fafc, 0xf1f5f9, 0xe2e8f0, 0xcbd5e1, 0x94a3b8, 0x64748b, 0x475569, 0x334155, 0x1e293b, 0x0f172a, 0x020617]),
        ("gray", [0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af, 0x6b7280, 0x4b5563, 0x374151, 0x1f2937, 0x111827, 0x030712]),
        ("zinc", [0xfafafa, 0xf4f4f5, 0xe4e4e7, 0xd4d4d8, 0xa1a1aa, 0x71717a, 0x52525b, 0x3f3f46, 0x27272a, 0x18181b, 0x09090b]),
        ("neutral", [0xfafafa, 0xf5f5f5, 0xe5e5e5, 0xd4d4d4, 0xa3a3a3, 0x737373, 0x525252, 0x404040, 0x262626, 0x171717, 0x0a0a0a]),
        ("stone", [0xfafaf9, 0xf5f5f4, 0xe7e5e4, 0xd6d3d1, 0xa8a29e, 0x78716c, 0x57534e, 0x44403c, 0x292524, 0x1c1917, 0x0c0a09]),
        ("red", [0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xf87171, 0xef4444, 0xdc2626, 0xb91c1c, 0x991b1b, 0x7f1d1d, 0x450a0a]),
        ("orange", [0xfff7ed, 0xffedd5, 0xfed7aa, 0xfdba74, 0xfb923c, 0xf97316, 0xea580c, 0xc2410c, 0x9a3412, 0x7c2d12, 0x431407]),
        ("amber", [0xfffbeb, 0xfef3c7, 0xfde68a, 0xfcd34d, 0xfbbf24, 0xf59e0b, 0xd97706, 0xb45309, 0x92400e, 0x78350f, 0x451a03]),
        ("yellow", [0xfefce8, 0xfef9c3, 0xfef08a, 0xfde047, 0xfacc15, 0xeab308, 0xca8a04, 0xa16207, 0x854d0e, 0x713f12, 0x422006]),
        ("lime", [0xf7fee7, 0xecfccb, 0xd9f99d, 0xbef264, 0xa3e635, 0x84cc16, 0x65a30d, 0x4d7c0f, 0x3f6212, 0x365314, 0x1a2e05]),
        ("green", [0xf0fdf4, 0xdcfce7, 0xbbf7d0, 0x86efac, 0x4ade80, 0x22c55e, 0x16a34a, 0x15803d, 0x166534, 0x14532d, 0x052e16]),
        ("emerald", [0xecfdf5, 0xd1fae5, 0xa7f3d0, 0x6ee7b7, 0x34d399, 0x10b981, 0x059669, 0x047857, 0x065f46, 0x064e3b, 0x022c22]),
        ("teal", [0xf0fdfa, 0xccfbf1, 0x99f6e4, 0x5eead4, 0x2dd4bf, 0x14b8a6, 0x0d9488, 0x0f766e, 0x115e59, 0x134e4a, 0x042f2e]),
        ("cyan", [0xecfeff, 0xcffafe, 0xa5f3fc, 0x67e8f9, 0x22d3ee, 0x06b6d4, 0x0891b2, 0x0e7490, 0x155e75, 0x164e63, 0x083344]),
        ("sky", [0xf0f9ff, 0xe0f2fe, 0xbae6fd, 0x7dd3fc, 0x38bdf8, 0x0ea5e9, 0x0284c7, 0x0369a1, 0x075985, 0x0c4a6e, 0x082f49]),
        ("blue", [0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8, 0x1e40af, 0x1e3a8a, 0x172554]),
        ("indigo", [0xeef2ff, 0xe0e7ff, 0xc7d2fe, 0xa5b4fc, 0x818cf8, 0x6366f1, 0x4f46e5, 0x4338ca, 0x3730a3, 0x312e81, 0x1e1b4b]),
        ("violet", [0xf5f3ff, 0xede9fe, 0xddd6fe, 0xc4b5fd, 0xa78bfa, 0x8b5cf6, 0x7c3aed, 0x6d28d9, 0x5b21b6, 0x4c1d95, 0x2e1065]),
        ("purple", [0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce, 0x6b21a8, 0x581c87, 0x3b0764]),
        ("fuchsia", [0xfdf4ff, 0xfae8ff, 0xf5d0fe, 0xf0abfc, 0xe879f9, 0xd946ef, 0xc026d3, 0xa21caf, 0x86198f, 0x701a75, 0x4a044e]),
        ("pink", [0xfdf2f8, 0xfce7f3, 0xfbcfe8, 0xf9a8d4, 0xf472b6, 0xec4899, 0xdb2777, 0xbe185d, 0x9d174d, 0x831843, 0x500724]),
        ("rose", [0xfff1f2, 0xffe4e6, 0xfecdd3, 0xfda4af, 0xfb7185, 0xf43f5e, 0xe11d48, 0xbe123c, 0x9f1239, 0x881337, 0x4c0519]),
    ],
);

/// Material Design 2014 palette (primary shades).
#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
pub const MATERIAL: ColorSystem<10> = ColorSystem::new(
    "material",
    [50, 100, 200, 300, 400, 500, 600, 700, 800, 900],
    &[
        ("red", [0xffebee, 0xffcdd2, 0xef9a9a, 0xe57373, 0xef5350, 0xf44336, 0xe53935, 0xd32f2f, 0xc62828, 0xb71c1c]),
        ("pink", [0xfce4ec, 0xf8bbd0, 0xf48fb1, 0xf06292, 0xec407a, 0xe91e63, 0xd81b60, 0xc2185b, 0xad1457, 0x880e4f]),
        ("purple", [0xf3e5f5, 0xe1bee7, 0xce93d8, 0xba68c8, 0xab47bc, 0x9c27b0, 0x8e24aa, 0x7b1fa2, 0x6a1b9a, 0x4a148c]),
        ("deep-purple", [0xede7f6, 0xd1c4e9, 0xb39ddb, 0x9575cd, 0x7e57c2, 0x673ab7, 0x5e35b1, 0x512da8, 0x4527a0, 0x311b92]),
        ("indigo", [0xe8eaf6, 0xc5cae9, 0x9fa8da, 0x7986cb, 0x5c6bc0, 0x3f51b5, 0x3949ab, 0x303f9f, 0x283593, 0x1a237e]),
        ("blue", [0xe3f2fd, 0xbbdefb, 0x90caf9, 0x64b5f6, 0x42a5f5, 0x2196f3, 0x1e88e5, 0x1976d2, 0x1565c0, 0x0d47a1]),
        ("light-blue", [0xe1f5fe, 0xb3e5fc, 0x81d4fa, 0x4fc3f7, 0x29b6f6, 0x03a9f4, 0x039be5, 0x0288d1, 0x0277bd, 0x01579b]),
        ("cyan", [0xe0f7fa, 0xb2ebf2, 0x80deea, 0x4dd0e1, 0x26c6da, 0x00bcd4, 0x00acc1, 0x0097a7, 0x00838f, 0x006064]),
        ("teal", [0xe0f2f1, 0xb2dfdb, 0x80cbc4, 0x4db6ac, 0x26a69a, 0x009688, 0x00897b, 0x00796b, 0x00695c, 0x004d40]),
        ("green", [0xe8f5e9, 0xc8e6c9, 0xa5d6a7, 0x81c784, 0x66bb6a, 0x4caf50, 0x43a047, 0x388e3c, 0x2e7d32, 0x1b5e20]),
        ("light-green", [0xf1f8e9, 0xdcedc8, 0xc5e1a5, 0xaed581, 0x9ccc65, 0x8bc34a, 0x7cb342, 0x689f38, 0x558b2f, 0x33691e]),
        ("lime", [0xf9fbe7, 0xf0f4c3, 0xe6ee9c, 0xdce775, 0xd4e157, 0xcddc39, 0xc0ca33, 0xafb42b, 0x9e9d24, 0x827717]),
        ("yellow", [0xfffde7, 0xfff9c4, 0xfff59d, 0xfff176, 0xffee58, 0xffeb3b, 0xfdd835, 0xfbc02d, 0xf9a825, 0xf57f17]),
        ("amber", [0xfff8e1, 0xffecb3, 0xffe082, 0xffd54f, 0xffca28, 0xffc107, 0xffb300, 0xffa000, 0xff8f00, 0xff6f00]),
        ("orange", [0xfff3e0, 0xffe0b2, 0xffcc80, 0xffb74d, 0xffa726, 0xff9800, 0xfb8c00, 0xf57c00, 0xef6c00, 0xe65100]),
        ("deep-orange", [0xfbe9e7, 0xffccbc, 0xffab91, 0xff8a65, 0xff7043, 0xff5722, 0xf4511e, 0xe64a19, 0xd84315, 0xbf360c]),
        ("brown", [0xefebe9, 0xd7ccc8, 0xbcaaa4, 0xa1887f, 0x8d6e63, 0x795548, 0x6d4c41, 0x5d4037, 0x4e342e, 0x3e2723]),
        ("grey", [0xfafafa, 0xf5f5f5, 0xeeeeee, 0xe0e0e0, 0xbdbdbd, 0x9e9e9e, 0x757575, 0x616161, 0x424242, 0x212121]),
        ("blue-grey", [0xeceff1, 0xcfd8dc, 0xb0bec5, 0x90a4ae, 0x78909c, 0x607d8b, 0x546e7a, 0x455a64, 0x37474f, 0x263238]),
    ],
);
