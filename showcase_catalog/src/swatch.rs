// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color swatches keyed by catalog color name.

use peniko::Color;

/// Fallback used for color names missing from [`PALETTE`].
pub const NEUTRAL: Color = Color::from_rgb8(0x88, 0x88, 0x88);

/// Known color names and their swatch colors, in display order.
pub const PALETTE: [(&str, Color); 9] = [
    ("Silver", Color::from_rgb8(0xc0, 0xc0, 0xc0)),
    ("Rose Gold", Color::from_rgb8(0xe8, 0xc4, 0xb8)),
    ("Black", Color::from_rgb8(0x2a, 0x2a, 0x2a)),
    ("Blue", Color::from_rgb8(0x4a, 0x6f, 0xa5)),
    ("Champagne", Color::from_rgb8(0xf7, 0xe7, 0xce)),
    ("Green", Color::from_rgb8(0x5a, 0x7a, 0x5a)),
    ("White", Color::from_rgb8(0xf5, 0xf5, 0xf5)),
    ("Copper", Color::from_rgb8(0xb8, 0x73, 0x33)),
    ("Burgundy", Color::from_rgb8(0x72, 0x2f, 0x37)),
];

/// A resolved swatch: the palette entry name (if known) and its color.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    /// Palette name, or `None` when the lookup fell back to [`NEUTRAL`].
    pub name: Option<&'static str>,
    /// Swatch color.
    pub color: Color,
}

impl Swatch {
    /// Returns `true` if the swatch came from the palette rather than the fallback.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }
}

/// Looks up the swatch for a color name.
///
/// Matching is exact. Unknown names resolve to [`NEUTRAL`].
#[must_use]
pub fn swatch_for(name: &str) -> Swatch {
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(
            Swatch {
                name: None,
                color: NEUTRAL,
            },
            |&(n, color)| Swatch {
                name: Some(n),
                color,
            },
        )
}

/// The first `count` palette entries, as offered in the detail panel.
pub fn color_options(count: usize) -> impl Iterator<Item = Swatch> {
    PALETTE.iter().take(count).map(|&(n, color)| Swatch {
        name: Some(n),
        color,
    })
}
