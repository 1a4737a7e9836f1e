//! Background pattern resolution.
//!
//! Maps a pattern identifier plus the design's ink color to a structured,
//! tileable fill descriptor. The descriptor names a drawing primitive, a tile
//! size, and an optional staggered second pass; any rendering target can
//! interpret it without knowing how patterns were originally encoded.

use crate::types::Rgb;
use serde::{Deserialize, Serialize};

/// Identifier of a background pattern from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// No pattern; plain background fill.
    None,
    /// Subtle dot grid.
    Dots,
    /// Diagonal stripes.
    Stripes,
    /// Gentle horizontal waves.
    Waves,
    /// Geometric zigzag rows.
    ZigZag,
    /// Scattered bubbles.
    Bubbles,
    /// Fine line grid.
    Grid,
    /// Coarse line grid.
    Squares,
    /// Triangular crosshatch.
    Triangles,
    /// Staggered honeycomb dots.
    Hexagons,
    /// Diagonal diamond bands.
    Diamonds,
    /// Staggered small circles.
    Circles,
    /// Dense leafy speckle.
    Leaves,
    /// Sparse star speckle.
    Stars,
    /// Fine diagonal crosshatch.
    Crosshatch,
    /// Plaid line grid.
    Plaid,
    /// Two-phase confetti dots.
    Confetti,
    /// Large polka dots.
    Polka,
    /// Moroccan tile dots.
    Moroccan,
    /// Tight herringbone weave.
    Herringbone,
}

impl PatternKind {
    /// All catalog patterns, in panel order.
    pub const ALL: [PatternKind; 20] = [
        PatternKind::None,
        PatternKind::Dots,
        PatternKind::Stripes,
        PatternKind::Waves,
        PatternKind::ZigZag,
        PatternKind::Bubbles,
        PatternKind::Grid,
        PatternKind::Squares,
        PatternKind::Triangles,
        PatternKind::Hexagons,
        PatternKind::Diamonds,
        PatternKind::Circles,
        PatternKind::Leaves,
        PatternKind::Stars,
        PatternKind::Crosshatch,
        PatternKind::Plaid,
        PatternKind::Confetti,
        PatternKind::Polka,
        PatternKind::Moroccan,
        PatternKind::Herringbone,
    ];

    /// Human-readable label for the pattern picker.
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::None => "None",
            PatternKind::Dots => "Dots",
            PatternKind::Stripes => "Stripes",
            PatternKind::Waves => "Waves",
            PatternKind::ZigZag => "ZigZag",
            PatternKind::Bubbles => "Bubbles",
            PatternKind::Grid => "Grid",
            PatternKind::Squares => "Squares",
            PatternKind::Triangles => "Triangles",
            PatternKind::Hexagons => "Hexagons",
            PatternKind::Diamonds => "Diamonds",
            PatternKind::Circles => "Circles",
            PatternKind::Leaves => "Leaves",
            PatternKind::Stars => "Stars",
            PatternKind::Crosshatch => "Crosshatch",
            PatternKind::Plaid => "Plaid",
            PatternKind::Confetti => "Confetti",
            PatternKind::Polka => "Polka",
            PatternKind::Moroccan => "Moroccan",
            PatternKind::Herringbone => "Herringbone",
        }
    }
}

/// The drawing primitive repeated inside each tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TilePrimitive {
    /// A filled dot at the tile origin.
    Dot {
        /// Dot radius in pixels.
        radius: f32,
    },
    /// A 45-degree stroke across the tile, connecting into long stripes.
    Diagonal {
        /// Stroke width in pixels.
        band: f32,
    },
    /// Both 45-degree stroke families across the tile.
    Crosshatch {
        /// Stroke width in pixels.
        band: f32,
    },
    /// One horizontal and one vertical line per tile, forming a grid.
    GridLines {
        /// Stroke width in pixels.
        width: f32,
    },
    /// A smooth wave crest spanning the tile width.
    Wave {
        /// Peak-to-midline amplitude in pixels.
        amplitude: f32,
    },
    /// A sharp up-down pair spanning the tile width.
    ZigZag {
        /// Peak-to-midline amplitude in pixels.
        amplitude: f32,
    },
}

/// A resolved, tileable background fill.
///
/// The ground color behind the tiles is the card's background fill; the
/// descriptor carries only the ink pass(es) drawn over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Primitive drawn per tile.
    pub primitive: TilePrimitive,
    /// Tile extent in pixels, `(width, height)`.
    pub tile: (f32, f32),
    /// Offset of an optional second pass of the same primitive.
    pub stagger: Option<(f32, f32)>,
    /// Ink color of the primitive strokes/fills.
    pub ink: Rgb,
    /// Ink opacity, 0-255.
    pub alpha: u8,
}

/// Resolves a pattern identifier and ink color to its tile descriptor.
///
/// Pure and deterministic; [`PatternKind::None`] resolves to `None`, meaning
/// the plain background fill shows through.
pub fn resolve(kind: PatternKind, ink: Rgb) -> Option<TileDescriptor> {
    let descriptor = |primitive, tile, stagger, alpha| TileDescriptor {
        primitive,
        tile,
        stagger,
        ink,
        alpha,
    };

    match kind {
        PatternKind::None => None,
        PatternKind::Dots => Some(descriptor(
            TilePrimitive::Dot { radius: 2.0 },
            (15.0, 15.0),
            None,
            0x20,
        )),
        PatternKind::Stripes => Some(descriptor(
            TilePrimitive::Diagonal { band: 5.0 },
            (20.0, 20.0),
            None,
            0x10,
        )),
        PatternKind::Waves => Some(descriptor(
            TilePrimitive::Wave { amplitude: 4.0 },
            (100.0, 20.0),
            None,
            0x1A,
        )),
        PatternKind::ZigZag => Some(descriptor(
            TilePrimitive::ZigZag { amplitude: 6.0 },
            (40.0, 12.0),
            None,
            0x1A,
        )),
        PatternKind::Bubbles => Some(descriptor(
            TilePrimitive::Dot { radius: 5.0 },
            (50.0, 50.0),
            Some((25.0, 25.0)),
            0x1A,
        )),
        PatternKind::Grid => Some(descriptor(
            TilePrimitive::GridLines { width: 1.0 },
            (20.0, 20.0),
            None,
            0x10,
        )),
        PatternKind::Squares => Some(descriptor(
            TilePrimitive::GridLines { width: 1.0 },
            (40.0, 40.0),
            None,
            0x10,
        )),
        PatternKind::Triangles => Some(descriptor(
            TilePrimitive::Crosshatch { band: 5.0 },
            (40.0, 40.0),
            None,
            0x10,
        )),
        PatternKind::Hexagons => Some(descriptor(
            TilePrimitive::Dot { radius: 9.0 },
            (60.0, 60.0),
            Some((30.0, 30.0)),
            0x10,
        )),
        PatternKind::Diamonds => Some(descriptor(
            TilePrimitive::Diagonal { band: 7.5 },
            (30.0, 30.0),
            None,
            0x10,
        )),
        PatternKind::Circles => Some(descriptor(
            TilePrimitive::Dot { radius: 1.5 },
            (30.0, 30.0),
            Some((15.0, 15.0)),
            0x15,
        )),
        PatternKind::Leaves => Some(descriptor(
            TilePrimitive::Dot { radius: 1.3 },
            (16.0, 16.0),
            Some((8.0, 8.0)),
            0x15,
        )),
        PatternKind::Stars => Some(descriptor(
            TilePrimitive::Dot { radius: 2.0 },
            (30.0, 30.0),
            Some((15.0, 15.0)),
            0x15,
        )),
        PatternKind::Crosshatch => Some(descriptor(
            TilePrimitive::Crosshatch { band: 2.5 },
            (20.0, 20.0),
            Some((10.0, 10.0)),
            0x10,
        )),
        PatternKind::Plaid => Some(descriptor(
            TilePrimitive::GridLines { width: 2.0 },
            (40.0, 40.0),
            Some((20.0, 20.0)),
            0x10,
        )),
        PatternKind::Confetti => Some(descriptor(
            TilePrimitive::Dot { radius: 3.0 },
            (25.0, 25.0),
            Some((10.0, 10.0)),
            0x15,
        )),
        PatternKind::Polka => Some(descriptor(
            TilePrimitive::Dot { radius: 6.0 },
            (30.0, 30.0),
            None,
            0x15,
        )),
        PatternKind::Moroccan => Some(descriptor(
            TilePrimitive::Dot { radius: 4.0 },
            (24.0, 24.0),
            Some((12.0, 12.0)),
            0x15,
        )),
        PatternKind::Herringbone => Some(descriptor(
            TilePrimitive::Crosshatch { band: 3.75 },
            (15.0, 15.0),
            None,
            0x10,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INK: Rgb = Rgb::new(0x1F, 0x46, 0x58);

    #[test]
    fn test_none_resolves_to_no_fill() {
        assert_eq!(resolve(PatternKind::None, INK), None);
    }

    #[test]
    fn test_every_other_pattern_resolves() {
        for kind in PatternKind::ALL {
            if kind == PatternKind::None {
                continue;
            }
            let descriptor = resolve(kind, INK).unwrap_or_else(|| panic!("{kind:?} missing"));
            assert!(descriptor.tile.0 > 0.0);
            assert!(descriptor.tile.1 > 0.0);
            assert!(descriptor.alpha > 0);
            assert_eq!(descriptor.ink, INK);
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for kind in PatternKind::ALL {
            assert_eq!(resolve(kind, INK), resolve(kind, INK));
        }
    }

    #[test]
    fn test_dots_descriptor_matches_catalog() {
        let descriptor = resolve(PatternKind::Dots, INK).unwrap();
        assert_eq!(descriptor.tile, (15.0, 15.0));
        assert_eq!(descriptor.primitive, TilePrimitive::Dot { radius: 2.0 });
        assert_eq!(descriptor.alpha, 0x20);
        assert_eq!(descriptor.stagger, None);
    }

    #[test]
    fn test_staggered_patterns_offset_by_half_tile() {
        for kind in [
            PatternKind::Hexagons,
            PatternKind::Circles,
            PatternKind::Stars,
            PatternKind::Moroccan,
        ] {
            let descriptor = resolve(kind, INK).unwrap();
            let stagger = descriptor.stagger.expect("staggered pattern");
            assert_eq!(stagger.0, descriptor.tile.0 / 2.0);
            assert_eq!(stagger.1, descriptor.tile.1 / 2.0);
        }
    }
}
