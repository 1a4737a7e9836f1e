//! Static design catalogs: selectable fonts and color schemes.
//!
//! Pure data consumed by the customization panel; nothing here carries
//! behavior beyond lookups.

use crate::types::Rgb;

/// Which of the bundled font families a catalog entry renders with.
///
/// The bundled egui fonts carry one proportional and one monospace face, so
/// catalog names resolve to the closer of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    /// The default proportional face.
    Proportional,
    /// The monospace face.
    Monospace,
}

/// One selectable font in the Text & Font tab.
#[derive(Debug, Clone, Copy)]
pub struct FontEntry {
    /// Display name shown in the picker.
    pub name: &'static str,
    /// Bundled family the name resolves to.
    pub slot: FontSlot,
}

/// The selectable font catalog.
pub const FONTS: &[FontEntry] = &[
    FontEntry { name: "Poppins", slot: FontSlot::Proportional },
    FontEntry { name: "Inter", slot: FontSlot::Proportional },
    FontEntry { name: "Montserrat", slot: FontSlot::Proportional },
    FontEntry { name: "Roboto", slot: FontSlot::Proportional },
    FontEntry { name: "Raleway", slot: FontSlot::Proportional },
    FontEntry { name: "Oswald", slot: FontSlot::Proportional },
    FontEntry { name: "Helvetica", slot: FontSlot::Proportional },
    FontEntry { name: "Arial", slot: FontSlot::Proportional },
    FontEntry { name: "Verdana", slot: FontSlot::Proportional },
    FontEntry { name: "Tahoma", slot: FontSlot::Proportional },
    FontEntry { name: "Segoe UI", slot: FontSlot::Proportional },
    FontEntry { name: "Century Gothic", slot: FontSlot::Proportional },
    FontEntry { name: "Courier New", slot: FontSlot::Monospace },
    FontEntry { name: "American Typewriter", slot: FontSlot::Monospace },
];

/// Resolves a catalog name to its font slot.
///
/// Unknown names fall back to the proportional face.
pub fn font_slot(name: &str) -> FontSlot {
    FONTS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.slot)
        .unwrap_or(FontSlot::Proportional)
}

/// A named background/text color pairing.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Display name shown in the picker.
    pub name: &'static str,
    /// Card background fill.
    pub background: Rgb,
    /// Ink color for text and patterns.
    pub text: Rgb,
}

/// Predefined color schemes for the Colors tab.
pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme { name: "Green", background: Rgb::new(0x00, 0x87, 0x51), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Pink", background: Rgb::new(0xFF, 0x90, 0xB3), text: Rgb::new(0x5A, 0x2E, 0x38) },
    ColorScheme { name: "Orange", background: Rgb::new(0xFF, 0x93, 0x46), text: Rgb::new(0x3D, 0x22, 0x00) },
    ColorScheme { name: "Blue", background: Rgb::new(0x00, 0xA3, 0xD7), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Purple", background: Rgb::new(0xB0, 0x17, 0x79), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Yellow", background: Rgb::new(0xF9, 0xDF, 0x4A), text: Rgb::new(0x3C, 0x31, 0x04) },
    ColorScheme { name: "Navy", background: Rgb::new(0x00, 0x33, 0x66), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Teal", background: Rgb::new(0x00, 0x80, 0x80), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Maroon", background: Rgb::new(0x80, 0x00, 0x00), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Olive", background: Rgb::new(0x80, 0x80, 0x00), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Cyan", background: Rgb::new(0x00, 0xFF, 0xFF), text: Rgb::new(0x00, 0x33, 0x33) },
    ColorScheme { name: "Magenta", background: Rgb::new(0xFF, 0x00, 0xFF), text: Rgb::new(0x33, 0x00, 0x33) },
    ColorScheme { name: "Lime", background: Rgb::new(0x00, 0xFF, 0x00), text: Rgb::new(0x00, 0x33, 0x00) },
    ColorScheme { name: "Brown", background: Rgb::new(0x99, 0x66, 0x33), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Slate", background: Rgb::new(0x70, 0x80, 0x90), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Red", background: Rgb::new(0xFF, 0x00, 0x00), text: Rgb::new(0xFF, 0xFF, 0xFF) },
    ColorScheme { name: "Lavender", background: Rgb::new(0xE6, 0xE6, 0xFA), text: Rgb::new(0x33, 0x33, 0x33) },
    ColorScheme { name: "Mint", background: Rgb::new(0x98, 0xFF, 0x98), text: Rgb::new(0x00, 0x66, 0x00) },
    ColorScheme { name: "Coral", background: Rgb::new(0xFF, 0x7F, 0x50), text: Rgb::new(0x4C, 0x26, 0x17) },
    ColorScheme { name: "Sky", background: Rgb::new(0x87, 0xCE, 0xEB), text: Rgb::new(0x00, 0x44, 0x66) },
];

/// A full palette used by the "surprise me" generator, including a matching
/// highlight color.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Card background fill.
    pub background: Rgb,
    /// Ink color for text and patterns.
    pub text: Rgb,
    /// Highlight color paired with the background.
    pub highlight: Rgb,
}

/// Curated palettes for the random scheme generator.
pub const RANDOM_PALETTES: &[Palette] = &[
    Palette { background: Rgb::new(0x00, 0x87, 0x51), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xC8, 0xFF, 0x00) },
    Palette { background: Rgb::new(0xFF, 0x90, 0xB3), text: Rgb::new(0x5A, 0x2E, 0x38), highlight: Rgb::new(0xFF, 0x64, 0xA3) },
    Palette { background: Rgb::new(0xFF, 0x93, 0x46), text: Rgb::new(0x3D, 0x22, 0x00), highlight: Rgb::new(0xFF, 0xC8, 0x46) },
    Palette { background: Rgb::new(0x00, 0xA3, 0xD7), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x90, 0xE0, 0xF0) },
    Palette { background: Rgb::new(0xB0, 0x17, 0x79), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xFF, 0x90, 0xFF) },
    Palette { background: Rgb::new(0xF9, 0xDF, 0x4A), text: Rgb::new(0x3C, 0x31, 0x04), highlight: Rgb::new(0xFF, 0xB0, 0x00) },
    Palette { background: Rgb::new(0x4B, 0x00, 0x82), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x93, 0x70, 0xDB) },
    Palette { background: Rgb::new(0x00, 0x64, 0x00), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x32, 0xCD, 0x32) },
    Palette { background: Rgb::new(0x8B, 0x00, 0x00), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xFF, 0x63, 0x47) },
    Palette { background: Rgb::new(0x1A, 0x1F, 0x2C), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x46, 0x82, 0xB4) },
    Palette { background: Rgb::new(0x22, 0x8B, 0x22), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x7C, 0xFC, 0x00) },
    Palette { background: Rgb::new(0x70, 0x80, 0x90), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xB0, 0xC4, 0xDE) },
    Palette { background: Rgb::new(0x00, 0x00, 0x80), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xAD, 0xD8, 0xE6) },
    Palette { background: Rgb::new(0x46, 0x82, 0xB4), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x87, 0xCE, 0xEB) },
    Palette { background: Rgb::new(0xD2, 0x69, 0x1E), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xFF, 0xD7, 0x00) },
    Palette { background: Rgb::new(0xC7, 0x15, 0x85), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xFF, 0x69, 0xB4) },
    Palette { background: Rgb::new(0x66, 0xCD, 0xAA), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0x20, 0xB2, 0xAA) },
    Palette { background: Rgb::new(0x7B, 0x68, 0xEE), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xE6, 0xE6, 0xFA) },
    Palette { background: Rgb::new(0x3C, 0xB3, 0x71), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0x98, 0xFB, 0x98) },
    Palette { background: Rgb::new(0xBC, 0x8F, 0x8F), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0xF4, 0xA4, 0x60) },
    Palette { background: Rgb::new(0xF0, 0xE6, 0x8C), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0xFF, 0xDE, 0xAD) },
    Palette { background: Rgb::new(0xE6, 0xE6, 0xFA), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0xD8, 0xBF, 0xD8) },
    Palette { background: Rgb::new(0xFF, 0xDA, 0xB9), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0xFF, 0xDE, 0xAD) },
    Palette { background: Rgb::new(0xB0, 0xE0, 0xE6), text: Rgb::new(0x33, 0x33, 0x33), highlight: Rgb::new(0x87, 0xCE, 0xEB) },
    Palette { background: Rgb::new(0xD8, 0x46, 0x5E), text: Rgb::new(0xFF, 0xFF, 0xFF), highlight: Rgb::new(0xC8, 0xFF, 0x00) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_slot_lookup() {
        assert_eq!(font_slot("Courier New"), FontSlot::Monospace);
        assert_eq!(font_slot("Poppins"), FontSlot::Proportional);
        // Unknown names fall back to the proportional face.
        assert_eq!(font_slot("Wingdings"), FontSlot::Proportional);
    }

    #[test]
    fn test_catalogs_are_populated() {
        assert!(FONTS.len() >= 10);
        assert_eq!(COLOR_SCHEMES.len(), 20);
        assert_eq!(RANDOM_PALETTES.len(), 25);
    }

    #[test]
    fn test_font_names_are_unique() {
        for (i, a) in FONTS.iter().enumerate() {
            for b in &FONTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
