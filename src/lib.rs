//! # Collateral Studio
//!
//! A visual editor for designing printable table-top QR-code cards
//! ("collaterals") for hospitality venues. Users pick a card shape, colors,
//! pattern, and fonts, then freely drag and resize five elements on the
//! canvas:
//! - **Table number**: the large identifying number
//! - **Action text**: the "Scan, Order, Pay" instruction
//! - **QR code**: rendered at high error correction on a white backing
//! - **Venue name**: hidden while empty
//! - **Logo**: an uploaded image, kept square
//!
//! ## Features
//! - Independent per-shape layouts (rectangle, square, circle)
//! - Drag snapping with alignment guides against sibling elements
//! - Corner-handle resizing with per-element limits
//! - Inline text editing on double-click
//! - Pattern, color-scheme, and font catalogs
//! - An order form with a simulated checkout

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod catalog;
mod constants;
mod layout;
mod pattern;
mod types;
mod ui;

// Re-export public types and functions
pub use catalog::*;
pub use constants::*;
pub use layout::*;
pub use pattern::*;
pub use types::*;
use ui::DesignerApp;

/// Runs the collateral designer with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use collateral_studio::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Collateral Studio",
        options,
        Box::new(|cc| Ok(Box::new(DesignerApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_designed_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.shape, Shape::Rectangle);
        assert_eq!(settings.pattern, PatternKind::Waves);
        assert_eq!(settings.background.to_hex(), "#CEEBF7");
        assert_eq!(settings.text_color.to_hex(), "#1F4658");
        assert_eq!(settings.action_text, "Scan, Order, Pay");
    }

    #[test]
    fn test_qr_and_logo_are_square_by_default() {
        let settings = DesignSettings::default();
        for element in [ElementId::QrCode, ElementId::Logo] {
            let frame = settings.frame(element);
            assert_eq!(frame.size.0, frame.size.1);
        }
    }
}
