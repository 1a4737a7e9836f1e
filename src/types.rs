//! Core data types for the collateral designer.
//!
//! This module defines the settings model shared by the canvas engine and the
//! customization panel: element identity, per-shape layout frames, text
//! styling, and the partial-update patch applied by every control.

use crate::layout;
use crate::pattern::PatternKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque sRGB color, stored without alpha.
///
/// Kept independent of any rendering backend so the pattern resolver and the
/// settings model can be interpreted by any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex string.
    ///
    /// # Returns
    ///
    /// The parsed color, or `None` if the string is not a 7-character
    /// `#`-prefixed hex triplet.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Formats the color as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Identifies one of the five movable canvas elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    /// The large table number text.
    TableNumber,
    /// The instructional "scan, order, pay" text.
    ActionText,
    /// The rendered QR code.
    QrCode,
    /// The venue name text.
    VenueName,
    /// The uploaded venue logo image.
    Logo,
}

impl ElementId {
    /// All elements in rendering (back-to-front) order.
    pub const ALL: [ElementId; 5] = [
        ElementId::TableNumber,
        ElementId::ActionText,
        ElementId::QrCode,
        ElementId::VenueName,
        ElementId::Logo,
    ];

    /// Human-readable label for panel controls.
    pub fn label(self) -> &'static str {
        match self {
            ElementId::TableNumber => "Table Number",
            ElementId::ActionText => "Action Text",
            ElementId::QrCode => "QR Code",
            ElementId::VenueName => "Venue Name",
            ElementId::Logo => "Logo",
        }
    }

    /// Whether this element displays editable text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            ElementId::TableNumber | ElementId::ActionText | ElementId::VenueName
        )
    }
}

/// The card silhouette being designed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// A 300x400 portrait card.
    Rectangle,
    /// A 400x400 card with rounded corners.
    Square,
    /// A 400-diameter circular card.
    Circle,
}

impl Shape {
    /// All selectable shapes, in panel order.
    pub const ALL: [Shape; 3] = [Shape::Rectangle, Shape::Square, Shape::Circle];

    /// Human-readable label for panel controls.
    pub fn label(self) -> &'static str {
        match self {
            Shape::Rectangle => "Rectangle",
            Shape::Square => "Square",
            Shape::Circle => "Circle",
        }
    }
}

/// Position and size of one element, in canvas-local pixels.
///
/// `position` is the top-left corner; the frame's bounding box always stays
/// inside the canvas (enforced by clamping in [`crate::layout`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    /// Top-left offset from the canvas origin, `(x, y)`.
    pub position: (f32, f32),
    /// Box extent, `(width, height)`.
    pub size: (f32, f32),
}

impl ElementFrame {
    /// Creates a frame from position and size tuples.
    pub const fn new(position: (f32, f32), size: (f32, f32)) -> Self {
        Self { position, size }
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f32 {
        self.position.0
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.position.0 + self.size.0
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f32 {
        self.position.1
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.position.1 + self.size.1
    }

    /// X coordinate of the horizontal center.
    pub fn center_x(&self) -> f32 {
        self.position.0 + self.size.0 / 2.0
    }

    /// Y coordinate of the vertical center.
    pub fn center_y(&self) -> f32 {
        self.position.1 + self.size.1 / 2.0
    }
}

/// Per-shape store of element frames.
///
/// Each shape owns an independent, fully populated frame set, so switching
/// the active shape never disturbs the layout last committed under another
/// shape. Frames are seeded from the shape defaults exactly once, at
/// creation; after that the stored frame is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayouts {
    layouts: HashMap<Shape, HashMap<ElementId, ElementFrame>>,
}

impl Default for ShapeLayouts {
    fn default() -> Self {
        let mut layouts = HashMap::new();
        for shape in Shape::ALL {
            layouts.insert(shape, layout::default_frames(shape).into_iter().collect());
        }
        Self { layouts }
    }
}

impl ShapeLayouts {
    /// Returns the frame stored for an element under a shape.
    ///
    /// Falls back to the shape default if the entry is missing, which can
    /// only happen with hand-edited serialized state.
    pub fn frame(&self, shape: Shape, element: ElementId) -> ElementFrame {
        self.layouts
            .get(&shape)
            .and_then(|frames| frames.get(&element))
            .copied()
            .unwrap_or_else(|| layout::default_frame(shape, element))
    }

    /// Replaces the position stored for an element under a shape.
    pub fn set_position(&mut self, shape: Shape, element: ElementId, position: (f32, f32)) {
        self.frame_mut(shape, element).position = position;
    }

    /// Replaces the size stored for an element under a shape.
    pub fn set_size(&mut self, shape: Shape, element: ElementId, size: (f32, f32)) {
        self.frame_mut(shape, element).size = size;
    }

    fn frame_mut(&mut self, shape: Shape, element: ElementId) -> &mut ElementFrame {
        self.layouts
            .entry(shape)
            .or_default()
            .entry(element)
            .or_insert_with(|| layout::default_frame(shape, element))
    }
}

/// Horizontal placement of text inside its element frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor text to the frame's left edge.
    Left,
    /// Center text in the frame.
    Center,
    /// Anchor text to the frame's right edge.
    Right,
}

impl TextAlign {
    /// All alignments, in panel order.
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    /// Human-readable label for panel controls.
    pub fn label(self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
        }
    }
}

/// Styling flags shared by all text elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Render text with a heavier weight.
    pub bold: bool,
    /// Underline text.
    pub underline: bool,
    /// Paint a highlight box behind text.
    pub highlight: bool,
    /// Fill color of the highlight box.
    pub highlight_color: Rgb,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bold: false,
            underline: false,
            highlight: false,
            highlight_color: Rgb::new(0xC8, 0xFF, 0x00),
        }
    }
}

/// Font size (pixels) of each text element, independent of its frame size.
///
/// Resizing an element's frame never changes its font size; the frame only
/// bounds where the text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Table number text size.
    pub table_number: f32,
    /// Action text size.
    pub action_text: f32,
    /// Venue name text size.
    pub venue_name: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            table_number: 48.0,
            action_text: 30.0,
            venue_name: 18.0,
        }
    }
}

impl FontSizes {
    /// Returns the font size for a text element, or `None` for QR/logo.
    pub fn get(&self, element: ElementId) -> Option<f32> {
        match element {
            ElementId::TableNumber => Some(self.table_number),
            ElementId::ActionText => Some(self.action_text),
            ElementId::VenueName => Some(self.venue_name),
            ElementId::QrCode | ElementId::Logo => None,
        }
    }

    fn set(&mut self, element: ElementId, size: f32) {
        match element {
            ElementId::TableNumber => self.table_number = size,
            ElementId::ActionText => self.action_text = size,
            ElementId::VenueName => self.venue_name = size,
            ElementId::QrCode | ElementId::Logo => {}
        }
    }
}

/// The complete design state read by the renderer and mutated by controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Card background fill.
    pub background: Rgb,
    /// Ink color for text and pattern tiles.
    pub text_color: Rgb,
    /// Table number text content.
    pub table_number: String,
    /// Instructional text content.
    pub action_text: String,
    /// Venue name text content. Empty hides the element.
    pub venue_name: String,
    /// Value encoded into the QR element.
    pub qr_value: String,
    /// Opacity applied to the uploaded background image, 0–1.
    pub background_opacity: f32,
    /// Active card silhouette.
    pub shape: Shape,
    /// Active background pattern.
    pub pattern: PatternKind,
    /// Corner rounding (pixels) for rectangle and square cards.
    pub corner_radius: f32,
    /// Catalog name of the global font family.
    pub font_family: String,
    /// Per-element font overrides; absent entries fall back to the global font.
    pub font_overrides: HashMap<ElementId, String>,
    /// Per-element text alignment; absent entries use the element default.
    pub alignments: HashMap<ElementId, TextAlign>,
    /// Shared text styling flags.
    pub text_style: TextStyle,
    /// Per-element font sizes.
    pub font_sizes: FontSizes,
    /// Per-shape element frames.
    pub layouts: ShapeLayouts,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            background: Rgb::new(0xCE, 0xEB, 0xF7),
            text_color: Rgb::new(0x1F, 0x46, 0x58),
            table_number: "100".to_string(),
            action_text: "Scan, Order, Pay".to_string(),
            venue_name: "Your Venue".to_string(),
            qr_value: "https://meand.u/demo".to_string(),
            background_opacity: 1.0,
            shape: Shape::Rectangle,
            pattern: PatternKind::Waves,
            corner_radius: 18.0,
            font_family: "Poppins".to_string(),
            font_overrides: HashMap::new(),
            alignments: HashMap::new(),
            text_style: TextStyle::default(),
            font_sizes: FontSizes::default(),
            layouts: ShapeLayouts::default(),
        }
    }
}

impl DesignSettings {
    /// Returns the text content of a text element, or `None` for QR/logo.
    pub fn text(&self, element: ElementId) -> Option<&str> {
        match element {
            ElementId::TableNumber => Some(&self.table_number),
            ElementId::ActionText => Some(&self.action_text),
            ElementId::VenueName => Some(&self.venue_name),
            ElementId::QrCode | ElementId::Logo => None,
        }
    }

    /// Returns the font catalog name in effect for an element.
    pub fn font_for(&self, element: ElementId) -> &str {
        self.font_overrides
            .get(&element)
            .map(String::as_str)
            .unwrap_or(&self.font_family)
    }

    /// Returns the text alignment in effect for an element.
    ///
    /// The venue name centers by default; all other text aligns left.
    pub fn alignment(&self, element: ElementId) -> TextAlign {
        self.alignments.get(&element).copied().unwrap_or(match element {
            ElementId::VenueName => TextAlign::Center,
            _ => TextAlign::Left,
        })
    }

    /// Returns the frame of an element under the active shape.
    pub fn frame(&self, element: ElementId) -> ElementFrame {
        self.layouts.frame(self.shape, element)
    }

    /// Shallow-merges a partial update into the settings.
    ///
    /// This is the single mutation path used by gesture controllers and panel
    /// controls alike. Geometry fields are clamped on the way in, so no update
    /// can violate the canvas-bounds or square-element invariants.
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        log::debug!("applying settings update: {update:?}");
        let SettingsUpdate {
            shape,
            pattern,
            background,
            text_color,
            corner_radius,
            background_opacity,
            font_family,
            font_override,
            alignment,
            font_size,
            text_style,
            qr_value,
            element_text,
            element_position,
            element_size,
        } = update;

        if let Some(shape) = shape {
            self.shape = shape;
        }
        if let Some(pattern) = pattern {
            self.pattern = pattern;
        }
        if let Some(background) = background {
            self.background = background;
        }
        if let Some(text_color) = text_color {
            self.text_color = text_color;
        }
        if let Some(radius) = corner_radius {
            self.corner_radius = radius.clamp(0.0, 60.0);
        }
        if let Some(opacity) = background_opacity {
            self.background_opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(font) = font_family {
            self.font_family = font;
        }
        if let Some((element, font)) = font_override {
            match font {
                Some(font) => {
                    self.font_overrides.insert(element, font);
                }
                None => {
                    self.font_overrides.remove(&element);
                }
            }
        }
        if let Some((element, align)) = alignment {
            self.alignments.insert(element, align);
        }
        if let Some((element, size)) = font_size {
            self.font_sizes.set(element, size.clamp(8.0, 120.0));
        }
        if let Some(style) = text_style {
            self.text_style = style;
        }
        if let Some(value) = qr_value {
            self.qr_value = value;
        }
        if let Some((element, text)) = element_text {
            match element {
                ElementId::TableNumber => self.table_number = text,
                ElementId::ActionText => self.action_text = text,
                ElementId::VenueName => self.venue_name = text,
                ElementId::QrCode | ElementId::Logo => {}
            }
        }
        if let Some((element, position)) = element_position {
            let size = self.frame(element).size;
            let clamped = layout::clamp_position(self.shape, size, position);
            self.layouts.set_position(self.shape, element, clamped);
        }
        if let Some((element, size)) = element_size {
            let position = self.frame(element).position;
            let clamped = layout::clamp_size(element, self.shape, position, size);
            self.layouts.set_size(self.shape, element, clamped);
        }
    }

    /// Serializes the settings to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A partial settings patch; unset fields leave the settings untouched.
///
/// Built with struct-update syntax at call sites:
///
/// ```
/// use collateral_studio::{SettingsUpdate, Shape};
///
/// let update = SettingsUpdate {
///     shape: Some(Shape::Circle),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    /// New active shape.
    pub shape: Option<Shape>,
    /// New background pattern.
    pub pattern: Option<PatternKind>,
    /// New background fill color.
    pub background: Option<Rgb>,
    /// New ink color.
    pub text_color: Option<Rgb>,
    /// New corner rounding.
    pub corner_radius: Option<f32>,
    /// New background image opacity.
    pub background_opacity: Option<f32>,
    /// New global font catalog name.
    pub font_family: Option<String>,
    /// Set (`Some`) or clear (`None`) a per-element font override.
    pub font_override: Option<(ElementId, Option<String>)>,
    /// New alignment for one element.
    pub alignment: Option<(ElementId, TextAlign)>,
    /// New font size for one text element.
    pub font_size: Option<(ElementId, f32)>,
    /// New shared text styling flags.
    pub text_style: Option<TextStyle>,
    /// New QR value.
    pub qr_value: Option<String>,
    /// New text content for one text element.
    pub element_text: Option<(ElementId, String)>,
    /// New position for one element under the active shape.
    pub element_position: Option<(ElementId, (f32, f32))>,
    /// New size for one element under the active shape.
    pub element_size: Option<(ElementId, (f32, f32))>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas_size;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_hex_roundtrip() {
        let color = Rgb::from_hex("#CEEBF7").unwrap();
        assert_eq!(color, Rgb::new(0xCE, 0xEB, 0xF7));
        assert_eq!(color.to_hex(), "#CEEBF7");
    }

    #[test]
    fn test_rgb_rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("CEEBF7"), None);
        assert_eq!(Rgb::from_hex("#CEEB"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_default_frames_within_bounds_for_all_shapes() {
        let layouts = ShapeLayouts::default();
        for shape in Shape::ALL {
            let (width, height) = canvas_size(shape);
            for element in ElementId::ALL {
                let frame = layouts.frame(shape, element);
                assert!(frame.left() >= 0.0, "{shape:?}/{element:?} left");
                assert!(frame.top() >= 0.0, "{shape:?}/{element:?} top");
                assert!(frame.right() <= width, "{shape:?}/{element:?} right");
                assert!(frame.bottom() <= height, "{shape:?}/{element:?} bottom");
            }
        }
    }

    #[test]
    fn test_shape_switch_preserves_inactive_layouts() {
        let mut settings = DesignSettings::default();
        let square_before = settings.layouts.frame(Shape::Square, ElementId::QrCode);

        // Drag the QR element while the rectangle shape is active.
        settings.apply_update(SettingsUpdate {
            element_position: Some((ElementId::QrCode, (42.0, 200.0))),
            ..Default::default()
        });
        let rect_after_drag = settings.frame(ElementId::QrCode);
        assert_eq!(rect_after_drag.position, (42.0, 200.0));

        // Switch to square and back; the rectangle layout must be untouched.
        settings.apply_update(SettingsUpdate {
            shape: Some(Shape::Square),
            ..Default::default()
        });
        assert_eq!(settings.frame(ElementId::QrCode), square_before);
        settings.apply_update(SettingsUpdate {
            shape: Some(Shape::Rectangle),
            ..Default::default()
        });
        assert_eq!(settings.frame(ElementId::QrCode), rect_after_drag);
    }

    #[test]
    fn test_apply_update_clamps_position_to_canvas() {
        let mut settings = DesignSettings::default();
        settings.apply_update(SettingsUpdate {
            element_position: Some((ElementId::TableNumber, (-50.0, 9999.0))),
            ..Default::default()
        });
        let frame = settings.frame(ElementId::TableNumber);
        let (_, height) = canvas_size(settings.shape);
        assert_eq!(frame.position.0, 0.0);
        assert_eq!(frame.bottom(), height);
    }

    #[test]
    fn test_apply_update_keeps_qr_square() {
        let mut settings = DesignSettings::default();
        settings.apply_update(SettingsUpdate {
            element_size: Some((ElementId::QrCode, (150.0, 100.0))),
            ..Default::default()
        });
        let frame = settings.frame(ElementId::QrCode);
        assert_eq!(frame.size.0, frame.size.1);
        assert_eq!(frame.size.0, 150.0);
    }

    #[test]
    fn test_font_fallback_and_override() {
        let mut settings = DesignSettings::default();
        assert_eq!(settings.font_for(ElementId::VenueName), "Poppins");
        settings.apply_update(SettingsUpdate {
            font_override: Some((ElementId::VenueName, Some("Courier New".to_string()))),
            ..Default::default()
        });
        assert_eq!(settings.font_for(ElementId::VenueName), "Courier New");
        assert_eq!(settings.font_for(ElementId::TableNumber), "Poppins");
        settings.apply_update(SettingsUpdate {
            font_override: Some((ElementId::VenueName, None)),
            ..Default::default()
        });
        assert_eq!(settings.font_for(ElementId::VenueName), "Poppins");
    }

    #[test]
    fn test_default_alignment_centers_venue_name() {
        let settings = DesignSettings::default();
        assert_eq!(settings.alignment(ElementId::VenueName), TextAlign::Center);
        assert_eq!(settings.alignment(ElementId::TableNumber), TextAlign::Left);
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let mut settings = DesignSettings::default();
        settings.apply_update(SettingsUpdate {
            shape: Some(Shape::Circle),
            element_position: Some((ElementId::Logo, (12.0, 34.0))),
            ..Default::default()
        });

        let json = settings.to_json().unwrap();
        let restored = DesignSettings::from_json(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_empty_text_commit_is_valid() {
        let mut settings = DesignSettings::default();
        settings.apply_update(SettingsUpdate {
            element_text: Some((ElementId::VenueName, String::new())),
            ..Default::default()
        });
        assert_eq!(settings.text(ElementId::VenueName), Some(""));
    }
}
