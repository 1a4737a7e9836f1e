//! Canvas rendering for the composed collateral.
//!
//! Layers are drawn back to front: the shape container (fill plus pattern
//! tiles clipped to the silhouette), the optional background image, the five
//! positioned elements, and finally the interaction overlays (selection
//! outline, resize handle, alignment guides). Rendering is a pure function of
//! the settings and layout; the only cached artifact is the QR texture, which
//! is rebuilt when the encoded value changes.

use super::state::{DesignerApp, QrTexture};
use crate::constants::QR_QUIET_ZONE;
use crate::layout::GuideAxis;
use crate::pattern::{self, TilePrimitive};
use crate::types::{ElementId, Rgb, Shape, TextAlign};
use crate::catalog::{self, FontSlot};
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Converts a design color to an opaque egui color.
pub(crate) fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Accent color for selection outlines, handles, and guides.
const ACCENT: egui::Color32 = egui::Color32::from_rgb(100, 150, 255);

impl DesignerApp {
    /// Resolves the egui font family in effect for an element.
    pub fn font_family_for(&self, element: ElementId) -> egui::FontFamily {
        match catalog::font_slot(self.settings.font_for(element)) {
            FontSlot::Proportional => egui::FontFamily::Proportional,
            FontSlot::Monospace => egui::FontFamily::Monospace,
        }
    }

    /// Rebuilds the QR texture if the encoded value changed since last frame.
    ///
    /// The module grid is rendered black-on-white at error-correction level H
    /// and uploaded with nearest filtering so modules stay crisp at any size.
    pub fn ensure_qr_texture(&mut self, ctx: &egui::Context) {
        if self
            .assets
            .qr
            .as_ref()
            .is_some_and(|qr| qr.value == self.settings.qr_value)
        {
            return;
        }

        match qrcode::QrCode::with_error_correction_level(
            self.settings.qr_value.as_bytes(),
            qrcode::EcLevel::H,
        ) {
            Ok(code) => {
                let width = code.width();
                let mut rgba = Vec::with_capacity(width * width * 4);
                for module in code.to_colors() {
                    let value = if module == qrcode::Color::Dark { 0 } else { 255 };
                    rgba.extend_from_slice(&[value, value, value, 255]);
                }
                let image = egui::ColorImage::from_rgba_unmultiplied([width, width], &rgba);
                let texture =
                    ctx.load_texture("qr-code", image, egui::TextureOptions::NEAREST);
                self.assets.qr = Some(QrTexture {
                    value: self.settings.qr_value.clone(),
                    texture,
                });
            }
            Err(err) => {
                log::warn!("QR encoding failed for {:?}: {err}", self.settings.qr_value);
                self.assets.qr = None;
            }
        }
    }

    /// Renders the full collateral into the given canvas rectangle.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the card canvas
    /// * `hovered` - Element currently under the pointer, for the hover outline
    pub fn render_collateral(
        &self,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
        hovered: Option<ElementId>,
    ) {
        self.draw_card_base(painter, canvas_rect);
        self.draw_background_image(painter, canvas_rect);

        let origin = canvas_rect.min;
        for element in ElementId::ALL {
            if !self.element_visible(element) {
                continue;
            }
            // The inline edit field replaces the element while editing.
            if self.interaction.editing_element == Some(element) {
                continue;
            }
            match element {
                ElementId::QrCode => self.draw_qr_element(painter, origin),
                ElementId::Logo => self.draw_logo_element(painter, origin),
                _ => self.draw_text_element(painter, element, origin),
            }
        }

        self.draw_overlays(painter, origin, hovered);
    }

    /// Draws the shape container: background fill plus pattern tiles.
    fn draw_card_base(&self, painter: &egui::Painter, rect: egui::Rect) {
        let fill = color32(self.settings.background);
        match self.settings.shape {
            Shape::Circle => {
                painter.circle_filled(rect.center(), rect.width() / 2.0, fill);
            }
            Shape::Rectangle | Shape::Square => {
                painter.rect_filled(rect, self.settings.corner_radius, fill);
            }
        }
        self.draw_pattern(painter, rect);
    }

    /// Tiles the resolved pattern descriptor across the card.
    ///
    /// Rectangular shapes rely on the clip rect; the circle additionally
    /// skips primitives whose anchors fall outside the silhouette.
    fn draw_pattern(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(descriptor) = pattern::resolve(self.settings.pattern, self.settings.text_color)
        else {
            return;
        };

        let ink = egui::Color32::from_rgba_unmultiplied(
            descriptor.ink.r,
            descriptor.ink.g,
            descriptor.ink.b,
            descriptor.alpha,
        );
        let clipped = painter.with_clip_rect(rect);
        let (tile_w, tile_h) = descriptor.tile;

        let mut passes = vec![(0.0, 0.0)];
        if let Some(stagger) = descriptor.stagger {
            passes.push(stagger);
        }

        for (offset_x, offset_y) in passes {
            let mut y = rect.top() + offset_y;
            while y < rect.bottom() {
                let mut x = rect.left() + offset_x;
                while x < rect.right() {
                    self.draw_tile(&clipped, rect, (x, y), (tile_w, tile_h), descriptor.primitive, ink);
                    x += tile_w;
                }
                y += tile_h;
            }
        }
    }

    /// Draws one tile's primitive at the given origin.
    fn draw_tile(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        (x, y): (f32, f32),
        (tile_w, tile_h): (f32, f32),
        primitive: TilePrimitive,
        ink: egui::Color32,
    ) {
        let inside = |pos: egui::Pos2| self.in_silhouette(rect, pos);
        match primitive {
            TilePrimitive::Dot { radius } => {
                let center = egui::pos2(x, y);
                if inside(center) {
                    painter.circle_filled(center, radius, ink);
                }
            }
            TilePrimitive::Diagonal { band } => {
                let from = egui::pos2(x, y + tile_h);
                let to = egui::pos2(x + tile_w, y);
                if inside(from) && inside(to) {
                    painter.line_segment([from, to], egui::Stroke::new(band, ink));
                }
            }
            TilePrimitive::Crosshatch { band } => {
                let stroke = egui::Stroke::new(band, ink);
                let up = [egui::pos2(x, y + tile_h), egui::pos2(x + tile_w, y)];
                let down = [egui::pos2(x, y), egui::pos2(x + tile_w, y + tile_h)];
                if inside(up[0]) && inside(up[1]) {
                    painter.line_segment(up, stroke);
                }
                if inside(down[0]) && inside(down[1]) {
                    painter.line_segment(down, stroke);
                }
            }
            TilePrimitive::GridLines { width } => {
                let stroke = egui::Stroke::new(width, ink);
                let vertical = [egui::pos2(x, y), egui::pos2(x, y + tile_h)];
                let horizontal = [egui::pos2(x, y), egui::pos2(x + tile_w, y)];
                if inside(vertical[0]) && inside(vertical[1]) {
                    painter.line_segment(vertical, stroke);
                }
                if inside(horizontal[0]) && inside(horizontal[1]) {
                    painter.line_segment(horizontal, stroke);
                }
            }
            TilePrimitive::Wave { amplitude } => {
                let mid = y + tile_h / 2.0;
                let samples = 12;
                let points: Vec<egui::Pos2> = (0..=samples)
                    .map(|i| {
                        let t = i as f32 / samples as f32;
                        let phase = t * std::f32::consts::TAU;
                        egui::pos2(x + t * tile_w, mid + amplitude * phase.sin())
                    })
                    .collect();
                if points.iter().all(|point| inside(*point)) {
                    painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, ink)));
                }
            }
            TilePrimitive::ZigZag { amplitude } => {
                let mid = y + tile_h / 2.0;
                let points = vec![
                    egui::pos2(x, mid + amplitude),
                    egui::pos2(x + tile_w / 2.0, mid - amplitude),
                    egui::pos2(x + tile_w, mid + amplitude),
                ];
                if points.iter().all(|point| inside(*point)) {
                    painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, ink)));
                }
            }
        }
    }

    /// Whether a point lies inside the card silhouette.
    fn in_silhouette(&self, rect: egui::Rect, pos: egui::Pos2) -> bool {
        match self.settings.shape {
            Shape::Circle => {
                let radius = rect.width() / 2.0 - 2.0;
                rect.center().distance(pos) <= radius
            }
            Shape::Rectangle | Shape::Square => rect.contains(pos),
        }
    }

    /// Draws the uploaded background image over the card, tinted by opacity.
    fn draw_background_image(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(texture) = &self.assets.background else {
            return;
        };
        let alpha = (self.settings.background_opacity * 255.0).round() as u8;
        let tint = egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter
            .with_clip_rect(rect)
            .image(texture.id(), rect, uv, tint);
    }

    /// Draws one text element with the shared style flags applied.
    fn draw_text_element(&self, painter: &egui::Painter, element: ElementId, origin: egui::Pos2) {
        let text = self.settings.text(element).unwrap_or_default();
        if text.is_empty() {
            return;
        }

        let rect = self.element_screen_rect(element, origin);
        let color = color32(self.settings.text_color);
        let font_size = self.settings.font_sizes.get(element).unwrap_or(18.0);
        let font_id = egui::FontId::new(font_size, self.font_family_for(element));
        let galley = painter.layout_no_wrap(text.to_string(), font_id, color);
        let galley_size = galley.size();

        let x = match self.settings.alignment(element) {
            TextAlign::Left => rect.left(),
            TextAlign::Center => rect.center().x - galley_size.x / 2.0,
            TextAlign::Right => rect.right() - galley_size.x,
        };
        let pos = egui::pos2(x, rect.top());

        let style = self.settings.text_style;
        if style.highlight {
            let highlight_rect = egui::Rect::from_min_size(
                egui::pos2(pos.x - 4.0, pos.y),
                egui::vec2(galley_size.x + 8.0, galley_size.y),
            );
            painter.rect_filled(highlight_rect, 2.0, color32(style.highlight_color));
        }

        painter.galley(pos, galley.clone(), color);
        if style.bold {
            // The bundled fonts have a single weight; a half-pixel double
            // strike stands in for bold.
            painter.galley(pos + egui::vec2(0.5, 0.0), galley.clone(), color);
        }
        if style.underline {
            let y = pos.y + galley_size.y - 1.0;
            painter.line_segment(
                [egui::pos2(pos.x, y), egui::pos2(pos.x + galley_size.x, y)],
                egui::Stroke::new(1.0, color),
            );
        }
    }

    /// Draws the QR element: a white backing square with the module grid
    /// inset by the quiet zone.
    ///
    /// The backing stays white whatever the theme, so the code scans against
    /// any background.
    fn draw_qr_element(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let rect = self.element_screen_rect(ElementId::QrCode, origin);
        painter.rect_filled(rect, 2.0, egui::Color32::WHITE);

        if let Some(qr) = &self.assets.qr {
            let inner = rect.shrink(QR_QUIET_ZONE);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(qr.texture.id(), inner, uv, egui::Color32::WHITE);
        }
    }

    /// Draws the uploaded logo image inside its frame.
    fn draw_logo_element(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let Some(texture) = &self.assets.logo else {
            return;
        };
        let rect = self.element_screen_rect(ElementId::Logo, origin);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
    }

    /// Draws interaction overlays: hover/selection outlines, the resize
    /// handle, and active alignment guides.
    fn draw_overlays(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        hovered: Option<ElementId>,
    ) {
        if let Some(element) = hovered {
            if self.element_visible(element) && self.interaction.selected_element != Some(element)
            {
                let rect = self.element_screen_rect(element, origin);
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.6)),
                    StrokeKind::Outside,
                );
            }
        }

        if let Some(element) = self.interaction.selected_element {
            if self.element_visible(element) {
                let rect = self.element_screen_rect(element, origin);
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(1.5, ACCENT),
                    StrokeKind::Outside,
                );
                painter.rect_filled(self.resize_handle_rect(element, origin), 1.0, ACCENT);
            }
        }

        let stroke = egui::Stroke::new(1.0, ACCENT);
        for guide in &self.interaction.guides {
            let segment = match guide.axis {
                GuideAxis::Horizontal => {
                    let y = origin.y + guide.coordinate;
                    [
                        egui::pos2(origin.x + guide.span_start, y),
                        egui::pos2(origin.x + guide.span_end, y),
                    ]
                }
                GuideAxis::Vertical => {
                    let x = origin.x + guide.coordinate;
                    [
                        egui::pos2(x, origin.y + guide.span_start),
                        egui::pos2(x, origin.y + guide.span_end),
                    ]
                }
            };
            painter.line_segment(segment, stroke);
        }
    }
}
