//! User interface components and rendering logic for the collateral designer.
//!
//! This module contains all the UI-related code including the main
//! application struct, the canvas with its drag/resize/snap interactions,
//! the customization tab panel, and the order form.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main DesignerApp
//! - `canvas` - Element hit testing, dragging with snapping, and resizing
//! - `rendering` - Drawing the composed collateral and interaction overlays
//! - `editor` - Inline text editing on double-clicked elements
//! - `file_ops` - Logo and background image loading
//! - `order` - The "Next Steps" order form and simulated checkout

mod canvas;
mod editor;
mod file_ops;
mod order;
mod rendering;
mod state;

pub use state::DesignerApp;

use crate::catalog;
use crate::layout;
use crate::pattern::PatternKind;
use crate::types::{ElementId, Rgb, SettingsUpdate, Shape, TextAlign};
use eframe::egui;
use rendering::color32;
use state::PanelTab;

/// Text elements offered in the Text & Font tab, in display order.
const TEXT_ELEMENTS: [ElementId; 3] = [
    ElementId::TableNumber,
    ElementId::ActionText,
    ElementId::VenueName,
];

impl DesignerApp {
    /// Creates the application, restoring persisted UI state if present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Self::default()
    }

    /// Draws the central canvas and runs all gesture handling for the frame.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        let (width, height) = layout::canvas_size(self.settings.shape);
        let canvas_rect =
            egui::Rect::from_center_size(response.rect.center(), egui::vec2(width, height));
        let origin = canvas_rect.min;

        self.handle_element_gestures(ui, &response, origin);
        self.handle_canvas_click(&response, origin);
        self.handle_canvas_double_click(&response, origin);

        let hovered = response
            .hover_pos()
            .and_then(|pos| self.find_element_at(self.screen_to_canvas(pos, origin)));

        self.ensure_qr_texture(ui.ctx());
        self.render_collateral(&painter, canvas_rect, hovered);
        self.draw_inline_editor(ui, origin);
    }

    /// Draws the tab strip and the active tab's controls.
    fn draw_control_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Customize Your Collateral");
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for tab in PanelTab::ALL {
                if ui
                    .selectable_label(self.active_tab == tab, tab.label())
                    .clicked()
                {
                    self.active_tab = tab;
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            match self.active_tab {
                PanelTab::Layout => self.draw_layout_tab(ui),
                PanelTab::Colors => self.draw_colors_tab(ui),
                PanelTab::Text => self.draw_text_tab(ui),
                PanelTab::Patterns => self.draw_patterns_tab(ui),
                PanelTab::Logo => self.draw_logo_tab(ui),
            }

            ui.add_space(12.0);
            ui.separator();
            if ui.button("Next Steps").clicked() {
                self.order.show_form = true;
            }
        });
    }

    /// Shape picker, corner radius, and background image controls.
    fn draw_layout_tab(&mut self, ui: &mut egui::Ui) {
        ui.label("Card Shape");
        ui.horizontal(|ui| {
            for shape in Shape::ALL {
                if ui
                    .radio(self.settings.shape == shape, shape.label())
                    .clicked()
                {
                    self.settings.apply_update(SettingsUpdate {
                        shape: Some(shape),
                        ..Default::default()
                    });
                }
            }
        });
        ui.add_space(8.0);

        if self.settings.shape != Shape::Circle {
            let mut radius = self.settings.corner_radius;
            if ui
                .add(egui::Slider::new(&mut radius, 0.0..=60.0).text("Corner radius"))
                .changed()
            {
                self.settings.apply_update(SettingsUpdate {
                    corner_radius: Some(radius),
                    ..Default::default()
                });
            }
            ui.add_space(8.0);
        }

        ui.label("Background Image");
        ui.horizontal(|ui| {
            if ui.button("Upload…").clicked() {
                self.pick_background(ui.ctx());
            }
            if self.assets.background.is_some() && ui.button("Remove").clicked() {
                self.remove_background();
            }
        });
        if self.assets.background.is_some() {
            let mut opacity = self.settings.background_opacity;
            if ui
                .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
                .changed()
            {
                self.settings.apply_update(SettingsUpdate {
                    background_opacity: Some(opacity),
                    ..Default::default()
                });
            }
        }
    }

    /// Scheme presets, the random generator, and free color pickers.
    fn draw_colors_tab(&mut self, ui: &mut egui::Ui) {
        ui.label("Color Schemes");
        for row in catalog::COLOR_SCHEMES.chunks(2) {
            ui.horizontal(|ui| {
                for scheme in row {
                    let button = egui::Button::new(
                        egui::RichText::new(scheme.name).color(color32(scheme.text)),
                    )
                    .fill(color32(scheme.background))
                    .min_size(egui::vec2(120.0, 26.0));
                    if ui.add(button).clicked() {
                        self.settings.apply_update(SettingsUpdate {
                            background: Some(scheme.background),
                            text_color: Some(scheme.text),
                            ..Default::default()
                        });
                    }
                }
            });
        }
        ui.add_space(8.0);

        if ui.button("Surprise Me").clicked() {
            self.apply_random_palette();
        }
        ui.add_space(8.0);

        ui.label("Custom Colors");
        if let Some(rgb) = color_picker_row(ui, "Background", self.settings.background) {
            self.settings.apply_update(SettingsUpdate {
                background: Some(rgb),
                ..Default::default()
            });
        }
        if let Some(rgb) = color_picker_row(ui, "Text", self.settings.text_color) {
            self.settings.apply_update(SettingsUpdate {
                text_color: Some(rgb),
                ..Default::default()
            });
        }
        if let Some(rgb) = color_picker_row(ui, "Highlight", self.settings.text_style.highlight_color)
        {
            let mut style = self.settings.text_style;
            style.highlight_color = rgb;
            self.settings.apply_update(SettingsUpdate {
                text_style: Some(style),
                ..Default::default()
            });
        }
    }

    /// Applies one of the curated random palettes.
    fn apply_random_palette(&mut self) {
        use rand::Rng;
        let mut rng = rand::rng();
        let palette = catalog::RANDOM_PALETTES[rng.random_range(0..catalog::RANDOM_PALETTES.len())];
        let mut style = self.settings.text_style;
        style.highlight_color = palette.highlight;
        self.settings.apply_update(SettingsUpdate {
            background: Some(palette.background),
            text_color: Some(palette.text),
            text_style: Some(style),
            ..Default::default()
        });
    }

    /// Text contents, fonts, style flags, sizes, and alignment.
    fn draw_text_tab(&mut self, ui: &mut egui::Ui) {
        ui.label("Text Content");
        self.element_text_field(ui, "Table Number", ElementId::TableNumber);
        self.element_text_field(ui, "Action Text", ElementId::ActionText);
        self.element_text_field(ui, "Venue Name", ElementId::VenueName);

        ui.label("QR Link");
        let mut qr_value = self.settings.qr_value.clone();
        if ui.text_edit_singleline(&mut qr_value).changed() {
            self.settings.apply_update(SettingsUpdate {
                qr_value: Some(qr_value),
                ..Default::default()
            });
        }
        ui.add_space(8.0);

        egui::ComboBox::from_label("Font")
            .selected_text(self.settings.font_family.clone())
            .show_ui(ui, |ui| {
                for entry in catalog::FONTS {
                    if ui
                        .selectable_label(self.settings.font_family == entry.name, entry.name)
                        .clicked()
                    {
                        self.settings.apply_update(SettingsUpdate {
                            font_family: Some(entry.name.to_string()),
                            ..Default::default()
                        });
                    }
                }
            });

        ui.collapsing("Per-element fonts", |ui| {
            for element in TEXT_ELEMENTS {
                let current = self.settings.font_overrides.get(&element).cloned();
                egui::ComboBox::from_id_salt(("font-override", element))
                    .selected_text(current.clone().unwrap_or_else(|| "Global".to_string()))
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(current.is_none(), "Global").clicked() {
                            self.settings.apply_update(SettingsUpdate {
                                font_override: Some((element, None)),
                                ..Default::default()
                            });
                        }
                        for entry in catalog::FONTS {
                            let selected = current.as_deref() == Some(entry.name);
                            if ui.selectable_label(selected, entry.name).clicked() {
                                self.settings.apply_update(SettingsUpdate {
                                    font_override: Some((element, Some(entry.name.to_string()))),
                                    ..Default::default()
                                });
                            }
                        }
                    });
            }
        });
        ui.add_space(8.0);

        ui.label("Style");
        let mut style = self.settings.text_style;
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut style.bold, "Bold").changed();
            changed |= ui.checkbox(&mut style.underline, "Underline").changed();
            changed |= ui.checkbox(&mut style.highlight, "Highlight").changed();
        });
        if style.highlight {
            if let Some(rgb) = color_picker_row(ui, "Highlight color", style.highlight_color) {
                style.highlight_color = rgb;
                changed = true;
            }
        }
        if changed {
            self.settings.apply_update(SettingsUpdate {
                text_style: Some(style),
                ..Default::default()
            });
        }
        ui.add_space(8.0);

        ui.label("Font Size");
        for element in TEXT_ELEMENTS {
            let Some(mut size) = self.settings.font_sizes.get(element) else {
                continue;
            };
            if ui
                .add(egui::Slider::new(&mut size, 12.0..=80.0).text(element.label()))
                .changed()
            {
                self.settings.apply_update(SettingsUpdate {
                    font_size: Some((element, size)),
                    ..Default::default()
                });
            }
        }
        ui.add_space(8.0);

        ui.label("Alignment");
        for element in TEXT_ELEMENTS {
            ui.horizontal(|ui| {
                ui.label(element.label());
                for align in TextAlign::ALL {
                    let selected = self.settings.alignment(element) == align;
                    if ui.selectable_label(selected, align.label()).clicked() {
                        self.settings.apply_update(SettingsUpdate {
                            alignment: Some((element, align)),
                            ..Default::default()
                        });
                    }
                }
            });
        }
    }

    /// One labelled text field committing through `apply_update`.
    fn element_text_field(&mut self, ui: &mut egui::Ui, label: &str, element: ElementId) {
        ui.label(label);
        let mut text = self.settings.text(element).unwrap_or_default().to_string();
        if ui.text_edit_singleline(&mut text).changed() {
            self.settings.apply_update(SettingsUpdate {
                element_text: Some((element, text)),
                ..Default::default()
            });
        }
        ui.add_space(4.0);
    }

    /// The pattern catalog grid.
    fn draw_patterns_tab(&mut self, ui: &mut egui::Ui) {
        ui.label("Background Pattern");
        for row in PatternKind::ALL.chunks(2) {
            ui.horizontal(|ui| {
                for kind in row {
                    let selected = self.settings.pattern == *kind;
                    if ui.selectable_label(selected, kind.label()).clicked() {
                        self.settings.apply_update(SettingsUpdate {
                            pattern: Some(*kind),
                            ..Default::default()
                        });
                    }
                }
            });
        }
        ui.add_space(8.0);
        ui.small("Simple patterns keep the QR code easy to scan.");
    }

    /// Logo upload and removal.
    fn draw_logo_tab(&mut self, ui: &mut egui::Ui) {
        ui.label("Venue Logo");
        ui.horizontal(|ui| {
            if ui.button("Upload…").clicked() {
                self.pick_logo(ui.ctx());
            }
            if self.assets.logo.is_some() && ui.button("Remove").clicked() {
                self.remove_logo();
            }
        });
        if self.assets.logo.is_none() {
            ui.small("The logo element appears on the card once an image is uploaded.");
        }
    }
}

/// Shows one labelled opaque color picker; returns the new color when edited.
fn color_picker_row(ui: &mut egui::Ui, label: &str, current: Rgb) -> Option<Rgb> {
    let mut color = color32(current);
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label(label);
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            picked = Some(Rgb::new(color.r(), color.g(), color.b()));
        }
    });
    picked
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Collateral Studio");
                if let Some(error) = &self.assets.last_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });

        egui::SidePanel::right("controls")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                if self.order.show_form {
                    self.draw_order_form(ui);
                } else {
                    self.draw_control_panel(ui);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        // Keep frames coming while the simulated checkout runs.
        if self.order.processing_since.is_some() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests;
