//! Inline text editing for canvas elements.
//!
//! Double-clicking a text element swaps its rendered text for a single-line
//! edit field placed over the element's frame. The buffer commits on Enter or
//! when the field loses focus; an empty commit is valid and simply empties
//! the element (hiding the venue name entirely).

use super::state::DesignerApp;
use crate::types::{ElementId, SettingsUpdate};
use eframe::egui;

impl DesignerApp {
    /// Starts inline editing of the specified text element.
    ///
    /// # Arguments
    ///
    /// * `element` - The text element to edit
    pub fn start_editing_element(&mut self, element: ElementId) {
        let current = self.settings.text(element).unwrap_or_default().to_string();
        self.interaction.editing_element = Some(element);
        self.interaction.temp_element_text = current;
        self.interaction.should_select_text = true;
        self.interaction.focus_requested_for_edit = false;
    }

    /// Commits the edit buffer to the element and leaves edit mode.
    ///
    /// # Arguments
    ///
    /// * `element` - The element being edited
    pub fn save_element_text_change(&mut self, element: ElementId) {
        let new_text = self.interaction.temp_element_text.clone();
        self.settings.apply_update(SettingsUpdate {
            element_text: Some((element, new_text)),
            ..Default::default()
        });
        self.interaction.editing_element = None;
    }

    /// Renders the inline edit field over the element being edited, if any.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `origin` - Screen position of the canvas top-left corner
    pub fn draw_inline_editor(&mut self, ui: &mut egui::Ui, origin: egui::Pos2) {
        let Some(element) = self.interaction.editing_element else {
            return;
        };

        let rect = self.element_screen_rect(element, origin);
        let font_size = self.settings.font_sizes.get(element).unwrap_or(18.0);
        let font_id = egui::FontId::new(font_size.min(rect.height()), self.font_family_for(element));

        let response = ui.put(
            rect,
            egui::TextEdit::singleline(&mut self.interaction.temp_element_text)
                .font(font_id)
                .margin(egui::Margin::ZERO),
        );

        // Only request focus on the first frame of editing
        if !self.interaction.focus_requested_for_edit {
            response.request_focus();
            self.interaction.focus_requested_for_edit = true;
        }

        // Select all text when the flag is set and the field has focus
        if self.interaction.should_select_text && response.has_focus() {
            self.interaction.should_select_text = false;
            self.select_all_text_in_field(ui, response.id);
        }

        // Handle Enter key to commit the buffer
        if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.save_element_text_change(element);
            return;
        }

        // Commit when focus is lost (but not due to Enter, handled above)
        if response.lost_focus() && !ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.save_element_text_change(element);
        }
    }

    /// Selects all text in a text edit field using egui's internal state.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `field_id` - The ID of the text field
    fn select_all_text_in_field(&self, ui: &mut egui::Ui, field_id: egui::Id) {
        ui.memory_mut(|mem| {
            let state = mem
                .data
                .get_temp_mut_or_default::<egui::text_edit::TextEditState>(field_id);
            let text_len = self.interaction.temp_element_text.len();
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::two(
                    egui::text::CCursor::new(0),
                    egui::text::CCursor::new(text_len),
                )));
        });
    }
}
