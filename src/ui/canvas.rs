//! Canvas gesture handling: element hit testing, dragging with alignment
//! snapping, and corner-handle resizing.
//!
//! All gesture math is delegated to [`crate::layout`]; this module only
//! translates pointer events into candidate positions/sizes and commits the
//! results through [`crate::types::DesignSettings::apply_update`].

use super::state::DesignerApp;
use crate::constants::RESIZE_HANDLE_SIZE;
use crate::layout;
use crate::types::{ElementFrame, ElementId, SettingsUpdate};
use eframe::egui;

impl DesignerApp {
    /// Converts a screen position to canvas-local coordinates.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels)
    /// * `origin` - Screen position of the canvas top-left corner
    pub fn screen_to_canvas(&self, screen_pos: egui::Pos2, origin: egui::Pos2) -> (f32, f32) {
        (screen_pos.x - origin.x, screen_pos.y - origin.y)
    }

    /// Returns the screen-space rectangle of an element under the active shape.
    pub fn element_screen_rect(&self, element: ElementId, origin: egui::Pos2) -> egui::Rect {
        let frame = self.settings.frame(element);
        egui::Rect::from_min_size(
            egui::pos2(origin.x + frame.left(), origin.y + frame.top()),
            egui::vec2(frame.size.0, frame.size.1),
        )
    }

    /// Returns the screen-space rectangle of an element's resize handle.
    pub fn resize_handle_rect(&self, element: ElementId, origin: egui::Pos2) -> egui::Rect {
        let rect = self.element_screen_rect(element, origin);
        egui::Rect::from_min_size(
            egui::pos2(
                rect.max.x - RESIZE_HANDLE_SIZE,
                rect.max.y - RESIZE_HANDLE_SIZE,
            ),
            egui::vec2(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
        )
    }

    /// Whether an element currently renders and accepts gestures.
    ///
    /// Elements configured to hide on empty content (the venue name)
    /// disappear while their text is empty; the logo requires an uploaded
    /// image.
    pub fn element_visible(&self, element: ElementId) -> bool {
        if layout::element_config(element).hide_when_empty
            && self
                .settings
                .text(element)
                .is_some_and(|text| text.is_empty())
        {
            return false;
        }
        match element {
            ElementId::Logo => self.assets.logo.is_some(),
            _ => true,
        }
    }

    /// Finds the topmost visible element at a canvas-local position, if any.
    pub fn find_element_at(&self, canvas_pos: (f32, f32)) -> Option<ElementId> {
        // Iterate front-to-back: later elements draw on top.
        for element in ElementId::ALL.iter().rev() {
            if !self.element_visible(*element) {
                continue;
            }
            let frame = self.settings.frame(*element);
            if canvas_pos.0 >= frame.left()
                && canvas_pos.0 <= frame.right()
                && canvas_pos.1 >= frame.top()
                && canvas_pos.1 <= frame.bottom()
            {
                return Some(*element);
            }
        }
        None
    }

    /// Frames of all visible elements except the one being dragged, for
    /// alignment-guide computation.
    fn sibling_frames(&self, dragged: ElementId) -> Vec<ElementFrame> {
        ElementId::ALL
            .iter()
            .filter(|element| **element != dragged && self.element_visible(**element))
            .map(|element| self.settings.frame(*element))
            .collect()
    }

    /// Handles element dragging and resizing with the left mouse button.
    ///
    /// A press inside an element's corner handle starts a resize; anywhere
    /// else inside the element starts a drag. While a drag is active, the
    /// candidate position is clamped and snapped each tick and the resulting
    /// guides are stored for the renderer. Releasing the pointer ends the
    /// gesture and clears the guides; the last committed frame simply stays.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    /// * `origin` - Screen position of the canvas top-left corner
    pub fn handle_element_gestures(
        &mut self,
        ui: &mut egui::Ui,
        response: &egui::Response,
        origin: egui::Pos2,
    ) {
        if ui.input(|i| i.pointer.primary_down()) {
            let Some(pointer) = response.interact_pointer_pos() else {
                return;
            };
            let canvas_pos = self.screen_to_canvas(pointer, origin);

            if self.interaction.dragging_element.is_none()
                && self.interaction.resizing_element.is_none()
            {
                self.start_gesture_at(pointer, canvas_pos, origin);
            } else if let Some(element) = self.interaction.dragging_element {
                self.update_dragged_element(element, canvas_pos);
            } else if let Some(element) = self.interaction.resizing_element {
                self.update_resized_element(element, canvas_pos);
            }
        } else {
            // Pointer released: the committed frame is already authoritative,
            // only the transient gesture state needs clearing.
            self.interaction.dragging_element = None;
            self.interaction.resizing_element = None;
            self.interaction.guides.clear();
        }
    }

    /// Starts a drag or resize for the element under the pointer, if any.
    pub(crate) fn start_gesture_at(
        &mut self,
        pointer: egui::Pos2,
        canvas_pos: (f32, f32),
        origin: egui::Pos2,
    ) {
        let Some(element) = self.find_element_at(canvas_pos) else {
            return;
        };
        // The edit input owns the pointer while this element is being edited.
        if self.interaction.editing_element == Some(element) {
            return;
        }

        self.interaction.selected_element = Some(element);
        if self.resize_handle_rect(element, origin).contains(pointer) {
            self.interaction.resizing_element = Some(element);
        } else {
            let frame = self.settings.frame(element);
            self.interaction.dragging_element = Some(element);
            self.interaction.drag_offset = (
                frame.left() - canvas_pos.0,
                frame.top() - canvas_pos.1,
            );
        }
    }

    /// Advances an active drag by one pointer tick.
    ///
    /// The candidate position is derived from the pointer plus the press
    /// offset, then clamped and snapped against the sibling frames.
    pub(crate) fn update_dragged_element(&mut self, element: ElementId, canvas_pos: (f32, f32)) {
        let proposed = (
            canvas_pos.0 + self.interaction.drag_offset.0,
            canvas_pos.1 + self.interaction.drag_offset.1,
        );
        let size = self.settings.frame(element).size;
        let siblings = self.sibling_frames(element);
        let (position, guides) =
            layout::drag_move(size, proposed, self.settings.shape, &siblings);

        self.settings.apply_update(SettingsUpdate {
            element_position: Some((element, position)),
            ..Default::default()
        });
        self.interaction.guides = guides;
    }

    /// Advances an active resize by one pointer tick.
    ///
    /// The pointer defines the bottom-right corner; `apply_update` clamps the
    /// resulting size against the element's limits and the canvas.
    pub(crate) fn update_resized_element(&mut self, element: ElementId, canvas_pos: (f32, f32)) {
        let frame = self.settings.frame(element);
        let proposed = (
            canvas_pos.0 - frame.left(),
            canvas_pos.1 - frame.top(),
        );
        self.settings.apply_update(SettingsUpdate {
            element_size: Some((element, proposed)),
            ..Default::default()
        });
    }

    /// Handles single clicks on the canvas: clicking empty space deselects
    /// and clears any leftover guides.
    pub fn handle_canvas_click(&mut self, response: &egui::Response, origin: egui::Pos2) {
        if !response.clicked() {
            return;
        }
        if let Some(pointer) = response.interact_pointer_pos() {
            let canvas_pos = self.screen_to_canvas(pointer, origin);
            if self.find_element_at(canvas_pos).is_none() {
                self.interaction.selected_element = None;
                self.interaction.guides.clear();
            }
        }
    }

    /// Handles double-clicks: double-clicking a text element enters inline
    /// edit mode.
    pub fn handle_canvas_double_click(&mut self, response: &egui::Response, origin: egui::Pos2) {
        if !response.double_clicked() {
            return;
        }
        if let Some(pointer) = response.interact_pointer_pos() {
            let canvas_pos = self.screen_to_canvas(pointer, origin);
            if let Some(element) = self.find_element_at(canvas_pos) {
                if element.is_text() {
                    // A double-click begins with a press that starts a drag;
                    // abandon it so the edit field owns subsequent input.
                    self.interaction.dragging_element = None;
                    self.interaction.guides.clear();
                    self.start_editing_element(element);
                }
            }
        }
    }
}
