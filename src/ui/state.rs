//! Application state management structures.
//!
//! This module contains the state structures that track the editor's current
//! UI state: gesture interactions on the canvas, loaded image assets, the
//! active customization tab, and the order form.

use crate::layout::AlignmentGuide;
use crate::types::{DesignSettings, ElementId};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The customization tabs on the right-hand panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelTab {
    /// Shape, background image, and corner radius controls.
    Layout,
    /// Color scheme presets and free color pickers.
    Colors,
    /// Element texts, fonts, styling flags, sizes, and alignment.
    Text,
    /// Background pattern picker.
    Patterns,
    /// Logo upload and removal.
    Logo,
}

impl PanelTab {
    /// All tabs, in display order.
    pub const ALL: [PanelTab; 5] = [
        PanelTab::Layout,
        PanelTab::Colors,
        PanelTab::Text,
        PanelTab::Patterns,
        PanelTab::Logo,
    ];

    /// Tab strip label.
    pub fn label(self) -> &'static str {
        match self {
            PanelTab::Layout => "Layout",
            PanelTab::Colors => "Colors",
            PanelTab::Text => "Text & Font",
            PanelTab::Patterns => "Patterns",
            PanelTab::Logo => "Logo",
        }
    }
}

/// State related to user gestures on the canvas.
///
/// Tracks selection, dragging, resizing, inline text editing, and the
/// alignment guides active during a drag.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionState {
    /// Currently selected element, if any.
    #[serde(skip)]
    pub selected_element: Option<ElementId>,
    /// Element currently being dragged.
    #[serde(skip)]
    pub dragging_element: Option<ElementId>,
    /// Offset from the pointer to the dragged element's origin, so the
    /// element doesn't jump to the cursor on drag start.
    #[serde(skip)]
    pub drag_offset: (f32, f32),
    /// Element currently being resized from its corner handle.
    #[serde(skip)]
    pub resizing_element: Option<ElementId>,
    /// Alignment guides produced by the current drag tick.
    #[serde(skip)]
    pub guides: Vec<AlignmentGuide>,
    /// Text element currently in inline edit mode.
    #[serde(skip)]
    pub editing_element: Option<ElementId>,
    /// Edit buffer holding the text while editing.
    #[serde(skip)]
    pub temp_element_text: String,
    /// Flag indicating the edit buffer should be fully selected.
    #[serde(skip)]
    pub should_select_text: bool,
    /// Flag to track if focus was already requested for the current edit session.
    #[serde(skip)]
    pub focus_requested_for_edit: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            selected_element: None,
            dragging_element: None,
            drag_offset: (0.0, 0.0),
            resizing_element: None,
            guides: Vec::new(),
            editing_element: None,
            temp_element_text: String::new(),
            should_select_text: false,
            focus_requested_for_edit: false,
        }
    }
}

/// A QR texture cached for one encoded value.
pub struct QrTexture {
    /// The value the texture encodes.
    pub value: String,
    /// The uploaded module-grid texture.
    pub texture: egui::TextureHandle,
}

/// Runtime image assets: uploaded logo/background and the QR texture cache.
///
/// Textures live on the GPU for the session only; nothing here persists.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetState {
    /// Uploaded venue logo, if any.
    #[serde(skip)]
    pub logo: Option<egui::TextureHandle>,
    /// Uploaded background image, if any.
    #[serde(skip)]
    pub background: Option<egui::TextureHandle>,
    /// QR texture for the currently encoded value.
    #[serde(skip)]
    pub qr: Option<QrTexture>,
    /// Most recent asset-loading failure, shown in the status line.
    #[serde(skip)]
    pub last_error: Option<String>,
}

/// Contact and quantity fields of the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetails {
    /// Venue the collaterals are for.
    pub venue_name: String,
    /// Contact e-mail address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Shipping address.
    pub address: String,
    /// Shipping city.
    pub city: String,
    /// Shipping ZIP code.
    pub zip_code: String,
    /// The table numbers to print, e.g. "1-100" or "A-Z".
    pub table_numbers: String,
    /// Number of collaterals to print.
    pub quantity: u32,
}

impl Default for OrderDetails {
    fn default() -> Self {
        Self {
            venue_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            table_numbers: String::new(),
            quantity: 1,
        }
    }
}

/// Validation messages for the order form, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderErrors {
    /// Venue name validation message.
    pub venue_name: Option<&'static str>,
    /// E-mail validation message.
    pub email: Option<&'static str>,
    /// Phone validation message.
    pub phone: Option<&'static str>,
    /// Address validation message.
    pub address: Option<&'static str>,
    /// City validation message.
    pub city: Option<&'static str>,
    /// ZIP code validation message.
    pub zip_code: Option<&'static str>,
    /// Table numbers validation message.
    pub table_numbers: Option<&'static str>,
    /// Quantity validation message.
    pub quantity: Option<&'static str>,
}

impl OrderErrors {
    /// Whether any field failed validation.
    pub fn any(&self) -> bool {
        self.venue_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.city.is_some()
            || self.zip_code.is_some()
            || self.table_numbers.is_some()
            || self.quantity.is_some()
    }
}

/// A completed (simulated) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Generated order reference.
    pub reference: String,
    /// Number of collaterals ordered.
    pub quantity: u32,
    /// Total charged, VAT included.
    pub total: f64,
}

/// State of the "Next Steps" order flow.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct OrderState {
    /// Whether the panel currently shows the order form instead of the tabs.
    #[serde(skip)]
    pub show_form: bool,
    /// Current field values.
    #[serde(skip)]
    pub details: OrderDetails,
    /// Validation results from the last submit attempt.
    #[serde(skip)]
    pub errors: OrderErrors,
    /// When the simulated checkout started, if it is running.
    #[serde(skip)]
    pub processing_since: Option<Instant>,
    /// The confirmed order, once processing finishes.
    #[serde(skip)]
    pub confirmation: Option<OrderConfirmation>,
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            show_form: false,
            details: OrderDetails::default(),
            errors: OrderErrors::default(),
            processing_since: None,
            confirmation: None,
        }
    }
}

/// The main application structure containing the design settings and UI state.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerApp {
    /// The design being edited. Lives only for the session; a fresh editor
    /// always starts from the shape defaults.
    #[serde(skip)]
    pub settings: DesignSettings,
    /// Canvas gesture state.
    pub interaction: InteractionState,
    /// Loaded image assets.
    pub assets: AssetState,
    /// Order flow state.
    pub order: OrderState,
    /// Active customization tab.
    pub active_tab: PanelTab,
}

impl Default for DesignerApp {
    fn default() -> Self {
        Self {
            settings: DesignSettings::default(),
            interaction: InteractionState::default(),
            assets: AssetState::default(),
            order: OrderState::default(),
            active_tab: PanelTab::Layout,
        }
    }
}
