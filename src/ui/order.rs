//! The "Next Steps" order form.
//!
//! Collects contact details and a quantity, validates them, and runs a
//! simulated checkout: a short processing delay followed by a confirmation
//! with a generated order reference. No payment integration exists.

use super::state::{DesignerApp, OrderConfirmation, OrderDetails, OrderErrors};
use crate::constants::{ORDER_PROCESSING_SECS, PRICE_PER_COLLATERAL, VAT_RATE};
use eframe::egui;
use std::time::Instant;
use uuid::Uuid;

/// Validates the order form fields.
///
/// Mirrors the required-field and e-mail shape checks of the order flow:
/// every contact field must be present and the e-mail needs a user part,
/// an `@`, and a dotted domain.
pub fn validate_order(details: &OrderDetails) -> OrderErrors {
    let mut errors = OrderErrors::default();
    if details.venue_name.trim().is_empty() {
        errors.venue_name = Some("Venue name is required");
    }
    if details.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !email_looks_valid(&details.email) {
        errors.email = Some("Email is invalid");
    }
    if details.phone.trim().is_empty() {
        errors.phone = Some("Phone number is required");
    }
    if details.address.trim().is_empty() {
        errors.address = Some("Address is required");
    }
    if details.city.trim().is_empty() {
        errors.city = Some("City is required");
    }
    if details.zip_code.trim().is_empty() {
        errors.zip_code = Some("ZIP code is required");
    }
    if details.table_numbers.trim().is_empty() {
        errors.table_numbers = Some("Table numbers are required");
    }
    if details.quantity < 1 {
        errors.quantity = Some("At least 1 collateral is required");
    }
    errors
}

/// Loose e-mail shape check: `user@domain.tld` with no whitespace.
fn email_looks_valid(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((user, domain)) = email.split_once('@') else {
        return false;
    };
    if user.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

/// Computes `(subtotal, vat, total)` for a quantity.
pub fn order_totals(quantity: u32) -> (f64, f64, f64) {
    let subtotal = PRICE_PER_COLLATERAL * f64::from(quantity);
    let vat = subtotal * VAT_RATE;
    (subtotal, vat, subtotal + vat)
}

impl DesignerApp {
    /// Renders the order form, the processing spinner, or the confirmation.
    pub fn draw_order_form(&mut self, ui: &mut egui::Ui) {
        // Finish the simulated checkout once the delay elapses.
        if let Some(started) = self.order.processing_since {
            if started.elapsed().as_secs_f64() >= ORDER_PROCESSING_SECS {
                let (_, _, total) = order_totals(self.order.details.quantity);
                self.order.confirmation = Some(OrderConfirmation {
                    reference: Uuid::new_v4().to_string(),
                    quantity: self.order.details.quantity,
                    total,
                });
                self.order.processing_since = None;
                log::info!(
                    "order placed: {} collaterals",
                    self.order.details.quantity
                );
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label("Processing your order…");
                });
                return;
            }
        }

        if let Some(confirmation) = self.order.confirmation.clone() {
            self.draw_order_confirmation(ui, &confirmation);
            return;
        }

        ui.heading("Order Your Collaterals");
        ui.small(format!(
            "{} card linking to {}",
            self.settings.shape.label(),
            self.settings.qr_value
        ));
        ui.add_space(8.0);

        order_text_field(
            ui,
            "Venue Name",
            &mut self.order.details.venue_name,
            self.order.errors.venue_name,
        );
        order_text_field(
            ui,
            "Email",
            &mut self.order.details.email,
            self.order.errors.email,
        );
        order_text_field(
            ui,
            "Phone Number",
            &mut self.order.details.phone,
            self.order.errors.phone,
        );
        order_text_field(
            ui,
            "Shipping Address",
            &mut self.order.details.address,
            self.order.errors.address,
        );
        order_text_field(
            ui,
            "City",
            &mut self.order.details.city,
            self.order.errors.city,
        );
        order_text_field(
            ui,
            "ZIP Code",
            &mut self.order.details.zip_code,
            self.order.errors.zip_code,
        );
        order_text_field(
            ui,
            "Table Numbers (e.g., 1-100, A-Z)",
            &mut self.order.details.table_numbers,
            self.order.errors.table_numbers,
        );

        ui.horizontal(|ui| {
            ui.label("Number of Collaterals");
            ui.add(egui::DragValue::new(&mut self.order.details.quantity).range(1..=999));
        });
        if let Some(message) = self.order.errors.quantity {
            ui.colored_label(egui::Color32::RED, message);
        }

        ui.add_space(8.0);
        ui.separator();
        let (subtotal, vat, total) = order_totals(self.order.details.quantity);
        ui.label(format!(
            "Price per collateral: ${PRICE_PER_COLLATERAL:.2}"
        ));
        ui.label(format!("Subtotal: ${subtotal:.2}"));
        ui.label(format!("VAT ({:.0}%): ${vat:.2}", VAT_RATE * 100.0));
        ui.strong(format!("Total: ${total:.2}"));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Back to Design").clicked() {
                self.order.show_form = false;
            }
            if ui.button("Place Order").clicked() {
                self.order.errors = validate_order(&self.order.details);
                if !self.order.errors.any() {
                    self.order.processing_since = Some(Instant::now());
                }
            }
        });
    }

    /// Renders the post-checkout confirmation.
    fn draw_order_confirmation(&mut self, ui: &mut egui::Ui, confirmation: &OrderConfirmation) {
        ui.heading("Order Successful");
        ui.add_space(8.0);
        ui.label(format!(
            "Your order for {} collaterals has been placed.",
            confirmation.quantity
        ));
        ui.label(format!("Total charged: ${:.2}", confirmation.total));
        ui.label(format!("Order reference: {}", confirmation.reference));
        ui.add_space(12.0);
        if ui.button("Back to Design").clicked() {
            self.order.confirmation = None;
            self.order.show_form = false;
        }
    }
}

/// One labelled text field with an optional validation message below it.
fn order_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    error: Option<&'static str>,
) {
    ui.label(label);
    ui.text_edit_singleline(value);
    if let Some(message) = error {
        ui.colored_label(egui::Color32::RED, message);
    }
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_details() -> OrderDetails {
        OrderDetails {
            venue_name: "The Anchor".to_string(),
            email: "orders@anchor.example".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            address: "1 Harbour Road".to_string(),
            city: "Bristol".to_string(),
            zip_code: "BS1 4SB".to_string(),
            table_numbers: "1-12".to_string(),
            quantity: 12,
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(!validate_order(&filled_details()).any());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = validate_order(&OrderDetails::default());
        assert!(errors.venue_name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.address.is_some());
        assert!(errors.city.is_some());
        assert!(errors.zip_code.is_some());
        assert!(errors.table_numbers.is_some());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for bad in ["plainaddress", "no@tld", "spaces in@mail.com", "@missing.user"] {
            let mut details = filled_details();
            details.email = bad.to_string();
            assert!(
                validate_order(&details).email.is_some(),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn test_totals_include_vat() {
        let (subtotal, vat, total) = order_totals(10);
        assert!((subtotal - 55.0).abs() < 1e-9);
        assert!((vat - 5.5).abs() < 1e-9);
        assert!((total - 60.5).abs() < 1e-9);
    }
}
