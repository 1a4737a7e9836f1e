//! Shared application-wide constants.
//! Centralizes tweakable values used across layout, interaction, and rendering.

// Canvas geometry
/// Canvas width in pixels for the rectangle card shape.
pub const RECTANGLE_CANVAS_WIDTH: f32 = 300.0;
/// Canvas width in pixels for the square and circle card shapes.
pub const SQUARE_CANVAS_WIDTH: f32 = 400.0;
/// Canvas height in pixels, shared by all card shapes.
pub const CANVAS_HEIGHT: f32 = 400.0;

// Drag snapping
/// Maximum distance (pixels) between two alignment lines for a drag to snap.
pub const SNAP_THRESHOLD: f32 = 5.0;

// Resize interaction
/// Side length (pixels) of the square resize handle in an element's bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f32 = 10.0;

// QR rendering
/// White quiet-zone padding (pixels) kept around the QR modules inside the element frame.
pub const QR_QUIET_ZONE: f32 = 10.0;

// Order form pricing
/// Unit price per printed collateral, in the display currency.
pub const PRICE_PER_COLLATERAL: f64 = 5.50;
/// VAT applied to the order subtotal.
pub const VAT_RATE: f64 = 0.10;
/// Simulated checkout processing time in seconds.
pub const ORDER_PROCESSING_SECS: f64 = 2.0;
