//! Canvas geometry: shape dimensions, default placements, and the constrained
//! drag/resize math.
//!
//! Everything here is a pure function of its inputs; the UI layer feeds in
//! pointer-derived candidates and commits whatever comes back. Invalid
//! candidates are corrected by clamping, never rejected.

use crate::constants::{
    CANVAS_HEIGHT, RECTANGLE_CANVAS_WIDTH, SNAP_THRESHOLD, SQUARE_CANVAS_WIDTH,
};
use crate::types::{ElementFrame, ElementId, Shape};
use serde::{Deserialize, Serialize};

/// Returns the canvas pixel dimensions for a shape.
///
/// The rectangle card is narrower (300x400) than the square and circle
/// (400x400).
pub fn canvas_size(shape: Shape) -> (f32, f32) {
    match shape {
        Shape::Rectangle => (RECTANGLE_CANVAS_WIDTH, CANVAS_HEIGHT),
        Shape::Square | Shape::Circle => (SQUARE_CANVAS_WIDTH, CANVAS_HEIGHT),
    }
}

/// Static sizing rules for one element kind.
///
/// Consulted generically by the resize math instead of branching per element
/// at every call site.
#[derive(Debug, Clone, Copy)]
pub struct ElementConfig {
    /// Smallest allowed `(width, height)`.
    pub min_size: (f32, f32),
    /// Largest allowed `(width, height)`.
    pub max_size: (f32, f32),
    /// Whether the element must stay square (QR code, logo).
    pub square: bool,
    /// Whether the element disappears entirely when its content is empty.
    pub hide_when_empty: bool,
}

/// Returns the sizing rules for an element.
pub fn element_config(element: ElementId) -> ElementConfig {
    match element {
        ElementId::TableNumber => ElementConfig {
            min_size: (50.0, 20.0),
            max_size: (200.0, 80.0),
            square: false,
            hide_when_empty: false,
        },
        ElementId::ActionText => ElementConfig {
            min_size: (100.0, 20.0),
            max_size: (300.0, 60.0),
            square: false,
            hide_when_empty: false,
        },
        ElementId::QrCode => ElementConfig {
            min_size: (80.0, 80.0),
            max_size: (200.0, 200.0),
            square: true,
            hide_when_empty: false,
        },
        ElementId::VenueName => ElementConfig {
            min_size: (60.0, 20.0),
            max_size: (200.0, 40.0),
            square: false,
            hide_when_empty: true,
        },
        ElementId::Logo => ElementConfig {
            min_size: (20.0, 20.0),
            max_size: (100.0, 100.0),
            square: true,
            hide_when_empty: false,
        },
    }
}

/// Returns the hand-designed starting position of one element for a shape.
///
/// These are fixed design decisions, not derived placements: the circle
/// stacks elements down the vertical center line, while rectangle and square
/// use a left-aligned stack with the venue name near the bottom and the logo
/// tucked into a corner.
fn default_position(shape: Shape, element: ElementId) -> (f32, f32) {
    match (shape, element) {
        (Shape::Rectangle, ElementId::TableNumber) => (20.0, 20.0),
        (Shape::Rectangle, ElementId::ActionText) => (20.0, 90.0),
        (Shape::Rectangle, ElementId::QrCode) => (20.0, 150.0),
        (Shape::Rectangle, ElementId::VenueName) => (100.0, 310.0),
        (Shape::Rectangle, ElementId::Logo) => (80.0, 20.0),
        (Shape::Square, ElementId::TableNumber) => (20.0, 20.0),
        (Shape::Square, ElementId::ActionText) => (20.0, 90.0),
        (Shape::Square, ElementId::QrCode) => (20.0, 150.0),
        (Shape::Square, ElementId::VenueName) => (150.0, 310.0),
        (Shape::Square, ElementId::Logo) => (365.0, 35.0),
        (Shape::Circle, ElementId::TableNumber) => (140.0, 20.0),
        (Shape::Circle, ElementId::ActionText) => (65.0, 100.0),
        (Shape::Circle, ElementId::QrCode) => (120.0, 160.0),
        (Shape::Circle, ElementId::VenueName) => (160.0, 320.0),
        (Shape::Circle, ElementId::Logo) => (356.0, 20.0),
    }
}

/// Returns the designed starting size of one element, shared by all shapes.
fn default_size(element: ElementId) -> (f32, f32) {
    match element {
        ElementId::TableNumber => (96.0, 48.0),
        ElementId::ActionText => (120.0, 30.0),
        ElementId::QrCode => (130.0, 130.0),
        ElementId::VenueName => (54.0, 18.0),
        ElementId::Logo => (31.0, 31.0),
    }
}

/// Returns the default frame of one element under a shape.
pub fn default_frame(shape: Shape, element: ElementId) -> ElementFrame {
    ElementFrame::new(default_position(shape, element), default_size(element))
}

/// Returns the default frame of every element for a shape.
pub fn default_frames(shape: Shape) -> [(ElementId, ElementFrame); 5] {
    ElementId::ALL.map(|element| (element, default_frame(shape, element)))
}

/// Clamps a proposed position so a box of `size` stays fully on the canvas.
pub fn clamp_position(shape: Shape, size: (f32, f32), proposed: (f32, f32)) -> (f32, f32) {
    let (width, height) = canvas_size(shape);
    (
        proposed.0.clamp(0.0, (width - size.0).max(0.0)),
        proposed.1.clamp(0.0, (height - size.1).max(0.0)),
    )
}

/// Clamps a proposed size against the element's min/max pair and the canvas
/// space remaining from its current anchored position.
///
/// Square elements (QR code, logo) take the clamped width on both axes, so
/// the width also has to fit the vertical space left below the anchor.
pub fn clamp_size(
    element: ElementId,
    shape: Shape,
    position: (f32, f32),
    proposed: (f32, f32),
) -> (f32, f32) {
    let config = element_config(element);
    let (canvas_width, canvas_height) = canvas_size(shape);
    let room = (canvas_width - position.0, canvas_height - position.1);

    let width = proposed
        .0
        .clamp(config.min_size.0, config.max_size.0)
        .min(room.0);
    let height = proposed
        .1
        .clamp(config.min_size.1, config.max_size.1)
        .min(room.1);

    if config.square {
        // Width wins over the height clamp, but both axes' remaining room
        // still bound it so the frame cannot leave the canvas.
        let side = width.min(room.1);
        (side, side)
    } else {
        (width, height)
    }
}

/// Orientation of an alignment guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideAxis {
    /// A horizontal line at `y = coordinate`, from vertical-axis alignment.
    Horizontal,
    /// A vertical line at `x = coordinate`, from horizontal-axis alignment.
    Vertical,
}

/// A transient alignment line shown while a drag is snapped.
///
/// Guides exist only during an active drag; they are recomputed on every
/// move tick and cleared when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentGuide {
    /// Line orientation.
    pub axis: GuideAxis,
    /// The aligned coordinate (x for vertical guides, y for horizontal).
    pub coordinate: f32,
    /// Start of the line along its own axis.
    pub span_start: f32,
    /// End of the line along its own axis.
    pub span_end: f32,
}

/// Best snap candidate found on one axis.
struct SnapCandidate {
    distance: f32,
    /// Element-origin coordinate after snapping.
    origin: f32,
    /// The shared alignment line.
    line: f32,
    /// Extent of the matched element on the guide's own axis.
    other_span: (f32, f32),
}

/// Converts a pointer-dragged candidate position into the committed position
/// plus any active alignment guides.
///
/// The candidate is first clamped to the canvas, then each axis is compared
/// against the corresponding lines (left/center/right, top/center/bottom) of
/// every other visible element. The nearest line within
/// [`SNAP_THRESHOLD`] wins its axis; horizontal and vertical snaps are
/// independent. A snap that would push the box off the canvas is discarded.
///
/// # Arguments
///
/// * `size` - Size of the dragged element's box
/// * `proposed` - Candidate top-left position from the pointer
/// * `shape` - Active shape, for canvas bounds
/// * `others` - Frames of all *other visible* elements
///
/// # Returns
///
/// The snapped-and-clamped position, and zero to two guides (at most one per
/// axis) spanning the union of the dragged and matched elements' extents.
pub fn drag_move(
    size: (f32, f32),
    proposed: (f32, f32),
    shape: Shape,
    others: &[ElementFrame],
) -> ((f32, f32), Vec<AlignmentGuide>) {
    let clamped = clamp_position(shape, size, proposed);
    let (width, height) = size;
    let (canvas_width, canvas_height) = canvas_size(shape);

    let mut best_x: Option<SnapCandidate> = None;
    let mut best_y: Option<SnapCandidate> = None;

    for other in others {
        // Corresponding lines on the horizontal axis: left, centerX, right.
        let x_pairs = [
            (clamped.0, other.left()),
            (clamped.0 + width / 2.0, other.center_x()),
            (clamped.0 + width, other.right()),
        ];
        for (mine, theirs) in x_pairs {
            let distance = (mine - theirs).abs();
            let origin = clamped.0 + (theirs - mine);
            if distance < SNAP_THRESHOLD
                && origin >= 0.0
                && origin + width <= canvas_width
                && best_x.as_ref().is_none_or(|best| distance < best.distance)
            {
                best_x = Some(SnapCandidate {
                    distance,
                    origin,
                    line: theirs,
                    other_span: (other.top(), other.bottom()),
                });
            }
        }

        // Corresponding lines on the vertical axis: top, centerY, bottom.
        let y_pairs = [
            (clamped.1, other.top()),
            (clamped.1 + height / 2.0, other.center_y()),
            (clamped.1 + height, other.bottom()),
        ];
        for (mine, theirs) in y_pairs {
            let distance = (mine - theirs).abs();
            let origin = clamped.1 + (theirs - mine);
            if distance < SNAP_THRESHOLD
                && origin >= 0.0
                && origin + height <= canvas_height
                && best_y.as_ref().is_none_or(|best| distance < best.distance)
            {
                best_y = Some(SnapCandidate {
                    distance,
                    origin,
                    line: theirs,
                    other_span: (other.left(), other.right()),
                });
            }
        }
    }

    let position = (
        best_x.as_ref().map_or(clamped.0, |snap| snap.origin),
        best_y.as_ref().map_or(clamped.1, |snap| snap.origin),
    );

    let mut guides = Vec::new();
    if let Some(snap) = best_x {
        guides.push(AlignmentGuide {
            axis: GuideAxis::Vertical,
            coordinate: snap.line,
            span_start: position.1.min(snap.other_span.0),
            span_end: (position.1 + height).max(snap.other_span.1),
        });
    }
    if let Some(snap) = best_y {
        guides.push(AlignmentGuide {
            axis: GuideAxis::Horizontal,
            coordinate: snap.line,
            span_start: position.0.min(snap.other_span.0),
            span_end: (position.0 + width).max(snap.other_span.1),
        });
    }

    (position, guides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(position: (f32, f32), size: (f32, f32)) -> ElementFrame {
        ElementFrame::new(position, size)
    }

    #[test]
    fn test_canvas_sizes() {
        assert_eq!(canvas_size(Shape::Rectangle), (300.0, 400.0));
        assert_eq!(canvas_size(Shape::Square), (400.0, 400.0));
        assert_eq!(canvas_size(Shape::Circle), (400.0, 400.0));
    }

    #[test]
    fn test_clamp_position_corners() {
        let size = (100.0, 50.0);
        assert_eq!(
            clamp_position(Shape::Rectangle, size, (-10.0, -10.0)),
            (0.0, 0.0)
        );
        assert_eq!(
            clamp_position(Shape::Rectangle, size, (500.0, 500.0)),
            (200.0, 350.0)
        );
        // Already valid positions pass through untouched.
        assert_eq!(
            clamp_position(Shape::Rectangle, size, (25.0, 30.0)),
            (25.0, 30.0)
        );
    }

    #[test]
    fn test_clamp_size_respects_min_max() {
        let clamped = clamp_size(ElementId::ActionText, Shape::Square, (0.0, 0.0), (10.0, 10.0));
        assert_eq!(clamped, (100.0, 20.0));
        let clamped = clamp_size(
            ElementId::ActionText,
            Shape::Square,
            (0.0, 0.0),
            (999.0, 999.0),
        );
        assert_eq!(clamped, (300.0, 60.0));
    }

    #[test]
    fn test_clamp_size_respects_remaining_canvas_room() {
        // Anchored 250px from the left of a 300px canvas, the action text can
        // grow to at most 50px wide regardless of its 100px minimum.
        let clamped = clamp_size(
            ElementId::ActionText,
            Shape::Rectangle,
            (250.0, 0.0),
            (200.0, 30.0),
        );
        assert_eq!(clamped.0, 50.0);
    }

    #[test]
    fn test_square_constraint_width_wins() {
        // Logo resize from (31,31) to a proposed (50,40) commits (50,50).
        let clamped = clamp_size(ElementId::Logo, Shape::Rectangle, (80.0, 20.0), (50.0, 40.0));
        assert_eq!(clamped, (50.0, 50.0));
    }

    #[test]
    fn test_square_constraint_bounded_by_vertical_room() {
        // With only 30px of canvas left below the anchor, the side length
        // shrinks to fit rather than leave the canvas.
        let clamped = clamp_size(
            ElementId::Logo,
            Shape::Rectangle,
            (0.0, 370.0),
            (80.0, 80.0),
        );
        assert_eq!(clamped, (30.0, 30.0));
    }

    #[test]
    fn test_qr_stays_square_after_resize() {
        for proposed in [(90.0, 120.0), (150.0, 80.0), (300.0, 300.0)] {
            let clamped = clamp_size(ElementId::QrCode, Shape::Square, (20.0, 150.0), proposed);
            assert_eq!(clamped.0, clamped.1);
        }
    }

    #[test]
    fn test_drag_snaps_to_top_edge_and_emits_horizontal_guide() {
        // QR element at (20,150) size 130 dragged to (22,151) with another
        // element's top edge at y=150: y snaps back to 150, x keeps 22.
        let others = [frame((170.0, 150.0), (96.0, 48.0))];
        let (position, guides) =
            drag_move((130.0, 130.0), (22.0, 151.0), Shape::Rectangle, &others);

        assert_eq!(position, (22.0, 150.0));
        assert_eq!(guides.len(), 1);
        let guide = guides[0];
        assert_eq!(guide.axis, GuideAxis::Horizontal);
        assert_eq!(guide.coordinate, 150.0);
        // The guide spans at least the union of both elements' extents.
        assert!(guide.span_start <= 22.0);
        assert!(guide.span_end >= 266.0);
    }

    #[test]
    fn test_drag_snaps_left_edges_exactly() {
        let others = [frame((40.0, 300.0), (120.0, 30.0))];
        let (position, guides) = drag_move((96.0, 48.0), (43.0, 20.0), Shape::Square, &others);

        assert_eq!(position.0, 40.0);
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].axis, GuideAxis::Vertical);
        assert_eq!(guides[0].coordinate, 40.0);
        assert!(guides[0].span_start <= 20.0);
        assert!(guides[0].span_end >= 330.0);
    }

    #[test]
    fn test_drag_snaps_both_axes_independently() {
        let others = [frame((100.0, 100.0), (50.0, 50.0))];
        // Proposed within threshold of the other's left edge and top edge.
        let (position, guides) = drag_move((50.0, 50.0), (103.0, 97.0), Shape::Square, &others);

        assert_eq!(position, (100.0, 100.0));
        assert_eq!(guides.len(), 2);
        assert!(guides.iter().any(|g| g.axis == GuideAxis::Vertical));
        assert!(guides.iter().any(|g| g.axis == GuideAxis::Horizontal));
    }

    #[test]
    fn test_drag_beyond_threshold_does_not_snap() {
        let others = [frame((100.0, 100.0), (50.0, 50.0))];
        let (position, guides) = drag_move((50.0, 50.0), (106.0, 200.0), Shape::Square, &others);

        assert_eq!(position, (106.0, 200.0));
        assert!(guides.is_empty());
    }

    #[test]
    fn test_nearest_candidate_wins_per_axis() {
        // Two elements with left edges at 100 and 103; proposing x=102 must
        // snap to 103, the nearer line.
        let others = [
            frame((100.0, 10.0), (50.0, 20.0)),
            frame((103.0, 200.0), (50.0, 20.0)),
        ];
        let (position, _) = drag_move((50.0, 50.0), (102.0, 300.0), Shape::Square, &others);
        assert_eq!(position.0, 103.0);
    }

    #[test]
    fn test_center_alignment_snaps_centers() {
        // Other element centered at x=125; a 30-wide box proposed at x=108
        // has center 123, within threshold of 125, so snaps to x=110.
        let others = [frame((100.0, 10.0), (50.0, 20.0))];
        let (position, guides) = drag_move((30.0, 50.0), (108.0, 200.0), Shape::Square, &others);
        assert_eq!(position.0, 110.0);
        assert_eq!(guides[0].coordinate, 125.0);
    }

    #[test]
    fn test_out_of_bounds_snap_candidate_is_discarded() {
        // The other box's right edge is at 46; aligning the dragged 50-wide
        // box's right edge there would put its origin at -4, so no snap.
        let others = [frame((26.0, 10.0), (20.0, 20.0))];
        let (position, guides) = drag_move((50.0, 50.0), (0.0, 200.0), Shape::Square, &others);
        assert_eq!(position.0, 0.0);
        assert!(guides.iter().all(|g| g.axis != GuideAxis::Vertical));
    }

    #[test]
    fn test_bounds_invariant_over_gesture_sequence() {
        // A pathological stream of drag and resize candidates must never
        // leave the canvas, for any shape.
        let candidates = [
            (-500.0, -500.0),
            (1000.0, 1000.0),
            (150.0, 390.0),
            (299.0, 10.0),
            (0.0, 399.0),
            (42.5, 117.3),
        ];
        for shape in Shape::ALL {
            let (canvas_width, canvas_height) = canvas_size(shape);
            for element in ElementId::ALL {
                let mut current = default_frame(shape, element);
                for proposed in candidates {
                    let (position, _) = drag_move(current.size, proposed, shape, &[]);
                    current.position = position;
                    current.size = clamp_size(element, shape, current.position, proposed);
                    assert!(current.left() >= 0.0);
                    assert!(current.top() >= 0.0);
                    assert!(current.right() <= canvas_width + f32::EPSILON);
                    assert!(current.bottom() <= canvas_height + f32::EPSILON);
                }
            }
        }
    }
}
