use super::*;
use crate::layout::GuideAxis;
use super::state::OrderDetails;
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    })
}

#[test]
fn canvas_draws_and_builds_qr_texture() {
    let mut app = DesignerApp::default();

    let _ = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    let qr = app.assets.qr.as_ref().expect("QR texture should be built");
    assert_eq!(qr.value, app.settings.qr_value);
}

#[test]
fn qr_texture_rebuilds_when_value_changes() {
    let mut app = DesignerApp::default();
    let _ = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    app.settings.apply_update(SettingsUpdate {
        qr_value: Some("https://meand.u/another".to_string()),
        ..Default::default()
    });
    let _ = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    assert_eq!(
        app.assets.qr.as_ref().unwrap().value,
        "https://meand.u/another"
    );
}

#[test]
fn drag_tick_snaps_to_sibling_top_edge() {
    let mut app = DesignerApp::default();

    // Give the table number a top edge at y=150, level with the QR default,
    // and move the other text elements clear of the QR's x-axis lines.
    app.settings.apply_update(SettingsUpdate {
        element_position: Some((ElementId::TableNumber, (170.0, 150.0))),
        ..Default::default()
    });
    app.settings.apply_update(SettingsUpdate {
        element_position: Some((ElementId::ActionText, (180.0, 90.0))),
        ..Default::default()
    });
    app.settings.apply_update(SettingsUpdate {
        element_text: Some((ElementId::VenueName, String::new())),
        ..Default::default()
    });

    // Drag the QR element; with a zero press offset the canvas position is
    // the proposed top-left.
    app.interaction.dragging_element = Some(ElementId::QrCode);
    app.interaction.drag_offset = (0.0, 0.0);
    app.update_dragged_element(ElementId::QrCode, (22.0, 151.0));

    assert_eq!(
        app.settings.frame(ElementId::QrCode).position,
        (22.0, 150.0)
    );
    assert_eq!(app.interaction.guides.len(), 1);
    let guide = app.interaction.guides[0];
    assert_eq!(guide.axis, GuideAxis::Horizontal);
    assert_eq!(guide.coordinate, 150.0);
}

#[test]
fn drag_release_clears_guides_and_keeps_position() {
    let mut app = DesignerApp::default();
    app.interaction.dragging_element = Some(ElementId::ActionText);
    app.interaction.drag_offset = (0.0, 0.0);
    app.update_dragged_element(ElementId::ActionText, (40.0, 200.0));
    let committed = app.settings.frame(ElementId::ActionText).position;

    // Release the pointer: a frame with no events has the button up.
    let _ = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    assert_eq!(app.interaction.dragging_element, None);
    assert!(app.interaction.guides.is_empty());
    assert_eq!(app.settings.frame(ElementId::ActionText).position, committed);
}

#[test]
fn resize_tick_keeps_logo_square() {
    let mut app = DesignerApp::default();
    let frame = app.settings.frame(ElementId::Logo);

    // Pointer at the proposed bottom-right corner: 50 wide, 40 tall.
    app.interaction.resizing_element = Some(ElementId::Logo);
    app.update_resized_element(
        ElementId::Logo,
        (frame.left() + 50.0, frame.top() + 40.0),
    );

    assert_eq!(app.settings.frame(ElementId::Logo).size, (50.0, 50.0));
}

#[test]
fn double_click_edit_commits_empty_venue_name_and_hides_element() {
    let mut app = DesignerApp::default();
    let venue_frame = app.settings.frame(ElementId::VenueName);
    assert!(app.element_visible(ElementId::VenueName));

    app.start_editing_element(ElementId::VenueName);
    assert_eq!(app.interaction.temp_element_text, "Your Venue");

    app.interaction.temp_element_text.clear();
    app.save_element_text_change(ElementId::VenueName);

    assert_eq!(app.settings.venue_name, "");
    assert_eq!(app.interaction.editing_element, None);
    assert!(!app.element_visible(ElementId::VenueName));
    // The hidden element no longer hit-tests.
    assert_eq!(
        app.find_element_at((venue_frame.center_x(), venue_frame.center_y())),
        None
    );
}

#[test]
fn gestures_are_suppressed_while_editing() {
    let mut app = DesignerApp::default();
    app.start_editing_element(ElementId::TableNumber);

    let frame = app.settings.frame(ElementId::TableNumber);
    let origin = egui::Pos2::ZERO;
    let pointer = egui::pos2(frame.center_x(), frame.center_y());
    app.start_gesture_at(pointer, (pointer.x, pointer.y), origin);

    assert_eq!(app.interaction.dragging_element, None);
    assert_eq!(app.interaction.resizing_element, None);
}

#[test]
fn press_in_corner_handle_starts_resize_not_drag() {
    let mut app = DesignerApp::default();
    let origin = egui::Pos2::ZERO;
    let rect = app.element_screen_rect(ElementId::QrCode, origin);

    let in_handle = egui::pos2(rect.max.x - 2.0, rect.max.y - 2.0);
    app.start_gesture_at(in_handle, (in_handle.x, in_handle.y), origin);
    assert_eq!(app.interaction.resizing_element, Some(ElementId::QrCode));
    assert_eq!(app.interaction.dragging_element, None);

    let mut app = DesignerApp::default();
    let in_body = egui::pos2(rect.min.x + 2.0, rect.min.y + 2.0);
    app.start_gesture_at(in_body, (in_body.x, in_body.y), origin);
    assert_eq!(app.interaction.dragging_element, Some(ElementId::QrCode));
    assert_eq!(app.interaction.resizing_element, None);
}

#[test]
fn hit_testing_prefers_topmost_element() {
    let mut app = DesignerApp::default();

    // Stack the venue name over the table number; the venue name draws later
    // so it wins the hit test.
    let table_frame = app.settings.frame(ElementId::TableNumber);
    app.settings.apply_update(SettingsUpdate {
        element_position: Some((ElementId::VenueName, table_frame.position)),
        ..Default::default()
    });

    let hit = app.find_element_at((table_frame.left() + 5.0, table_frame.top() + 5.0));
    assert_eq!(hit, Some(ElementId::VenueName));
}

#[test]
fn logo_is_not_interactable_without_an_upload() {
    let mut app = DesignerApp::default();
    assert!(!app.element_visible(ElementId::Logo));

    // The default logo frame sits on top of the table number; the hidden
    // logo must lose the hit test to the visible element beneath it.
    let frame = app.settings.frame(ElementId::Logo);
    assert_eq!(
        app.find_element_at((frame.center_x(), frame.center_y())),
        Some(ElementId::TableNumber)
    );

    // With the table number moved clear, the same point hits nothing.
    app.settings.apply_update(SettingsUpdate {
        element_position: Some((ElementId::TableNumber, (20.0, 220.0))),
        ..Default::default()
    });
    assert_eq!(
        app.find_element_at((frame.center_x(), frame.center_y())),
        None
    );
}

#[test]
fn drag_sequence_respects_bounds_for_every_shape() {
    for shape in Shape::ALL {
        let mut app = DesignerApp::default();
        app.settings.apply_update(SettingsUpdate {
            shape: Some(shape),
            ..Default::default()
        });
        let (canvas_width, canvas_height) = crate::layout::canvas_size(shape);

        app.interaction.dragging_element = Some(ElementId::QrCode);
        app.interaction.drag_offset = (0.0, 0.0);
        for canvas_pos in [(-100.0, -100.0), (1000.0, 50.0), (50.0, 1000.0)] {
            app.update_dragged_element(ElementId::QrCode, canvas_pos);
            let frame = app.settings.frame(ElementId::QrCode);
            assert!(frame.left() >= 0.0);
            assert!(frame.top() >= 0.0);
            assert!(frame.right() <= canvas_width);
            assert!(frame.bottom() <= canvas_height);
        }
    }
}

#[test]
fn identical_state_renders_identical_shape_lists() {
    let mut app = DesignerApp::default();

    // Warm-up frame so fonts and the QR texture are ready, then render the
    // same state twice and compare the emitted paint shapes.
    let _ = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });
    let first = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });
    let second = run_ui_with(vec![], |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });

    assert_eq!(first.shapes.len(), second.shapes.len());
}

#[test]
fn order_flow_reaches_confirmation_after_processing_delay() {
    let mut app = DesignerApp::default();
    app.order.show_form = true;
    app.order.details = OrderDetails {
        venue_name: "The Anchor".to_string(),
        email: "orders@anchor.example".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        address: "1 Harbour Road".to_string(),
        city: "Bristol".to_string(),
        zip_code: "BS1 4SB".to_string(),
        table_numbers: "1-3".to_string(),
        quantity: 3,
    };
    // Backdate the processing start beyond the simulated delay.
    app.order.processing_since = Some(
        std::time::Instant::now() - std::time::Duration::from_secs(5),
    );

    let _ = run_ui_with(vec![], |ctx| {
        egui::SidePanel::right("controls").show(ctx, |ui| {
            app.draw_order_form(ui);
        });
    });

    let confirmation = app.order.confirmation.as_ref().expect("order confirmed");
    assert_eq!(confirmation.quantity, 3);
    assert!(confirmation.total > 0.0);
    assert!(!confirmation.reference.is_empty());
    assert_eq!(app.order.processing_since, None);
}
