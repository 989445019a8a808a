mod common;

use common::{image, rect};
use zoomview_core::controller::{
    EventOutcome, PointerButton, PointerEvent, ZoomSelectionController,
};
use zoomview_core::geometry::{ImagePos, SourceRect, ViewportSize, WidgetPos};
use zoomview_core::view_state::ViewState;

const VIEWPORT: ViewportSize = ViewportSize {
    width: 400,
    height: 300,
};

fn press(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Press {
        button: PointerButton::Primary,
        pos: WidgetPos::new(x, y),
    }
}

fn release(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Release {
        button: PointerButton::Primary,
        pos: WidgetPos::new(x, y),
    }
}

fn moved(x: i32, y: i32) -> PointerEvent {
    PointerEvent::Move {
        pos: WidgetPos::new(x, y),
    }
}

fn secondary() -> PointerEvent {
    PointerEvent::Press {
        button: PointerButton::Secondary,
        pos: WidgetPos::new(10, 10),
    }
}

fn setup(width: u32, height: u32) -> (ZoomSelectionController, ViewState) {
    let mut state = ViewState::new();
    state.set_image(image(width, height));
    (ZoomSelectionController::new(), state)
}

fn drag(
    controller: &mut ZoomSelectionController,
    state: &mut ViewState,
    from: (i32, i32),
    to: (i32, i32),
) -> EventOutcome {
    controller.handle_event(press(from.0, from.1), VIEWPORT, state);
    controller.handle_event(moved(to.0, to.1), VIEWPORT, state);
    controller.handle_event(release(to.0, to.1), VIEWPORT, state)
}

#[test]
fn test_full_drag_reselects_whole_image() {
    let (mut controller, mut state) = setup(400, 300);

    let outcome = drag(&mut controller, &mut state, (0, 0), (400, 300));

    assert_eq!(outcome, EventOutcome::Redraw);
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
    assert!(!controller.is_dragging());
}

#[test]
fn test_drag_zooms_to_selection() {
    let (mut controller, mut state) = setup(400, 300);

    drag(&mut controller, &mut state, (100, 75), (300, 225));

    assert_eq!(state.source_rect(), Some(rect(100, 75, 200, 150)));
}

#[test]
fn test_reverse_drag_is_normalized() {
    let (mut controller, mut state) = setup(400, 300);

    drag(&mut controller, &mut state, (300, 225), (100, 75));

    assert_eq!(state.source_rect(), Some(rect(100, 75, 200, 150)));
}

#[test]
fn test_second_zoom_maps_against_current_rect() {
    let (mut controller, mut state) = setup(400, 300);

    drag(&mut controller, &mut state, (100, 75), (300, 225));
    drag(&mut controller, &mut state, (0, 0), (200, 150));

    // Left-top quarter of the 200x150 rect at (100, 75).
    assert_eq!(state.source_rect(), Some(rect(100, 75, 100, 75)));
}

#[test]
fn test_collapsed_selection_keeps_previous_rect() {
    let (mut controller, mut state) = setup(4, 3);
    let before = state.source_rect();

    // Same widget pixel on a pixel boundary: floor and ceil agree.
    let outcome = drag(&mut controller, &mut state, (0, 0), (0, 0));

    assert_eq!(outcome, EventOutcome::Redraw);
    assert_eq!(state.source_rect(), before);
    assert!(!controller.is_dragging());
}

#[test]
fn test_click_inside_a_pixel_selects_that_pixel() {
    let (mut controller, mut state) = setup(4, 3);

    // 50/400 * 4 = 0.5 and 50/300 * 3 = 0.5: floor 0, ceil 1.
    drag(&mut controller, &mut state, (50, 50), (50, 50));

    assert_eq!(state.source_rect(), Some(rect(0, 0, 1, 1)));
}

#[test]
fn test_flat_selection_keeps_previous_rect() {
    let (mut controller, mut state) = setup(400, 300);

    drag(&mut controller, &mut state, (100, 0), (100, 300));

    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
}

#[test]
fn test_out_of_bounds_press_does_not_start_drag() {
    let (mut controller, mut state) = setup(400, 300);

    let outcome = controller.handle_event(press(-1, 10), VIEWPORT, &mut state);
    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(!controller.is_dragging());

    let outcome = controller.handle_event(release(200, 200), VIEWPORT, &mut state);
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
}

#[test]
fn test_out_of_bounds_release_discards_selection() {
    let (mut controller, mut state) = setup(400, 300);

    controller.handle_event(press(10, 10), VIEWPORT, &mut state);
    let outcome = controller.handle_event(release(450, 200), VIEWPORT, &mut state);

    assert_eq!(outcome, EventOutcome::Redraw);
    assert!(!controller.is_dragging());
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
}

#[test]
fn test_press_while_dragging_is_ignored() {
    let (mut controller, mut state) = setup(400, 300);

    controller.handle_event(press(100, 75), VIEWPORT, &mut state);
    let outcome = controller.handle_event(press(200, 150), VIEWPORT, &mut state);

    assert_eq!(outcome, EventOutcome::Ignored);
    let session = controller.drag_session().unwrap();
    assert_eq!(session.press_widget, WidgetPos::new(100, 75));
    assert_eq!(session.press_image, ImagePos::new(100, 75));
}

#[test]
fn test_move_only_updates_overlay() {
    let (mut controller, mut state) = setup(400, 300);

    assert_eq!(
        controller.handle_event(moved(5, 5), VIEWPORT, &mut state),
        EventOutcome::Ignored
    );

    controller.handle_event(press(10, 20), VIEWPORT, &mut state);
    assert_eq!(controller.drag_session().unwrap().move_widget, WidgetPos::new(10, 20));

    let outcome = controller.handle_event(moved(-30, 500), VIEWPORT, &mut state);
    assert_eq!(outcome, EventOutcome::Redraw);
    assert_eq!(controller.drag_session().unwrap().move_widget, WidgetPos::new(-30, 500));
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
}

#[test]
fn test_secondary_press_resets_and_cancels_drag() {
    let (mut controller, mut state) = setup(400, 300);
    drag(&mut controller, &mut state, (100, 75), (300, 225));
    controller.handle_event(press(10, 10), VIEWPORT, &mut state);
    assert!(controller.is_dragging());

    let outcome = controller.handle_event(secondary(), VIEWPORT, &mut state);

    assert_eq!(outcome, EventOutcome::Redraw);
    assert!(!controller.is_dragging());
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));

    // The cancelled drag's release is now an orphan.
    let outcome = controller.handle_event(release(300, 200), VIEWPORT, &mut state);
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(state.source_rect(), Some(rect(0, 0, 400, 300)));
}

#[test]
fn test_secondary_release_is_ignored() {
    let (mut controller, mut state) = setup(400, 300);
    let event = PointerEvent::Release {
        button: PointerButton::Secondary,
        pos: WidgetPos::new(1, 1),
    };
    assert_eq!(
        controller.handle_event(event, VIEWPORT, &mut state),
        EventOutcome::Ignored
    );
}

#[test]
fn test_reset_is_idempotent() {
    let (mut controller, mut state) = setup(400, 300);
    drag(&mut controller, &mut state, (100, 75), (300, 225));

    controller.reset(&mut state);
    let once = state.source_rect();
    controller.reset(&mut state);

    assert_eq!(state.source_rect(), once);
    assert_eq!(once, Some(SourceRect::full(image(400, 300))));
}

#[test]
fn test_press_without_image_is_ignored() {
    let mut state = ViewState::new();
    let mut controller = ZoomSelectionController::new();

    let outcome = controller.handle_event(press(10, 10), VIEWPORT, &mut state);

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(!controller.is_dragging());
}

#[test]
fn test_press_on_collapsed_viewport_is_ignored() {
    let (mut controller, mut state) = setup(400, 300);

    let outcome = controller.handle_event(press(0, 0), ViewportSize::new(0, 0), &mut state);

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(!controller.is_dragging());
}

#[test]
fn test_selection_from_out_of_bounds_rect_is_clamped_to_image() {
    let (mut controller, mut state) = setup(400, 300);
    state.set_source_rect(rect(300, 200, 200, 200));

    drag(&mut controller, &mut state, (0, 0), (400, 300));

    assert_eq!(state.source_rect(), Some(rect(300, 200, 100, 100)));
}
