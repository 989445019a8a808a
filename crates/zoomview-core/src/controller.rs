use tracing::debug;

use crate::geometry::{ImagePos, SourceRect, ViewportSize, WidgetPos};
use crate::transform::{in_bounds, widget_to_image, Rounding};
use crate::view_state::ViewState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Drags out a zoom rectangle.
    Primary,
    /// Resets to the full image.
    Secondary,
}

/// Pointer input in widget-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Press { button: PointerButton, pos: WidgetPos },
    Move { pos: WidgetPos },
    Release { button: PointerButton, pos: WidgetPos },
}

/// Whether the host should repaint after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Redraw,
}

impl EventOutcome {
    pub fn needs_redraw(self) -> bool {
        self == Self::Redraw
    }
}

/// A zoom selection between primary press and release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub press_widget: WidgetPos,
    /// Image pixel under the press, mapped against the rect active at press time.
    pub press_image: ImagePos,
    /// Latest pointer position; only drives the overlay.
    pub move_widget: WidgetPos,
}

/// Turns press/move/release sequences into new source rectangles.
#[derive(Clone, Debug, Default)]
pub struct ZoomSelectionController {
    drag: Option<DragSession>,
}

impl ZoomSelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        viewport: ViewportSize,
        state: &mut ViewState,
    ) -> EventOutcome {
        match event {
            PointerEvent::Press {
                button: PointerButton::Primary,
                pos,
            } => self.press(pos, viewport, state),
            PointerEvent::Press {
                button: PointerButton::Secondary,
                ..
            } => self.reset(state),
            PointerEvent::Move { pos } => self.pointer_moved(pos),
            PointerEvent::Release {
                button: PointerButton::Primary,
                pos,
            } => self.release(pos, viewport, state),
            PointerEvent::Release {
                button: PointerButton::Secondary,
                ..
            } => EventOutcome::Ignored,
        }
    }

    fn press(&mut self, pos: WidgetPos, viewport: ViewportSize, state: &ViewState) -> EventOutcome {
        if self.drag.is_some() {
            debug!(?pos, "press while dragging ignored");
            return EventOutcome::Ignored;
        }

        let Some(source) = state.source_rect() else {
            return EventOutcome::Ignored;
        };

        match widget_to_image(pos, viewport, source, Rounding::Floor) {
            Some(press_image) => {
                debug!(?pos, ?press_image, "zoom selection started");
                self.drag = Some(DragSession {
                    press_widget: pos,
                    press_image,
                    move_widget: pos,
                });
                EventOutcome::Redraw
            }
            None => {
                debug!(?pos, %viewport, "press outside viewport ignored");
                EventOutcome::Ignored
            }
        }
    }

    fn pointer_moved(&mut self, pos: WidgetPos) -> EventOutcome {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.move_widget = pos;
                EventOutcome::Redraw
            }
            None => EventOutcome::Ignored,
        }
    }

    fn release(
        &mut self,
        pos: WidgetPos,
        viewport: ViewportSize,
        state: &mut ViewState,
    ) -> EventOutcome {
        let Some(drag) = self.drag.take() else {
            debug!(?pos, "release without press ignored");
            return EventOutcome::Ignored;
        };

        if !in_bounds(pos, viewport) {
            debug!(?pos, "release outside viewport, selection discarded");
            return EventOutcome::Redraw;
        }

        let (Some(source), Some(image)) = (state.source_rect(), state.image()) else {
            return EventOutcome::Redraw;
        };

        let selected = widget_to_image(pos, viewport, source, Rounding::Ceil)
            .and_then(|release_image| SourceRect::from_corners(drag.press_image, release_image))
            .and_then(|rect| rect.clamped_to(image));

        match selected {
            Some(rect) => {
                debug!(%rect, "zoomed to selection");
                state.set_source_rect(rect);
            }
            None => debug!("empty selection discarded"),
        }
        EventOutcome::Redraw
    }

    /// Drop any selection in progress and show the whole image.
    pub fn reset(&mut self, state: &mut ViewState) -> EventOutcome {
        self.drag = None;
        state.reset_to_full();
        debug!("view reset to full image");
        EventOutcome::Redraw
    }
}
