use crate::consts::RESOLUTION_PERCENT_MAX;
use crate::controller::{DragSession, EventOutcome, PointerEvent, ZoomSelectionController};
use crate::geometry::{ImageSize, ViewportSize};
use crate::render::{render, RenderSurface};
use crate::transform::BlitParams;
use crate::view_state::ViewState;

/// Host-facing entry point: owns the view state and the zoom controller.
///
/// Hosts forward pointer events through [`Viewer::handle_event`], poll
/// [`Viewer::take_redraw_request`] and call [`Viewer::render`] from their
/// paint cycle.
#[derive(Clone, Debug, Default)]
pub struct Viewer {
    state: ViewState,
    controller: ZoomSelectionController,
    redraw_pending: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image(&mut self, image: ImageSize) {
        self.controller = ZoomSelectionController::new();
        self.state.set_image(image);
    }

    pub fn clear_image(&mut self) {
        self.controller = ZoomSelectionController::new();
        self.state.clear_image();
    }

    pub fn set_resolution_scale(&mut self, scale: f64) {
        self.state.set_resolution_scale(scale);
    }

    /// Slider-style input: `percent / 100`, saturating at 100.
    pub fn set_resolution_percent(&mut self, percent: u8) {
        let percent = percent.min(RESOLUTION_PERCENT_MAX);
        self.state
            .set_resolution_scale(f64::from(percent) / f64::from(RESOLUTION_PERCENT_MAX));
    }

    pub fn reset(&mut self) {
        let outcome = self.controller.reset(&mut self.state);
        self.note(outcome);
    }

    pub fn handle_event(&mut self, event: PointerEvent, viewport: ViewportSize) -> EventOutcome {
        let outcome = self
            .controller
            .handle_event(event, viewport, &mut self.state);
        self.note(outcome);
        outcome
    }

    fn note(&mut self, outcome: EventOutcome) {
        self.redraw_pending |= outcome.needs_redraw();
    }

    /// Whether a repaint was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        let dirty = self.state.take_dirty();
        std::mem::take(&mut self.redraw_pending) || dirty
    }

    pub fn render<S: RenderSurface>(
        &self,
        image: Option<&S::Image>,
        surface: &mut S,
    ) -> Option<BlitParams> {
        render(&self.state, &self.controller, image, surface)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.controller.drag_session()
    }
}
