use crate::config::GraphConfig;
use crate::domain::graph::{TraceState, TraceToggle, Viewport, ZoomOutcome};
use crate::domain::logging::{LogComponent, get_logger};
use strum::{AsRefStr, Display};

/// Combined interaction mode. Panning and tracing are independent: tracing
/// stays on through any number of drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum PointerMode {
    #[strum(serialize = "idle")]
    Idle,
    #[strum(serialize = "panning")]
    Panning,
    #[strum(serialize = "tracing")]
    Tracing,
    #[strum(serialize = "panning+tracing")]
    PanningWhileTracing,
}

/// Translates raw pointer input into viewport and trace operations.
#[derive(Debug, Clone)]
pub struct PointerController {
    button_down: bool,
    pan_sensitivity: f64,
    zoom_sensitivity: f64,
}

impl PointerController {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            button_down: false,
            pan_sensitivity: config.pan_sensitivity,
            zoom_sensitivity: config.zoom_sensitivity(),
        }
    }

    pub fn mode(&self, trace: &TraceState) -> PointerMode {
        match (self.button_down, trace.is_enabled()) {
            (false, false) => PointerMode::Idle,
            (true, false) => PointerMode::Panning,
            (false, true) => PointerMode::Tracing,
            (true, true) => PointerMode::PanningWhileTracing,
        }
    }

    pub fn button_down(&mut self) {
        self.button_down = true;
    }

    pub fn button_up(&mut self) {
        self.button_down = false;
    }

    /// Pointer moved by `(movement_x, movement_y)` and is now at
    /// `(cursor_x, _)` in surface pixels.
    pub fn pointer_move(
        &mut self,
        movement_x: f64,
        movement_y: f64,
        cursor_x: f64,
        viewport: &mut Viewport,
        trace: &mut TraceState,
    ) {
        trace.track(cursor_x as i32);

        if self.button_down {
            viewport.pan(movement_x, movement_y, self.pan_sensitivity);
        }
    }

    /// Wheel with vertical `delta`; positive zooms out.
    pub fn wheel(
        &mut self,
        delta: f64,
        cursor_x: f64,
        cursor_y: f64,
        viewport: &mut Viewport,
    ) -> ZoomOutcome {
        viewport.zoom_at(delta, cursor_x, cursor_y, self.zoom_sensitivity)
    }

    pub fn double_click(&mut self, viewport: &mut Viewport) {
        viewport.reset();
        get_logger().debug(LogComponent::Application("Pointer"), "🎯 Window reset");
    }

    pub fn right_click(
        &mut self,
        cursor_x: f64,
        current_input: &str,
        trace: &mut TraceState,
    ) -> TraceToggle {
        let toggle = trace.toggle(cursor_x as i32, current_input);
        get_logger().debug(
            LogComponent::Application("Pointer"),
            &format!("Trace mode {}", if trace.is_enabled() { "on" } else { "off" }),
        );
        toggle
    }
}
