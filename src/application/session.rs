use crate::application::console::CommandConsole;
use crate::application::pointer_controller::{PointerController, PointerMode};
use crate::application::use_cases::{
    ComposeFrameUseCase, FrameImage, TraceReadoutUseCase, trace_input_text,
};
use crate::config::GraphConfig;
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::functions::{FunctionId, FunctionList, GraphedFunction};
use crate::domain::graph::{
    PixelSize, Reconciliation, TraceState, TraceToggle, Viewport, ZoomOutcome,
};
use crate::domain::GraphEngine;
use crate::domain::logging::{LogComponent, get_logger};
use crate::{log_trace, log_warn};

/// What a render tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub reconciliation: Reconciliation,
    /// Whether the image was recomposed this tick.
    pub composed: bool,
    /// Domain x under the cursor while tracing.
    pub trace_x: Option<f64>,
}

/// Owns all mutable graph state and the engine handle.
///
/// Handlers run to completion one at a time (pointer events, list edits and
/// the periodic tick are never interleaved), so the session is a plain value
/// rather than something behind a lock.
pub struct GraphSession<E: GraphEngine> {
    engine: E,
    config: GraphConfig,
    viewport: Viewport,
    functions: FunctionList,
    trace: TraceState,
    pointer: PointerController,
    console: CommandConsole,
    compositor: ComposeFrameUseCase,
    trace_readout: TraceReadoutUseCase,
    image: FrameImage,
    bound_labels: [String; 4],
}

impl<E: GraphEngine> GraphSession<E> {
    /// Build a session around an engine that has signalled readiness.
    pub fn new(mut engine: E, config: GraphConfig, surface: PixelSize) -> Self {
        engine.init();

        let viewport = Viewport::new(
            surface,
            config.default_window,
            config.max_surface(),
            config.extent_limits(),
        );
        let bound_labels = viewport.bound_labels();

        get_logger().info(
            LogComponent::Application("GraphSession"),
            &format!(
                "🚀 Graph session started at {}x{}",
                viewport.size().width,
                viewport.size().height
            ),
        );

        Self {
            engine,
            pointer: PointerController::new(&config),
            compositor: ComposeFrameUseCase::new(config.axis_color),
            config,
            viewport,
            functions: FunctionList::new(),
            trace: TraceState::default(),
            console: CommandConsole::new(),
            trace_readout: TraceReadoutUseCase,
            image: FrameImage::default(),
            bound_labels,
        }
    }

    // ---- render tick ----

    /// Reconcile the surface size, then compose from a freshly fetched buffer.
    ///
    /// A collapsed surface produces no frame and leaves any pending window
    /// change for the next tick with a real size.
    pub fn tick(&mut self, surface: PixelSize) -> FrameInfo {
        if surface.capped(self.config.max_surface()).is_empty() {
            return FrameInfo {
                reconciliation: Reconciliation::Unchanged,
                composed: false,
                trace_x: None,
            };
        }

        let reconciliation = self.viewport.reconcile(surface);
        if reconciliation.needs_engine_resize() {
            self.engine.resize(self.viewport.size(), self.viewport.bounds());
            self.bound_labels = self.viewport.bound_labels();
        }

        let size = self.viewport.size();
        let buffer = self.engine.buffer();
        let composed = match self.compositor.compose(
            buffer,
            size,
            &self.functions,
            &mut self.image,
        ) {
            Ok(()) => true,
            Err(e) => {
                log_warn!(LogComponent::Application("GraphSession"), "Frame skipped: {}", e);
                false
            }
        };

        let trace_x = self.refresh_trace();
        FrameInfo { reconciliation, composed, trace_x }
    }

    fn refresh_trace(&mut self) -> Option<f64> {
        let cursor_px = self.trace.cursor_px().filter(|_| self.trace.is_enabled())?;
        let x = self.trace_readout.execute(
            &mut self.engine,
            &self.viewport,
            &mut self.functions,
            cursor_px,
        );
        self.console.set_input(trace_input_text(x));
        Some(x)
    }

    // ---- pointer input ----

    pub fn pointer_down(&mut self) {
        self.pointer.button_down();
    }

    pub fn pointer_up(&mut self) {
        self.pointer.button_up();
    }

    pub fn pointer_move(&mut self, movement_x: f64, movement_y: f64, cursor_x: f64) {
        self.pointer.pointer_move(
            movement_x,
            movement_y,
            cursor_x,
            &mut self.viewport,
            &mut self.trace,
        );
    }

    pub fn wheel(&mut self, delta: f64, cursor_x: f64, cursor_y: f64) -> ZoomOutcome {
        let outcome = self.pointer.wheel(delta, cursor_x, cursor_y, &mut self.viewport);
        log_trace!(LogComponent::Application("GraphSession"), "Wheel {}: {:?}", delta, outcome);
        outcome
    }

    pub fn double_click(&mut self) {
        self.pointer.double_click(&mut self.viewport);
    }

    pub fn right_click(&mut self, cursor_x: f64) -> TraceToggle {
        let toggle = self.pointer.right_click(cursor_x, self.console.input(), &mut self.trace);
        if let TraceToggle::Disabled { restored_input } = &toggle {
            self.trace_readout.clear(&mut self.functions);
            self.console.set_input(restored_input.clone().unwrap_or_default());
        }
        toggle
    }

    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer.mode(&self.trace)
    }

    // ---- function list ----

    pub fn add_function(&mut self, name: &str, raw_id: u32) -> GraphResult<&GraphedFunction> {
        let id = FunctionId::new(raw_id)?;
        self.functions.add(name, id)
    }

    pub fn layer_up(&mut self, id: FunctionId) -> GraphResult<bool> {
        self.functions.layer_up(id)
    }

    pub fn layer_down(&mut self, id: FunctionId) -> GraphResult<bool> {
        self.functions.layer_down(id)
    }

    /// Release the id in the engine, then drop the list entry.
    pub fn remove_function(&mut self, id: FunctionId) -> GraphResult<GraphedFunction> {
        if self.functions.get(id).is_none() {
            return Err(GraphError::UnknownFunction(id.value()));
        }
        self.engine.release_function(id);
        self.functions.remove(id)
    }

    /// Takes effect on the next tick.
    pub fn set_function_color(&mut self, id: FunctionId, hex: &str) -> GraphResult<()> {
        self.functions.set_color_hex(id, hex)
    }

    // ---- command console ----

    pub fn set_input(&mut self, text: &str) {
        self.console.set_input(text);
    }

    pub fn submit_command(&mut self) -> Option<String> {
        self.console.submit(&mut self.engine).map(str::to_string)
    }

    pub fn history_previous(&mut self) -> Option<String> {
        self.console.history_previous().map(str::to_string)
    }

    pub fn history_next(&mut self) -> Option<String> {
        self.console.history_next().map(str::to_string)
    }

    // ---- read access ----

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn functions(&self) -> &FunctionList {
        &self.functions
    }

    pub fn trace(&self) -> &TraceState {
        &self.trace
    }

    pub fn console(&self) -> &CommandConsole {
        &self.console
    }

    pub fn image(&self) -> &FrameImage {
        &self.image
    }

    /// Labels as of the last reconciliation that reached the engine.
    pub fn bound_labels(&self) -> &[String; 4] {
        &self.bound_labels
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
