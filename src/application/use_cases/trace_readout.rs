use crate::domain::GraphEngine;
use crate::domain::functions::FunctionList;
use crate::domain::graph::Viewport;

/// Name of the engine variable curves are evaluated against.
pub const TRACE_VARIABLE: &str = "x";

/// Text put in the command input while tracing.
pub fn trace_input_text(x: f64) -> String {
    format!("{TRACE_VARIABLE} = {x}")
}

/// Use case: evaluate every function at the cursor column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceReadoutUseCase;

impl TraceReadoutUseCase {
    /// Domain x under the cursor column.
    pub fn cursor_x(viewport: &Viewport, cursor_px: i32) -> f64 {
        viewport.pixel_to_x(f64::from(cursor_px))
    }

    /// Store an evaluated label on each function. The engine's `x` is set to
    /// the traced value around each evaluation and put back afterwards, so the
    /// user's own `x` survives.
    pub fn execute<E: GraphEngine>(
        &self,
        engine: &mut E,
        viewport: &Viewport,
        functions: &mut FunctionList,
        cursor_px: i32,
    ) -> f64 {
        let x = Self::cursor_x(viewport, cursor_px);
        let assign_traced = trace_input_text(x);

        for function in functions.iter_mut() {
            let previous = engine.evaluate(TRACE_VARIABLE);
            engine.evaluate(&assign_traced);
            function.trace_label = Some(engine.evaluate(&function.name));
            engine.evaluate(&format!("{TRACE_VARIABLE} = {previous}"));
        }

        x
    }

    /// Put the raw expression text back on every function.
    pub fn clear(&self, functions: &mut FunctionList) {
        functions.clear_trace_labels();
    }
}
