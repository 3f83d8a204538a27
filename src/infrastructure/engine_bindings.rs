use js_sys::{Array, Function, Reflect, Uint32Array};
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::GraphEngine;
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::functions::FunctionId;
use crate::domain::graph::{PixelSize, WindowBounds};
use crate::domain::logging::LogComponent;
use crate::log_warn;

/// Global the host page publishes the engine under.
pub const ENGINE_GLOBAL: &str = "graphEngine";

/// [`GraphEngine`] backed by the JavaScript object at `globalThis.graphEngine`.
///
/// The object exposes `init`, `resize(h, w, xMin, xMax, yMin, yMax)`,
/// `getBuffer()` returning a `Uint32Array`, `evaluate(text)`,
/// `getLatexResult()` and `releaseFunction(id)`.
pub struct JsGraphEngine {
    engine: JsValue,
    /// Copy of the last buffer; its length always matches the last fetch.
    scratch: Vec<u32>,
}

impl JsGraphEngine {
    /// Look the engine up on the global object.
    pub fn from_global() -> GraphResult<Self> {
        let engine = Reflect::get(&js_sys::global(), &JsValue::from_str(ENGINE_GLOBAL))
            .map_err(|e| GraphError::Engine(describe(&e)))?;
        if engine.is_undefined() || engine.is_null() {
            return Err(GraphError::EngineNotReady);
        }
        Ok(Self::new(engine))
    }

    pub fn new(engine: JsValue) -> Self {
        Self { engine, scratch: Vec::new() }
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let function: Function =
            Reflect::get(&self.engine, &JsValue::from_str(method))?.dyn_into()?;
        let array: Array = args.iter().collect();
        function.apply(&self.engine, &array)
    }

    /// Call for side effects only; failures are logged.
    fn call_logged(&self, method: &str, args: &[JsValue]) {
        if let Err(e) = self.call(method, args) {
            log_warn!(
                LogComponent::Infrastructure("JsGraphEngine"),
                "{} failed: {}",
                method,
                describe(&e)
            );
        }
    }

    fn call_string(&self, method: &str, args: &[JsValue]) -> String {
        match self.call(method, args) {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(e) => describe(&e),
        }
    }

    fn fetch_buffer(&mut self) -> Result<(), JsValue> {
        let array: Uint32Array = self.call("getBuffer", &[])?.dyn_into()?;
        self.scratch.resize(array.length() as usize, 0);
        array.copy_to(&mut self.scratch);
        Ok(())
    }
}

impl GraphEngine for JsGraphEngine {
    fn init(&mut self) {
        self.call_logged("init", &[]);
    }

    fn resize(&mut self, size: PixelSize, bounds: WindowBounds) {
        self.call_logged(
            "resize",
            &[
                size.height.into(),
                size.width.into(),
                bounds.x_min.into(),
                bounds.x_max.into(),
                bounds.y_min.into(),
                bounds.y_max.into(),
            ],
        );
    }

    fn buffer(&mut self) -> &[u32] {
        if let Err(e) = self.fetch_buffer() {
            log_warn!(
                LogComponent::Infrastructure("JsGraphEngine"),
                "getBuffer failed: {}",
                describe(&e)
            );
            self.scratch.clear();
        }
        &self.scratch
    }

    fn evaluate(&mut self, text: &str) -> String {
        self.call_string("evaluate", &[JsValue::from_str(text)])
    }

    fn latex_result(&mut self) -> String {
        self.call_string("getLatexResult", &[])
    }

    fn release_function(&mut self, id: FunctionId) {
        self.call_logged("releaseFunction", &[id.value().into()]);
    }
}

/// Best-effort text for a thrown JavaScript value.
fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
