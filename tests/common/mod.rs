#![allow(dead_code)]

use std::collections::HashMap;

use function_graph_wasm::domain::GraphEngine;
use function_graph_wasm::domain::functions::FunctionId;
use function_graph_wasm::domain::graph::{PixelSize, WindowBounds};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Init,
    Resize(PixelSize, WindowBounds),
    Buffer,
    Evaluate(String),
    LatexResult,
    Release(u32),
}

/// In-memory engine: variables, single-argument functions of `x`, and an
/// ownership buffer that is reallocated (filled with `fill`) on every resize.
pub struct FakeEngine {
    pub calls: Vec<EngineCall>,
    pub buffer: Vec<u32>,
    pub fill: u32,
    /// When false, `resize` leaves the old buffer in place.
    pub reallocate_on_resize: bool,
    pub variables: HashMap<String, f64>,
    pub functions: HashMap<String, fn(f64) -> f64>,
    last_output: String,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            buffer: Vec::new(),
            fill: 0,
            reallocate_on_resize: true,
            variables: HashMap::new(),
            functions: HashMap::new(),
            last_output: String::new(),
        }
    }

    pub fn with_function(mut self, name: &str, f: fn(f64) -> f64) -> Self {
        self.functions.insert(name.to_string(), f);
        self
    }

    pub fn with_variable(mut self, name: &str, value: f64) -> Self {
        self.variables.insert(name.to_string(), value);
        self
    }

    pub fn resizes(&self) -> Vec<(PixelSize, WindowBounds)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Resize(size, bounds) => Some((*size, *bounds)),
                _ => None,
            })
            .collect()
    }

    fn eval(&mut self, text: &str) -> String {
        if let Some((name, value)) = text.split_once('=') {
            return match value.trim().parse::<f64>() {
                Ok(value) => {
                    self.variables.insert(name.trim().to_string(), value);
                    value.to_string()
                }
                Err(_) => format!("Error: cannot assign '{}'", value.trim()),
            };
        }
        if let Some(value) = self.variables.get(text) {
            return value.to_string();
        }
        match (self.functions.get(text), self.variables.get("x")) {
            (Some(f), Some(&x)) => f(x).to_string(),
            (Some(_), None) => "Error: x is undefined".to_string(),
            _ => format!("Error: unknown '{}'", text),
        }
    }
}

impl GraphEngine for FakeEngine {
    fn init(&mut self) {
        self.calls.push(EngineCall::Init);
    }

    fn resize(&mut self, size: PixelSize, bounds: WindowBounds) {
        self.calls.push(EngineCall::Resize(size, bounds));
        if self.reallocate_on_resize {
            self.buffer = vec![self.fill; size.pixel_count()];
        }
    }

    fn buffer(&mut self) -> &[u32] {
        self.calls.push(EngineCall::Buffer);
        &self.buffer
    }

    fn evaluate(&mut self, text: &str) -> String {
        self.calls.push(EngineCall::Evaluate(text.to_string()));
        self.last_output = self.eval(text);
        self.last_output.clone()
    }

    fn latex_result(&mut self) -> String {
        self.calls.push(EngineCall::LatexResult);
        format!("\\mathrm{{{}}}", self.last_output)
    }

    fn release_function(&mut self, id: FunctionId) {
        self.calls.push(EngineCall::Release(id.value()));
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
