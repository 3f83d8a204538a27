use derive_more::Display;

/// Errors raised by the graph core. Rejected zooms and empty-history
/// navigation are not errors; they are reported as no-ops.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum GraphError {
    #[display(fmt = "Invalid color: {}", _0)]
    InvalidColor(String),
    #[display(fmt = "Invalid function id: {}", _0)]
    InvalidFunctionId(u32),
    #[display(fmt = "Unknown function: {}", _0)]
    UnknownFunction(u32),
    #[display(fmt = "Engine Error: {}", _0)]
    Engine(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Engine is not ready")]
    EngineNotReady,
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for GraphError {}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
