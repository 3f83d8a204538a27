use crate::domain::GraphEngine;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Command input/output pair plus the history of submitted commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandConsole {
    input: String,
    output: String,
    latex: String,
    history: Vec<String>,
    /// Position while walking the history; `None` until ArrowUp/Down is used.
    cursor: Option<usize>,
}

impl CommandConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Evaluate the current input. Engine errors arrive as the output text.
    /// Blank input is ignored.
    pub fn submit<E: GraphEngine>(&mut self, engine: &mut E) -> Option<&str> {
        let command = self.input.trim().to_string();
        if command.is_empty() {
            return None;
        }

        self.output = engine.evaluate(&command);
        self.latex = engine.latex_result();
        log_debug!(LogComponent::Application("Console"), "{} => {}", command, self.output);

        self.history.push(command);
        self.input.clear();
        self.cursor = None;
        Some(&self.output)
    }

    /// ArrowUp: step to the previous command, wrapping to the newest.
    pub fn history_previous(&mut self) -> Option<&str> {
        let len = self.history.len();
        if len == 0 {
            return None;
        }
        let next = match self.cursor {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.recall(next)
    }

    /// ArrowDown: step to the next command, wrapping to the oldest.
    pub fn history_next(&mut self) -> Option<&str> {
        let len = self.history.len();
        if len == 0 {
            return None;
        }
        let next = match self.cursor {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.recall(next)
    }

    fn recall(&mut self, index: usize) -> Option<&str> {
        self.cursor = Some(index);
        self.input = self.history.get(index)?.clone();
        Some(&self.input)
    }
}
