/// Trace mode: follow the cursor column and show each function's value there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceState {
    enabled: bool,
    cursor_px: Option<i32>,
    /// Command input as it was before tracing took it over.
    saved_input: Option<String>,
}

/// Returned by [`TraceState::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceToggle {
    Enabled,
    /// Carries the input text captured when tracing started.
    Disabled { restored_input: Option<String> },
}

impl TraceState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cursor_px(&self) -> Option<i32> {
        self.cursor_px
    }

    /// Flip trace mode. Enabling captures the cursor column and the current
    /// command input; disabling clears the column and hands the input back.
    pub fn toggle(&mut self, cursor_px: i32, current_input: &str) -> TraceToggle {
        if self.enabled {
            self.enabled = false;
            self.cursor_px = None;
            TraceToggle::Disabled { restored_input: self.saved_input.take() }
        } else {
            self.enabled = true;
            self.cursor_px = Some(cursor_px);
            self.saved_input = Some(current_input.to_string());
            TraceToggle::Enabled
        }
    }

    /// Track the cursor column; ignored while disabled.
    pub fn track(&mut self, cursor_px: i32) {
        if self.enabled {
            self.cursor_px = Some(cursor_px);
        }
    }
}
