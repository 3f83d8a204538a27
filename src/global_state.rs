use crate::application::{GraphSession, PointerMode};
use crate::domain::GraphEngine;
use crate::domain::functions::FunctionList;
use leptos::*;
use once_cell::sync::OnceCell;

/// One row of the function panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionEntry {
    pub id: u32,
    /// Expression text, or the traced value while tracing.
    pub label: String,
    pub color_hex: String,
}

pub struct Globals {
    pub engine_ready: RwSignal<bool>,
    pub bound_labels: RwSignal<[String; 4]>,
    pub functions: RwSignal<Vec<FunctionEntry>>,
    pub console_input: RwSignal<String>,
    pub console_output: RwSignal<String>,
    pub console_latex: RwSignal<String>,
    pub pointer_mode: RwSignal<PointerMode>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        engine_ready: create_rw_signal(false),
        bound_labels: create_rw_signal(Default::default()),
        functions: create_rw_signal(Vec::new()),
        console_input: create_rw_signal(String::new()),
        console_output: create_rw_signal(String::new()),
        console_latex: create_rw_signal(String::new()),
        pointer_mode: create_rw_signal(PointerMode::Idle),
    })
}

/// Mirror session state into the signals, touching only what changed.
pub fn publish<E: GraphEngine>(session: &GraphSession<E>) {
    let g = globals();
    set_if_changed(g.bound_labels, session.bound_labels().clone());
    set_if_changed(g.functions, function_entries(session.functions()));
    set_if_changed(g.console_input, session.console().input().to_string());
    set_if_changed(g.console_output, session.console().output().to_string());
    set_if_changed(g.console_latex, session.console().latex().to_string());
    set_if_changed(g.pointer_mode, session.pointer_mode());
}

/// Panel rows in draw-priority order.
pub fn function_entries(list: &FunctionList) -> Vec<FunctionEntry> {
    list.iter()
        .map(|f| FunctionEntry {
            id: f.id.value(),
            label: f.display_text().to_string(),
            color_hex: f.color.to_hex(),
        })
        .collect()
}

/// Current row for `id`. Rows are keyed by id, so a row reads its label and
/// color through this instead of holding a snapshot.
pub fn entry_by_id(entries: &[FunctionEntry], id: u32) -> Option<FunctionEntry> {
    entries.iter().find(|entry| entry.id == id).cloned()
}

fn set_if_changed<T: PartialEq + 'static>(signal: RwSignal<T>, value: T) {
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}
