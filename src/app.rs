use leptos::ev::{Event, KeyboardEvent, MouseEvent, WheelEvent};
use leptos::*;

use crate::application::{GraphSession, PointerMode};
use crate::domain::errors::GraphResult;
use crate::domain::functions::FunctionId;
use crate::domain::logging::LogComponent;
use crate::global_state::{FunctionEntry, entry_by_id, globals};
use crate::infrastructure::JsGraphEngine;
use crate::log_warn;
use crate::presentation::{CANVAS_ID, dispatch};

const PRIMARY_BUTTON: i16 = 0;

/// 🦀 Root component: graph surface, function panel and command terminal.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .graph-app {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                display: grid;
                grid-template-columns: minmax(0, 1fr) 280px;
                grid-template-rows: minmax(0, 1fr) auto;
                gap: 12px;
                height: 100vh;
                padding: 12px;
                box-sizing: border-box;
            }

            .graph-surface {
                position: relative;
                min-height: 0;
            }

            .graph-canvas {
                width: 100%;
                height: 100%;
                max-width: 1000px;
                max-height: 1000px;
                border: 1px solid #ccc;
                display: block;
            }

            .bound {
                position: absolute;
                font-size: 11px;
                color: #555;
                pointer-events: none;
            }
            .bound.x-min { left: 4px; top: 50%; }
            .bound.x-max { right: 4px; top: 50%; }
            .bound.y-min { bottom: 4px; left: 50%; }
            .bound.y-max { top: 4px; left: 50%; }

            .engine-pending {
                position: absolute;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                color: #888;
            }

            .function-list {
                list-style: none;
                margin: 0;
                padding: 0;
                overflow-y: auto;
            }

            .function-row {
                display: flex;
                align-items: center;
                gap: 6px;
                padding: 4px 0;
            }

            .function-label {
                flex: 1;
                font-family: monospace;
                overflow: hidden;
                text-overflow: ellipsis;
            }

            .terminal {
                grid-column: 1 / span 2;
                font-family: monospace;
            }

            .terminal-input {
                width: 100%;
                font-family: monospace;
                box-sizing: border-box;
            }
            "#}
        </style>
        <div class="graph-app">
            <GraphSurface />
            <FunctionPanel />
            <Terminal />
        </div>
    }
}

/// 📊 Canvas plus the four bound labels around it.
#[component]
fn GraphSurface() -> impl IntoView {
    let g = globals();
    let labels = g.bound_labels;
    let engine_ready = g.engine_ready;
    let pointer_mode = g.pointer_mode;

    let cursor_style = move || {
        let cursor = match pointer_mode.get() {
            PointerMode::Panning | PointerMode::PanningWhileTracing => "grabbing",
            PointerMode::Tracing => "crosshair",
            PointerMode::Idle => "default",
        };
        format!("cursor: {}", cursor)
    };

    let on_mouse_down = move |ev: MouseEvent| {
        if ev.button() == PRIMARY_BUTTON {
            dispatch(|session| session.pointer_down());
        }
    };
    let on_mouse_up = move |_: MouseEvent| {
        dispatch(|session| session.pointer_up());
    };
    let on_mouse_move = move |ev: MouseEvent| {
        dispatch(|session| {
            session.pointer_move(
                f64::from(ev.movement_x()),
                f64::from(ev.movement_y()),
                f64::from(ev.offset_x()),
            )
        });
    };
    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        dispatch(|session| {
            session.wheel(ev.delta_y(), f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        });
    };
    let on_double_click = move |_: MouseEvent| {
        dispatch(|session| session.double_click());
    };
    let on_context_menu = move |ev: MouseEvent| {
        ev.prevent_default();
        dispatch(|session| {
            session.right_click(f64::from(ev.offset_x()));
        });
    };

    let label = move |index: usize| move || labels.with(|labels| labels[index].clone());

    view! {
        <div class="graph-surface">
            <canvas
                id=CANVAS_ID
                class="graph-canvas"
                style=cursor_style
                on:mousedown=on_mouse_down
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_up
                on:mousemove=on_mouse_move
                on:wheel=on_wheel
                on:dblclick=on_double_click
                on:contextmenu=on_context_menu
            />
            <span class="bound x-min">{label(0)}</span>
            <span class="bound x-max">{label(1)}</span>
            <span class="bound y-min">{label(2)}</span>
            <span class="bound y-max">{label(3)}</span>
            <Show when=move || !engine_ready.get()>
                <div class="engine-pending">"⏳ Waiting for engine..."</div>
            </Show>
        </div>
    }
}

/// 🎨 Graphed functions in draw-priority order.
#[component]
fn FunctionPanel() -> impl IntoView {
    let functions = globals().functions;

    view! {
        <ul class="function-list">
            <For
                each=move || functions.get()
                key=|entry| entry.id
                children=move |entry: FunctionEntry| view! { <FunctionRow id=entry.id /> }
            />
        </ul>
    }
}

#[component]
fn FunctionRow(id: u32) -> impl IntoView {
    let functions = globals().functions;
    let entry = create_memo(move |_| functions.with(|entries| entry_by_id(entries, id)));
    let label = move || entry.with(|e| e.as_ref().map(|e| e.label.clone()).unwrap_or_default());
    let color =
        move || entry.with(|e| e.as_ref().map(|e| e.color_hex.clone()).unwrap_or_default());

    let on_color = move |ev: Event| {
        let hex = event_target_value(&ev);
        edit_function(id, |session, id| session.set_function_color(id, &hex));
    };

    view! {
        <li class="function-row">
            <input type="color" prop:value=color on:input=on_color />
            <span class="function-label" style=move || format!("color: {}", color())>
                {label}
            </span>
            <button
                title="Draw above"
                on:click=move |_| edit_function(id, |session, id| session.layer_up(id).map(|_| ()))
            >
                "▲"
            </button>
            <button
                title="Draw below"
                on:click=move |_| {
                    edit_function(id, |session, id| session.layer_down(id).map(|_| ()))
                }
            >
                "▼"
            </button>
            <button
                title="Remove"
                on:click=move |_| {
                    edit_function(id, |session, id| session.remove_function(id).map(|_| ()))
                }
            >
                "✕"
            </button>
        </li>
    }
}

fn edit_function(
    raw_id: u32,
    edit: impl FnOnce(&mut GraphSession<JsGraphEngine>, FunctionId) -> GraphResult<()>,
) {
    let result = FunctionId::new(raw_id)
        .and_then(|id| dispatch(|session| edit(session, id)).unwrap_or(Ok(())));
    if let Err(e) = result {
        log_warn!(
            LogComponent::Presentation("FunctionPanel"),
            "Edit of function {} failed: {}",
            raw_id,
            e
        );
    }
}

/// 🖥️ Command input with history, result and typeset result.
#[component]
fn Terminal() -> impl IntoView {
    let g = globals();
    let input = g.console_input;
    let output = g.console_output;
    let latex = g.console_latex;

    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        dispatch(|session| session.set_input(&text));
    };

    let on_key_down = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            dispatch(|session| session.submit_command());
        }
        "ArrowUp" => {
            ev.prevent_default();
            dispatch(|session| session.history_previous());
        }
        "ArrowDown" => {
            ev.prevent_default();
            dispatch(|session| session.history_next());
        }
        _ => {}
    };

    view! {
        <div class="terminal">
            <input
                class="terminal-input"
                type="text"
                spellcheck="false"
                prop:value=move || input.get()
                on:input=on_input
                on:keydown=on_key_down
            />
            <div class="terminal-output">{move || output.get()}</div>
            <div class="terminal-latex">{move || latex.get()}</div>
        </div>
    }
}
