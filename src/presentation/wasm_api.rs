use std::cell::RefCell;

use gloo::timers::callback::Interval;
use leptos::SignalSet;
use wasm_bindgen::prelude::*;

use crate::application::GraphSession;
use crate::config::GraphConfig;
use crate::domain::errors::{GraphError, GraphResult};
use crate::domain::logging::{self, LogComponent, get_logger};
use crate::global_state::{globals, publish};
use crate::infrastructure::{CanvasPresenter, JsGraphEngine};
use crate::{log_error, log_warn};

/// DOM id of the graph canvas.
pub const CANVAS_ID: &str = "graph-canvas";

thread_local! {
    static SESSION: RefCell<Option<GraphSession<JsGraphEngine>>> = const { RefCell::new(None) };
    static RENDER_LOOP: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

/// Called by the host once the engine module has loaded. Optional JSON
/// overrides any [`GraphConfig`] field.
#[wasm_bindgen(js_name = engineReady)]
pub fn engine_ready(config_json: Option<String>) -> Result<(), JsValue> {
    start_session(config_json.as_deref()).map_err(|e| {
        log_error!(LogComponent::Presentation("WasmApi"), "Engine start failed: {}", e);
        to_js(e)
    })
}

/// Append a function to the list. Its curve comes from the engine, already
/// tagged with `id`.
#[wasm_bindgen(js_name = addGraphFn)]
pub fn add_graph_fn(name: String, id: u32) -> Result<(), JsValue> {
    dispatch(|session| session.add_function(&name, id).map(|_| ()))
        .unwrap_or(Err(GraphError::EngineNotReady))
        .map_err(to_js)
}

fn start_session(config_json: Option<&str>) -> GraphResult<()> {
    if SESSION.with(|session| session.borrow().is_some()) {
        log_warn!(LogComponent::Presentation("WasmApi"), "Engine reported ready twice; ignoring");
        return Ok(());
    }

    let config = match config_json {
        Some(json) => GraphConfig::from_json(json)?,
        None => GraphConfig::default(),
    };
    logging::set_min_level(config.min_log_level);

    let engine = JsGraphEngine::from_global()?;
    let presenter = CanvasPresenter::new(CANVAS_ID);
    let surface = presenter.surface_size().unwrap_or_default();
    let tick_interval_ms = config.tick_interval_ms;

    let session = GraphSession::new(engine, config, surface);
    publish(&session);
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));
    globals().engine_ready.set(true);

    let interval = Interval::new(tick_interval_ms, move || render_tick(&presenter));
    RENDER_LOOP.with(|slot| *slot.borrow_mut() = Some(interval));

    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("✅ Engine ready, ticking every {}ms", tick_interval_ms),
    );
    Ok(())
}

fn render_tick(presenter: &CanvasPresenter) {
    let surface = match presenter.surface_size() {
        Ok(surface) => surface,
        Err(e) => {
            log_warn!(LogComponent::Presentation("RenderLoop"), "No surface: {}", e);
            return;
        }
    };

    dispatch(|session| {
        let frame = session.tick(surface);
        if frame.composed {
            if let Err(e) = presenter.present(session.image()) {
                log_warn!(LogComponent::Presentation("RenderLoop"), "Present failed: {}", e);
            }
        }
    });
}

/// Run `f` against the live session and publish the result to the UI.
/// `None` until the engine is ready.
pub fn dispatch<R>(f: impl FnOnce(&mut GraphSession<JsGraphEngine>) -> R) -> Option<R> {
    SESSION.with(|slot| {
        let mut slot = match slot.try_borrow_mut() {
            Ok(slot) => slot,
            Err(_) => {
                log_warn!(LogComponent::Presentation("WasmApi"), "Session busy; event dropped");
                return None;
            }
        };
        let session = slot.as_mut()?;
        let result = f(session);
        publish(session);
        Some(result)
    })
}

fn to_js(error: GraphError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
