use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

pub use application::GraphSession;
pub use config::GraphConfig;
pub use domain::{GraphEngine, GraphError, GraphResult};

/// Install logging and mount the UI. The graph session itself starts when
/// the host calls `engineReady`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        infrastructure::ConsoleLogger::new_development()
    } else {
        infrastructure::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    leptos::mount_to_body(app::App);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Graph UI mounted, waiting for engine",
    );
}
