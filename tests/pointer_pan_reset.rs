mod common;

use common::{FakeEngine, approx};
use function_graph_wasm::application::{GraphSession, PointerMode};
use function_graph_wasm::config::GraphConfig;
use function_graph_wasm::domain::graph::{PixelSize, Reconciliation, WindowBounds};

fn session() -> GraphSession<FakeEngine> {
    let mut session =
        GraphSession::new(FakeEngine::new(), GraphConfig::default(), PixelSize::new(1000, 1000));
    session.tick(PixelSize::new(1000, 1000));
    session
}

#[test]
fn drag_moves_x_against_and_y_with_the_pointer() {
    let mut session = session();
    session.pointer_down();
    assert_eq!(session.pointer_mode(), PointerMode::Panning);

    session.pointer_move(20.0, 10.0, 500.0);
    let b = session.viewport().bounds();
    assert!(approx(b.x_min, -11.0) && approx(b.x_max, 9.0));
    assert!(approx(b.y_min, -9.5) && approx(b.y_max, 10.5));
}

#[test]
fn pan_scales_with_window_extent() {
    let mut session = session();
    session.wheel(500.0, 500.0, 500.0);
    session.pointer_down();
    session.pointer_move(20.0, 0.0, 500.0);

    // 20px * (40 / 20) * 0.05
    let b = session.viewport().bounds();
    assert!(approx(b.x_min, -22.0) && approx(b.x_max, 18.0));
}

#[test]
fn release_stops_panning() {
    let mut session = session();
    session.pointer_down();
    session.pointer_up();
    session.pointer_move(50.0, 50.0, 10.0);

    assert_eq!(session.viewport().bounds(), WindowBounds::default());
    assert_eq!(session.pointer_mode(), PointerMode::Idle);
}

#[test]
fn pan_is_pushed_to_engine_on_next_tick() {
    let mut session = session();
    session.pointer_down();
    session.pointer_move(20.0, 0.0, 0.0);

    let frame = session.tick(PixelSize::new(1000, 1000));
    assert_eq!(frame.reconciliation, Reconciliation::WindowChanged);
    let (_, bounds) = *session.engine().resizes().last().unwrap();
    assert_eq!(bounds, session.viewport().bounds());
}

#[test]
fn double_click_restores_default_window() {
    let mut session = session();
    session.wheel(120.0, 100.0, 900.0);
    session.pointer_down();
    session.pointer_move(-30.0, 40.0, 0.0);
    session.pointer_up();
    assert_ne!(session.viewport().bounds(), WindowBounds::default());

    session.double_click();
    assert_eq!(session.viewport().bounds(), WindowBounds::default());

    session.tick(PixelSize::new(1000, 1000));
    assert_eq!(session.bound_labels()[0], "x = -10");
}
