use function_graph_wasm::domain::graph::{
    ExtentLimits, PixelSize, Viewport, WindowBounds, ZoomOutcome,
};
use quickcheck_macros::quickcheck;

const SENSITIVITY: f64 = 1.0 / 500.0;

fn viewport(bounds: WindowBounds) -> Viewport {
    let size = PixelSize::new(1000, 800);
    Viewport::new(size, bounds, PixelSize::new(1000, 1000), ExtentLimits::default())
}

#[quickcheck]
fn zoom_keeps_point_under_cursor(px: u16, py: u16, delta: i8) -> bool {
    let (px, py) = (f64::from(px % 1000), f64::from(py % 800));
    let mut vp = viewport(WindowBounds::default());
    let before = (vp.pixel_to_x(px), vp.pixel_to_y(py));

    if vp.zoom_at(f64::from(delta), px, py, SENSITIVITY) != ZoomOutcome::Applied {
        return true;
    }
    let after = (vp.pixel_to_x(px), vp.pixel_to_y(py));
    (after.0 - before.0).abs() < 1e-9 && (after.1 - before.1).abs() < 1e-9
}

#[test]
fn full_divisor_delta_doubles_the_window() {
    let mut vp = viewport(WindowBounds::default());
    assert_eq!(vp.zoom_at(500.0, 500.0, 400.0, SENSITIVITY), ZoomOutcome::Applied);
    assert_eq!(vp.bounds(), WindowBounds::new(-20.0, 20.0, -20.0, 20.0));
}

#[test]
fn cursor_at_top_left_anchors_that_corner() {
    let mut vp = viewport(WindowBounds::default());
    vp.zoom_at(500.0, 0.0, 0.0, SENSITIVITY);
    let b = vp.bounds();
    assert_eq!((b.x_min, b.y_max), (-10.0, 10.0));
    assert_eq!((b.x_max, b.y_min), (30.0, -30.0));
}

#[test]
fn zoom_in_past_minimum_extent_is_rejected() {
    let start = WindowBounds::new(0.0, 1.5, 0.0, 1.5);
    let mut vp = viewport(start);

    assert_eq!(vp.zoom_at(-200.0, 500.0, 400.0, SENSITIVITY), ZoomOutcome::RejectedTooSmall);
    assert_eq!(vp.bounds(), start);
}

#[test]
fn zoom_that_inverts_the_window_is_rejected() {
    let mut vp = viewport(WindowBounds::default());

    assert_eq!(vp.zoom_at(-600.0, 500.0, 400.0, SENSITIVITY), ZoomOutcome::RejectedInverted);
    assert_eq!(vp.bounds(), WindowBounds::default());
}

#[test]
fn zoom_out_is_allowed_below_minimum() {
    let start = WindowBounds::new(0.0, 0.5, 0.0, 0.5);
    let mut vp = viewport(start);

    assert_eq!(vp.zoom_at(100.0, 500.0, 400.0, SENSITIVITY), ZoomOutcome::Applied);
    assert!(vp.bounds().width() > start.width());
}
