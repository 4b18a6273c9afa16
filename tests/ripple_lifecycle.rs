use std::time::Duration;

use sy_material::host::Compositor;
use sy_material::platform::Headless;
use sy_material::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn press(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerPressed {
        position: Point::new(x, y),
        buttons: PointerButtons::LEFT,
    }
}

fn release() -> InputEvent {
    InputEvent::PointerReleased {
        position: Point::new(0.0, 0.0),
        buttons: PointerButtons::empty(),
    }
}

fn button(headless: &Headless, config: RippleConfig) -> Ripple {
    let mut ripple = Ripple::with_config(ElementId::new(1), config);
    ripple.set_feedback_brush(Color::WHITE);
    ripple.set_size(Size::new(120.0, 40.0));
    ripple.attach(headless.services());
    ripple
}

#[test]
fn test_full_press_release_timeline() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(&headless, RippleConfig::default());
    let container = ripple.container().unwrap();

    headless.advance(ms(0));
    ripple.on_input(&press(0.0, 0.0));

    // First rendered frame: no radius yet, full ceiling opacity
    let frame = headless.advance(ms(16));
    let first = *frame.ellipses().next().unwrap();
    assert_eq!(first.radius_x, 0.0);
    assert!(approx_eq(first.opacity, 0.1));
    assert_eq!(first.brush, Color::WHITE);

    // After the spread duration the radius is at its maximum
    let frame = headless.advance(ms(2016));
    let spread = *frame.ellipses().next().unwrap();
    let farthest = (120.0f32 * 120.0 + 40.0 * 40.0).sqrt();
    assert!(approx_eq(spread.radius_x, farthest * 1.33));
    assert!(approx_eq(spread.opacity, 0.1));

    ripple.on_input(&release());
    assert!(!ripple.has_active_ripple());

    // Fade reaches full transparency at the fade duration
    let frame = headless.advance(ms(2616));
    let faded = *frame.ellipses().next().unwrap();
    assert!(approx_eq(faded.opacity, 0.0));

    // One more frame past the fade duration, then the handler stops
    assert_eq!(headless.advance(ms(2632)).ellipses().count(), 1);
    assert!(headless.advance(ms(2648)).is_empty());
    assert!(!headless.compositor.borrow().is_animating());

    // The visual is removed one spread duration after the release
    assert_eq!(headless.compositor.borrow().children(container).len(), 1);
    headless.advance(ms(4016));
    assert!(headless.compositor.borrow().children(container).is_empty());
}

#[test]
fn test_start_twice_then_restart_after_stop() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(&headless, RippleConfig::default());

    assert!(ripple.start_ripple(Point::new(10.0, 10.0)));
    assert!(!ripple.start_ripple(Point::new(10.0, 10.0)));
    assert!(ripple.stop_ripple());
    assert!(ripple.start_ripple(Point::new(10.0, 10.0)));
}

#[test]
fn test_released_and_new_ripple_overlap() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(
        &headless,
        RippleConfig::new().easing(Easing::Linear),
    );

    headless.advance(ms(0));
    ripple.start_ripple(Point::new(10.0, 10.0));
    headless.advance(ms(16));
    ripple.stop_ripple();
    ripple.start_ripple(Point::new(100.0, 30.0));

    // The fading ripple and the new one render in the same frame
    let frame = headless.advance(ms(32));
    assert_eq!(frame.ellipses().count(), 2);
    let centers: Vec<Point> = frame.ellipses().map(|e| e.center).collect();
    assert!(centers.contains(&Point::new(10.0, 10.0)));
    assert!(centers.contains(&Point::new(100.0, 30.0)));
}

#[test]
fn test_release_before_first_frame() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(&headless, RippleConfig::default());

    headless.advance(ms(0));
    ripple.on_input(&press(60.0, 20.0));
    ripple.on_input(&release());

    // Spread and fade arrive together; the ripple still renders and fades
    let frame = headless.advance(ms(16));
    assert_eq!(frame.ellipses().count(), 1);
    headless.advance(ms(700));
    assert!(headless.advance(ms(716)).is_empty());
}

#[test]
fn test_frames_are_clipped_to_rounded_bounds() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(&headless, RippleConfig::default());
    let radius = Shape::CIRCULAR.to_corner_radius(ripple.size());
    ripple.set_corner_radius(radius);

    ripple.start_ripple(Point::new(60.0, 20.0));
    let frame = headless.advance(ms(16));
    let ellipse = frame.ellipses().next().unwrap();
    let clip = ellipse.clip.unwrap();
    assert_eq!(clip.rect, Rect::new(0.0, 0.0, 120.0, 40.0));
    assert_eq!(clip.radii, CornerRadius::uniform(20.0));
}

#[test]
fn test_disabled_feedback_draws_nothing() {
    init_logging();
    let headless = Headless::new();
    let mut ripple = button(&headless, RippleConfig::default());
    ripple.set_feedback_enabled(false);

    ripple.on_input(&press(60.0, 20.0));
    assert!(headless.advance(ms(16)).is_empty());
}
