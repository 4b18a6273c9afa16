//! Prints a ripple's radius and opacity over one press-and-release.
//!
//! Run with `RUST_LOG=sy_material=debug cargo run --example ripple_timeline`
//! to interleave the engine's log output.

use std::time::Duration;

use sy_material::platform::{ElementEntry, Headless};
use sy_material::prelude::*;

const FRAME: Duration = Duration::from_millis(100);

fn main() {
    env_logger::init();

    let headless = Headless::new();
    let button = ElementId::new(1);
    let layer_id = ElementId::new(2);
    headless
        .elements
        .insert(button, ElementEntry::new().name("button"));
    headless.elements.insert(
        layer_id,
        ElementEntry::new().parent(button).templated_parent(button),
    );

    let layer = StateLayer::new(layer_id);
    {
        let mut layer = layer.borrow_mut();
        layer.set_size(Size::new(160.0, 48.0));
        layer.update_ripple(|ripple| {
            ripple.set_feedback_brush(Color::WHITE);
            ripple.set_corner_radius(Shape::CIRCULAR.to_corner_radius(Size::new(160.0, 48.0)));
        });
        layer.attach(headless.services());
        layer.set_rcon_source(Some(button));
        layer.set_hovered(true);
        println!("hover opacity: {:.2}", layer.state_opacity());
    }

    let press = InputEvent::PointerPressed {
        position: Point::new(24.0, 24.0),
        buttons: PointerButtons::LEFT,
    };
    let release = InputEvent::PointerReleased {
        position: Point::new(24.0, 24.0),
        buttons: PointerButtons::empty(),
    };

    let mut now = Duration::ZERO;
    headless.router.raise(button, &RoutedEvent::new(press, button));
    for step in 0..30 {
        if step == 8 {
            headless.router.raise(button, &RoutedEvent::new(release, button));
            println!("-- released");
        }
        let frame = headless.advance(now);
        for ellipse in frame.ellipses() {
            println!(
                "{:>5} ms  radius {:>7.2}  opacity {:.3}",
                now.as_millis(),
                ellipse.radius_x,
                ellipse.opacity
            );
        }
        now += FRAME;
    }

    println!(
        "live visuals after the timeline: {}",
        headless.compositor.borrow().len()
    );
}
