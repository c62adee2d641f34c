//! Gallery of knob configurations, driven by scripted input instead of a
//! window so the value mapping can be watched from a terminal.

use dialkit::kurbo::Point;
use dialkit::math::Vector2;
use dialkit::prelude::*;

fn main() -> Result<(), DialRangeError> {
    env_logger::init();

    let size = Vector2::new(200.0, 200.0);

    // Basic knob over a percentage-like range.
    let mut basic = Knob::new(0.0, 100.0)?
        .with_on_changed(|value| println!("basic     | value changed to {value:.1}"));
    basic.set_value(50.0);
    basic.tapped(Point::new(200.0, 100.0), size);

    // Temperature control with a fixed step and one tick per 5°C.
    let mut temperature = Knob::new(-20.0, 40.0)?
        .with_step(0.5)
        .with_tick_count(13)
        .with_on_changed(|value| println!("temp      | {value:.1}°C"));
    temperature.set_value(20.0);
    temperature.typed_key(NavKey::Up);
    temperature.typed_key(NavKey::PageDown);

    // Volume knob, fine steps over the classic 270° sweep.
    let mut volume = Knob::new(0.0, 10.0)?
        .with_step(0.1)
        .with_on_changed(|value| println!("volume    | {value:.1}"));
    volume.set_value(5.0);
    for _ in 0..3 {
        volume.scrolled(ScrollDelta::new(0.0, 1.0));
    }

    // Wrapping compass over the full circle.
    let mut compass = Knob::new(0.0, 359.0)?
        .with_angles(0.0, 359.0)
        .with_wrapping(true)
        .with_tick_count(8)
        .with_step(45.0)
        .with_on_changed(|value| println!("compass   | heading {value:.0}°"));
    compass.set_value(0.0);
    compass.scrolled(ScrollDelta::new(0.0, -1.0));
    compass.tapped(Point::new(100.0, 200.0), size);

    // Knob bound to a shared signal, written from both sides.
    let shared = StateSignal::new(25.0);
    shared.listen(Box::new(|value| println!("bound     | source now {value:.1}")));
    let mut bound = Knob::new(0.0, 100.0)?;
    bound.bind(shared.clone());
    shared.set(30.0);
    bound.set_value(55.0);
    log::debug!("bound knob source reads {:.1}", *shared.get());

    // Fine control without ticks.
    let mut fine = Knob::new(0.0, 1.0)?
        .with_step(0.01)
        .with_tick_count(0)
        .with_on_changed(|value| println!("fine      | {value:.3}"));
    fine.set_value(0.5);
    fine.typed_key(NavKey::Right);

    // Project one knob into screen geometry, the way a host shell would
    // before drawing.
    let geometry = KnobGeometry::layout(&basic, KnobGeometry::min_size());
    println!(
        "geometry  | indicator ({:.1}, {:.1}) -> ({:.1}, {:.1}), {} ticks",
        geometry.indicator.p0.x,
        geometry.indicator.p0.y,
        geometry.indicator.p1.x,
        geometry.indicator.p1.y,
        geometry.ticks.len(),
    );

    Ok(())
}
