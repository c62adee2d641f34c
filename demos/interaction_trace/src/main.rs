//! Traces the notification lifecycle of a knob through a scripted
//! hover/drag/key/scroll session, counting `on_changed` against
//! `on_change_ended`.

use std::cell::Cell;
use std::rc::Rc;

use dialkit::core::angle;
use dialkit::kurbo::Point;
use dialkit::math::Vector2;
use dialkit::prelude::*;

fn main() -> Result<(), DialRangeError> {
    env_logger::init();

    let changed = Rc::new(Cell::new(0u32));
    let ended = Rc::new(Cell::new(0u32));

    let changed_sink = changed.clone();
    let ended_sink = ended.clone();
    let mut knob = Knob::new(0.0, 100.0)?
        .with_step(10.0)
        .with_on_changed(move |value| {
            changed_sink.set(changed_sink.get() + 1);
            println!("  on_changed({value:.1})");
        })
        .with_on_change_ended(move |value| {
            ended_sink.set(ended_sink.get() + 1);
            println!("  on_change_ended({value:.1})");
        });

    let size = Vector2::new(100.0, 100.0);
    let center = Point::new(50.0, 50.0);

    println!("pointer enters and drags a quarter turn:");
    knob.mouse_in();
    for degrees in [270, 300, 330, 0] {
        knob.dragged(angle::point_at_angle(center, 40.0, f64::from(degrees)), size);
    }
    knob.drag_end();

    println!("keyboard session while focused:");
    knob.focus_gained();
    knob.typed_key(NavKey::PageUp);
    knob.typed_key(NavKey::Down);
    knob.typed_key(NavKey::End);
    // A repeat at the bound changes nothing and settles nothing.
    knob.typed_key(NavKey::End);
    knob.focus_lost();

    println!("scroll wheel, one notch each way:");
    knob.scrolled(ScrollDelta::new(0.0, 1.0));
    knob.scrolled(ScrollDelta::new(0.0, -1.0));

    println!("tap back to the start of the sweep:");
    knob.tapped(angle::point_at_angle(center, 40.0, 225.0), size);
    knob.mouse_out();

    println!(
        "totals: {} on_changed, {} on_change_ended, final value {:.1}",
        changed.get(),
        ended.get(),
        knob.value()
    );

    Ok(())
}
