// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous range basics.
//!
//! Loads `{"min": 1, "max": 100}` bounds, drags both handles with a mouse,
//! and prints the selection after each gesture. The min drag overshoots the
//! max handle and stops one step below it.
//!
//! Run:
//! - `cargo run -p understory_demos --example continuous_range`

use kurbo::{Point, Rect};
use understory_drag::types::{Handle, InputEvent};
use understory_range::config::RangeBounds;
use understory_range::slider::RangeSlider;
use understory_range::state::RangeValues;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let payload = r#"{"min": 1, "max": 100}"#;
    let bounds: RangeBounds = serde_json::from_str(payload).unwrap();
    let mut slider = RangeSlider::new(bounds, |v: RangeValues| {
        println!("  changed: {} .. {}", v.min, v.max);
    })
    .unwrap();

    // A 396px track starting at x = 50, so each pixel is a quarter unit.
    let track = Rect::new(50.0, 0.0, 446.0, 16.0);
    let at = |x: f64| Point::new(x, 8.0);

    println!("== Drag max down to the middle ==");
    let press = InputEvent::PointerDown {
        handle: Handle::Max,
        point: at(446.0),
    };
    let _ = slider.handle_input(press, &track);
    for x in [400.0, 300.0, 246.0] {
        let _ = slider.handle_input(InputEvent::PointerMove { point: at(x) }, &track);
    }
    let _ = slider.handle_input(InputEvent::PointerUp, &track);
    println!("Selected range: {}", slider.range_text());
    assert_eq!(slider.values(), RangeValues::new(1.0, 50.0));

    println!("== Drag min past max ==");
    let press = InputEvent::PointerDown {
        handle: Handle::Min,
        point: at(50.0),
    };
    let _ = slider.handle_input(press, &track);
    let _ = slider.handle_input(InputEvent::PointerMove { point: at(900.0) }, &track);
    let _ = slider.handle_input(InputEvent::PointerUp, &track);
    println!("Selected range: {}", slider.range_text());
    assert_eq!(slider.values(), RangeValues::new(49.0, 50.0));

    println!(
        "Handle positions: min={:.3} max={:.3}",
        slider.state().min_position(),
        slider.state().max_position()
    );
}
