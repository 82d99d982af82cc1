// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete range with touch input.
//!
//! Loads a fixed price list, drags the min handle with a touch gesture, and
//! compares the two snapping policies on the same release point.
//!
//! Run:
//! - `cargo run -p understory_demos --example discrete_range`

use kurbo::{Point, Rect};
use understory_drag::types::{Handle, InputEvent};
use understory_range::config::{DiscreteConfig, FixedRangeValues};
use understory_range::mode::DiscreteSnap;
use understory_range::slider::RangeSlider;
use understory_range::state::RangeValues;

const PAYLOAD: &str = r#"{"rangeValues": [1.99, 5.99, 10.99, 30.99, 50.99, 70.99]}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let payload: FixedRangeValues = serde_json::from_str(PAYLOAD).unwrap();
    let track = Rect::new(0.0, 0.0, 690.0, 20.0);

    // 32% along the track: value interpolation gives 24.07, index slots give 1.6.
    let release = [Point::new(0.32 * 690.0, 10.0)];

    for (label, snap) in [
        ("nearest value", DiscreteSnap::NearestValue),
        ("nearest index", DiscreteSnap::NearestIndex),
    ] {
        let config = DiscreteConfig::from(payload.clone()).with_snap(snap);
        let mut slider = RangeSlider::new(config, Vec::<RangeValues>::new()).unwrap();

        let start = [Point::new(0.0, 10.0)];
        let _ = slider.handle_input(
            InputEvent::TouchStart {
                handle: Handle::Min,
                touches: &start,
            },
            &track,
        );
        let _ = slider.handle_input(InputEvent::TouchMove { touches: &release }, &track);
        let _ = slider.handle_input(InputEvent::TouchEnd, &track);

        println!("== Snap to {label} ==");
        println!("Selected range: {}", slider.range_text());
        println!(
            "Indices: {:?}  positions: {:.1} / {:.1}",
            slider.state().indices(),
            slider.state().min_position(),
            slider.state().max_position()
        );
        let changes = slider.into_sink();
        println!("Notifications: {}", changes.len());

        let expected = match snap {
            DiscreteSnap::NearestValue => 30.99,
            DiscreteSnap::NearestIndex => 10.99,
        };
        assert_eq!(changes.last(), Some(&RangeValues::new(expected, 70.99)));
    }

    // The min handle can never take the max handle's entry.
    let mut slider = RangeSlider::new(payload, |v: RangeValues| {
        println!("  changed: {} .. {}", v.min, v.max);
    })
    .unwrap();
    let far = [Point::new(2000.0, 10.0)];
    let _ = slider.handle_input(
        InputEvent::TouchStart {
            handle: Handle::Min,
            touches: &far,
        },
        &track,
    );
    let _ = slider.handle_input(InputEvent::TouchEnd, &track);
    println!("== Min pushed to the end ==");
    println!("Selected range: {}", slider.range_text());
    assert_eq!(slider.values(), RangeValues::new(50.99, 70.99));
}
