// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable labels.
//!
//! Opens each label of a continuous range, types into it, and commits or
//! cancels the way a text field would on Enter, Escape, and focus loss.
//!
//! Run:
//! - `cargo run -p understory_demos --example label_editing`

use understory_drag::types::Handle;
use understory_range::config::{DiscreteConfig, RangeConfig};
use understory_range::edit::EditKey;
use understory_range::reconciler::{LabelEdit, NoSink};
use understory_range::slider::RangeSlider;
use understory_range::state::RangeValues;

const CONFIG: &str = r#"{
    "mode": "continuous",
    "lowerBound": 0,
    "upperBound": 100,
    "initialMin": 25,
    "initialMax": 50,
    "step": 1,
    "currency": "€"
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let config: RangeConfig = serde_json::from_str(CONFIG).unwrap();
    let mut slider = RangeSlider::new(config, Vec::<RangeValues>::new()).unwrap();
    println!("Selected range: {}", slider.range_text());

    println!("== Type past the max handle, then Enter ==");
    assert!(slider.activate_label(Handle::Min));
    println!("  seeded with {:?}", slider.pending_text());
    slider.set_pending_text("75");
    let outcome = slider.label_key(EditKey::Enter);
    println!("  {outcome:?}");
    assert_eq!(outcome, Some(LabelEdit::Applied(RangeValues::new(49.0, 50.0))));
    println!("Selected range: {}", slider.range_text());

    println!("== Escape leaves the value alone ==");
    assert!(slider.activate_label(Handle::Max));
    slider.set_pending_text("90");
    assert_eq!(slider.label_key(EditKey::Escape), None);
    println!("Selected range: {}", slider.range_text());

    println!("== Non-numeric text is discarded on blur ==");
    assert!(slider.activate_label(Handle::Max));
    slider.set_pending_text("lots");
    assert_eq!(slider.blur_label(), Some(LabelEdit::Discarded));
    println!("Selected range: {}", slider.range_text());

    println!("== Moving focus commits the open label ==");
    assert!(slider.activate_label(Handle::Max));
    slider.set_pending_text(" 80 ");
    assert!(slider.activate_label(Handle::Min));
    slider.set_pending_text("10");
    let _ = slider.blur_label();
    println!("Selected range: {}", slider.range_text());
    assert_eq!(slider.values(), RangeValues::new(10.0, 80.0));

    let changes = slider.into_sink();
    println!("Notifications:");
    for v in &changes {
        println!("  {} .. {}", v.min, v.max);
    }
    assert_eq!(changes.len(), 4);

    // Labels of a discrete range stay read-only.
    let mut fixed = RangeSlider::new(DiscreteConfig::new([1.99, 5.99, 10.99]), NoSink).unwrap();
    assert!(!fixed.activate_label(Handle::Min));
    assert_eq!(fixed.editing(), None);
}
