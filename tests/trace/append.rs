//! Appending lines through the recorder

use crate::common::*;
use tcu_trace::{trace_state, trace_temperature, TraceCategory};

#[test]
fn test_lines_in_call_order_with_own_timestamps() {
    let fx = Fixture::new(3, day(2021, 8, 12));
    fx.recorder.rotate();

    for i in 0..10 {
        fx.clock.advance(chrono::Duration::seconds(1));
        trace_temperature!(fx.recorder, "sensor {} {:.2}", i, 20.0 + i as f64 / 4.0);
    }

    let content = fx.read("temp_20210812");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "2021-08-12 00:00:06 sensor 0 20.00");
    assert_eq!(lines[9], "2021-08-12 00:00:15 sensor 9 22.25");
    assert!(content.ends_with('\n'));
}

#[test]
fn test_disabled_leaves_files_untouched() {
    let fx = Fixture::new(3, day(2021, 8, 12));
    fx.recorder.flag().disable();

    // Not even rotation is needed for the no-op: no file, no error
    for _ in 0..5 {
        trace_state!(fx.recorder, "ignored");
    }
    assert!(dir_listing(fx.path()).is_empty());

    fx.recorder.rotate();
    for _ in 0..5 {
        trace_state!(fx.recorder, "ignored");
    }
    assert_eq!(fx.read("state_20210812"), "");
}

#[test]
fn test_deleted_file_does_not_break_producer() {
    let fx = Fixture::new(3, day(2021, 8, 12));
    fx.recorder.rotate();

    std::fs::remove_file(fx.path().join("state_20210812")).unwrap();
    trace_state!(fx.recorder, "into the void");

    // The appender never recreates a file
    assert_eq!(dir_listing(fx.path()), vec!["temp_20210812"]);

    let err = fx
        .recorder
        .try_trace_at(TraceCategory::State, day(2021, 8, 12), format_args!("x"))
        .unwrap_err();
    assert!(matches!(err, tcu_trace::Error::Append(_)));
}

#[test]
fn test_same_day_rotation_discards_lines() {
    let fx = Fixture::new(3, day(2021, 8, 12));
    fx.recorder.rotate();
    trace_state!(fx.recorder, "before restart");
    assert!(!fx.read("state_20210812").is_empty());

    let report = fx.recorder.rotate();
    assert_eq!(report.created[0].as_str(), "state_20210812");
    assert_eq!(fx.read("state_20210812"), "");
}
