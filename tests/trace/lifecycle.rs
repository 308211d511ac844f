//! Recorder lifecycle over several simulated days

use crate::common::*;
use std::sync::Arc;
use tcu_trace::{trace_state, ManualClock, TraceCategory, TraceConfig, TraceRecorder};

#[test]
fn test_week_of_tracing() {
    let fx = Fixture::new(3, day(2021, 8, 1));

    for d in 0..7 {
        fx.clock.set(plus_days(day(2021, 8, 1), d));
        fx.recorder.rotate_if_due();
        trace_state!(fx.recorder, "day {}", d);
        // A second check on the same day changes nothing
        assert!(fx.recorder.rotate_if_due().is_empty());
    }

    assert_eq!(
        dir_listing(fx.path()),
        vec![
            "state_20210805",
            "state_20210806",
            "state_20210807",
            "temp_20210805",
            "temp_20210806",
            "temp_20210807",
        ]
    );
    assert_eq!(fx.read("state_20210807"), "2021-08-07 00:00:05 day 6\n");
    assert_eq!(fx.read("temp_20210807"), "");
}

#[test]
fn test_config_file_drives_recorder() {
    let tmp = tempfile::TempDir::new().unwrap();
    let trace_dir = tmp.path().join("tracefiles");
    let config_path = tmp.path().join("trace.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{ "trace_dir": {:?}, "retention": {{ "max_nr_of_trace_days": 1 }}, "trace_enabled": false, "settle_delay_ms": 0 }}"#,
            trace_dir.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = TraceConfig::from_json_file(&config_path).unwrap();
    let rec = TraceRecorder::builder()
        .config(config)
        .clock(Arc::new(ManualClock::new(day(2021, 8, 1))))
        .build()
        .unwrap();

    assert!(!rec.flag().is_enabled());
    rec.rotate();
    rec.rotate_at(day(2021, 8, 2));
    assert_eq!(rec.list(TraceCategory::State).unwrap(), vec!["state_20210802"]);
}

#[test]
fn test_scan_failure_is_reported() {
    let fx = Fixture::new(3, day(2021, 8, 1));
    std::fs::remove_dir_all(fx.path()).unwrap();

    let report = fx.recorder.rotate();
    assert!(report.created.is_empty());
    assert_eq!(report.failed.len(), 2);
    assert!(matches!(report.failed[0].1, tcu_trace::Error::Scan(_)));
    assert!(fx.recorder.list(TraceCategory::State).is_err());
}
