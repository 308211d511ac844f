//! Retention across consecutive days

use crate::common::*;
use proptest::prelude::*;
use tcu_trace::{ManagerOptions, RetentionConfig, TraceCategory, TraceFileManager};
use tempfile::TempDir;

#[test]
fn test_four_days_with_bound_three() {
    let dir = TempDir::new().unwrap();
    let mgr = TraceFileManager::with_options(
        dir.path(),
        TraceCategory::State,
        RetentionConfig::new(3),
        ManagerOptions::immediate(),
    );

    for d in 1..=3 {
        mgr.create_todays_file(day(2021, 8, d)).unwrap();
    }
    assert_eq!(
        dir_listing(dir.path()),
        vec!["state_20210801", "state_20210802", "state_20210803"]
    );

    mgr.create_todays_file(day(2021, 8, 4)).unwrap();
    assert_eq!(
        dir_listing(dir.path()),
        vec!["state_20210802", "state_20210803", "state_20210804"]
    );
}

#[test]
fn test_oldest_first_across_month_boundary() {
    let fx = Fixture::new(2, day(2021, 12, 30));

    for i in 0..4 {
        fx.clock.set(plus_days(day(2021, 12, 30), i));
        assert!(fx.recorder.rotate_if_due().is_complete());
    }

    assert_eq!(
        fx.recorder.list(TraceCategory::State).unwrap(),
        vec!["state_20220101", "state_20220102"]
    );
    assert_eq!(
        fx.recorder.list(TraceCategory::Temperature).unwrap(),
        vec!["temp_20220101", "temp_20220102"]
    );
}

#[test]
fn test_categories_keep_separate_counts() {
    let fx = Fixture::new(2, day(2021, 8, 1));

    // Temperature only gets one file, state gets three days
    fx.recorder
        .rotate_category(TraceCategory::Temperature, day(2021, 8, 1))
        .unwrap();
    for d in 1..=3 {
        fx.recorder
            .rotate_category(TraceCategory::State, day(2021, 8, d))
            .unwrap();
    }

    assert_eq!(
        dir_listing(fx.path()),
        vec!["state_20210802", "state_20210803", "temp_20210801"]
    );
}

#[test]
fn test_lowered_bound_needs_prune() {
    let fx = Fixture::new(5, day(2021, 8, 1));
    for d in 1..=5 {
        fx.clock.set(day(2021, 8, d));
        fx.recorder.rotate_if_due();
    }

    // Reopen with a smaller bound over the same directory
    let smaller = tcu_trace::TraceRecorder::builder()
        .config(tcu_trace::TraceConfig::immediate(fx.path()).with_max_trace_days(2))
        .build()
        .unwrap();

    // Exact-equality rule: five files with a bound of two are not evicted
    smaller
        .rotate_category(TraceCategory::State, day(2021, 8, 6))
        .unwrap();
    assert_eq!(smaller.list(TraceCategory::State).unwrap().len(), 6);

    let removed = smaller.prune().unwrap();
    assert_eq!(removed.len(), 4 + 3);
    assert_eq!(
        smaller.list(TraceCategory::State).unwrap(),
        vec!["state_20210805", "state_20210806"]
    );
    assert_eq!(
        smaller.list(TraceCategory::Temperature).unwrap(),
        vec!["temp_20210804", "temp_20210805"]
    );
}

#[test]
fn test_recursive_scan_keeps_bound_with_archived_files() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("archive");
    std::fs::create_dir(&archive).unwrap();
    std::fs::File::create(archive.join("state_20210730")).unwrap();
    std::fs::File::create(archive.join("state_20210731")).unwrap();

    let mut config = tcu_trace::TraceConfig::immediate(dir.path()).with_max_trace_days(3);
    config.scan_mode = tcu_trace::ScanMode::Recursive;
    let rec = tcu_trace::TraceRecorder::builder()
        .config(config)
        .build()
        .unwrap();

    for d in 1..=4 {
        rec.rotate_category(TraceCategory::State, day(2021, 8, d)).unwrap();
        assert!(rec.list(TraceCategory::State).unwrap().len() <= 3);
    }
    assert!(dir_listing(&archive).is_empty());
    assert_eq!(
        rec.list(TraceCategory::State).unwrap(),
        vec!["state_20210802", "state_20210803", "state_20210804"]
    );

    // Archived file beyond the bound is what prune removes
    std::fs::File::create(archive.join("state_20210701")).unwrap();
    let removed = rec.prune().unwrap();
    assert_eq!(removed.len(), 1);
    assert!(!archive.join("state_20210701").exists());
    assert_eq!(rec.list(TraceCategory::State).unwrap().len(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn bound_never_exceeded(max in 1usize..6, days in 1i64..15) {
        let dir = TempDir::new().unwrap();
        let mgr = TraceFileManager::with_options(
            dir.path(),
            TraceCategory::Temperature,
            RetentionConfig::new(max),
            ManagerOptions::immediate(),
        );

        let start = day(2021, 8, 1);
        for i in 0..days {
            let name = mgr.create_todays_file(plus_days(start, i)).unwrap();
            let files = mgr.existing_files().unwrap();
            prop_assert!(files.len() <= max);
            prop_assert_eq!(files.last().map(String::as_str), Some(name.as_str()));
        }
        prop_assert_eq!(mgr.existing_files().unwrap().len(), (days as usize).min(max));
    }
}
