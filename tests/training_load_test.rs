// ABOUTME: Unit tests for training_load module
// ABOUTME: Tests EWMA propagation, derived load metrics and TSB interpretation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use stride_engine::intelligence::algorithms::{LoadDecay, LoadState};
use stride_engine::intelligence::config::TrainingLoadConfig;
use stride_engine::intelligence::daily_load::DailyLoad;
use stride_engine::intelligence::training_load::TrainingLoadCalculator;
use stride_engine::intelligence::{RiskLevel, TrainingStatus};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(n)
}

fn loads(entries: &[(i64, f64)]) -> DailyLoad {
    let mut daily = DailyLoad::default();
    for &(n, load) in entries {
        daily.add(day(n), load);
    }
    daily
}

#[test]
fn test_single_load_first_day_state() {
    let calculator = TrainingLoadCalculator::default();
    let daily = loads(&[(0, 100.0)]);

    let state = calculator.propagate(&daily, day(0), day(0));
    assert!((state.atl - 100.0 * (1.0 - (-1.0_f64 / 7.0).exp())).abs() < 1e-9);
    assert!((state.ctl - 100.0 * (1.0 - (-1.0_f64 / 42.0).exp())).abs() < 1e-9);
}

#[test]
fn test_atl_decays_by_e_over_one_week() {
    let calculator = TrainingLoadCalculator::default();
    let daily = loads(&[(0, 120.0)]);

    let series = calculator.series(&daily, day(0), day(7));
    assert_eq!(series.len(), 8);

    let (_, first) = series[0];
    let (last_day, last) = series[7];
    assert_eq!(last_day, day(7));
    assert!((last.atl - first.atl * (-1.0_f64).exp()).abs() < 1e-9);
    assert!(
        last.ctl / first.ctl > last.atl / first.atl,
        "CTL must decay much more slowly than ATL"
    );
}

#[test]
fn test_zero_load_days_still_decay() {
    let decay = LoadDecay::default();
    let loaded = LoadState::default().advance(50.0, &decay);
    let rested = loaded.advance(0.0, &decay);

    assert!(rested.atl < loaded.atl);
    assert!(rested.ctl < loaded.ctl);
}

#[test]
fn test_tsb_negative_after_spike_positive_after_taper() {
    let calculator = TrainingLoadCalculator::default();

    // Six weeks of steady work, then a three-day spike
    let mut entries: Vec<(i64, f64)> = (0..42).map(|n| (n, 60.0)).collect();
    entries.extend((42..45).map(|n| (n, 250.0)));
    let spiked = loads(&entries);
    let after_spike = calculator.propagate(&spiked, day(0), day(44));
    assert!(after_spike.atl > after_spike.ctl);
    assert!(after_spike.tsb() < 0.0);

    // Same six weeks followed by two weeks of rest
    let steady: Vec<(i64, f64)> = (0..42).map(|n| (n, 60.0)).collect();
    let tapered = calculator.propagate(&loads(&steady), day(0), day(55));
    assert!(tapered.ctl > tapered.atl);
    assert!(tapered.tsb() > 0.0);
}

#[test]
fn test_snapshot_window_ignores_older_loads() {
    let calculator = TrainingLoadCalculator::default();
    let today = day(200);

    // 90 days before today falls just outside the window
    let outside = loads(&[(110, 300.0)]);
    let snapshot = calculator.snapshot(&outside, today);
    assert!(snapshot.atl.abs() < f64::EPSILON);
    assert!(snapshot.ctl.abs() < f64::EPSILON);

    let inside = loads(&[(111, 300.0)]);
    assert!(calculator.snapshot(&inside, today).ctl > 0.0);
}

#[test]
fn test_workload_ratio_zero_without_chronic_load() {
    let calculator = TrainingLoadCalculator::default();
    let snapshot = calculator.snapshot(&DailyLoad::default(), day(10));

    assert!(snapshot.workload_ratio.abs() < f64::EPSILON);
    assert!(snapshot.monotony.abs() < f64::EPSILON);
    assert!(snapshot.weekly_load.abs() < f64::EPSILON);
}

#[test]
fn test_workload_ratio_rounded_to_hundredths() {
    let calculator = TrainingLoadCalculator::default();
    let snapshot = calculator.snapshot(&loads(&[(9, 77.0), (10, 31.0)]), day(10));

    let scaled = snapshot.workload_ratio * 100.0;
    assert!((scaled - scaled.round()).abs() < 1e-9);
    assert!(snapshot.workload_ratio > 1.0);
}

#[test]
fn test_weekly_load_sums_trailing_seven_days() {
    let calculator = TrainingLoadCalculator::default();
    // Day 3 is seven days before today and must not count
    let daily = loads(&[(3, 500.0), (4, 10.0), (8, 20.0), (10, 30.0)]);

    let snapshot = calculator.snapshot(&daily, day(10));
    assert!((snapshot.weekly_load - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_monotony_flat_week_reports_flat_value() {
    let calculator = TrainingLoadCalculator::default();
    let daily = loads(&(0..7).map(|n| (n, 50.0)).collect::<Vec<_>>());

    let snapshot = calculator.snapshot(&daily, day(6));
    assert!((snapshot.monotony - 4.0).abs() < f64::EPSILON);
    assert!((snapshot.monotony_percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_monotony_mean_over_population_std_dev() {
    let calculator = TrainingLoadCalculator::default();
    // Mean 2, population std dev 2
    let monotony = calculator.monotony(&[0.0, 0.0, 4.0, 4.0]);
    assert!((monotony - 1.0).abs() < 1e-12);
    assert!((calculator.monotony_percent(monotony) - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_custom_windows_change_decay() {
    let calculator = TrainingLoadCalculator::new(TrainingLoadConfig {
        atl_days: 3,
        ctl_days: 28,
        ..TrainingLoadConfig::default()
    });
    let state = calculator.propagate(&loads(&[(0, 90.0)]), day(0), day(0));
    assert!((state.atl - 90.0 * (1.0 - (-1.0_f64 / 3.0).exp())).abs() < 1e-9);
}

#[test]
fn test_interpret_tsb_boundaries() {
    assert_eq!(
        TrainingLoadCalculator::interpret_tsb(-10.5),
        TrainingStatus::Overreaching
    );
    assert_eq!(
        TrainingLoadCalculator::interpret_tsb(-10.0),
        TrainingStatus::Productive
    );
    assert_eq!(TrainingLoadCalculator::interpret_tsb(0.0), TrainingStatus::Fresh);
    assert_eq!(TrainingLoadCalculator::interpret_tsb(10.0), TrainingStatus::Fresh);
    assert_eq!(
        TrainingLoadCalculator::interpret_tsb(10.1),
        TrainingStatus::Detraining
    );
}

#[test]
fn test_overtraining_risk_levels() {
    let low = TrainingLoadCalculator::check_overtraining_risk(50.0, 60.0, 10.0);
    assert_eq!(low.risk_level, RiskLevel::Low);
    assert!(low.risk_factors.is_empty());

    let moderate = TrainingLoadCalculator::check_overtraining_risk(80.0, 60.0, -5.0);
    assert_eq!(moderate.risk_level, RiskLevel::Moderate);

    let high = TrainingLoadCalculator::check_overtraining_risk(160.0, 100.0, -60.0);
    assert_eq!(high.risk_level, RiskLevel::High);
    assert_eq!(high.risk_factors.len(), 3);
}

#[test]
fn test_acute_spike_ignored_without_chronic_load() {
    let risk = TrainingLoadCalculator::check_overtraining_risk(20.0, 0.0, -20.0);
    // Only the fatigue factor applies
    assert_eq!(risk.risk_level, RiskLevel::Moderate);
}

#[test]
fn test_recovery_days() {
    assert_eq!(TrainingLoadCalculator::recommend_recovery_days(-25.0), 5);
    assert_eq!(TrainingLoadCalculator::recommend_recovery_days(-16.0), 3);
    assert_eq!(TrainingLoadCalculator::recommend_recovery_days(-12.0), 2);
    assert_eq!(TrainingLoadCalculator::recommend_recovery_days(-1.0), 1);
    assert_eq!(TrainingLoadCalculator::recommend_recovery_days(5.0), 0);
}
