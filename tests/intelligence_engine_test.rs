// ABOUTME: Integration tests for the performance engine entry points
// ABOUTME: Covers empty input, the heart-rate scenario, EWMA decay, re-entrancy and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::thread;

use chrono::{Duration, NaiveDate};
use stride_engine::intelligence::algorithms::TrimpAlgorithm;
use stride_engine::intelligence::config::IntelligenceConfig;
use stride_engine::intelligence::{
    compute_history, compute_race_predictions, compute_snapshot_metrics, PerformanceEngine,
    PerformanceMetrics, TrainingStatus,
};
use stride_engine::models::{AthleteProfile, Gender, TrackSample, Workout, WorkoutBuilder};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
}

fn engine() -> PerformanceEngine {
    PerformanceEngine::new(IntelligenceConfig::default())
}

fn run(id: &str, days_ago: i64, km: f64, seconds: u64) -> WorkoutBuilder {
    let start = (today() - Duration::days(days_ago))
        .and_hms_opt(7, 15, 0)
        .unwrap();
    WorkoutBuilder::new(id, km, seconds * 1_000).start(start)
}

fn scenario_profile() -> AthleteProfile {
    AthleteProfile::with_heart_rates(185, 50)
}

fn scenario_workout() -> Workout {
    run("scenario", 0, 10.0, 2_700).average_heart_rate(160).build()
}

#[test]
fn test_empty_input() {
    let profile = scenario_profile();
    assert_eq!(compute_snapshot_metrics(&[], &profile), PerformanceMetrics::default());
    assert!(compute_history(&[], &profile).is_empty());
    assert!(compute_race_predictions(&[]).is_empty());

    let metrics = engine().snapshot_metrics(&[], &profile, today());
    assert!(metrics.vo2max.abs() < f64::EPSILON);
    assert!(metrics.ctl.abs() < f64::EPSILON);
    assert!(metrics.evolution_trend.abs() < f64::EPSILON);
}

#[test]
fn test_heart_rate_scenario() {
    let metrics = engine().snapshot_metrics(&[scenario_workout()], &scenario_profile(), today());

    let hrr: f64 = (160.0 - 50.0) / (185.0 - 50.0);
    let expected = 45.0 * hrr * 0.64 * (1.92 * hrr).exp();
    assert!((metrics.last_trimp - expected).abs() < 1e-9);
    assert!(
        (metrics.last_trimp - 111.0).abs() <= 2.0,
        "TRIMP should be about 111, got {}",
        metrics.last_trimp
    );

    assert!((metrics.atl - expected * (1.0 - (-1.0_f64 / 7.0).exp())).abs() < 1e-9);
    assert!((metrics.ctl - expected * (1.0 - (-1.0_f64 / 42.0).exp())).abs() < 1e-9);
    assert!((metrics.weekly_load - expected).abs() < 1e-9);
    assert!(metrics.tsb < 0.0);
    assert_eq!(metrics.training_status(), TrainingStatus::Overreaching);
}

#[test]
fn test_scenario_capability_scores() {
    let metrics = engine().snapshot_metrics(&[scenario_workout()], &scenario_profile(), today());

    // 222.2 m/min -> cost 47.94, correction 0.9
    let velocity = 10_000.0 / 45.0;
    let expected_vo2 = 0.2_f64.mul_add(velocity, 3.5) / 0.9;
    assert!((metrics.vo2max - expected_vo2).abs() < 1e-9);

    // 10 km in 45:00 is 13.33 km/h at 10K
    assert!((metrics.evolution_score - 133.0).abs() < f64::EPSILON);
    assert!((metrics.evolution_trend - 100.0).abs() < f64::EPSILON);

    // 1 km/week over ten weeks, no long runs
    assert!((metrics.marathon_shape - 0.5).abs() < 1e-9);
}

#[test]
fn test_scenario_five_k_prediction() {
    let predictions = engine().race_predictions(&[scenario_workout()], today());
    assert_eq!(predictions.len(), 4);

    let five_k = &predictions[0];
    assert!((five_k.predicted_seconds - 2_700.0 * 0.5_f64.powf(1.06)).abs() < 1e-6);

    let ten_k = &predictions[1];
    assert!((ten_k.predicted_seconds - 2_700.0).abs() < 1e-9);
}

#[test]
fn test_atl_decays_by_e_after_one_week() {
    let workouts = [scenario_workout()];
    let profile = scenario_profile();

    let history = engine().history(&workouts, &profile, today() + Duration::days(7));
    assert_eq!(history.len(), 8);

    let day_zero = history[0];
    let day_seven = history[7];
    assert!((day_seven.atl - day_zero.atl * (-1.0_f64).exp()).abs() < 1e-9);
    assert!(day_seven.ctl / day_zero.ctl > 0.8);
    assert!(day_seven.atl / day_zero.atl < 0.4);
}

#[test]
fn test_snapshot_matches_history_inside_window() {
    // All workouts inside the 90-day window, so both paths start from zero
    let workouts: Vec<Workout> = (0..30)
        .map(|n| {
            run(&format!("r{n}"), n * 2, 8.0, 2_700)
                .average_heart_rate(150)
                .build()
        })
        .collect();
    let profile = scenario_profile();
    let engine = engine();

    let snapshot = engine.snapshot_metrics(&workouts, &profile, today());
    let history = engine.history(&workouts, &profile, today());
    let last = history.last().unwrap();

    // Heart-rate loads do not depend on the reference speed strategy
    assert_eq!(last.date, today());
    assert!((snapshot.ctl - last.ctl).abs() < 1e-9);
    assert!((snapshot.atl - last.atl).abs() < 1e-9);
}

#[test]
fn test_snapshot_and_history_share_evolution_window() {
    let engine = engine();
    let profile = scenario_profile();

    // 10 km in 50:00 scores 120, 10 km in 45:00 scores 133
    for days_ago in [0, 29, 30, 31] {
        let workouts = [
            run("edge", days_ago, 10.0, 3_000).build(),
            run("older", 40, 10.0, 2_700).build(),
        ];
        let snapshot = engine.snapshot_metrics(&workouts, &profile, today());
        let history = engine.history(&workouts, &profile, today());
        let last = history.last().unwrap();

        assert!(
            (snapshot.evolution_score - last.evolution_score).abs() < f64::EPSILON,
            "{days_ago} days ago: snapshot {} vs history {}",
            snapshot.evolution_score,
            last.evolution_score
        );
        let expected = if days_ago < 30 { 120.0 } else { 0.0 };
        assert!((snapshot.evolution_score - expected).abs() < f64::EPSILON);
    }
}

#[test]
fn test_pace_fallback_without_heart_rate() {
    let workouts = [run("pace", 0, 12.0, 3_600).build()];
    let metrics = engine().snapshot_metrics(&workouts, &AthleteProfile::default(), today());

    // Reference 12 km/h -> threshold 13.8 km/h
    let expected = (12.0_f64 / 13.8).powi(2) * 100.0;
    assert!((metrics.last_trimp - expected).abs() < 1e-9);
}

#[test]
fn test_load_cap_absorbs_outliers() {
    // Six hours at heart rate reserve 1.0 would be far above the cap
    let workouts = [run("ultra", 0, 60.0, 21_600).average_heart_rate(185).build()];
    let metrics = engine().snapshot_metrics(&workouts, &scenario_profile(), today());
    assert!((metrics.last_trimp - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_female_factor_lowers_load() {
    let workouts = [scenario_workout()];
    let male = engine().snapshot_metrics(&workouts, &scenario_profile(), today());
    let female = engine().snapshot_metrics(
        &workouts,
        &scenario_profile().gender(Gender::Female),
        today(),
    );
    assert!(female.last_trimp < male.last_trimp);
}

#[test]
fn test_sample_heart_rate_used_when_aggregate_missing() {
    let start = today().and_hms_opt(7, 0, 0).unwrap();
    let workout = WorkoutBuilder::new("samples", 10.0, 2_700_000)
        .samples((0..3).map(|i| TrackSample {
            heart_rate: Some(155 + i * 5),
            ..TrackSample::at(start + Duration::minutes(i64::from(i) * 10))
        }))
        .build();

    let from_samples = engine().snapshot_metrics(&[workout], &scenario_profile(), today());
    let from_aggregate =
        engine().snapshot_metrics(&[scenario_workout()], &scenario_profile(), today());
    assert!((from_samples.last_trimp - from_aggregate.last_trimp).abs() < 1e-9);
}

#[test]
fn test_explicit_algorithm_falls_back_inside_engine() {
    let mut config = IntelligenceConfig::default();
    config.trimp.algorithm = TrimpAlgorithm::BannisterMale;
    let engine = PerformanceEngine::new(config);

    let workouts = [run("no-hr", 0, 12.0, 3_600).build()];
    let metrics = engine.snapshot_metrics(&workouts, &AthleteProfile::default(), today());
    assert!(metrics.last_trimp > 0.0);
}

#[test]
fn test_inputs_are_not_mutated() {
    let workouts = vec![run("b", 1, 8.0, 2_400).build(), run("a", 5, 10.0, 3_000).build()];
    let before = workouts.clone();
    let profile = scenario_profile();

    let engine = engine();
    let _ = engine.snapshot_metrics(&workouts, &profile, today());
    let _ = engine.history(&workouts, &profile, today());
    let _ = engine.race_predictions(&workouts, today());

    assert_eq!(workouts, before);
    assert_eq!(profile, scenario_profile());
}

#[test]
fn test_concurrent_calls_are_consistent() {
    let workouts: Arc<Vec<Workout>> = Arc::new(
        (0_i64..20)
            .map(|n| {
                let km = (n as f64).mul_add(0.5, 6.0);
                run(&format!("r{n}"), n * 3, km, 1_800 + n as u64 * 120).build()
            })
            .collect(),
    );
    let engine = Arc::new(engine());
    let profile = Arc::new(scenario_profile());

    let expected_snapshot = engine.snapshot_metrics(&workouts, &profile, today());
    let expected_history = engine.history(&workouts, &profile, today());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (engine, workouts, profile) =
                (Arc::clone(&engine), Arc::clone(&workouts), Arc::clone(&profile));
            thread::spawn(move || {
                (
                    engine.snapshot_metrics(&workouts, &profile, today()),
                    engine.history(&workouts, &profile, today()),
                )
            })
        })
        .collect();

    for handle in handles {
        let (snapshot, history) = handle.join().unwrap();
        assert_eq!(snapshot, expected_snapshot);
        assert_eq!(history, expected_history);
    }
}
