//! Benchmarks for the conversion engine and edit replay
//!
//! Platform: Cross-platform (uses the script fixtures under test-data/)

use criterion::{Criterion, criterion_group, criterion_main};
use pacer::engine::{convert_distance, pace_from_time, time_from_pace};
use pacer::test_utils::{apply_steps, load_steps, script_fixture};
use pacer::{CalculatorState, Edit, Pace, Preset, TotalTime, Unit};
use std::hint::black_box;

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("time_from_pace_marathon", |b| {
        b.iter(|| time_from_pace(black_box(Pace::new(4, 58)), black_box(Preset::Marathon.km())))
    });

    group.bench_function("pace_from_time_marathon", |b| {
        b.iter(|| {
            pace_from_time(black_box(TotalTime::new(3, 30, 0)), black_box(Preset::Marathon.km()))
        })
    });

    group.bench_function("convert_distance_round_trip", |b| {
        b.iter(|| {
            let miles = convert_distance(black_box(42.195), Unit::Kilometers, Unit::Miles);
            convert_distance(miles, Unit::Miles, Unit::Kilometers)
        })
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let edits = [
        Edit::SelectPreset(Preset::HalfMarathon),
        Edit::SetUnit(Unit::Miles),
        Edit::SetPaceMinutes(7),
        Edit::SetUnit(Unit::Kilometers),
    ];

    c.bench_function("apply_edit_sequence", |b| {
        b.iter(|| edits.iter().fold(CalculatorState::default(), |s, e| s.apply(black_box(*e))))
    });

    let steps = load_steps(script_fixture("marathon_plan.yaml").expect("fixture"))
        .expect("Failed to load marathon plan");
    c.bench_function("replay_marathon_plan", |b| {
        b.iter(|| apply_steps(black_box(CalculatorState::default()), &steps))
    });
}

criterion_group!(benches, bench_conversions, bench_apply);
criterion_main!(benches);
