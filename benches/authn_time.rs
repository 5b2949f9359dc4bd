use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn parse_duration(c: &mut Criterion) {
    c.bench_function("parse duration (short)", |b| {
        b.iter(|| authn_time::parse_duration_string(black_box("1h")));
    });

    c.bench_function("parse duration (long)", |b| {
        b.iter(|| authn_time::parse_duration_string(black_box("1234567890y")));
    });

    c.bench_function("parse duration (invalid)", |b| {
        b.iter(|| authn_time::parse_duration_string(black_box("005h")));
    });
}

fn win32_epoch(c: &mut Criterion) {
    c.bench_function("unix nano to win32 epoch", |b| {
        b.iter(|| authn_time::unix_nano_to_win32_epoch(black_box(1_626_234_411_000_000_000)));
    });

    c.bench_function("win32 epoch to time", |b| {
        b.iter(|| authn_time::win32_epoch_to_time(black_box(132_707_080_110_000_000)));
    });
}

criterion_group!(benches, parse_duration, win32_epoch);
criterion_main!(benches);
