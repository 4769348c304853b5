// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use curve25519_fe::field::FieldElement;

fn two() -> FieldElement {
    let mut bytes = [0u8; 32];
    bytes[0] = 2;
    FieldElement::from_bytes(&bytes)
}

fn three() -> FieldElement {
    let mut bytes = [0u8; 32];
    bytes[0] = 3;
    FieldElement::from_bytes(&bytes)
}

fn bench_mul(c: &mut Criterion) {
    let f = two();
    let g = three();
    c.bench_function("FieldElement mul", |b| {
        b.iter(|| black_box(&f).mul(black_box(&g)))
    });
}

fn bench_sq(c: &mut Criterion) {
    let f = two();
    c.bench_function("FieldElement sq", |b| b.iter(|| black_box(&f).sq()));
}

fn bench_sq2(c: &mut Criterion) {
    let f = two();
    c.bench_function("FieldElement sq2", |b| b.iter(|| black_box(&f).sq2()));
}

fn bench_invert(c: &mut Criterion) {
    let f = two();
    c.bench_function("FieldElement invert", |b| b.iter(|| black_box(&f).invert()));
}

fn bench_pow_p58(c: &mut Criterion) {
    let f = two();
    c.bench_function("FieldElement pow_p58", |b| {
        b.iter(|| black_box(&f).pow_p58())
    });
}

criterion_group! {
    name = field_benches;
    config = Criterion::default();
    targets = bench_mul, bench_sq, bench_sq2, bench_invert, bench_pow_p58
}
criterion_main!(field_benches);
