//! Benchmarks for vector operations.
//!
//! Compares nexus-vec against std::vec::Vec.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nexus_vec::Vector;
use std::hint::black_box;

const N: usize = 1024;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("nexus_vec/grow", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::new();
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        });
    });

    group.bench_function("std_vec/grow", |b| {
        b.iter(|| {
            let mut v: Vec<u64> = Vec::new();
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        });
    });

    group.bench_function("nexus_vec/preallocated", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::with_capacity(N);
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        });
    });

    group.bench_function("std_vec/preallocated", |b| {
        b.iter(|| {
            let mut v: Vec<u64> = Vec::with_capacity(N);
            for i in 0..N as u64 {
                v.push(black_box(i));
            }
            v
        });
    });

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    group.throughput(Throughput::Elements(256));

    group.bench_function("nexus_vec", |b| {
        b.iter(|| {
            let mut v: Vector<u64> = Vector::new();
            for i in 0..256u64 {
                v.insert(0, black_box(i));
            }
            v
        });
    });

    group.bench_function("std_vec", |b| {
        b.iter(|| {
            let mut v: Vec<u64> = Vec::new();
            for i in 0..256u64 {
                v.insert(0, black_box(i));
            }
            v
        });
    });

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_sum");
    group.throughput(Throughput::Elements(N as u64));

    let ours: Vector<u64> = (0..N as u64).collect();
    let theirs: Vec<u64> = (0..N as u64).collect();

    group.bench_function("nexus_vec", |b| {
        b.iter(|| black_box(&ours).iter().sum::<u64>());
    });

    group.bench_function("std_vec", |b| {
        b.iter(|| black_box(&theirs).iter().sum::<u64>());
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_insert_front, bench_iterate);
criterion_main!(benches);
