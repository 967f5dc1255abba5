use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use seq_algo::{patterns, ElemBuf};

// Element size of the type-erased variants.
const ELEM_SIZE: usize = 16;

fn batch_size(test_size: usize) -> BatchSize {
    if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    }
}

/// Widens every value into a `ELEM_SIZE`-byte element that orders like the value.
fn to_elems(v: Vec<i32>) -> Vec<u8> {
    v.iter()
        .flat_map(|x| {
            let mut elem = [0u8; ELEM_SIZE];
            elem[..4].copy_from_slice(&((*x as u32) ^ 0x8000_0000).to_be_bytes());
            elem
        })
        .collect()
}

fn key_cmp(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
    a[..4].cmp(&b[..4])
}

#[inline(never)]
fn bench_typed(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    func: impl Fn(&mut Vec<i32>),
) {
    c.bench_function(
        &format!("{bench_name}-hot-i32-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || pattern_provider(test_size),
                |mut test_data| func(black_box(&mut test_data)),
                batch_size(test_size),
            )
        },
    );
}

#[inline(never)]
fn bench_bytes(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    func: impl Fn(&mut ElemBuf<'_>),
) {
    c.bench_function(
        &format!("{bench_name}-hot-bytes{ELEM_SIZE}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || to_elems(pattern_provider(test_size)),
                |mut test_data| {
                    // Sizes are multiples of ELEM_SIZE by construction.
                    if let Ok(mut buf) = ElemBuf::new(&mut test_data, ELEM_SIZE) {
                        func(black_box(&mut buf));
                    }
                },
                batch_size(test_size),
            )
        },
    );
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_duplicates", patterns::random_duplicates),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("pipe_organ", patterns::pipe_organ),
        ("saw_ascending", |size| {
            patterns::ascending_saw(size, ((size as f64).log2().round()) as usize)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        bench_typed(c, test_size, pattern_name, pattern_provider, "sort", |v| {
            seq_algo::sort(v)
        });
        bench_bytes(c, test_size, pattern_name, pattern_provider, "sort", |buf| {
            seq_algo::sort_by(buf, key_cmp)
        });

        bench_typed(c, test_size, pattern_name, pattern_provider, "nth_element", |v| {
            let mid = v.len() / 2;
            seq_algo::nth_element(v, mid)
        });
        bench_bytes(c, test_size, pattern_name, pattern_provider, "nth_element", |buf| {
            let mid = seq_algo::Elements::len(buf) / 2;
            seq_algo::nth_element_by(buf, mid, key_cmp)
        });
    }

    let random: fn(usize) -> Vec<i32> = patterns::random;
    bench_typed(c, test_size, "random", &random, "shuffle", |v| {
        seq_algo::shuffle(v, &mut StdRng::seed_from_u64(test_size as u64))
    });
}

fn bench_inplace_merge(c: &mut Criterion, test_size: usize) {
    c.bench_function(&format!("inplace_merge-hot-i32-sorted_runs-{test_size}"), |b| {
        b.iter_batched(
            || patterns::sorted_runs(test_size),
            |(mut test_data, middle)| {
                seq_algo::inplace_merge(black_box(&mut test_data), middle)
            },
            batch_size(test_size),
        )
    });
}

fn ensure_true_random() {
    // With the fixed seed still active every batch would see the same input.
    assert_ne!(patterns::random(5), patterns::random(5));
}

fn criterion_benchmark(c: &mut Criterion) {
    // Distinct inputs per iteration, the fixed seed only matters for tests.
    patterns::disable_fixed_seed();
    ensure_true_random();

    let test_sizes = if env::var("BENCH_LARGE").is_ok() {
        vec![0, 1, 2, 8, 16, 20, 35, 100, 1_000, 10_000, 100_000, 1_000_000]
    } else {
        vec![8, 20, 100, 1_000, 10_000]
    };

    for test_size in test_sizes {
        bench_patterns(c, test_size);
        bench_inplace_merge(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
