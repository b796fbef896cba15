#![cfg(feature = "constant_time_tests")]

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use keycmp::{Key32, KeyComparator};

/// Where the compared key differs from the reference key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mismatch {
    First,
    Last,
}

/// Times `ct_eq` against keys differing in their first and in their last byte in random order
/// and checks that the mismatch position does not correlate with the run time.
#[test]
fn ct_eq_time_independent_of_mismatch_position() {
    const N: usize = 500_000;

    let reference = Key32::new(thread_rng().gen());
    let flip = |i: usize| {
        let mut bytes = *reference.as_bytes();
        bytes[i] ^= 0x01;
        Key32::new(bytes)
    };
    let first = flip(0);
    let last = flip(31);

    let mut runs = (0..N)
        .map(|i| match i % 2 {
            0 => (Mismatch::First, Duration::ZERO),
            _ => (Mismatch::Last, Duration::ZERO),
        })
        .collect::<Vec<_>>();
    runs.shuffle(&mut thread_rng());

    for (mismatch, elapsed) in runs.iter_mut() {
        let other = match mismatch {
            Mismatch::First => &first,
            Mismatch::Last => &last,
        };
        let now = Instant::now();
        let eq = black_box(&reference).ct_eq(black_box(other));
        *elapsed = now.elapsed();
        assert!(!eq);
    }

    let n = N as f64;
    let xs = runs
        .iter()
        .map(|r| if r.0 == Mismatch::First { 1_f64 } else { 0_f64 });
    let ys = runs.iter().map(|r| r.1.as_nanos() as f64);
    let (avg_x, avg_y) = (xs.clone().sum::<f64>() / n, ys.clone().sum::<f64>() / n);
    let (mut cv, mut var_x, mut var_y) = (0_f64, 0_f64, 0_f64);
    for (x, y) in xs.zip(ys) {
        cv += (x - avg_x) * (y - avg_y);
        var_x += (x - avg_x) * (x - avg_x);
        var_y += (y - avg_y) * (y - avg_y);
    }
    let correlation = cv / (var_x.sqrt() * var_y.sqrt());
    println!("correlation: {:.6?}", correlation);

    #[cfg(not(coverage))]
    assert!(
        correlation.abs() < 0.01,
        "execution time of ct_eq correlates with the mismatch position"
    );
}
