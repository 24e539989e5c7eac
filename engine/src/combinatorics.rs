//! Exact combinatorics on arbitrary-precision integers
//!
//! factorial(80) is roughly 7.2e118, far beyond any fixed-width type, so
//! everything here works on `BigUint`. Impossible selections are answered
//! with zero rather than an error.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// n! computed exactly. Returns 1 for n <= 1.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// Binomial coefficient C(n, k).
///
/// Returns 0 when `k < 0` or `k > n`, and 1 when `k == 0` or `k == n`.
/// Otherwise forms the falling product n·(n-1)·…·(n-k+1) with
/// `k = min(k, n - k)` and divides it exactly by k!.
pub fn binomial(n: i64, k: i64) -> BigUint {
    if k < 0 || k > n {
        return BigUint::zero();
    }
    if k == 0 || k == n {
        return BigUint::one();
    }
    // 0 < k < n here, so n is positive and both casts are lossless
    let n = n as u64;
    let k = (k as u64).min(n - k as u64);

    let mut falling = BigUint::one();
    for i in 0..k {
        falling *= n - i;
    }
    // Exact: the falling product is always a multiple of k!
    falling / factorial(k)
}
