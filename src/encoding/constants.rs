// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants and closed-form counts for permutation tables.
//!
//! Every split is encoded as two products of distinct primes. The product of
//! all primes assigned to a session must fit in a `u64`, which bounds the
//! number of items one engine can partition.
//!
//! # Table sizes
//!
//! For `n` items, every subset of size `k >= 2` splits into an ordered pair
//! of non-empty sides in `2^k - 2` ways. Swapped pairs are stored once, so
//!
//! ```text
//! table_len(n) = Σ_{k=2..n} C(n, k) (2^k - 2) / 2 = (3^n - 2^(n+1) + 1) / 2
//! ```
//!
//! - n=2: 1
//! - n=3: 6
//! - n=4: 25
//! - n=5: 90
//! - n=6: 301

/// Maximum number of items a single session can encode.
///
/// The product of the first 15 primes (2·3·…·47 = 614889782588491410) fits in
/// a `u64`; multiplying in the 16th prime (53) does not.
pub const MAX_ITEMS: usize = 15;

/// Smallest subset size that can be split into two non-empty sides.
pub const MIN_SUBSET_SIZE: usize = 2;

/// Compute factorial at compile time.
pub const fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Number of ordered arrangements of `k` items chosen from `n` (n! / (n-k)!).
pub const fn arrangements(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result = 1;
    let mut i = n - k + 1;
    while i <= n {
        result *= i;
        i += 1;
    }
    result
}

const fn pow(base: u64, exp: u64) -> u64 {
    let mut result = 1;
    let mut i = 0;
    while i < exp {
        result *= base;
        i += 1;
    }
    result
}

/// Number of entries in the deduplicated permutation table for `n` items.
pub const fn table_len(n: u64) -> u64 {
    (pow(3, n) + 1 - pow(2, n + 1)) / 2
}

/// Number of (arrangement, split point) pairs visited while building the
/// table for `n` items, before deduplication.
///
/// Each arrangement of `k` items has `k - 1` split points.
pub const fn raw_split_count(n: u64) -> u64 {
    let mut total = 0;
    let mut k = MIN_SUBSET_SIZE as u64;
    while k <= n {
        total += (k - 1) * arrangements(n, k);
        k += 1;
    }
    total
}

/// Number of arrangements visited while building the table for `n` items.
pub const fn arrangement_count(n: u64) -> u64 {
    let mut total = 0;
    let mut k = MIN_SUBSET_SIZE as u64;
    while k <= n {
        total += arrangements(n, k);
        k += 1;
    }
    total
}

/// Position sets are stored in a single `u64` word.
const _: () = assert!(MAX_ITEMS <= 64, "positions must fit in a u64 bitset");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(6), 720);
    }

    #[test]
    fn test_arrangements() {
        assert_eq!(arrangements(3, 2), 6);
        assert_eq!(arrangements(4, 4), 24);
        assert_eq!(arrangements(5, 0), 1);
        assert_eq!(arrangements(2, 3), 0);
    }

    #[test]
    fn test_table_len() {
        assert_eq!(table_len(0), 0);
        assert_eq!(table_len(1), 0);
        assert_eq!(table_len(2), 1);
        assert_eq!(table_len(3), 6);
        assert_eq!(table_len(4), 25);
        assert_eq!(table_len(5), 90);
        assert_eq!(table_len(6), 301);
        assert_eq!(table_len(7), 966);
    }

    #[test]
    fn test_table_len_matches_subset_sum() {
        // Σ C(n,k)(2^k - 2) / 2 computed the long way.
        for n in 0..=10u64 {
            let mut ordered = 0;
            for k in 2..=n {
                let choose = arrangements(n, k) / factorial(k);
                ordered += choose * (pow(2, k) - 2);
            }
            assert_eq!(table_len(n), ordered / 2, "n = {}", n);
        }
    }

    #[test]
    fn test_raw_split_count() {
        assert_eq!(raw_split_count(1), 0);
        assert_eq!(raw_split_count(2), 2);
        assert_eq!(raw_split_count(3), 18); // 1*6 + 2*6
        assert_eq!(raw_split_count(4), 132); // 1*12 + 2*24 + 3*24
    }

    #[test]
    fn test_arrangement_count() {
        assert_eq!(arrangement_count(2), 2);
        assert_eq!(arrangement_count(3), 12);
        assert_eq!(arrangement_count(4), 60);
    }
}
