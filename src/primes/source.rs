// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Infinite, cached source of prime numbers.

/// Cursor over the primes 2, 3, 5, 7, 11, …
///
/// Primes are generated on demand by trial division against the primes
/// already cached, so after `k` calls to [`advance`](PrimeSource::advance)
/// [`current`](PrimeSource::current) is always the (k+1)-th prime.
///
/// # Example
///
/// ```
/// use jet_permutation::primes::PrimeSource;
///
/// let mut source = PrimeSource::new();
/// assert_eq!(source.current(), 2);
/// source.advance();
/// source.advance();
/// assert_eq!(source.current(), 5);
///
/// let next: Vec<u64> = source.take(3).collect();
/// assert_eq!(next, vec![5, 7, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct PrimeSource {
    /// Every prime generated so far, ascending.
    primes: Vec<u64>,
    cursor: usize,
}

impl PrimeSource {
    pub fn new() -> Self {
        Self {
            primes: vec![2],
            cursor: 0,
        }
    }

    /// The prime at the cursor.
    pub fn current(&self) -> u64 {
        self.primes[self.cursor]
    }

    /// Move the cursor to the next prime, generating it if needed.
    pub fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.primes.len() {
            let next = self.next_uncached();
            self.primes.push(next);
        }
    }

    /// Number of primes generated so far.
    pub fn generated(&self) -> usize {
        self.primes.len()
    }

    fn next_uncached(&self) -> u64 {
        let last = self.primes[self.primes.len() - 1];
        let mut candidate = if last == 2 { 3 } else { last + 2 };
        while !self.is_prime(candidate) {
            candidate += 2;
        }
        candidate
    }

    /// Trial division by cached primes; valid for candidates below the square
    /// of the next uncached prime, which always holds for the next candidate.
    fn is_prime(&self, candidate: u64) -> bool {
        self.primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

impl Default for PrimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeSource {
    type Item = u64;

    /// Yield the current prime and advance past it.
    fn next(&mut self) -> Option<u64> {
        let prime = self.current();
        self.advance();
        Some(prime)
    }
}
