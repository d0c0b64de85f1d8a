// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered arrangements of `size` tokens drawn from a token list.
//!
//! # Enumeration Order
//!
//! Arrangements are k-permutations of token indices, generated in
//! lexicographic order of the index sequence. For tokens `[a, b, c]` and
//! size 2 the sequence is:
//!
//! ```text
//! ab ac ba bc ca cb
//! ```
//!
//! Every subset of `size` tokens appears in every internal order, so every
//! way to split the subset into a non-empty left and right group is reached
//! by some arrangement and split point.

/// Restartable cursor over the ordered arrangements of `size` tokens.
///
/// # Example
///
/// ```
/// use jet_permutation::combinatorics::Arrangements;
///
/// let tokens = ['a', 'b', 'c'];
/// let mut arrangements = Arrangements::new(&tokens, 2);
///
/// let mut seen = Vec::new();
/// while let Some(arrangement) = arrangements.current() {
///     seen.push(arrangement.into_iter().collect::<String>());
///     arrangements.advance();
/// }
/// assert_eq!(seen, vec!["ab", "ac", "ba", "bc", "ca", "cb"]);
/// ```
#[derive(Debug, Clone)]
pub struct Arrangements<'a, T> {
    tokens: &'a [T],
    size: usize,
    /// Token index at each slot of the current arrangement.
    indices: Vec<usize>,
    /// used[i] is true if token i occupies a slot.
    used: Vec<bool>,
    exhausted: bool,
}

impl<'a, T> Arrangements<'a, T> {
    /// Start enumerating arrangements of `size` tokens.
    ///
    /// A size of 0 or more than `tokens.len()` yields no arrangement.
    pub fn new(tokens: &'a [T], size: usize) -> Self {
        let mut arrangements = Self {
            tokens,
            size,
            indices: Vec::with_capacity(size),
            used: vec![false; tokens.len()],
            exhausted: false,
        };
        arrangements.reset();
        arrangements
    }

    /// Restart from the first arrangement.
    pub fn reset(&mut self) {
        self.indices.clear();
        self.used.iter_mut().for_each(|slot| *slot = false);
        self.exhausted = self.size == 0 || self.size > self.tokens.len();
        if self.exhausted {
            return;
        }
        for index in 0..self.size {
            self.indices.push(index);
            self.used[index] = true;
        }
    }

    /// Number of tokens in each arrangement.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Token indices of the current arrangement, or None once exhausted.
    pub fn indices(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.indices)
        }
    }

    /// Tokens of the current arrangement, in arrangement order.
    ///
    /// The result borrows only the token slice, so the cursor can be
    /// advanced while it is held.
    pub fn current(&self) -> Option<Vec<&'a T>> {
        let tokens = self.tokens;
        self.indices()
            .map(|indices| indices.iter().map(|&i| &tokens[i]).collect())
    }

    /// Split the current arrangement after its first `point` tokens.
    ///
    /// Returns None once exhausted or unless `1 <= point < size`.
    #[allow(clippy::type_complexity)]
    pub fn split(
        &self,
        point: usize,
    ) -> Option<(
        impl Iterator<Item = &'a T> + '_,
        impl Iterator<Item = &'a T> + '_,
    )> {
        if point == 0 || point >= self.size {
            return None;
        }
        let tokens = self.tokens;
        let (left, right) = self.indices()?.split_at(point);
        Some((
            left.iter().map(move |&i| &tokens[i]),
            right.iter().map(move |&i| &tokens[i]),
        ))
    }

    /// Move to the next arrangement.
    ///
    /// Returns false, and becomes exhausted, when there is none.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        let count = self.tokens.len();
        // Release slots from the right until one can take a larger free index.
        let mut slot = self.size;
        while slot > 0 {
            slot -= 1;
            let current = self.indices[slot];
            self.used[current] = false;

            if let Some(next) = (current + 1..count).find(|&i| !self.used[i]) {
                self.indices[slot] = next;
                self.used[next] = true;
                self.fill_from(slot + 1);
                return true;
            }
        }

        self.exhausted = true;
        false
    }

    /// Fill slots `from..size` with the smallest free indices, ascending.
    fn fill_from(&mut self, from: usize) {
        let mut candidate = 0;
        for slot in from..self.size {
            while self.used[candidate] {
                candidate += 1;
            }
            self.indices[slot] = candidate;
            self.used[candidate] = true;
        }
    }
}
