//! Point-update operations for the prefix-sum structures.
//!
//! Every structure offers the same pair: a plain `update` that fails fast on
//! an out-of-range index, and a checked `try_update` that returns a result
//! instead.

use crate::error::{FenwickError, UpdateResult};
use crate::types::{lowest_set_bit, FenwickTree, NaivePrefixArray, NaiveSumOnQuery};

impl FenwickTree {
    /// Add `delta` to the logical element at `index` in O(log n).
    ///
    /// Walks upward from the 1-indexed position `index + 1`, adding `delta`
    /// to every partial sum whose block covers the element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenwick::FenwickTree;
    ///
    /// let mut tree = FenwickTree::new(8).unwrap();
    /// tree.update(3, 7);
    /// tree.update(3, -2);
    /// assert_eq!(tree.prefix_sum(3), 5);
    /// ```
    pub fn update(&mut self, index: usize, delta: i64) {
        assert!(
            index < self.size,
            "index {} out of range for FenwickTree of size {}",
            index,
            self.size
        );

        let mut pos = index + 1;
        while pos <= self.size {
            self.tree[pos] += delta;
            pos += lowest_set_bit(pos);
        }
    }

    /// Checked variant of [`update`](Self::update).
    ///
    /// Returns `Err(FenwickError::IndexOutOfRange)` instead of panicking.
    pub fn try_update(&mut self, index: usize, delta: i64) -> UpdateResult<()> {
        if index >= self.size {
            return Err(FenwickError::index_out_of_range(index, self.size));
        }
        self.update(index, delta);
        Ok(())
    }

    /// Overwrite the logical element at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: i64) {
        let current = self.get(index);
        self.update(index, value - current);
    }
}

impl NaiveSumOnQuery {
    /// Add `delta` to the element at `index` in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn update(&mut self, index: usize, delta: i64) {
        assert!(
            index < self.values.len(),
            "index {} out of range for NaiveSumOnQuery of size {}",
            index,
            self.values.len()
        );
        self.values[index] += delta;
    }

    /// Checked variant of [`update`](Self::update).
    pub fn try_update(&mut self, index: usize, delta: i64) -> UpdateResult<()> {
        if index >= self.values.len() {
            return Err(FenwickError::index_out_of_range(index, self.values.len()));
        }
        self.update(index, delta);
        Ok(())
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: i64) {
        let current = self.get(index);
        self.update(index, value - current);
    }
}

impl NaivePrefixArray {
    /// Add `delta` to the element at `index`, then rebuild the prefix array
    /// from the changed index onward. O(n) per call.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn update(&mut self, index: usize, delta: i64) {
        assert!(
            index < self.values.len(),
            "index {} out of range for NaivePrefixArray of size {}",
            index,
            self.values.len()
        );
        self.values[index] += delta;

        for pos in (index + 1)..self.prefix.len() {
            self.prefix[pos] = self.prefix[pos - 1] + self.values[pos - 1];
        }
    }

    /// Checked variant of [`update`](Self::update).
    pub fn try_update(&mut self, index: usize, delta: i64) -> UpdateResult<()> {
        if index >= self.values.len() {
            return Err(FenwickError::index_out_of_range(index, self.values.len()));
        }
        self.update(index, delta);
        Ok(())
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: i64) {
        let current = self.get(index);
        self.update(index, value - current);
    }
}
