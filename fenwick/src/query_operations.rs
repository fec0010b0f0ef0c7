//! Query operations for the prefix-sum structures.
//!
//! The fundamental query is `sum_first(count)`, the sum of the first `count`
//! logical elements; `sum_first(0)` is the empty prefix and is always 0.
//! `prefix_sum(index)` is the inclusive form, `sum_first(index + 1)`.

use crate::error::{FenwickError, QueryResult};
use crate::types::{lowest_set_bit, FenwickTree, NaivePrefixArray, NaiveSumOnQuery, PrefixSums};

impl FenwickTree {
    /// Sum of the first `count` logical elements in O(log n).
    ///
    /// Walks downward from the 1-indexed position `count`, accumulating each
    /// block's partial sum until the position reaches 0.
    ///
    /// # Panics
    ///
    /// Panics if `count > len()`.
    pub fn sum_first(&self, count: usize) -> i64 {
        assert!(
            count <= self.size,
            "prefix length {} out of range for FenwickTree of size {}",
            count,
            self.size
        );

        let mut sum = 0;
        let mut pos = count;
        while pos > 0 {
            sum += self.tree[pos];
            pos -= lowest_set_bit(pos);
        }
        sum
    }

    /// Inclusive prefix sum of the logical elements `[0, index]` in O(log n).
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
    /// let tree = FenwickTree::from_slice(&[5, 0, 3, 0, 1]).unwrap();
    /// assert_eq!(tree.prefix_sum(0), 5);
    /// assert_eq!(tree.prefix_sum(4), 9);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> i64 {
        assert!(
            index < self.size,
            "index {} out of range for FenwickTree of size {}",
            index,
            self.size
        );
        self.sum_first(index + 1)
    }

    /// Checked variant of [`prefix_sum`](Self::prefix_sum).
    ///
    /// Returns `Err(FenwickError::IndexOutOfRange)` instead of panicking.
    pub fn try_prefix_sum(&self, index: usize) -> QueryResult<i64> {
        if index >= self.size {
            return Err(FenwickError::index_out_of_range(index, self.size));
        }
        Ok(self.sum_first(index + 1))
    }

    /// Inclusive sum of the logical elements `[low, high]`, or 0 when
    /// `low > high`.
    ///
    /// # Panics
    ///
    /// Panics if `low <= high` and `high >= len()`.
    pub fn range_sum(&self, low: usize, high: usize) -> i64 {
        if low > high {
            return 0;
        }
        self.sum_first(high + 1) - self.sum_first(low)
    }

    /// Current value of the logical element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> i64 {
        self.range_sum(index, index)
    }

    /// Sum of all logical elements.
    pub fn total(&self) -> i64 {
        self.sum_first(self.size)
    }

    /// Logical capacity of the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl NaiveSumOnQuery {
    /// Sum of the first `count` elements by a summation loop. O(n) per call.
    ///
    /// # Panics
    ///
    /// Panics if `count > len()`.
    pub fn sum_first(&self, count: usize) -> i64 {
        assert!(
            count <= self.values.len(),
            "prefix length {} out of range for NaiveSumOnQuery of size {}",
            count,
            self.values.len()
        );
        self.values[..count].iter().sum()
    }

    /// Inclusive prefix sum of the elements `[0, index]`. O(n) per call.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> i64 {
        assert!(
            index < self.values.len(),
            "index {} out of range for NaiveSumOnQuery of size {}",
            index,
            self.values.len()
        );
        self.sum_first(index + 1)
    }

    /// Checked variant of [`prefix_sum`](Self::prefix_sum).
    pub fn try_prefix_sum(&self, index: usize) -> QueryResult<i64> {
        if index >= self.values.len() {
            return Err(FenwickError::index_out_of_range(index, self.values.len()));
        }
        Ok(self.sum_first(index + 1))
    }

    /// Inclusive sum of the elements `[low, high]`, or 0 when `low > high`.
    ///
    /// # Panics
    ///
    /// Panics if `low <= high` and `high >= len()`.
    pub fn range_sum(&self, low: usize, high: usize) -> i64 {
        if low > high {
            return 0;
        }
        self.sum_first(high + 1) - self.sum_first(low)
    }

    /// Current value of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    /// Sum of all elements.
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }

    /// Logical capacity of the array.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl NaivePrefixArray {
    /// Sum of the first `count` elements by direct lookup. O(1) per call.
    ///
    /// # Panics
    ///
    /// Panics if `count > len()`.
    pub fn sum_first(&self, count: usize) -> i64 {
        assert!(
            count < self.prefix.len(),
            "prefix length {} out of range for NaivePrefixArray of size {}",
            count,
            self.values.len()
        );
        self.prefix[count]
    }

    /// Inclusive prefix sum of the elements `[0, index]`. O(1) per call.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn prefix_sum(&self, index: usize) -> i64 {
        assert!(
            index < self.values.len(),
            "index {} out of range for NaivePrefixArray of size {}",
            index,
            self.values.len()
        );
        self.prefix[index + 1]
    }

    /// Checked variant of [`prefix_sum`](Self::prefix_sum).
    pub fn try_prefix_sum(&self, index: usize) -> QueryResult<i64> {
        if index >= self.values.len() {
            return Err(FenwickError::index_out_of_range(index, self.values.len()));
        }
        Ok(self.prefix[index + 1])
    }

    /// Inclusive sum of the elements `[low, high]`, or 0 when `low > high`.
    ///
    /// # Panics
    ///
    /// Panics if `low <= high` and `high >= len()`.
    pub fn range_sum(&self, low: usize, high: usize) -> i64 {
        if low > high {
            return 0;
        }
        self.sum_first(high + 1) - self.sum_first(low)
    }

    /// Current value of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    /// Sum of all elements.
    pub fn total(&self) -> i64 {
        self.prefix[self.values.len()]
    }

    /// Logical capacity of the array.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// SHARED CAPABILITY IMPLS
// ============================================================================

impl PrefixSums for FenwickTree {
    fn update(&mut self, index: usize, delta: i64) {
        FenwickTree::update(self, index, delta);
    }

    fn sum_first(&self, count: usize) -> i64 {
        FenwickTree::sum_first(self, count)
    }

    fn len(&self) -> usize {
        FenwickTree::len(self)
    }

    fn label(&self) -> &'static str {
        "Fenwick tree"
    }
}

impl PrefixSums for NaiveSumOnQuery {
    fn update(&mut self, index: usize, delta: i64) {
        NaiveSumOnQuery::update(self, index, delta);
    }

    fn sum_first(&self, count: usize) -> i64 {
        NaiveSumOnQuery::sum_first(self, count)
    }

    fn len(&self) -> usize {
        NaiveSumOnQuery::len(self)
    }

    fn label(&self) -> &'static str {
        "Naive (sum on query)"
    }
}

impl PrefixSums for NaivePrefixArray {
    fn update(&mut self, index: usize, delta: i64) {
        NaivePrefixArray::update(self, index, delta);
    }

    fn sum_first(&self, count: usize) -> i64 {
        NaivePrefixArray::sum_first(self, count)
    }

    fn len(&self) -> usize {
        NaivePrefixArray::len(self)
    }

    fn label(&self) -> &'static str {
        "Naive (prefix array)"
    }
}
