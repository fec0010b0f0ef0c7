//! Construction and initialization logic for the prefix-sum structures.
//!
//! All three structures are built with a fixed logical size, every element
//! starting at zero; size zero is rejected so every constructed structure has
//! at least one valid index.

use crate::error::{FenwickError, InitResult};
use crate::types::{lowest_set_bit, FenwickTree, NaivePrefixArray, NaiveSumOnQuery, MIN_SIZE};

/// Default logical size for prefix-sum structures
pub const DEFAULT_SIZE: usize = 16;

impl FenwickTree {
    /// Create a Fenwick tree over `size` logical elements, all zero.
    ///
    /// # Arguments
    ///
    /// * `size` - Logical capacity, fixed for the structure's lifetime (minimum 1)
    ///
    /// # Returns
    ///
    /// Returns `Ok(FenwickTree)` if the size is valid, `Err(FenwickError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenwick::FenwickTree;
    ///
    /// let tree = FenwickTree::new(16).unwrap();
    /// assert_eq!(tree.len(), 16);
    /// assert_eq!(tree.total(), 0);
    /// ```
    pub fn new(size: usize) -> InitResult<Self> {
        if size < MIN_SIZE {
            return Err(FenwickError::invalid_size(size, MIN_SIZE));
        }

        Ok(Self {
            tree: vec![0; size + 1],
            size,
        })
    }

    /// Create a Fenwick tree with the default size.
    ///
    /// This is equivalent to calling `new(DEFAULT_SIZE)`.
    pub fn with_default_size() -> InitResult<Self> {
        Self::new(DEFAULT_SIZE)
    }

    /// Build a Fenwick tree holding the given initial values in O(n).
    ///
    /// Each position's partial sum is pushed up to its parent sibling once,
    /// which is strictly cheaper than `size` individual `update` calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenwick::FenwickTree;
    ///
    /// let tree = FenwickTree::from_slice(&[1, 6, 3, 9, 2]).unwrap();
    /// assert_eq!(tree.prefix_sum(2), 10);
    /// assert_eq!(tree.total(), 21);
    /// ```
    pub fn from_slice(values: &[i64]) -> InitResult<Self> {
        let mut built = Self::new(values.len())?;
        for (i, &value) in values.iter().enumerate() {
            let pos = i + 1;
            built.tree[pos] += value;
            let parent = pos + lowest_set_bit(pos);
            if parent <= built.size {
                built.tree[parent] += built.tree[pos];
            }
        }
        Ok(built)
    }
}

impl NaiveSumOnQuery {
    /// Create a sum-on-query baseline over `size` logical elements, all zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenwick::NaiveSumOnQuery;
    ///
    /// let arr = NaiveSumOnQuery::new(16).unwrap();
    /// assert_eq!(arr.len(), 16);
    /// ```
    pub fn new(size: usize) -> InitResult<Self> {
        if size < MIN_SIZE {
            return Err(FenwickError::invalid_size(size, MIN_SIZE));
        }

        Ok(Self {
            values: vec![0; size],
        })
    }

    /// Create a sum-on-query baseline with the default size.
    pub fn with_default_size() -> InitResult<Self> {
        Self::new(DEFAULT_SIZE)
    }
}

impl NaivePrefixArray {
    /// Create a prefix-array baseline over `size` logical elements, all zero.
    ///
    /// The prefix array has `size + 1` entries so the empty prefix is stored
    /// explicitly at index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenwick::NaivePrefixArray;
    ///
    /// let arr = NaivePrefixArray::new(16).unwrap();
    /// assert_eq!(arr.len(), 16);
    /// ```
    pub fn new(size: usize) -> InitResult<Self> {
        if size < MIN_SIZE {
            return Err(FenwickError::invalid_size(size, MIN_SIZE));
        }

        Ok(Self {
            values: vec![0; size],
            prefix: vec![0; size + 1],
        })
    }

    /// Create a prefix-array baseline with the default size.
    pub fn with_default_size() -> InitResult<Self> {
        Self::new(DEFAULT_SIZE)
    }
}

// Default implementations
impl Default for FenwickTree {
    /// Create a Fenwick tree with the default size.
    fn default() -> Self {
        Self::with_default_size().expect("DEFAULT_SIZE is a valid size")
    }
}

impl Default for NaiveSumOnQuery {
    /// Create a sum-on-query baseline with the default size.
    fn default() -> Self {
        Self::with_default_size().expect("DEFAULT_SIZE is a valid size")
    }
}

impl Default for NaivePrefixArray {
    /// Create a prefix-array baseline with the default size.
    fn default() -> Self {
        Self::with_default_size().expect("DEFAULT_SIZE is a valid size")
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a logical size is suitable for a prefix-sum structure.
    pub fn validate_size(size: usize) -> InitResult<()> {
        if size < MIN_SIZE {
            Err(FenwickError::invalid_size(size, MIN_SIZE))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenwick_construction() {
        let tree = FenwickTree::new(16).unwrap();
        assert_eq!(tree.size, 16);
        assert_eq!(tree.tree.len(), 17);
        assert!(tree.tree.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(FenwickTree::new(0).unwrap_err().is_size_error());
        assert!(NaiveSumOnQuery::new(0).unwrap_err().is_size_error());
        assert!(NaivePrefixArray::new(0).unwrap_err().is_size_error());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FenwickTree::default().size, DEFAULT_SIZE);
        assert_eq!(NaiveSumOnQuery::default().values.len(), DEFAULT_SIZE);
        let arr = NaivePrefixArray::default();
        assert_eq!(arr.values.len(), DEFAULT_SIZE);
        assert_eq!(arr.prefix.len(), DEFAULT_SIZE + 1);
    }

    #[test]
    fn test_from_slice_matches_updates() {
        let values = [1, 6, 3, 9, 2, 0, -4, 7];
        let built = FenwickTree::from_slice(&values).unwrap();

        let mut incremental = FenwickTree::new(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            incremental.update(i, v);
        }

        assert_eq!(built, incremental);
    }

    #[test]
    fn test_from_slice_empty_is_invalid() {
        assert!(FenwickTree::from_slice(&[]).unwrap_err().is_size_error());
    }

    #[test]
    fn test_validation() {
        assert!(validation::validate_size(16).is_ok());
        assert!(validation::validate_size(1).is_ok());
        assert!(validation::validate_size(0).is_err());
    }
}
