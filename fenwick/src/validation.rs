//! Validation and debugging utilities for the prefix-sum structures.
//!
//! A Fenwick array on its own encodes *some* logical array, so the deep audit
//! takes the expected logical values as input and verifies every block sum
//! against them. The prefix-array baseline carries its base array alongside
//! the derived one and can be audited in isolation.

use crate::types::{lowest_set_bit, FenwickTree, NaivePrefixArray};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl FenwickTree {
    /// Check the tree's structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Structural checks with detailed error reporting: the storage must hold
    /// exactly `size + 1` entries and the unused slot `tree[0]` must be zero.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.tree.len() != self.size + 1 {
            return Err(format!(
                "storage length {} does not match size {} + 1",
                self.tree.len(),
                self.size
            ));
        }

        if self.tree[0] != 0 {
            return Err(format!("unused slot tree[0] holds {}", self.tree[0]));
        }

        Ok(())
    }

    /// Audit the full Fenwick decomposition against the expected logical
    /// array: every `tree[pos]` must equal the sum of
    /// `values[pos - lsb(pos)..pos]`.
    ///
    /// The expected values must come from an independent source (a reference
    /// model, a baseline structure); the tree cannot vouch for itself because
    /// any storage contents decode to some logical array.
    pub fn check_against(&self, values: &[i64]) -> Result<(), String> {
        self.check_invariants_detailed()?;

        if values.len() != self.size {
            return Err(format!(
                "reference array has {} values but the tree has size {}",
                values.len(),
                self.size
            ));
        }

        for pos in 1..=self.size {
            let block = lowest_set_bit(pos);
            let expected: i64 = values[pos - block..pos].iter().sum();
            if self.tree[pos] != expected {
                return Err(format!(
                    "tree[{}] holds {} but its block [{}, {}) sums to {}",
                    pos,
                    self.tree[pos],
                    pos - block,
                    pos,
                    expected
                ));
            }
        }

        Ok(())
    }
}

impl NaivePrefixArray {
    /// Check that the maintained prefix array matches the base array.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.prefix.len() != self.values.len() + 1 {
            return Err(format!(
                "prefix length {} does not match size {} + 1",
                self.prefix.len(),
                self.values.len()
            ));
        }

        if self.prefix[0] != 0 {
            return Err(format!("empty prefix holds {}", self.prefix[0]));
        }

        for pos in 1..self.prefix.len() {
            let expected = self.prefix[pos - 1] + self.values[pos - 1];
            if self.prefix[pos] != expected {
                return Err(format!(
                    "prefix[{}] holds {} but recurrence gives {}",
                    pos, self.prefix[pos], expected
                ));
            }
        }

        Ok(())
    }
}
