//! Enumeration of leaf assignments.
//!
//! An assignment fixes every leaf to a boolean value and is encoded as a
//! k-bit mask. Leaf `j`, counted in leaf-discovery order, occupies bit
//! `k - 1 - j`: the first-discovered leaf is the most significant bit.
//! Enumerating masks in ascending order therefore varies the first leaf
//! slowest, which matches conventional truth-table row ordering.

use std::fmt;

use crate::circuit::{Circuit, MAX_LEAVES};

/// One complete choice of boolean values for all `k` leaves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    mask: u64,
    num_leaves: usize,
}

impl Assignment {
    /// Wraps a raw mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` has bits set above the `num_leaves` low bits.
    pub fn new(mask: u64, num_leaves: usize) -> Self {
        assert!(num_leaves <= MAX_LEAVES, "Too many leaves for a mask");
        assert_eq!(mask >> num_leaves, 0, "Mask wider than the leaf count");
        Assignment { mask, num_leaves }
    }

    pub fn mask(self) -> u64 {
        self.mask
    }

    pub fn num_leaves(self) -> usize {
        self.num_leaves
    }

    /// The value of leaf `j` in leaf-discovery order.
    ///
    /// # Panics
    ///
    /// Panics if `j >= num_leaves`.
    pub fn leaf(self, j: usize) -> bool {
        assert!(j < self.num_leaves, "Leaf ordinal out of range");
        (self.mask >> (self.num_leaves - 1 - j)) & 1 == 1
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..self.num_leaves {
            write!(f, "{}", self.leaf(j) as u8)?;
        }
        Ok(())
    }
}

/// Iterator over all `2^k` assignments in strictly ascending mask order.
///
/// The sequence is finite and restartable (clone before consuming), and
/// reports an exact length.
#[derive(Debug, Clone)]
pub struct Assignments {
    num_leaves: usize,
    next: u64,
    end: u64,
}

impl Assignments {
    /// # Panics
    ///
    /// Panics if `num_leaves` exceeds [`MAX_LEAVES`].
    pub fn new(num_leaves: usize) -> Self {
        assert!(num_leaves <= MAX_LEAVES, "Too many leaves to enumerate");
        Assignments { num_leaves, next: 0, end: 1u64 << num_leaves }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.next == self.end {
            return None;
        }
        let assignment = Assignment::new(self.next, self.num_leaves);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

impl Circuit {
    /// All assignments of this circuit's leaves, in ascending mask order.
    pub fn assignments(&self) -> Assignments {
        Assignments::new(self.num_leaves())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_ascend() {
        let masks: Vec<u64> = Assignments::new(3).map(|a| a.mask()).collect();
        assert_eq!(masks, (0..8).collect::<Vec<u64>>());
    }

    #[test]
    fn test_exact_len() {
        let assignments = Assignments::new(4);
        assert_eq!(assignments.len(), 16);
        assert_eq!(assignments.count(), 16);
    }

    #[test]
    fn test_first_leaf_is_most_significant() {
        let a = Assignment::new(0b100, 3);
        assert!(a.leaf(0));
        assert!(!a.leaf(1));
        assert!(!a.leaf(2));

        let a = Assignment::new(0b001, 3);
        assert!(!a.leaf(0));
        assert!(a.leaf(2));
    }

    #[test]
    fn test_display_is_msb_first() {
        assert_eq!(Assignment::new(0b101, 3).to_string(), "101");
        assert_eq!(Assignment::new(0, 2).to_string(), "00");
    }

    #[test]
    fn test_no_leaves_yields_one_empty_assignment() {
        let all: Vec<Assignment> = Assignments::new(0).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].mask(), 0);
        assert_eq!(all[0].to_string(), "");
    }

    #[test]
    fn test_clone_restarts() {
        let assignments = Assignments::new(2);
        let first: Vec<u64> = assignments.clone().map(|a| a.mask()).collect();
        let second: Vec<u64> = assignments.map(|a| a.mask()).collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "Mask wider than the leaf count")]
    fn test_wide_mask_panics() {
        Assignment::new(0b100, 2);
    }
}
