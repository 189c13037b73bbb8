// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural invariant violations reported by [`QuadTree::validate`](crate::QuadTree::validate).

use thiserror::Error;

/// A broken structural invariant.
///
/// None of the tree's operations can fail; seeing one of these means a bug in the tree
/// or an item whose identity changed while indexed. Quadrants are identified by their
/// arena slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A quadrant sits deeper than the configured maximum.
    #[error("quadrant {quadrant} has depth {depth}, above the maximum of {max_depth}")]
    DepthExceeded {
        /// Offending quadrant.
        quadrant: usize,
        /// Its depth.
        depth: u32,
        /// Configured maximum.
        max_depth: u32,
    },

    /// A child's depth is not its parent's depth plus one.
    #[error("quadrant {child} has depth {depth}, expected {expected}")]
    ChildDepth {
        /// Offending child quadrant.
        child: usize,
        /// Its depth.
        depth: u32,
        /// Parent depth + 1.
        expected: u32,
    },

    /// A child's region is not the matching quarter of its parent.
    #[error("quadrant {child} does not cover quarter {slot} of its parent")]
    ChildRegion {
        /// Offending child quadrant.
        child: usize,
        /// Child slot (0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right).
        slot: usize,
    },

    /// A quadrant below the root holds an entry it does not contain.
    #[error("quadrant {quadrant} holds an entry outside its region")]
    EntryOutsideRegion {
        /// Offending quadrant.
        quadrant: usize,
    },

    /// An entry was found in the tree whose id has no side table record.
    #[error("quadrant {quadrant} holds an entry missing from the side table")]
    Untracked {
        /// Quadrant holding the entry.
        quadrant: usize,
    },

    /// The side table records a different quadrant than the one holding the entry.
    #[error("side table records quadrant {recorded}, entry lives in quadrant {actual}")]
    Misplaced {
        /// Quadrant in the side table.
        recorded: usize,
        /// Quadrant actually holding the entry.
        actual: usize,
    },

    /// The number of stored entries and side table records disagree.
    #[error("tree stores {stored} entries but the side table has {tracked}")]
    CountMismatch {
        /// Entries reachable from the root.
        stored: usize,
        /// Side table records.
        tracked: usize,
    },

    /// A quadrant cannot be reached from the root.
    #[error("quadrant {quadrant} is not reachable from the root")]
    Unreachable {
        /// Orphaned quadrant.
        quadrant: usize,
    },
}
