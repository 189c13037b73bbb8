// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for a [`QuadTree`](crate::QuadTree).

/// Default bound on subdivision depth.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Largest subdivision depth a tree will honor.
///
/// Halving an `i64` world reaches the one-unit floor within 64 levels. Past that floor the
/// clamped child regions stop shrinking, so deeper levels would only add quadrants.
/// Larger requests are clamped to this value.
pub const MAX_DEPTH_CEILING: u32 = 64;

/// Configuration for a [`QuadTree`](crate::QuadTree).
///
/// With the `serde` feature enabled this can be loaded from any serde format; missing
/// fields take their default values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Maximum subdivision depth (the root is depth 0).
    ///
    /// Quadrants at this depth are never split; every item that reaches one is stored
    /// in its overflow bucket. Zero turns the tree into a single flat bucket.
    /// Values above [`MAX_DEPTH_CEILING`] are clamped when a tree is built.
    pub max_depth: u32,
}

impl QuadTreeConfig {
    /// Set the maximum subdivision depth, clamped to [`MAX_DEPTH_CEILING`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self.clamped()
    }

    /// This configuration with `max_depth` clamped to [`MAX_DEPTH_CEILING`].
    ///
    /// Needed only for values written straight into the field or deserialized;
    /// [`QuadTree::with_config`](crate::QuadTree::with_config) applies it anyway.
    #[must_use]
    pub const fn clamped(mut self) -> Self {
        if self.max_depth > MAX_DEPTH_CEILING {
            self.max_depth = MAX_DEPTH_CEILING;
        }
        self
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
