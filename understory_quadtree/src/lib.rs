// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: an adaptive 2D quadtree for hit testing and culling.
//!
//! Understory Quadtree answers "which items overlap this rectangle" for a 2D scene such as
//! a node-graph canvas.
//!
//! - Insert items that expose a stable id and a bounding rectangle ([`QuadItem`]).
//! - Remove them by id in constant time via a side table, without descending the tree.
//! - Query by rectangle or point, optionally filtering or projecting to one kind of item.
//!
//! The tree covers a fixed world rectangle and subdivides lazily. An item goes to the
//! deepest quadrant whose region fully contains it; an item that straddles a split line is
//! kept in the overflow bucket of the lowest ancestor that contains it. Items are never
//! split or duplicated, and subdivision stops at [`QuadTreeConfig::max_depth`].
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and does not depend on any
//! geometry crate; enable the `kurbo` feature for conversions from `kurbo::Rect`.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{QuadItem, QuadTree, Rect};
//!
//! #[derive(Clone, Debug)]
//! struct Sprite {
//!     name: &'static str,
//!     bounds: Rect<f64>,
//! }
//!
//! impl QuadItem<f64> for Sprite {
//!     type Id = &'static str;
//!
//!     fn id(&self) -> &Self::Id {
//!         &self.name
//!     }
//!
//!     fn bounds(&self) -> Rect<f64> {
//!         self.bounds
//!     }
//! }
//!
//! let mut tree = QuadTree::new(Rect::from_xywh(0.0, 0.0, 1024.0, 1024.0));
//! let a = Sprite { name: "A", bounds: Rect::from_xywh(10.0, 10.0, 5.0, 5.0) };
//! let b = Sprite { name: "B", bounds: Rect::from_xywh(500.0, 500.0, 5.0, 5.0) };
//! tree.insert(a.clone());
//! tree.insert(b);
//!
//! let hits = tree.query(Rect::from_xywh(0.0, 0.0, 20.0, 20.0));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "A");
//!
//! assert!(tree.remove(&a));
//! assert_eq!(tree.query(tree.world()).len(), 1);
//! ```
//!
//! ## Storing handles
//!
//! The tree owns whatever implements [`QuadItem`]. To index caller-owned objects, store
//! `&T`, `Rc<T>` or `Arc<T>`; the blanket implementations forward to `T`.
//!
//! ## Edge semantics
//!
//! Overlap and containment are inclusive: touching edges overlap. Query results are only
//! bounding-rectangle candidates; run exact shape tests on them if you need precision.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates.
//! Inverted rectangles are normalized on insert and query.
//!
//! ## Features
//!
//! - `kurbo`: conversions between `kurbo::Rect` and `Rect<f64>`.
//! - `serde`: `Serialize`/`Deserialize` for [`Rect`] and [`QuadTreeConfig`]. Its tests only
//!   build with the feature on, so run `cargo test --all-features` to cover them.
//!
//! ## Concurrency
//!
//! There is no internal locking. Mutation takes `&mut self`, so callers that share a tree
//! across threads must wrap it themselves.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod item;
mod quadrant;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, QuadTreeConfig};
pub use error::InvariantError;
pub use item::QuadItem;
pub use tree::{QuadTree, QuadTreeStats};
pub use types::{Rect, Scalar};
