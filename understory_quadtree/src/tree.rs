// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`QuadTree`] API: insertion, removal by id, and rectangle queries.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use tracing::debug;

use crate::config::QuadTreeConfig;
use crate::error::InvariantError;
use crate::item::QuadItem;
use crate::quadrant::{QuadrantId, Quadrants};
use crate::types::{Rect, Scalar};

/// Shape summary of a [`QuadTree`], mostly useful for tuning and debugging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    /// Quadrants allocated so far (they are only released by [`QuadTree::clear`]).
    pub quadrants: usize,
    /// Items currently indexed.
    pub items: usize,
    /// Depth of the deepest allocated quadrant.
    pub max_depth: u32,
    /// Length of the fullest overflow bucket.
    pub largest_bucket: usize,
}

/// A quadtree over a fixed world rectangle.
///
/// Items are placed in the deepest quadrant whose region fully contains their bounds.
/// An item that straddles a split line stays in the bucket of the lowest ancestor that
/// contains it, so no item is ever split or duplicated. Items outside the world
/// rectangle are kept at the root.
///
/// A side table maps each item id to the quadrant holding it, so removal never has to
/// descend the tree. Quadrants are created on demand and never merged; use
/// [`clear`](Self::clear) to release them.
pub struct QuadTree<T: Scalar, I: QuadItem<T>> {
    world: Rect<T>,
    config: QuadTreeConfig,
    root: Option<QuadrantId>,
    quadrants: Quadrants<T, I>,
    table: HashMap<I::Id, QuadrantId>,
}

impl<T: Scalar, I: QuadItem<T>> Debug for QuadTree<T, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("world", &self.world)
            .field("config", &self.config)
            .field("items", &self.table.len())
            .field("quadrants", &self.quadrants)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, I: QuadItem<T>> QuadTree<T, I> {
    /// Create an empty tree over `world` with the default configuration.
    ///
    /// No quadrant is allocated until the first insert.
    pub fn new(world: Rect<T>) -> Self {
        Self::with_config(world, QuadTreeConfig::default())
    }

    /// Create an empty tree over `world` with an explicit configuration.
    ///
    /// `config.max_depth` is clamped to [`MAX_DEPTH_CEILING`](crate::MAX_DEPTH_CEILING).
    pub fn with_config(world: Rect<T>, config: QuadTreeConfig) -> Self {
        Self {
            world: world.normalized(),
            config: config.clamped(),
            root: None,
            quadrants: Quadrants::default(),
            table: HashMap::new(),
        }
    }

    /// The world rectangle the root quadrant covers.
    pub fn world(&self) -> Rect<T> {
        self.world
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no item is indexed.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether an item with this id is indexed.
    pub fn contains_id(&self, id: &I::Id) -> bool {
        self.table.contains_key(id)
    }

    /// The indexed item with this id, if any.
    pub fn get(&self, id: &I::Id) -> Option<&I> {
        let at = *self.table.get(id)?;
        self.quadrants.find(at, id).map(|e| &e.item)
    }

    /// Depth of the quadrant holding the item with this id (the root is depth 0).
    pub fn depth_of(&self, id: &I::Id) -> Option<u32> {
        let at = *self.table.get(id)?;
        Some(self.quadrants.get(at).depth)
    }

    /// Insert an item.
    ///
    /// Its bounds are read once, normalized, and kept until the item is removed.
    /// If an item with the same id is already indexed it is removed first and returned.
    pub fn insert(&mut self, item: I) -> Option<I> {
        let previous = self.take(item.id());
        let id = item.id().clone();
        let bounds = item.bounds().normalized();
        let root = self.root_or_init();
        let at = self
            .quadrants
            .insert(root, bounds, item, self.config.max_depth);
        self.table.insert(id, at);
        previous
    }

    /// Remove an item. Returns `true` if an entry was found and unlinked.
    pub fn remove(&mut self, item: &I) -> bool {
        self.take(item.id()).is_some()
    }

    /// Remove the item with this id and hand it back.
    ///
    /// The side table record is dropped even if the recorded quadrant no longer holds
    /// a matching entry.
    pub fn take(&mut self, id: &I::Id) -> Option<I> {
        let at = self.table.remove(id)?;
        self.quadrants.remove(at, id)
    }

    /// Remove and insert again, picking up new bounds.
    ///
    /// Returns `true` if an older entry for the same id was replaced.
    pub fn reinsert(&mut self, item: I) -> bool {
        self.insert(item).is_some()
    }

    /// Drop every quadrant and side table record.
    ///
    /// Items handed out earlier stay valid; they are simply no longer indexed.
    pub fn clear(&mut self) {
        debug!(
            items = self.table.len(),
            quadrants = self.quadrants.len(),
            "clearing quadtree"
        );
        self.root = None;
        self.quadrants.clear();
        self.table.clear();
    }

    /// Items whose bounds overlap `rect`, touching edges included.
    ///
    /// The result order is unspecified.
    pub fn query(&self, rect: Rect<T>) -> Vec<&I> {
        let mut out = Vec::new();
        self.query_into(rect, &mut out);
        out
    }

    /// Like [`query`](Self::query), appending to a caller-owned buffer.
    pub fn query_into<'a>(&'a self, rect: Rect<T>, out: &mut Vec<&'a I>) {
        self.visit(rect, |item| out.push(item));
    }

    /// Overlapping items accepted by `filter`.
    pub fn query_filter<F>(&self, rect: Rect<T>, mut filter: F) -> Vec<&I>
    where
        F: FnMut(&I) -> bool,
    {
        let mut out = Vec::new();
        self.visit(rect, |item| {
            if filter(item) {
                out.push(item);
            }
        });
        out
    }

    /// Overlapping items projected through `project`; items mapped to `None` are skipped.
    ///
    /// This is the typed form of a filtered query, e.g. selecting one kind of scene object
    /// out of an enum or downcasting a trait object.
    pub fn query_map<'a, U, F>(&'a self, rect: Rect<T>, mut project: F) -> Vec<U>
    where
        F: FnMut(&'a I) -> Option<U>,
    {
        let mut out = Vec::new();
        self.visit(rect, |item| out.extend(project(item)));
        out
    }

    /// Items whose bounds contain the point, edges included.
    pub fn query_point(&self, x: T, y: T) -> Vec<&I> {
        self.query(Rect::new(x, y, x, y))
    }

    /// Every indexed item, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        self.quadrants
            .iter()
            .flat_map(|q| q.bucket.iter().map(|e| &e.item))
    }

    /// Summarize the current shape of the tree.
    pub fn stats(&self) -> QuadTreeStats {
        let mut stats = QuadTreeStats {
            quadrants: self.quadrants.len(),
            items: self.table.len(),
            ..QuadTreeStats::default()
        };
        for q in self.quadrants.iter() {
            stats.max_depth = stats.max_depth.max(q.depth);
            stats.largest_bucket = stats.largest_bucket.max(q.bucket.len());
        }
        stats
    }

    /// Check every structural invariant of the tree.
    ///
    /// A healthy tree always returns `Ok`. This walks the whole structure and is meant
    /// for tests and debugging.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            if self.table.is_empty() && self.quadrants.len() == 0 {
                return Ok(());
            }
            return Err(InvariantError::CountMismatch {
                stored: 0,
                tracked: self.table.len(),
            });
        };

        let max_depth = self.config.max_depth;
        let mut reached = vec![false; self.quadrants.len()];
        let mut stored = 0;
        let mut stack = vec![root];
        while let Some(at) = stack.pop() {
            if core::mem::replace(&mut reached[at.get()], true) {
                continue;
            }
            let node = self.quadrants.get(at);
            if node.depth > max_depth {
                return Err(InvariantError::DepthExceeded {
                    quadrant: at.get(),
                    depth: node.depth,
                    max_depth,
                });
            }

            let regions = node.rect.quadrants();
            for (slot, child) in node.children.iter().enumerate() {
                let Some(child) = *child else {
                    continue;
                };
                let c = self.quadrants.get(child);
                if c.depth != node.depth + 1 {
                    return Err(InvariantError::ChildDepth {
                        child: child.get(),
                        depth: c.depth,
                        expected: node.depth + 1,
                    });
                }
                if c.rect != regions[slot] {
                    return Err(InvariantError::ChildRegion {
                        child: child.get(),
                        slot,
                    });
                }
                stack.push(child);
            }

            for entry in &node.bucket {
                if at != root && !node.rect.contains(&entry.bounds) {
                    return Err(InvariantError::EntryOutsideRegion { quadrant: at.get() });
                }
                match self.table.get(entry.item.id()) {
                    None => return Err(InvariantError::Untracked { quadrant: at.get() }),
                    Some(&recorded) if recorded != at => {
                        return Err(InvariantError::Misplaced {
                            recorded: recorded.get(),
                            actual: at.get(),
                        });
                    }
                    Some(_) => {}
                }
                stored += 1;
            }
        }

        if stored != self.table.len() {
            return Err(InvariantError::CountMismatch {
                stored,
                tracked: self.table.len(),
            });
        }
        if let Some(quadrant) = reached.iter().position(|r| !r) {
            return Err(InvariantError::Unreachable { quadrant });
        }
        Ok(())
    }

    fn visit<'a, F>(&'a self, rect: Rect<T>, mut f: F)
    where
        F: FnMut(&'a I),
    {
        if let Some(root) = self.root {
            self.quadrants.query(root, &rect.normalized(), &mut f);
        }
    }

    fn root_or_init(&mut self) -> QuadrantId {
        if let Some(root) = self.root {
            return root;
        }
        debug!(world = ?self.world, max_depth = self.config.max_depth, "allocating quadtree root");
        let root = self.quadrants.alloc(self.world, 0);
        self.root = Some(root);
        root
    }
}
