// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant arena: lazy subdivision, overflow buckets, and the query walk.
//!
//! Every quadrant of a tree lives in one arena and is addressed by [`QuadrantId`].
//! A parent records the ids of its (at most four) children; nothing points back up,
//! so the side table in [`QuadTree`](crate::QuadTree) can hold plain ids.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::item::QuadItem;
use crate::types::{Rect, Scalar};

/// Arena slot of a quadrant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct QuadrantId(usize);

impl QuadrantId {
    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// One bucket entry: the item handle and the bounds captured when it was inserted.
#[derive(Clone, Debug)]
pub(crate) struct Entry<T, I> {
    pub(crate) bounds: Rect<T>,
    pub(crate) item: I,
}

#[derive(Clone, Debug)]
pub(crate) struct Quadrant<T, I> {
    pub(crate) rect: Rect<T>,
    pub(crate) depth: u32,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub(crate) children: [Option<QuadrantId>; 4],
    /// Items stored at this level: they straddle a split line or the depth limit was hit.
    pub(crate) bucket: Vec<Entry<T, I>>,
}

pub(crate) struct Quadrants<T, I> {
    nodes: Vec<Quadrant<T, I>>,
}

impl<T, I> Default for Quadrants<T, I> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: Scalar, I> Debug for Quadrants<T, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let entries: usize = self.nodes.iter().map(|q| q.bucket.len()).sum();
        f.debug_struct("Quadrants")
            .field("quadrants", &self.nodes.len())
            .field("entries", &entries)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, I> Quadrants<T, I> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Ids are only minted by [`alloc`](Self::alloc) on this arena and the arena only
    /// shrinks through [`clear`](Self::clear), which also drops every outstanding id.
    /// Indexing by id therefore cannot go out of bounds.
    pub(crate) fn get(&self, at: QuadrantId) -> &Quadrant<T, I> {
        &self.nodes[at.get()]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Quadrant<T, I>> + '_ {
        self.nodes.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Allocate an empty quadrant.
    pub(crate) fn alloc(&mut self, rect: Rect<T>, depth: u32) -> QuadrantId {
        self.nodes.push(Quadrant {
            rect,
            depth,
            children: [None; 4],
            bucket: Vec::new(),
        });
        QuadrantId(self.nodes.len() - 1)
    }

    /// Descend from `start` to the deepest quadrant whose child regions cannot take
    /// `bounds`, creating children on the way, and store the item there.
    ///
    /// Returns the quadrant that now owns the entry.
    pub(crate) fn insert(
        &mut self,
        start: QuadrantId,
        bounds: Rect<T>,
        item: I,
        max_depth: u32,
    ) -> QuadrantId {
        let mut at = start;
        loop {
            let node = &self.nodes[at.get()];
            if node.depth >= max_depth {
                tracing::trace!(
                    quadrant = at.get(),
                    depth = node.depth,
                    "depth limit reached, storing in overflow bucket"
                );
                break;
            }
            let depth = node.depth;
            let regions = node.rect.quadrants();
            // Child regions only share edges, so at most the first match matters.
            let Some(slot) = regions.iter().position(|r| r.contains(&bounds)) else {
                break;
            };
            at = match self.nodes[at.get()].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.alloc(regions[slot], depth + 1);
                    self.nodes[at.get()].children[slot] = Some(child);
                    child
                }
            };
        }
        self.nodes[at.get()].bucket.push(Entry { bounds, item });
        at
    }

    /// Unlink the entry with `id` from the bucket of `at`. Does not look at children.
    pub(crate) fn remove(&mut self, at: QuadrantId, id: &I::Id) -> Option<I>
    where
        I: QuadItem<T>,
    {
        let bucket = &mut self.nodes.get_mut(at.get())?.bucket;
        let pos = bucket.iter().position(|e| e.item.id() == id)?;
        Some(bucket.swap_remove(pos).item)
    }

    /// Find the entry with `id` in the bucket of `at`.
    pub(crate) fn find(&self, at: QuadrantId, id: &I::Id) -> Option<&Entry<T, I>>
    where
        I: QuadItem<T>,
    {
        self.nodes
            .get(at.get())?
            .bucket
            .iter()
            .find(|e| e.item.id() == id)
    }

    /// Visit every entry under `at` whose bounds overlap `rect`.
    ///
    /// Walks depth-first with an explicit stack: a quadrant's own bucket first, then its
    /// children in slot order.
    pub(crate) fn query<'a, F>(&'a self, at: QuadrantId, rect: &Rect<T>, visit: &mut F)
    where
        F: FnMut(&'a I),
    {
        let mut stack = vec![at];
        while let Some(at) = stack.pop() {
            let node = self.get(at);
            for entry in &node.bucket {
                if entry.bounds.overlaps(rect) {
                    visit(&entry.item);
                }
            }
            for &child in node.children.iter().rev().flatten() {
                if self.get(child).rect.overlaps(rect) {
                    stack.push(child);
                }
            }
        }
    }
}
