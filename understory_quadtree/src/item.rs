// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability an item must provide to be stored in a [`QuadTree`](crate::QuadTree).

use alloc::rc::Rc;
use alloc::sync::Arc;
use core::hash::Hash;

use crate::types::Rect;

/// An indexable item: a stable identity plus a bounding rectangle.
///
/// The tree stores whatever handle type implements this trait. That is usually something
/// cheap that refers to caller-owned data: a shared reference, an [`Rc`] or [`Arc`], or a
/// small `Copy` record. The tree never mutates items.
///
/// ## Contract
///
/// - [`id`](QuadItem::id) must be unique among the items currently in one tree.
/// - [`bounds`](QuadItem::bounds) is read once at insertion and must be treated as fixed
///   while the item is indexed. To move an item, remove it and insert it again
///   (see [`QuadTree::reinsert`](crate::QuadTree::reinsert)).
pub trait QuadItem<T> {
    /// Identifier type used by the tree's side table.
    type Id: Eq + Hash + Clone;

    /// Stable identifier of this item.
    fn id(&self) -> &Self::Id;

    /// Bounding rectangle in world coordinates.
    fn bounds(&self) -> Rect<T>;
}

impl<T, I: QuadItem<T> + ?Sized> QuadItem<T> for &I {
    type Id = I::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn bounds(&self) -> Rect<T> {
        (**self).bounds()
    }
}

impl<T, I: QuadItem<T> + ?Sized> QuadItem<T> for Rc<I> {
    type Id = I::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn bounds(&self) -> Rect<T> {
        (**self).bounds()
    }
}

impl<T, I: QuadItem<T> + ?Sized> QuadItem<T> for Arc<I> {
    type Id = I::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn bounds(&self) -> Rect<T> {
        (**self).bounds()
    }
}
