// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scene model for the quadtree demos: a small node-graph canvas.
//!
//! Items are kurbo shapes. The quadtree only sees their bounding boxes; exact hit tests
//! run on the candidates it returns.

use std::rc::Rc;

use bitflags::bitflags;
use kurbo::{Circle, Point, RoundedRect, Shape};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadItem, QuadTree, QuadTreeConfig, Rect};

bitflags! {
    /// Per-item visibility and picking controls.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Drawn, and returned by culling queries.
        const VISIBLE  = 0b0000_0001;
        /// Returned by hit tests.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Geometry of a canvas item.
#[derive(Clone, Debug)]
pub enum CanvasShape {
    /// A graph node body.
    Node(RoundedRect),
    /// A connection socket on a node's edge.
    Socket(Circle),
    /// A free-floating comment box.
    Comment(kurbo::Rect),
}

impl CanvasShape {
    fn bounding_box(&self) -> kurbo::Rect {
        match self {
            Self::Node(r) => r.bounding_box(),
            Self::Socket(c) => c.bounding_box(),
            Self::Comment(r) => *r,
        }
    }

    fn contains(&self, p: Point) -> bool {
        match self {
            Self::Node(r) => r.contains(p),
            Self::Socket(c) => c.contains(p),
            Self::Comment(r) => r.contains(p),
        }
    }
}

/// An item on the canvas.
#[derive(Clone, Debug)]
pub struct CanvasItem {
    /// Stable identifier.
    pub id: String,
    /// Geometry.
    pub shape: CanvasShape,
    /// Paint order; higher is on top.
    pub z: i32,
    /// Visibility and picking.
    pub flags: ItemFlags,
}

impl CanvasItem {
    /// Create a visible, pickable item.
    pub fn new(id: &str, shape: CanvasShape, z: i32) -> Self {
        Self {
            id: id.to_owned(),
            shape,
            z,
            flags: ItemFlags::default(),
        }
    }
}

impl QuadItem<f64> for CanvasItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn bounds(&self) -> Rect<f64> {
        self.shape.bounding_box().into()
    }
}

/// The canvas index: shared handles so the scene keeps owning its items.
pub type CanvasIndex = QuadTree<f64, Rc<CanvasItem>>;

/// Topmost pickable item whose exact shape contains `p`.
///
/// The quadtree narrows the search to bounding-box candidates; ties on `z` go to the
/// item with the larger id so the result does not depend on query order.
pub fn hit_test(index: &CanvasIndex, p: Point) -> Option<&Rc<CanvasItem>> {
    index
        .query_filter(Rect::new(p.x, p.y, p.x, p.y), |it| {
            it.flags.contains(ItemFlags::PICKABLE)
        })
        .into_iter()
        .filter(|it| it.shape.contains(p))
        .max_by(|a, b| a.z.cmp(&b.z).then_with(|| a.id.cmp(&b.id)))
}

/// Visible items overlapping `viewport`, in paint order.
pub fn visible_in(index: &CanvasIndex, viewport: kurbo::Rect) -> Vec<&Rc<CanvasItem>> {
    let mut items = index.query_filter(viewport.into(), |it| it.flags.contains(ItemFlags::VISIBLE));
    items.sort_by(|a, b| a.z.cmp(&b.z).then_with(|| a.id.cmp(&b.id)));
    items
}

/// Canvas settings as loaded from TOML.
#[derive(Clone, Debug, Deserialize)]
pub struct CanvasConfig {
    /// World rectangle covered by the index.
    pub world: Rect<f64>,
    /// Quadtree tuning.
    #[serde(default)]
    pub index: QuadTreeConfig,
}

impl CanvasConfig {
    /// Parse a TOML document.
    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Build an empty canvas index with these settings.
    pub fn build_index(&self) -> CanvasIndex {
        QuadTree::with_config(self.world, self.index)
    }
}

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
