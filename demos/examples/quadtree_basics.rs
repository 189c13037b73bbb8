// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert two items, query a corner and the whole world, remove one, and print the shape
//! of the tree.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example quadtree_basics`

use understory_quadtree::{QuadItem, QuadTree, Rect};

#[derive(Clone, Debug)]
struct Sprite {
    name: String,
    rect: Rect<f64>,
}

impl QuadItem<f64> for Sprite {
    type Id = String;

    fn id(&self) -> &String {
        &self.name
    }

    fn bounds(&self) -> Rect<f64> {
        self.rect
    }
}

fn names(hits: &[&Sprite]) -> Vec<String> {
    let mut v: Vec<String> = hits.iter().map(|s| s.name.clone()).collect();
    v.sort();
    v
}

fn main() {
    understory_demos::init_tracing();

    let world = Rect::from_xywh(0.0, 0.0, 1024.0, 1024.0);
    let mut tree = QuadTree::new(world);

    let a = Sprite {
        name: "A".into(),
        rect: Rect::from_xywh(10.0, 10.0, 5.0, 5.0),
    };
    let b = Sprite {
        name: "B".into(),
        rect: Rect::from_xywh(500.0, 500.0, 5.0, 5.0),
    };
    tree.insert(a.clone());
    tree.insert(b);
    println!("A stored at depth {:?}", tree.depth_of(&a.name));
    println!("B stored at depth {:?}", tree.depth_of(&"B".to_string()));

    let corner = tree.query(Rect::from_xywh(0.0, 0.0, 20.0, 20.0));
    println!("query [0,0,20,20] -> {:?}", names(&corner));
    assert_eq!(names(&corner), ["A"]);

    println!("query world -> {:?}", names(&tree.query(world)));

    assert!(tree.remove(&a));
    let rest = tree.query(world);
    println!("after remove(A), query world -> {:?}", names(&rest));
    assert_eq!(names(&rest), ["B"]);

    println!("{:?}", tree.stats());
    tree.validate().expect("tree invariants hold");
}
