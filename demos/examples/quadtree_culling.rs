// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling with a TOML-configured index.
//!
//! Lays out a grid of nodes, then pans a viewport across the canvas and reports how many
//! items each frame would paint.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example quadtree_culling`

use std::rc::Rc;

use kurbo::RoundedRect;
use tracing::info;
use understory_demos::{CanvasConfig, CanvasItem, CanvasShape, visible_in};

const CONFIG: &str = r#"
[world]
min_x = 0.0
min_y = 0.0
max_x = 8192.0
max_y = 8192.0

[index]
max_depth = 10
"#;

fn main() {
    understory_demos::init_tracing();

    let config = CanvasConfig::from_toml(CONFIG).expect("valid demo config");
    let mut index = config.build_index();

    for row in 0..64_i32 {
        for col in 0..64_i32 {
            let x = f64::from(col) * 128.0;
            let y = f64::from(row) * 128.0;
            let body = RoundedRect::new(x + 8.0, y + 8.0, x + 120.0, y + 72.0, 6.0);
            let id = format!("n{row}x{col}");
            index.insert(Rc::new(CanvasItem::new(&id, CanvasShape::Node(body), 0)));
        }
    }
    info!(stats = ?index.stats(), "canvas built");

    let size = kurbo::Size::new(1280.0, 720.0);
    for step in 0..6_i32 {
        let origin = kurbo::Point::new(f64::from(step) * 900.0, f64::from(step) * 500.0);
        let viewport = kurbo::Rect::from_origin_size(origin, size);
        let visible = visible_in(&index, viewport);
        info!(step, visible = visible.len(), "frame");
        println!(
            "viewport {:?}: {} of {} items visible",
            viewport,
            visible.len(),
            index.len()
        );
    }

    index.validate().expect("tree invariants hold");
    index.clear();
    assert!(index.is_empty());
}
