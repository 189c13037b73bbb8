// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{QuadItem, QuadTree, Rect};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

#[derive(Copy, Clone, Debug)]
struct Rec {
    id: u32,
    rect: Rect<f64>,
}

impl QuadItem<f64> for Rec {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn bounds(&self) -> Rect<f64> {
        self.rect
    }
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rec> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rec {
                id: out.len() as u32,
                rect: Rect::from_xywh(x0, y0, cell, cell),
            });
        }
    }
    out
}

fn to_rstar_rects(v: &[Rec]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.rect.min_x, r.rect.min_y], [r.rect.max_x, r.rect.max_y]))
        .collect()
}

fn bench_rstar_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_f64");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let world = Rect::new(0.0, 0.0, n as f64 * 10.0, n as f64 * 10.0);
        let query = Rect::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, Rec>::new(world),
                |mut tree| {
                    for r in &rects {
                        tree.insert(*r);
                    }
                    black_box(tree.query(query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let mut tree = RTree::new();
                    for r in rectangles {
                        tree.insert(r);
                    }
                    let aabb = AABB::from_corners(
                        [query.min_x, query.min_y],
                        [query.max_x, query.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let mut tree = QuadTree::<f64, Rec>::new(world);
        for r in &rects {
            tree.insert(*r);
        }
        let rtree = RTree::bulk_load(to_rstar_rects(&rects));
        let aabb = AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
        group.bench_function(format!("quadtree_query_only_n{}", n), |b| {
            b.iter(|| black_box(tree.query(black_box(query)).len()))
        });
        group.bench_function(format!("rstar_query_only_n{}", n), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope_intersecting(&aabb).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare_f64);
criterion_main!(benches);
