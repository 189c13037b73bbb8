// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{QuadItem, QuadTree, QuadTreeConfig, Rect};

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

const WORLD: Rect<f64> = Rect::new(0.0, 0.0, 2048.0, 2048.0);

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, max_size: f64) -> Vec<Rec> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let w = 1.0 + rng.next_f64() * max_size;
            let h = 1.0 + rng.next_f64() * max_size;
            let x0 = rng.next_f64() * (WORLD.max_x - w);
            let y0 = rng.next_f64() * (WORLD.max_y - h);
            Rec {
                id: i as u32,
                rect: Rect::from_xywh(x0, y0, w, h),
            }
        })
        .collect()
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rec> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Rec {
                id: out.len() as u32,
                rect: Rect::from_xywh(cx + dx, cy + dy, 12.0, 12.0),
            });
        }
    }
    out
}

fn build(items: &[Rec]) -> QuadTree<f64, Rec> {
    let mut tree = QuadTree::new(WORLD);
    for r in items {
        tree.insert(*r);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, Rec>::new(WORLD),
                |mut tree| {
                    for r in &rects {
                        tree.insert(*r);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let clustered = gen_clustered_rects(16, 512, 80.0);
    group.throughput(Throughput::Elements(clustered.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter_batched(
            || QuadTree::<f64, Rec>::new(WORLD),
            |mut tree| {
                for r in &clustered {
                    tree.insert(*r);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let rects = gen_random_rects(20_000, 40.0);
    let tree = build(&rects);
    for &extent in &[16.0_f64, 128.0, 512.0] {
        let q = Rect::from_xywh(700.0, 700.0, extent, extent);
        group.bench_function(format!("rect_{}", extent), |b| {
            b.iter(|| black_box(tree.query(black_box(q)).len()))
        });
    }
    let mut buf = Vec::new();
    let q = Rect::from_xywh(700.0, 700.0, 128.0, 128.0);
    group.bench_function("rect_into_reused_buffer", |b| {
        b.iter(|| {
            buf.clear();
            tree.query_into(black_box(q), &mut buf);
            black_box(buf.len())
        })
    });
    group.bench_function("point", |b| {
        b.iter(|| black_box(tree.query_point(black_box(1024.0), black_box(1024.0)).len()))
    });
    group.bench_function("linear_scan_baseline_rect_128", |b| {
        b.iter(|| {
            black_box(
                rects
                    .iter()
                    .filter(|r| r.rect.overlaps(&black_box(q)))
                    .count(),
            )
        })
    });
    group.finish();
}

fn bench_move_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_churn");
    let rects = gen_random_rects(10_000, 24.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("reinsert_all_shifted", |b| {
        b.iter_batched(
            || build(&rects),
            |mut tree| {
                for r in &rects {
                    let moved = Rec {
                        id: r.id,
                        rect: Rect::from_xywh(r.rect.min_x + 7.0, r.rect.min_y, 10.0, 10.0),
                    };
                    tree.reinsert(moved);
                }
                black_box(tree.len());
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("remove_all", |b| {
        b.iter_batched(
            || build(&rects),
            |mut tree| {
                for r in &rects {
                    black_box(tree.remove(r));
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_depth_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_limit");
    let rects = gen_clustered_rects(4, 2048, 20.0);
    for &max_depth in &[4_u32, 8, 32] {
        let cfg = QuadTreeConfig::default().with_max_depth(max_depth);
        let mut tree = QuadTree::with_config(WORLD, cfg);
        for r in &rects {
            tree.insert(*r);
        }
        let q = rects[0].rect;
        group.bench_function(format!("query_max_depth_{}", max_depth), |b| {
            b.iter(|| black_box(tree.query(black_box(q)).len()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query,
    bench_move_churn,
    bench_depth_limit,
);
criterion_main!(benches);
