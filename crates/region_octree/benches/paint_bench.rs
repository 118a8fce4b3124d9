//! Region octree benchmarks.
//!
//! - **paint_unit_voxels**: worst case, every voxel painted with its own label
//! - **paint_random_boxes**: integer-aligned boxes of mixed size and label
//! - **slice_export**: one full cross-section through a fragmented tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use region_octree::{Axis, DAabb3, RegionOctree, SliceEncoding};

fn cube(size: f64) -> DAabb3 {
  DAabb3::from_coords(0.0, 0.0, 0.0, size, size, size)
}

fn random_boxes(size: i64, count: usize, seed: u64) -> Vec<(DAabb3, u32)> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      let mut min = [0.0; 3];
      let mut max = [0.0; 3];
      for axis in 0..3 {
        let a = rng.random_range(0..size);
        let b = rng.random_range(a + 1..=size);
        min[axis] = a as f64;
        max[axis] = b as f64;
      }
      let bounds = DAabb3::from_coords(min[0], min[1], min[2], max[0], max[1], max[2]);
      (bounds, rng.random_range(0..16))
    })
    .collect()
}

fn fragmented_tree(size: i64) -> RegionOctree {
  let mut tree = RegionOctree::new(cube(size as f64));
  for (bounds, label) in random_boxes(size, 256, 7) {
    tree.paint(&bounds, label);
  }
  tree
}

fn bench_paint_unit_voxels(c: &mut Criterion) {
  let mut group = c.benchmark_group("paint_unit_voxels");
  for size in [8i64, 16] {
    group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
      b.iter(|| {
        let mut tree = RegionOctree::new(cube(size as f64));
        let mut label = 0u32;
        for z in 0..size {
          for y in 0..size {
            for x in 0..size {
              let voxel = DAabb3::from_coords(
                x as f64,
                y as f64,
                z as f64,
                (x + 1) as f64,
                (y + 1) as f64,
                (z + 1) as f64,
              );
              tree.paint(&voxel, label);
              label += 1;
            }
          }
        }
        black_box(tree.tree_size())
      })
    });
  }
  group.finish();
}

fn bench_paint_random_boxes(c: &mut Criterion) {
  let mut group = c.benchmark_group("paint_random_boxes");
  for size in [32i64, 128] {
    let boxes = random_boxes(size, 256, 42);
    group.bench_with_input(BenchmarkId::from_parameter(size), &boxes, |b, boxes| {
      b.iter(|| {
        let mut tree = RegionOctree::new(cube(size as f64));
        for (bounds, label) in boxes {
          tree.paint(bounds, *label);
        }
        black_box(tree.tree_size())
      })
    });
  }
  group.finish();
}

fn bench_slice_export(c: &mut Criterion) {
  let mut group = c.benchmark_group("slice_export");
  let tree = fragmented_tree(128);
  for encoding in [SliceEncoding::U8, SliceEncoding::Rgba8] {
    group.bench_with_input(
      BenchmarkId::from_parameter(format!("{:?}", encoding)),
      &encoding,
      |b, &encoding| b.iter(|| black_box(tree.slice_with(Axis::Z, 64, encoding))),
    );
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_paint_unit_voxels,
  bench_paint_random_boxes,
  bench_slice_export
);
criterion_main!(benches);
