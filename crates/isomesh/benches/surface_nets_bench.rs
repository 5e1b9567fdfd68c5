//! Benchmark comparing isomesh's surface_nets against the fast_surface_nets
//! crate.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_surface_nets::ndshape::{ConstShape, ConstShape3u32};
use fast_surface_nets::{surface_nets, SurfaceNetsBuffer};
use isomesh::{
  extract_batch, surface_nets as my_surface_nets, ExtractInput, MeshConfig, MeshOutput,
  ScalarField, SurfaceNets,
};

/// Grid shape for fast_surface_nets (32³). Both crates store X fastest.
type GridShape = ConstShape3u32<32, 32, 32>;

const DIMS: [usize; 3] = [32, 32, 32];

/// Minimum distance to a set of spheres at every sample.
fn spheres_sdf(spheres: &[([f32; 3], f32)]) -> Vec<f32> {
  let mut sdf = vec![f32::MAX; GridShape::USIZE];

  for i in 0u32..GridShape::SIZE {
    let [x, y, z] = GridShape::delinearize(i);
    let mut min_dist = f32::MAX;
    for (center, radius) in spheres {
      let dx = x as f32 - center[0];
      let dy = y as f32 - center[1];
      let dz = z as f32 - center[2];
      let dist = (dx * dx + dy * dy + dz * dz).sqrt() - radius;
      min_dist = min_dist.min(dist);
    }
    sdf[i as usize] = min_dist;
  }

  sdf
}

/// Benchmark our surface nets implementation.
fn bench_our_surface_nets(c: &mut Criterion) {
  let sdf = spheres_sdf(&[([16.0, 16.0, 16.0], 12.0)]);
  let field = ScalarField::new(&sdf, DIMS).expect("32³ field");
  let config = MeshConfig::default();

  c.bench_function("isomesh::surface_nets (32³ sphere)", |b| {
    b.iter(|| black_box(my_surface_nets::generate(black_box(&field), &config)))
  });

  let mut nets = SurfaceNets::with_capacity(DIMS);
  let mut output = MeshOutput::new();
  c.bench_function("isomesh::surface_nets reused (32³ sphere)", |b| {
    b.iter(|| {
      nets.generate_into(black_box(&field), &config, &mut output);
      black_box(output.vertices.len())
    })
  });
}

/// Benchmark fast_surface_nets crate.
fn bench_fast_surface_nets(c: &mut Criterion) {
  let sdf = spheres_sdf(&[([16.0, 16.0, 16.0], 12.0)]);

  c.bench_function("fast_surface_nets (32³ sphere)", |b| {
    b.iter(|| {
      let mut buffer = SurfaceNetsBuffer::default();
      surface_nets(black_box(&sdf), &GridShape {}, [0; 3], [31; 3], &mut buffer);
      black_box(buffer)
    })
  });
}

/// Direct comparison with varying sphere radii.
fn bench_comparison(c: &mut Criterion) {
  let mut group = c.benchmark_group("surface_nets_comparison");

  for radius in [8.0, 12.0, 14.0] {
    let sdf = spheres_sdf(&[([16.0, 16.0, 16.0], radius)]);
    let field = ScalarField::new(&sdf, DIMS).expect("32³ field");
    let config = MeshConfig::default();

    group.bench_with_input(
      BenchmarkId::new("isomesh", format!("r={}", radius)),
      &radius,
      |b, _| b.iter(|| my_surface_nets::generate(black_box(&field), &config)),
    );

    group.bench_with_input(
      BenchmarkId::new("fast_surface_nets", format!("r={}", radius)),
      &radius,
      |b, _| {
        b.iter(|| {
          let mut buffer = SurfaceNetsBuffer::default();
          surface_nets(black_box(&sdf), &GridShape {}, [0; 3], [31; 3], &mut buffer);
          black_box(buffer)
        })
      },
    );
  }

  group.finish();
}

/// Benchmark multiple overlapping spheres, sequential and batched.
fn bench_complex_sdf(c: &mut Criterion) {
  let mut group = c.benchmark_group("complex_sdf");

  let sdf = spheres_sdf(&[
    ([10.0, 16.0, 16.0], 8.0),
    ([22.0, 16.0, 16.0], 8.0),
    ([16.0, 10.0, 16.0], 6.0),
    ([16.0, 22.0, 16.0], 6.0),
    ([16.0, 16.0, 16.0], 10.0),
  ]);
  let field = ScalarField::new(&sdf, DIMS).expect("32³ field");
  let config = MeshConfig::default();

  group.bench_function("isomesh (5 spheres)", |b| {
    b.iter(|| my_surface_nets::generate(black_box(&field), &config))
  });

  let inputs: Vec<ExtractInput> = (0..16)
    .map(|tag| ExtractInput {
      data: sdf.clone(),
      dims: DIMS,
      config: config.clone(),
      tag,
    })
    .collect();

  group.bench_function("isomesh batch (16 × 5 spheres)", |b| {
    b.iter(|| extract_batch(black_box(&inputs)))
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_our_surface_nets,
  bench_fast_surface_nets,
  bench_comparison,
  bench_complex_sdf
);
criterion_main!(benches);
