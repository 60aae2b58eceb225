use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_lite::geometry::FaceNormalCache;
use mesh_lite::topology::{Mesh, VertexId};

fn build_grid(n: usize) -> (Mesh, Vec<VertexId>) {
    let mut mesh = Mesh::with_capacity((n + 1) * (n + 1), 2 * n * (n + 1), n * n);
    let mut v = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            v.push(mesh.add_vertex([i as f64, j as f64, 0.0]));
        }
    }
    let at = |i: usize, j: usize| j * (n + 1) + i;
    for j in 0..n {
        for i in 0..n {
            mesh.add_face(&[v[at(i, j)], v[at(i + 1, j)], v[at(i + 1, j + 1)], v[at(i, j + 1)]])
                .expect("grid quads are manifold");
        }
    }
    (mesh, v)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid");
    for &n in &[16usize, 64] {
        group.bench_with_input(BenchmarkId::new("add_face", n), &n, |b, &n| {
            b.iter(|| black_box(build_grid(n)));
        });
    }
    group.finish();
}

fn bench_fans(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_fan");
    for &n in &[16usize, 64] {
        let (mesh, verts) = build_grid(n);
        group.bench_with_input(BenchmarkId::new("ordered_neighbours", n), &n, |b, _| {
            b.iter(|| {
                for &v in &verts {
                    black_box(mesh.vertex_vertices_ordered(v).expect("manifold grid"));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("unordered_neighbours", n), &n, |b, _| {
            b.iter(|| {
                for &v in &verts {
                    black_box(mesh.vertex_vertices(v).expect("live vertex"));
                }
            });
        });
    }
    group.finish();
}

fn bench_normals(c: &mut Criterion) {
    let (mesh, _) = build_grid(64);
    let faces = mesh.all_faces();
    c.bench_function("face_normal_cache_warm", |b| {
        let mut cache = FaceNormalCache::new();
        b.iter(|| {
            for &f in &faces {
                black_box(cache.normal(&mesh, f).expect("planar quad"));
            }
        });
    });
}

fn bench_edit_churn(c: &mut Criterion) {
    c.bench_function("remove_and_readd_faces", |b| {
        let (mut mesh, _) = build_grid(32);
        b.iter(|| {
            let faces = mesh.all_faces();
            let rings: Vec<Vec<VertexId>> = faces
                .iter()
                .step_by(3)
                .map(|&f| mesh.face_vertices(f).expect("live face").to_vec())
                .collect();
            for &f in faces.iter().step_by(3) {
                mesh.remove_face(f).expect("live face");
            }
            for ring in &rings {
                mesh.add_face(ring).expect("slot was just vacated");
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_fans, bench_normals, bench_edit_churn);
criterion_main!(benches);
