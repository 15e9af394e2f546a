use bulletshape3d::bounding_volume::{Aabb, BoundingVolume};
use bulletshape3d::math::{Point, Real, Vector};
use bulletshape3d::mesh::{IndexedMesh, MeshError, TriangleIndexVertexArray};
use bulletshape3d::partitioning::OptimizedBvh;
use bulletshape3d::shape::{
    BvhTriangleMeshShape, ConcaveShape, Shape, ShapeError, TriangleMeshShape,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::sync::Arc;

fn random_point(rng: &mut StdRng, extent: Real) -> Point<Real> {
    Point::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_sub_part(rng: &mut StdRng, num_triangles: usize) -> IndexedMesh {
    let mut vertices = Vec::with_capacity(num_triangles * 3);
    let mut indices = Vec::with_capacity(num_triangles);

    for i in 0..num_triangles {
        let center = random_point(rng, 10.0);
        for _ in 0..3 {
            vertices.push(center + random_point(rng, 1.0).coords);
        }
        let first = 3 * i as u32;
        indices.push([first, first + 1, first + 2]);
    }

    IndexedMesh::from_triangles(&vertices, &indices).unwrap()
}

fn random_mesh(seed: u64) -> TriangleIndexVertexArray {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mesh = TriangleIndexVertexArray::new();
    for num_triangles in [40, 1, 75] {
        mesh.add_indexed_mesh(random_sub_part(&mut rng, num_triangles));
    }
    mesh
}

fn random_query(rng: &mut StdRng) -> Aabb {
    let center = random_point(rng, 12.0);
    let half_extents = Vector::new(
        rng.gen_range(0.0..4.0),
        rng.gen_range(0.0..4.0),
        rng.gen_range(0.0..4.0),
    );
    Aabb::from_half_extents(center, half_extents)
}

fn collect(shape: &dyn ConcaveShape, aabb: &Aabb) -> BTreeSet<(usize, usize)> {
    let mut hits = BTreeSet::new();
    shape
        .process_all_triangles(
            &mut |_: &[Point<Real>; 3], part: usize, triangle: usize| {
                assert!(hits.insert((part, triangle)), "triangle reported twice");
            },
            aabb,
        )
        .unwrap();
    hits
}

fn assert_same_triangles(brute: &TriangleMeshShape, accelerated: &BvhTriangleMeshShape, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut non_empty = 0;

    for _ in 0..200 {
        let query = random_query(&mut rng);
        let expected = collect(brute, &query);
        assert_eq!(collect(accelerated, &query), expected);
        non_empty += usize::from(!expected.is_empty());
    }

    assert!(non_empty > 0);
}

#[test]
fn bvh_and_brute_force_report_the_same_triangles() {
    let brute = TriangleMeshShape::new(random_mesh(1)).unwrap();
    let accelerated = BvhTriangleMeshShape::new(random_mesh(1), true).unwrap();

    assert!(accelerated.owns_bvh());
    assert_eq!(accelerated.optimized_bvh().unwrap().leaf_count(), 116);
    accelerated.optimized_bvh().unwrap().assert_well_formed();
    assert_eq!(brute.local_aabb(), accelerated.local_aabb());

    assert_same_triangles(&brute, &accelerated, 2);
}

#[test]
fn large_query_reports_every_triangle() {
    let shape = BvhTriangleMeshShape::new(random_mesh(4), true).unwrap();
    let everything = shape.local_aabb().loosened(1.0);
    let hits = collect(&shape, &everything);

    assert_eq!(hits.len(), 116);
    assert_eq!(hits.iter().filter(|(part, _)| *part == 1).count(), 1);
}

#[test]
fn scaling_change_rebuilds_the_bvh() {
    let scaling = Vector::new(2.0, -0.5, 1.5);
    let mut brute = TriangleMeshShape::new(random_mesh(5)).unwrap();
    let mut accelerated = BvhTriangleMeshShape::new(random_mesh(5), true).unwrap();
    let before = accelerated.optimized_bvh().unwrap().clone();

    brute.set_local_scaling(&scaling).unwrap();
    accelerated.set_local_scaling(&scaling).unwrap();

    assert_eq!(accelerated.local_scaling(), Ok(scaling.abs()));
    assert_ne!(accelerated.optimized_bvh(), Some(&before));
    accelerated.optimized_bvh().unwrap().assert_well_formed();
    assert_same_triangles(&brute, &accelerated, 6);

    // Setting the same scaling again keeps the current tree.
    let rebuilt = accelerated.optimized_bvh().unwrap().clone();
    accelerated.set_local_scaling(&scaling).unwrap();
    assert_eq!(accelerated.optimized_bvh(), Some(&rebuilt));
}

#[test]
fn missing_bvh_falls_back_to_a_scan() {
    let brute = TriangleMeshShape::new(random_mesh(7)).unwrap();
    let mut accelerated = BvhTriangleMeshShape::new(random_mesh(7), false).unwrap();
    assert!(accelerated.optimized_bvh().is_none());
    assert_same_triangles(&brute, &accelerated, 8);

    accelerated.refit_tree().unwrap();
    assert!(accelerated.owns_bvh());
    assert_same_triangles(&brute, &accelerated, 9);
}

#[test]
fn shared_bvh_is_copied_on_refit() {
    let mesh = random_mesh(10);
    let bvh = Arc::new(OptimizedBvh::build(&mesh).unwrap());

    let mut a = BvhTriangleMeshShape::new(mesh.clone(), false).unwrap();
    let mut b = BvhTriangleMeshShape::new(mesh, false).unwrap();
    a.set_optimized_bvh(bvh.clone(), &Vector::repeat(1.0)).unwrap();
    b.set_optimized_bvh(bvh.clone(), &Vector::repeat(1.0)).unwrap();

    assert!(!a.owns_bvh());
    assert_eq!(Arc::strong_count(&bvh), 3);

    let query = a.local_aabb().loosened(1.0);
    a.partial_refit_tree(&query).unwrap();

    // `a` now works on its own copy, `b` still shares the original.
    assert_eq!(Arc::strong_count(&bvh), 2);
    assert_eq!(b.optimized_bvh(), Some(&*bvh));
    assert_eq!(a.optimized_bvh(), Some(&*bvh));

    let brute = TriangleMeshShape::new(random_mesh(10)).unwrap();
    assert_same_triangles(&brute, &a, 11);
    assert_same_triangles(&brute, &b, 12);
}

#[test]
fn stale_bvh_is_reported() {
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let full = TriangleIndexVertexArray::from_triangles(&vertices, &[[0, 1, 2], [0, 1, 3]]).unwrap();
    let reduced = TriangleIndexVertexArray::from_triangles(&vertices, &[[0, 1, 2]]).unwrap();

    let bvh = Arc::new(OptimizedBvh::build(&full).unwrap());
    let mut shape = BvhTriangleMeshShape::new(reduced, false).unwrap();
    shape.set_optimized_bvh(bvh, &Vector::repeat(1.0)).unwrap();

    let query = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(2.0, 2.0, 2.0));
    let result = shape.process_all_triangles(&mut |_: &[Point<Real>; 3], _: usize, _: usize| {}, &query);
    assert_eq!(
        result,
        Err(ShapeError::Mesh(MeshError::TriangleOutOfBounds {
            triangle: 1,
            num_triangles: 1,
        }))
    );
}
