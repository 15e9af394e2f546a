use approx::assert_relative_eq;
use bulletshape3d::math::{Isometry, Point, Real, Vector};
use bulletshape3d::shape::{
    BoxShape, CapsuleShape, ConvexHullShape, ConvexShape, CylinderShape, MinkowskiSumShape,
    PolyhedralConvexShape, Shape, SphereShape, TriangleShape,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn random_directions(rng: &mut StdRng, count: usize) -> Vec<Vector<Real>> {
    (0..count)
        .map(|_| {
            Vector::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .filter(|d: &Vector<Real>| d.norm_squared() > 1.0e-3)
        .collect()
}

fn convex_shapes() -> Vec<Box<dyn ConvexShape>> {
    let mut rotated = MinkowskiSumShape::new(
        Arc::new(BoxShape::new(Vector::new(1.0, 0.5, 0.25)).unwrap()),
        Arc::new(CapsuleShape::new_x(0.3, 1.0).unwrap()),
    );
    rotated.set_transform_a(Isometry::new(
        Vector::new(0.5, -1.0, 0.0),
        Vector::new(0.3, 0.2, -0.1),
    ));

    vec![
        Box::new(BoxShape::new(Vector::new(1.0, 2.0, 3.0)).unwrap()),
        Box::new(SphereShape::new(1.5).unwrap()),
        Box::new(CapsuleShape::new(0.5, 2.0).unwrap()),
        Box::new(CapsuleShape::new_x(0.5, 2.0).unwrap()),
        Box::new(CylinderShape::new(Vector::new(1.0, 2.0, 1.0)).unwrap()),
        Box::new(CylinderShape::new_z(Vector::new(0.5, 0.5, 3.0)).unwrap()),
        Box::new(TriangleShape::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 2.0, 0.0),
            Point::new(-1.0, 0.5, 2.0),
        )),
        Box::new(
            ConvexHullShape::new(vec![
                Point::new(1.0, 1.0, 1.0),
                Point::new(-1.0, 2.0, 0.0),
                Point::new(0.0, -3.0, 1.0),
                Point::new(2.0, 0.0, -1.0),
            ])
            .unwrap(),
        ),
        Box::new(rotated),
    ]
}

#[test]
fn support_points_maximize_the_dot_product() {
    let mut rng = StdRng::seed_from_u64(0);
    let dirs = random_directions(&mut rng, 200);

    for shape in convex_shapes() {
        let supports: Vec<_> = dirs
            .iter()
            .map(|d| shape.local_supporting_vertex_without_margin(d))
            .collect();

        for (dir, sup) in dirs.iter().zip(supports.iter()) {
            let best = sup.coords.dot(dir);
            for other in &supports {
                assert!(
                    other.coords.dot(dir) <= best + 1.0e-4,
                    "{}: support point not maximal along {:?}",
                    shape.name(),
                    dir
                );
            }
        }
    }
}

fn assert_support_reaches_vertices(
    shape: &dyn ConvexShape,
    vertices: &[Point<Real>],
    dirs: &[Vector<Real>],
) {
    for dir in dirs {
        let expected = vertices
            .iter()
            .map(|v| v.coords.dot(dir))
            .fold(-Real::MAX, Real::max);
        let sup = shape.local_supporting_vertex_without_margin(dir);
        assert_relative_eq!(sup.coords.dot(dir), expected, epsilon = 1.0e-4);
    }
}

#[test]
fn polyhedral_support_points_reach_the_extreme_vertex() {
    let mut rng = StdRng::seed_from_u64(5);
    let dirs = random_directions(&mut rng, 200);

    let cube = BoxShape::new(Vector::new(1.0, 2.0, 3.0)).unwrap();
    let corners: Vec<_> = (0..cube.num_vertices()).map(|i| cube.vertex(i)).collect();
    let he = cube.half_extents_without_margin();
    assert_eq!(corners.len(), 8);
    assert!(corners
        .iter()
        .all(|c| (0..3).all(|k| is_half_extent(c[k], he[k]))));
    assert_support_reaches_vertices(&cube, &corners, &dirs);

    let tri = TriangleShape::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 2.0, 0.0),
        Point::new(-1.0, 0.5, 2.0),
    );
    let tri_vertices: Vec<_> = (0..3).map(|i| tri.vertex(i)).collect();
    assert_support_reaches_vertices(&tri, &tri_vertices, &dirs);

    let hull = ConvexHullShape::new(vec![
        Point::new(1.0, 1.0, 1.0),
        Point::new(-1.0, 2.0, 0.0),
        Point::new(0.0, -3.0, 1.0),
        Point::new(2.0, 0.0, -1.0),
        Point::new(0.1, 0.2, 0.3),
    ])
    .unwrap();
    assert_support_reaches_vertices(&hull, hull.points(), &dirs);
}

fn is_half_extent(x: Real, h: Real) -> bool {
    (x.abs() - h).abs() < 1.0e-5
}

#[test]
fn round_shapes_reach_their_analytic_extents() {
    let axes = [
        Vector::x(),
        Vector::y(),
        Vector::z(),
        -Vector::x(),
        -Vector::y(),
        -Vector::z(),
    ];
    let extent_along = |shape: &dyn ConvexShape, dir: &Vector<Real>| {
        shape.local_supporting_vertex(dir).coords.dot(dir)
    };

    let sphere = SphereShape::new(1.5).unwrap();
    for axis in &axes {
        assert_relative_eq!(extent_along(&sphere, axis), 1.5, epsilon = 1.0e-5);
    }
    let diagonal = Vector::new(1.0, -2.0, 0.5);
    assert_relative_eq!(
        extent_along(&sphere, &diagonal),
        1.5 * diagonal.norm(),
        epsilon = 1.0e-4
    );

    // Radius 0.5, half-height 1, aligned with y.
    let capsule = CapsuleShape::new(0.5, 2.0).unwrap();
    for (axis, expected) in axes.iter().zip([0.5, 1.5, 0.5, 0.5, 1.5, 0.5]) {
        assert_relative_eq!(extent_along(&capsule, axis), expected, epsilon = 1.0e-5);
    }

    // Radius 1, half-height 2, aligned with y.
    let cylinder = CylinderShape::new(Vector::new(1.0, 2.0, 1.0)).unwrap();
    for (axis, expected) in axes.iter().zip([1.0, 2.0, 1.0, 1.0, 2.0, 1.0]) {
        assert_relative_eq!(extent_along(&cylinder, axis), expected, epsilon = 1.0e-5);
    }

    // Off-axis, the rim of the cylinder is a circle of radius 1.
    let rim_dir = Vector::new(1.0, 0.0, 1.0);
    assert_relative_eq!(
        extent_along(&cylinder, &rim_dir),
        rim_dir.norm(),
        epsilon = 1.0e-4
    );
}

#[test]
fn margin_pushes_along_the_normalized_direction() {
    let mut rng = StdRng::seed_from_u64(1);

    for shape in convex_shapes() {
        for dir in random_directions(&mut rng, 20) {
            let without = shape.local_supporting_vertex_without_margin(&dir);
            let with = shape.local_supporting_vertex(&dir);
            assert_relative_eq!(
                with,
                without + dir.normalize() * shape.margin(),
                epsilon = 1.0e-5
            );
        }
    }
}

#[test]
fn batched_queries_match_scalar_queries() {
    let mut rng = StdRng::seed_from_u64(2);
    let dirs: Vec<_> = random_directions(&mut rng, 32)
        .into_iter()
        .map(|d| d.normalize())
        .collect();

    for shape in convex_shapes() {
        let mut out = vec![Point::origin(); dirs.len()];
        shape.batched_unit_vector_supporting_vertex_without_margin(&dirs, &mut out);

        for (dir, batched) in dirs.iter().zip(out.iter()) {
            assert_eq!(*batched, shape.local_supporting_vertex_without_margin(dir));
        }
    }
}

#[test]
fn zero_direction_is_deterministic() {
    let cube = BoxShape::new(Vector::new(1.0, 2.0, 3.0)).unwrap();
    let he = cube.half_extents_without_margin();
    assert_eq!(
        cube.local_supporting_vertex_without_margin(&Vector::zeros()),
        Point::from(he)
    );

    // The margin falls back to the (-1, -1, -1) direction.
    let with_margin = cube.local_supporting_vertex(&Vector::zeros());
    let offset = Vector::repeat(-1.0).normalize() * cube.margin();
    assert_relative_eq!(with_margin, Point::from(he + offset), epsilon = 1.0e-6);
}

#[test]
fn world_support_point_follows_the_pose() {
    let cube = BoxShape::new(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let angle = core::f64::consts::FRAC_PI_2 as Real;
    let pos = Isometry::new(Vector::new(10.0, 0.0, 0.0), Vector::z() * angle);
    let sup = cube.supporting_vertex(&pos, &Vector::x());
    assert_relative_eq!(sup.x, 11.0, epsilon = 1.0e-5);
}

#[test]
#[should_panic]
fn batched_queries_need_one_output_per_direction() {
    let sphere = SphereShape::new(1.0).unwrap();
    let mut out = [Point::origin(); 2];
    sphere.batched_unit_vector_supporting_vertex_without_margin(&[Vector::x()], &mut out);
}
