use approx::assert_relative_eq;
use bulletshape3d::math::{Isometry, Point, Vector};
use bulletshape3d::mesh::TriangleIndexVertexArray;
use bulletshape3d::shape::{
    BoxShape, BvhTriangleMeshShape, CapsuleShape, CompoundShape, ConvexHullShape, CylinderShape,
    Shape, SharedShape, SphereShape, TriangleMeshShape,
};

fn two_triangles() -> TriangleIndexVertexArray {
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(3.0, 0.0, 3.0),
        Point::new(4.0, 0.0, 3.0),
        Point::new(3.0, 0.0, 4.0),
    ];
    TriangleIndexVertexArray::from_triangles(&vertices, &[[0, 1, 2], [3, 4, 5]]).unwrap()
}

#[test]
fn box_inertia_uses_outer_extents() {
    // Full extents (2, 4, 6): 12 / 12 * (16 + 36, 4 + 36, 4 + 16).
    let mut cube = BoxShape::new(Vector::new(1.0, 2.0, 3.0)).unwrap();
    let expected = Vector::new(52.0, 40.0, 20.0);
    assert_relative_eq!(cube.calculate_local_inertia(12.0).unwrap(), expected, epsilon = 1.0e-4);

    // The margin does not change the outer extents.
    cube.set_margin(0.5).unwrap();
    assert_relative_eq!(cube.calculate_local_inertia(12.0).unwrap(), expected, epsilon = 1.0e-4);
}

#[test]
fn sphere_inertia() {
    let sphere = SphereShape::new(2.0).unwrap();
    assert_relative_eq!(
        sphere.calculate_local_inertia(5.0).unwrap(),
        Vector::repeat(8.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn capsule_inertia_is_its_bounding_sphere() {
    // Radius 0.5 and half-height 1 give a sphere of radius 1.5: 0.4 * 2 * 2.25.
    let capsule = CapsuleShape::new(0.5, 2.0).unwrap();
    assert_relative_eq!(
        capsule.calculate_local_inertia(2.0).unwrap(),
        Vector::repeat(1.8),
        epsilon = 1.0e-5
    );
}

#[test]
fn cylinder_inertia_is_its_box() {
    // Full extents (2, 4, 2): (16 + 4, 4 + 4, 4 + 16).
    let cylinder = CylinderShape::new(Vector::new(1.0, 2.0, 1.0)).unwrap();
    assert_relative_eq!(
        cylinder.calculate_local_inertia(12.0).unwrap(),
        Vector::new(20.0, 8.0, 20.0),
        epsilon = 1.0e-4
    );
}

#[test]
fn hull_inertia_is_its_local_aabb() {
    let corners = (0..8)
        .map(|i| {
            Point::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            )
        })
        .collect();
    let mut hull = ConvexHullShape::new(corners).unwrap();
    hull.set_margin(0.0).unwrap();
    assert_relative_eq!(
        hull.calculate_local_inertia(12.0).unwrap(),
        Vector::repeat(8.0),
        epsilon = 1.0e-4
    );
}

#[test]
fn compound_inertia_is_its_margin_inclusive_aabb() {
    let mut compound = CompoundShape::new();
    let cube = SharedShape::cuboid(0.5, 0.5, 0.5).unwrap();
    compound
        .add_child_shape(Isometry::translation(1.0, 0.0, 0.0), cube.clone())
        .unwrap();
    compound
        .add_child_shape(Isometry::translation(-1.0, 0.0, 0.0), cube)
        .unwrap();

    // Local AABB full extents (3, 1, 1): (1 + 1, 9 + 1, 9 + 1).
    assert_relative_eq!(
        compound.calculate_local_inertia(12.0).unwrap(),
        Vector::new(2.0, 10.0, 10.0),
        epsilon = 1.0e-4
    );

    // A margin of 0.5 gives full extents (4, 2, 2).
    compound.set_margin(0.5).unwrap();
    assert_relative_eq!(
        compound.calculate_local_inertia(12.0).unwrap(),
        Vector::new(8.0, 20.0, 20.0),
        epsilon = 1.0e-4
    );
}

#[test]
fn mesh_inertia_is_its_local_aabb() {
    // Local AABB full extents (4, 0, 4).
    let expected = Vector::new(16.0, 32.0, 16.0);
    let mut mesh = TriangleMeshShape::new(two_triangles()).unwrap();
    let bvh_mesh = BvhTriangleMeshShape::new(two_triangles(), true).unwrap();

    assert_relative_eq!(mesh.calculate_local_inertia(12.0).unwrap(), expected, epsilon = 1.0e-4);
    assert_relative_eq!(
        bvh_mesh.calculate_local_inertia(12.0).unwrap(),
        expected,
        epsilon = 1.0e-4
    );

    // The margin is part of the local AABB: full extents (5, 1, 5).
    mesh.set_margin(0.5).unwrap();
    assert_relative_eq!(
        mesh.calculate_local_inertia(12.0).unwrap(),
        Vector::new(26.0, 50.0, 26.0),
        epsilon = 1.0e-4
    );
}
