use approx::assert_relative_eq;
use bulletshape3d::math::{Point, Real, Vector, CONVEX_DISTANCE_MARGIN};
use bulletshape3d::shape::{
    BoxShape, CapsuleShape, ConvexHullShape, CylinderShape, Shape, ShapeError, SphereShape,
};

#[test]
fn box_margin_round_trip_keeps_outer_extents() {
    let half_extents = Vector::new(1.0, 0.5, 2.0);
    let mut cube = BoxShape::new(half_extents).unwrap();
    assert_eq!(cube.margin(), CONVEX_DISTANCE_MARGIN);

    for margin in [0.0, 0.1, 0.25, 0.5, CONVEX_DISTANCE_MARGIN] {
        cube.set_margin(margin).unwrap();
        assert_eq!(cube.margin(), margin);
        assert_relative_eq!(cube.half_extents_with_margin(), half_extents, epsilon = 1.0e-6);
        assert_relative_eq!(
            cube.half_extents_without_margin(),
            half_extents - Vector::repeat(margin),
            epsilon = 1.0e-6
        );
    }
}

#[test]
fn invalid_margins_are_rejected_without_side_effects() {
    let mut cube = BoxShape::new(Vector::new(1.0, 0.5, 2.0)).unwrap();
    let before = cube;

    assert_eq!(cube.set_margin(-0.1), Err(ShapeError::NegativeMargin));
    assert_eq!(cube.set_margin(0.6), Err(ShapeError::MarginExceedsExtents));
    assert_eq!(cube.set_margin(Real::NAN), Err(ShapeError::NegativeMargin));
    assert_eq!(cube, before);

    let mut sphere = SphereShape::new(1.0).unwrap();
    assert_eq!(sphere.set_margin(-1.0), Err(ShapeError::NegativeMargin));

    let mut hull = ConvexHullShape::new(vec![Point::origin()]).unwrap();
    assert_eq!(hull.set_margin(-1.0), Err(ShapeError::NegativeMargin));
}

#[test]
fn tiny_boxes_get_a_reduced_margin() {
    let cube = BoxShape::new(Vector::new(0.01, 1.0, 1.0)).unwrap();
    assert_relative_eq!(cube.margin(), 0.001, epsilon = 1.0e-7);
    assert_relative_eq!(
        cube.half_extents_with_margin(),
        Vector::new(0.01, 1.0, 1.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn negative_dimensions_are_rejected() {
    assert_eq!(
        BoxShape::new(Vector::new(1.0, -1.0, 1.0)).err(),
        Some(ShapeError::InvalidDimensions)
    );
    assert_eq!(SphereShape::new(-1.0).err(), Some(ShapeError::InvalidDimensions));
    assert_eq!(
        CapsuleShape::new(-0.5, 1.0).err(),
        Some(ShapeError::InvalidDimensions)
    );
    assert_eq!(
        CylinderShape::new(Vector::new(1.0, Real::INFINITY, 1.0)).err(),
        Some(ShapeError::InvalidDimensions)
    );
}

#[test]
fn cylinder_margin_keeps_outer_extents() {
    let half_extents = Vector::new(1.0, 2.0, 1.0);
    let mut cylinder = CylinderShape::new(half_extents).unwrap();
    cylinder.set_margin(0.3).unwrap();
    assert_relative_eq!(cylinder.half_extents_with_margin(), half_extents, epsilon = 1.0e-6);
    assert_relative_eq!(cylinder.radius(), 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(cylinder.half_height(), 2.0, epsilon = 1.0e-6);
}

#[test]
fn scaling_is_stored_as_absolute_values() {
    let mut cube = BoxShape::new(Vector::new(1.0, 1.0, 1.0)).unwrap();
    cube.set_local_scaling(&Vector::new(-2.0, 1.0, 3.0)).unwrap();
    assert_eq!(cube.local_scaling(), Ok(Vector::new(2.0, 1.0, 3.0)));
    assert_relative_eq!(
        cube.half_extents_with_margin(),
        Vector::new(2.0, 1.0, 3.0),
        epsilon = 1.0e-6
    );

    assert_eq!(
        cube.set_local_scaling(&Vector::new(0.0, 1.0, 1.0)),
        Err(ShapeError::InvalidScaling)
    );
}
