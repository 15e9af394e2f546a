use approx::assert_relative_eq;
use bulletshape3d::bounding_volume::{Aabb, BoundingVolume};
use bulletshape3d::math::{Isometry, Real, Rotation, Translation, Vector};
use bulletshape3d::shape::{BoxShape, CapsuleShape, ConvexShape, CylinderShape, Shape, SphereShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_poses(seed: u64, count: usize) -> Vec<Isometry<Real>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let rotation: Rotation<Real> = rng.gen();
            let translation = Vector::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            Isometry::from_parts(Translation::from(translation), rotation)
        })
        .collect()
}

fn assert_same_aabb(closed_form: &Aabb, slow: &Aabb, name: &str) {
    assert_relative_eq!(closed_form.mins, slow.mins, epsilon = 1.0e-3);
    assert_relative_eq!(closed_form.maxs, slow.maxs, epsilon = 1.0e-3);
    assert!(
        closed_form.loosened(1.0e-3).contains(slow),
        "{} closed-form AABB does not enclose the support-mapped one.",
        name
    );
}

fn check_shape(shape: &dyn ConvexShape, seed: u64) {
    for pos in random_poses(seed, 100) {
        let closed_form = shape.compute_aabb(&pos).unwrap();
        let slow = shape.aabb_slow(&pos);
        assert_same_aabb(&closed_form, &slow, shape.name());
    }
}

#[test]
fn box_aabb_matches_support_mapping() {
    check_shape(&BoxShape::new(Vector::new(1.0, 0.2, 3.0)).unwrap(), 0);

    let mut scaled = BoxShape::new(Vector::new(0.5, 0.5, 0.5)).unwrap();
    scaled.set_local_scaling(&Vector::new(2.0, -1.0, 4.0)).unwrap();
    check_shape(&scaled, 1);
}

#[test]
fn sphere_aabb_matches_support_mapping() {
    check_shape(&SphereShape::new(0.7).unwrap(), 2);
}

#[test]
fn capsule_aabb_matches_support_mapping() {
    check_shape(&CapsuleShape::new(0.5, 3.0).unwrap(), 3);
    check_shape(&CapsuleShape::new_x(0.25, 1.0).unwrap(), 4);
    check_shape(&CapsuleShape::new_z(1.0, 0.5).unwrap(), 5);
}

#[test]
fn cylinder_aabb_matches_support_mapping() {
    check_shape(&CylinderShape::new(Vector::new(1.0, 2.0, 1.0)).unwrap(), 6);
    check_shape(&CylinderShape::new_x(Vector::new(3.0, 0.5, 0.5)).unwrap(), 7);
    check_shape(&CylinderShape::new_z(Vector::new(0.2, 0.2, 0.1)).unwrap(), 8);
}

#[test]
fn axis_aligned_box_aabb_is_exact() {
    let cube = BoxShape::new(Vector::new(1.0, 2.0, 3.0)).unwrap();
    let aabb = cube
        .compute_aabb(&Isometry::translation(1.0, 1.0, 1.0))
        .unwrap();
    assert_relative_eq!(aabb.half_extents(), Vector::new(1.0, 2.0, 3.0), epsilon = 1.0e-6);
    assert_relative_eq!(aabb.center().coords, Vector::repeat(1.0), epsilon = 1.0e-6);
}

#[test]
fn temporal_aabb_encloses_the_swept_shape() {
    let capsule = CapsuleShape::new(0.5, 2.0).unwrap();
    let pos = Isometry::translation(0.0, 1.0, 0.0);
    let linvel = Vector::new(2.0, 0.0, -1.0);
    let angvel = Vector::new(0.0, 3.0, 0.0);
    let dt = 0.1;

    let swept = capsule
        .calculate_temporal_aabb(&pos, &linvel, &angvel, dt)
        .unwrap();
    let start = capsule.compute_aabb(&pos).unwrap();
    let end = capsule
        .compute_aabb(&Isometry::new(
            pos.translation.vector + linvel * dt,
            angvel * dt,
        ))
        .unwrap();

    assert!(swept.contains(&start));
    assert!(swept.contains(&end));
}
