use bulletshape3d::bounding_volume::{Aabb, BoundingVolume};
use bulletshape3d::math::{Isometry, Point, Real, Rotation, Translation, Vector};
use bulletshape3d::shape::{CompoundShape, Shape, ShapeError, SharedShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_child(rng: &mut StdRng) -> (Isometry<Real>, SharedShape) {
    let rotation: Rotation<Real> = rng.gen();
    let translation = Vector::new(
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    );
    let pose = Isometry::from_parts(Translation::from(translation), rotation);

    let shape = match rng.gen_range(0..4) {
        0 => SharedShape::cuboid(
            rng.gen_range(0.1..2.0),
            rng.gen_range(0.1..2.0),
            rng.gen_range(0.1..2.0),
        ),
        1 => SharedShape::sphere(rng.gen_range(0.1..2.0)),
        2 => SharedShape::capsule(rng.gen_range(0.1..1.0), rng.gen_range(0.1..2.0)),
        _ => SharedShape::cylinder(rng.gen_range(0.1..2.0), rng.gen_range(0.1..1.0)),
    };

    (pose, shape.unwrap())
}

#[test]
fn local_aabb_only_grows() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut compound = CompoundShape::new();
    let mut previous: Option<Aabb> = None;

    for _ in 0..50 {
        let (pose, shape) = random_child(&mut rng);
        let child_aabb = shape.compute_aabb(&pose).unwrap();
        compound.add_child_shape(pose, shape).unwrap();

        let current = compound.local_aabb().unwrap();
        assert!(current.contains(&child_aabb));
        if let Some(previous) = previous {
            assert!(current.contains(&previous));
        }
        previous = Some(current);
    }

    assert_eq!(compound.num_child_shapes(), 50);
}

#[test]
fn world_aabb_encloses_every_child() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut compound = CompoundShape::new();

    for _ in 0..10 {
        let (pose, shape) = random_child(&mut rng);
        compound.add_child_shape(pose, shape).unwrap();
    }

    compound.set_margin(0.1).unwrap();

    for _ in 0..10 {
        let rotation: Rotation<Real> = rng.gen();
        let pos = Isometry::from_parts(Translation::new(1.0, -2.0, 3.0), rotation);
        let aabb = compound.compute_aabb(&pos).unwrap().loosened(1.0e-3);

        for child in compound.children() {
            let child_aabb = child
                .child_shape
                .compute_aabb(&(pos * child.transform))
                .unwrap();
            assert!(aabb.contains(&child_aabb));
        }
    }
}

#[test]
fn shared_children_are_not_copied() {
    let sphere = SharedShape::sphere(1.0).unwrap();
    let mut compound = CompoundShape::new();

    for i in 0..4 {
        compound
            .add_child_shape(
                Isometry::translation(i as Real * 3.0, 0.0, 0.0),
                sphere.clone(),
            )
            .unwrap();
    }

    assert!(compound
        .children()
        .iter()
        .all(|child| child.child_shape.ptr_eq(&sphere)));

    let aabb = compound.local_aabb().unwrap();
    assert_eq!(aabb.mins, Point::new(-1.0, -1.0, -1.0));
    assert_eq!(aabb.maxs, Point::new(10.0, 1.0, 1.0));
}

#[test]
fn compound_of_a_plane_is_unbounded() {
    let mut compound = CompoundShape::new();
    compound
        .add_child_shape(
            Isometry::identity(),
            SharedShape::static_plane(Vector::y(), 0.0).unwrap(),
        )
        .unwrap();

    let aabb = compound.local_aabb().unwrap();
    assert!(aabb.contains(&Aabb::new(
        Point::new(-1.0e10, -1.0e10, -1.0e10),
        Point::new(1.0e10, 1.0e10, 1.0e10)
    )));
}

#[test]
fn invalid_masses_are_rejected() {
    let mut compound = CompoundShape::new();
    compound
        .add_child_shape(Isometry::identity(), SharedShape::sphere(1.0).unwrap())
        .unwrap();

    assert_eq!(
        compound.calculate_principal_axis_transform(&[-1.0]),
        Err(ShapeError::InvalidMass)
    );
    assert_eq!(
        compound.calculate_principal_axis_transform(&[1.0, 2.0]),
        Err(ShapeError::InvalidMass)
    );
    assert!(compound.calculate_principal_axis_transform(&[2.0]).is_ok());
}
