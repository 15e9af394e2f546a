use crate::math::{PrincipalAngularInertia, Real, Vector};

/// The diagonal inertia tensor of a solid sphere with the given radius and mass.
pub fn sphere_local_inertia(radius: Real, mass: Real) -> PrincipalAngularInertia<Real> {
    Vector::repeat(0.4 * mass * radius * radius)
}
