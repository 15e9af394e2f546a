use crate::math::{PrincipalAngularInertia, Real, Vector};

/// The diagonal inertia tensor of a solid box with the given half-extents and mass.
///
/// This is `m / 12 * (ly² + lz², lx² + lz², lx² + ly²)` where `l` are the full extents.
pub fn box_local_inertia(half_extents: &Vector<Real>, mass: Real) -> PrincipalAngularInertia<Real> {
    let l = half_extents * 2.0;
    let (lx2, ly2, lz2) = (l.x * l.x, l.y * l.y, l.z * l.z);

    Vector::new(ly2 + lz2, lx2 + lz2, lx2 + ly2) * (mass / 12.0)
}
