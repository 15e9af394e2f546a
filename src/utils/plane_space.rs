use crate::math::{Real, Vector};

/// Computes two unit vectors spanning the plane orthogonal to the unit vector `n`.
///
/// The returned pair `(p, q)` satisfies `p × q = n` (up to rounding) so together with `n`
/// they form a right-handed orthonormal basis.
pub fn plane_space(n: &Vector<Real>) -> (Vector<Real>, Vector<Real>) {
    let sqrt12 = core::f64::consts::FRAC_1_SQRT_2 as Real;

    if n.z.abs() > sqrt12 {
        // Choose p in the y-z plane.
        let a = n.y * n.y + n.z * n.z;
        let k = 1.0 / a.sqrt();
        let p = Vector::new(0.0, -n.z * k, n.y * k);
        let q = Vector::new(a * k, -n.x * p.z, n.x * p.y);
        (p, q)
    } else {
        // Choose p in the x-y plane.
        let a = n.x * n.x + n.y * n.y;
        let k = 1.0 / a.sqrt();
        let p = Vector::new(-n.y * k, n.x * k, 0.0);
        let q = Vector::new(-n.z * p.y, n.z * p.x, a * k);
        (p, q)
    }
}
