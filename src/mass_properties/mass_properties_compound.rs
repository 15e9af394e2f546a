use crate::mass_properties::PrincipalAxes;
use crate::math::{Isometry, Matrix, Point, PrincipalAngularInertia, Real};

impl PrincipalAxes {
    /// Computes the principal axes of a set of rigid parts.
    ///
    /// Each part is given by its pose, its mass and the diagonal of its local inertia tensor.
    /// The tensors are rotated into the common frame and moved to the global center of mass
    /// with the parallel axis theorem. Returns `None` if the total mass is not positive.
    pub fn from_parts(
        parts: &[(Isometry<Real>, Real, PrincipalAngularInertia<Real>)],
    ) -> Option<Self> {
        let total_mass: Real = parts.iter().map(|p| p.1).sum();

        if total_mass <= 0.0 || !total_mass.is_finite() {
            return None;
        }

        let center = parts
            .iter()
            .fold(Point::origin(), |acc, (pos, mass, _)| {
                acc + pos.translation.vector * *mass
            })
            / total_mass;

        let mut tensor = Matrix::zeros();

        for (pos, mass, inertia) in parts {
            let rot = pos.rotation.to_rotation_matrix().into_inner();
            tensor += rot * Matrix::from_diagonal(inertia) * rot.transpose();

            let o = pos.translation.vector - center.coords;
            tensor += (Matrix::identity() * o.norm_squared() - o * o.transpose()) * *mass;
        }

        Some(Self::with_inertia_matrix(center, tensor))
    }
}
