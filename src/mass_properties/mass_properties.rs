use crate::math::{Isometry, Matrix, Point, PrincipalAngularInertia, Real, Rotation, Translation};

const EPSILON: Real = Real::EPSILON;

/// The principal frame of a mass distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PrincipalAxes {
    /// The center of mass and the orientation of the principal axes, relative to the frame the
    /// distribution was expressed in.
    pub frame: Isometry<Real>,
    /// The inertia along each principal axis.
    pub principal_inertia: PrincipalAngularInertia<Real>,
}

impl PrincipalAxes {
    /// Diagonalizes the inertia tensor `inertia` of a body centered at `local_com`.
    ///
    /// The eigenvectors of the tensor become the columns of a proper rotation.
    pub fn with_inertia_matrix(local_com: Point<Real>, inertia: Matrix<Real>) -> Self {
        let eigen = inertia.symmetric_eigen();
        let mut axes = eigen.eigenvectors;

        if axes.determinant() < 0.0 {
            axes.column_mut(2).neg_mut();
        }

        let rotation = Rotation::from_matrix_eps(&axes, 1.0e-6, 10, na::one());
        // Drop negative eigenvalues.
        let principal_inertia = eigen.eigenvalues.map(|e| if e < EPSILON { 0.0 } else { e });

        Self {
            frame: Isometry::from_parts(Translation::from(local_com.coords), rotation),
            principal_inertia,
        }
    }

    /// The inertia tensor of this distribution, in the frame it was expressed in.
    pub fn reconstruct_inertia_matrix(&self) -> Matrix<Real> {
        let rot = self.frame.rotation.to_rotation_matrix().into_inner();
        rot * Matrix::from_diagonal(&self.principal_inertia) * rot.transpose()
    }
}
