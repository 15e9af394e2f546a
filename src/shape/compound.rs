//!
//! Shape composed from the union of other shapes.
//!

use crate::bounding_volume::{details, Aabb, BoundingVolume};
use crate::mass_properties::{self, PrincipalAxes};
use crate::math::{Isometry, Point, Real, Vector, LARGE_FLOAT};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{Shape, ShapeError, ShapeType, SharedShape};

/// A child of a [`CompoundShape`].
#[derive(Clone, Debug)]
pub struct CompoundShapeChild {
    /// The pose of the child relative to the compound.
    pub transform: Isometry<Real>,
    /// The child shape, possibly shared with other compounds.
    pub child_shape: SharedShape,
    /// The type of the child shape, cached at insertion.
    pub child_shape_type: ShapeType,
    /// The margin of the child shape, cached at insertion.
    pub child_margin: Real,
}

/// A shape made of the union of several shapes, each with its own local pose.
///
/// The local AABB of the compound grows as children are added. Children cannot be removed.
#[derive(Clone, Debug)]
pub struct CompoundShape {
    children: Vec<CompoundShapeChild>,
    local_aabb_min: Point<Real>,
    local_aabb_max: Point<Real>,
    margin: Real,
    local_scaling: Vector<Real>,
}

impl Default for CompoundShape {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundShape {
    /// Creates an empty compound shape.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            local_aabb_min: Point::from(Vector::repeat(LARGE_FLOAT)),
            local_aabb_max: Point::from(Vector::repeat(-LARGE_FLOAT)),
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        }
    }

    /// Appends `shape` to this compound, placed at `transform`.
    ///
    /// The local AABB of the compound is grown to enclose the AABB of the new child.
    pub fn add_child_shape(
        &mut self,
        transform: Isometry<Real>,
        shape: SharedShape,
    ) -> Result<(), ShapeError> {
        let child_aabb = shape.compute_aabb(&transform)?;

        self.local_aabb_min = self.local_aabb_min.inf(&child_aabb.mins);
        self.local_aabb_max = self.local_aabb_max.sup(&child_aabb.maxs);

        self.children.push(CompoundShapeChild {
            transform,
            child_shape_type: shape.shape_type(),
            child_margin: shape.margin(),
            child_shape: shape,
        });

        Ok(())
    }

    /// The number of children of this compound.
    #[inline]
    pub fn num_child_shapes(&self) -> usize {
        self.children.len()
    }

    /// The `i`-th child shape.
    #[inline]
    pub fn child_shape(&self, i: usize) -> &SharedShape {
        &self.children[i].child_shape
    }

    /// The pose of the `i`-th child shape.
    #[inline]
    pub fn child_transform(&self, i: usize) -> &Isometry<Real> {
        &self.children[i].transform
    }

    /// The children of this compound, in insertion order.
    #[inline]
    pub fn children(&self) -> &[CompoundShapeChild] {
        &self.children
    }

    /// The local AABB enclosing every child, without the compound margin.
    ///
    /// `None` if the compound has no children.
    pub fn local_aabb(&self) -> Option<Aabb> {
        if self.children.is_empty() {
            None
        } else {
            Some(Aabb::new(self.local_aabb_min, self.local_aabb_max))
        }
    }

    /// Computes the principal frame and inertia of this compound, given the mass of each
    /// child.
    ///
    /// Each child contributes its own local inertia, rotated by its pose and moved to the
    /// common center of mass.
    pub fn calculate_principal_axis_transform(
        &self,
        masses: &[Real],
    ) -> Result<PrincipalAxes, ShapeError> {
        if masses.len() != self.children.len() {
            return Err(ShapeError::InvalidMass);
        }

        let mut parts = Vec::with_capacity(masses.len());

        for (child, mass) in self.children.iter().zip(masses.iter()) {
            if *mass < 0.0 || !mass.is_finite() {
                return Err(ShapeError::InvalidMass);
            }

            let inertia = child.child_shape.calculate_local_inertia(*mass)?;
            parts.push((child.transform, *mass, inertia));
        }

        PrincipalAxes::from_parts(&parts).ok_or(ShapeError::InvalidMass)
    }
}

impl Shape for CompoundShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Compound
    }

    fn name(&self) -> &'static str {
        "Compound"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        let local = self.local_aabb().ok_or(ShapeError::EmptyCompound)?;
        Ok(details::transform_aabb(&local, self.margin, pos))
    }

    /// The inertia of the local AABB, margin included.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        let local = self.local_aabb().ok_or(ShapeError::EmptyCompound)?;
        let half_extents = local.loosened(self.margin).half_extents();
        Ok(mass_properties::box_local_inertia(&half_extents, mass))
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.margin = margin;
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.local_scaling)
    }

    /// Stores the scaling. Children are not rescaled.
    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let scaling = ConvexInternal::checked_scaling(scaling)?;
        self.local_scaling = scaling;
        Ok(())
    }
}
