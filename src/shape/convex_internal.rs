use crate::math::{Real, Vector, CONVEX_DISTANCE_MARGIN};
use crate::shape::ShapeError;

/// State shared by the primitive convex shapes: local scaling, margin-free dimensions and
/// collision margin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub(crate) struct ConvexInternal {
    pub local_scaling: Vector<Real>,
    pub implicit_shape_dimensions: Vector<Real>,
    pub collision_margin: Real,
}

impl ConvexInternal {
    pub fn new(implicit_shape_dimensions: Vector<Real>) -> Self {
        Self {
            local_scaling: Vector::repeat(1.0),
            implicit_shape_dimensions,
            collision_margin: CONVEX_DISTANCE_MARGIN,
        }
    }

    pub fn check_dimensions(dims: &Vector<Real>) -> Result<(), ShapeError> {
        if dims.iter().all(|x| x.is_finite() && *x >= 0.0) {
            Ok(())
        } else {
            Err(ShapeError::InvalidDimensions)
        }
    }

    pub fn check_margin(margin: Real) -> Result<(), ShapeError> {
        if margin < 0.0 || !margin.is_finite() {
            Err(ShapeError::NegativeMargin)
        } else {
            Ok(())
        }
    }

    /// The component-wise absolute value of `scaling`, or an error if a component is zero or not
    /// finite.
    pub fn checked_scaling(scaling: &Vector<Real>) -> Result<Vector<Real>, ShapeError> {
        if scaling.iter().all(|x| x.is_finite() && *x != 0.0) {
            Ok(scaling.abs())
        } else {
            Err(ShapeError::InvalidScaling)
        }
    }

    /// Sets the scaling and rescales the margin-free dimensions proportionally.
    pub fn rescale(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let scaling = Self::checked_scaling(scaling)?;

        if relative_eq!(scaling, self.local_scaling) {
            return Ok(());
        }

        self.implicit_shape_dimensions = self
            .implicit_shape_dimensions
            .component_div(&self.local_scaling)
            .component_mul(&scaling);
        self.local_scaling = scaling;
        Ok(())
    }

    /// Sets the scaling and rescales the margin-inclusive dimensions proportionally, keeping the
    /// margin itself unscaled.
    pub fn rescale_with_margin(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let scaling = Self::checked_scaling(scaling)?;
        let margin = Vector::repeat(self.collision_margin);
        let unscaled_with_margin =
            (self.implicit_shape_dimensions + margin).component_div(&self.local_scaling);
        let implicit = unscaled_with_margin.component_mul(&scaling) - margin;

        if implicit.iter().any(|x| *x < 0.0) {
            return Err(ShapeError::MarginExceedsExtents);
        }

        self.implicit_shape_dimensions = implicit;
        self.local_scaling = scaling;
        Ok(())
    }

    /// Sets the margin while keeping the margin-inclusive dimensions unchanged.
    pub fn set_margin_keeping_extents(&mut self, margin: Real) -> Result<(), ShapeError> {
        Self::check_margin(margin)?;
        let with_margin = self.implicit_shape_dimensions + Vector::repeat(self.collision_margin);

        if margin > with_margin.min() {
            return Err(ShapeError::MarginExceedsExtents);
        }

        self.collision_margin = margin;
        self.implicit_shape_dimensions = with_margin - Vector::repeat(margin);
        Ok(())
    }

    /// The margin-free dimensions plus the margin on every axis.
    pub fn dimensions_with_margin(&self) -> Vector<Real> {
        self.implicit_shape_dimensions + Vector::repeat(self.collision_margin)
    }
}
