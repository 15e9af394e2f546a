//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub use self::plane_space::plane_space;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id, scaled_point_cloud_support_point,
};
pub use self::scratch::{with_traversal_stack, ScratchFrame, ScratchSlot, ScratchStack};

use crate::math::Real;

mod isometry_ops;
mod plane_space;
mod point_cloud_support_point;
mod scratch;

/// Selects `if_non_negative` when `selector >= 0`, and `if_negative` otherwise.
///
/// A selector equal to `-0.0` compares equal to zero and therefore picks `if_non_negative`.
#[inline(always)]
pub fn select(selector: Real, if_non_negative: Real, if_negative: Real) -> Real {
    if selector >= 0.0 {
        if_non_negative
    } else {
        if_negative
    }
}

/// Index of the largest of the three given values, the first one winning on ties.
#[inline]
pub fn max_index3(a: Real, b: Real, c: Real) -> usize {
    let mut best = 0;
    let mut best_val = a;

    if b > best_val {
        best = 1;
        best_val = b;
    }

    if c > best_val {
        best = 2;
    }

    best
}
