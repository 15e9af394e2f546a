//! Spatial partitioning tools.

pub use self::optimized_bvh::{BvhLeaf, OptimizedBvh, OptimizedBvhNode, OptimizedBvhNodeData};

mod optimized_bvh;
