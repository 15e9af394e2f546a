pub use bvh_tree::{BvhLeaf, OptimizedBvh, OptimizedBvhNode, OptimizedBvhNodeData};

mod bvh_binned_build;
mod bvh_refit;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
