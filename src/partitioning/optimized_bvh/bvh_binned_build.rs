use super::{BvhLeaf, OptimizedBvh, OptimizedBvhNode, OptimizedBvhNodeData};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;

const NUM_BINS: usize = 8;
const BIN_EPSILON: Real = 1.0e-5;

impl OptimizedBvh {
    /// Builds the subtree over `leaves` and returns the index of its root.
    ///
    /// The leaves are split along the longest axis of their centroids, at the bin boundary
    /// minimizing the surface area heuristic.
    pub(super) fn build_range_binned(&mut self, leaves: &mut [BvhLeaf]) -> u32 {
        let node_id = self.nodes.len() as u32;

        if let [leaf] = leaves {
            self.nodes.push(OptimizedBvhNode {
                aabb: leaf.aabb,
                data: OptimizedBvhNodeData::Leaf {
                    part: leaf.part,
                    triangle: leaf.triangle,
                },
            });
            return node_id;
        }

        // Placeholder, completed once both children are built.
        self.nodes.push(OptimizedBvhNode {
            aabb: Aabb::new_invalid(),
            data: OptimizedBvhNodeData::Internal { left: 0, right: 0 },
        });

        let mid = split_binned(leaves);
        let (left_leaves, right_leaves) = leaves.split_at_mut(mid);

        assert!(!left_leaves.is_empty() && !right_leaves.is_empty());

        let left = self.build_range_binned(left_leaves);
        let right = self.build_range_binned(right_leaves);
        let aabb = self.nodes[left as usize]
            .aabb
            .merged(&self.nodes[right as usize].aabb);

        self.nodes[node_id as usize] = OptimizedBvhNode {
            aabb,
            data: OptimizedBvhNodeData::Internal { left, right },
        };

        node_id
    }
}

/// Reorders `leaves` in place and returns the index splitting them in two non-empty halves.
fn split_binned(leaves: &mut [BvhLeaf]) -> usize {
    let mut bins = [BvhBin::default(); NUM_BINS];

    let mut centroid_aabb = Aabb::new_invalid();
    for leaf in &*leaves {
        centroid_aabb.take_point(leaf.aabb.center());
    }

    let bins_axis = centroid_aabb.extents().imax();
    let bins_range = [centroid_aabb.mins[bins_axis], centroid_aabb.maxs[bins_axis]];

    // All the centroids coincide along every axis.
    if bins_range[1] <= bins_range[0] {
        return leaves.len() / 2;
    }

    let k1 = NUM_BINS as Real * (1.0 - BIN_EPSILON) / (bins_range[1] - bins_range[0]);
    let k0 = bins_range[0];
    let bin_id = |leaf: &BvhLeaf| -> usize {
        ((k1 * (leaf.aabb.center()[bins_axis] - k0)) as usize).min(NUM_BINS - 1)
    };

    for leaf in &*leaves {
        let bin = &mut bins[bin_id(leaf)];
        bin.aabb.merge(&leaf.aabb);
        bin.leaf_count += 1;
    }

    // Select the best splitting plane (there are NUM_BINS - 1 splitting planes) based on SAH.
    let mut right_merges = bins;
    let mut right_acc = bins[NUM_BINS - 1];

    for i in 1..NUM_BINS - 1 {
        right_acc.aabb.merge(&right_merges[NUM_BINS - 1 - i].aabb);
        right_acc.leaf_count += right_merges[NUM_BINS - 1 - i].leaf_count;
        right_merges[NUM_BINS - 1 - i] = right_acc;
    }

    let mut best_cost = Real::MAX;
    let mut best_plane = 0;
    let mut left_merge = bins[0];
    let mut best_leaf_count = bins[0].leaf_count;

    for i in 0..NUM_BINS - 1 {
        let right = &right_merges[i + 1];
        let cost = bin_cost(&left_merge) + bin_cost(right);

        if cost < best_cost {
            best_cost = cost;
            best_plane = i;
            best_leaf_count = left_merge.leaf_count;
        }

        left_merge.aabb.merge(&bins[i + 1].aabb);
        left_merge.leaf_count += bins[i + 1].leaf_count;
    }

    let mid = best_leaf_count;

    // In degenerate cases where all the leaves end up on the same side,
    // just split the range in two.
    if mid == 0 || mid == leaves.len() {
        return leaves.len() / 2;
    }

    // Partition in place: leaves binned at or before the plane go left.
    let mut left_id = 0;
    let mut right_id = mid;

    'outer: while left_id != mid && right_id != leaves.len() {
        while bin_id(&leaves[left_id]) <= best_plane {
            left_id += 1;

            if left_id == mid {
                break 'outer;
            }
        }

        while bin_id(&leaves[right_id]) > best_plane {
            right_id += 1;

            if right_id == leaves.len() {
                break 'outer;
            }
        }

        leaves.swap(left_id, right_id);
        left_id += 1;
        right_id += 1;
    }

    mid
}

/// Surface area heuristic of a bin. Empty bins cost nothing.
fn bin_cost(bin: &BvhBin) -> Real {
    if bin.leaf_count == 0 {
        0.0
    } else {
        bin.aabb.half_area() * bin.leaf_count as Real
    }
}

#[derive(Copy, Clone, Debug)]
struct BvhBin {
    aabb: Aabb,
    leaf_count: usize,
}

impl Default for BvhBin {
    fn default() -> Self {
        Self {
            aabb: Aabb::new_invalid(),
            leaf_count: 0,
        }
    }
}
