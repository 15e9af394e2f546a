mod aabb_conservative;
mod compound;
mod inertia;
mod margin;
mod mesh_iteration;
mod scratch_pool;
mod support_points;
