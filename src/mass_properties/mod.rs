//! Inertia of shapes, and principal axes of compound mass distributions.

pub use self::mass_properties::PrincipalAxes;
pub use self::mass_properties_box::box_local_inertia;
pub use self::mass_properties_sphere::sphere_local_inertia;

mod mass_properties;
mod mass_properties_box;
mod mass_properties_compound;
mod mass_properties_sphere;
