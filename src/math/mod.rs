mod sphere;
mod transform;

pub use sphere::map_to_sphere;
pub use transform::{rotate_about, scale_about};
