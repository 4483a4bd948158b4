use glam::{DMat4, DVec3};

/// Rotation by `angle` radians around `axis`, pivoting on `pivot`:
/// translate to the origin, rotate, translate back. `axis` must be
/// normalized.
pub fn rotate_about(axis: DVec3, angle: f64, pivot: DVec3) -> DMat4 {
    DMat4::from_translation(pivot)
        * DMat4::from_axis_angle(axis, angle)
        * DMat4::from_translation(-pivot)
}

/// Scale by `factor`, pivoting on `pivot`.
pub fn scale_about(factor: DVec3, pivot: DVec3) -> DMat4 {
    DMat4::from_translation(pivot)
        * DMat4::from_scale(factor)
        * DMat4::from_translation(-pivot)
}
