/// Viewport extent in pixels plus the derived normalization factors used to
/// map pointer coordinates into the sphere-mapping domain.
///
/// `adjust_width`/`adjust_height` are both `1 / sqrt(width² + height²)`, so a
/// pointer offset of one viewport diagonal from the center maps to a distance
/// of 1 in sphere space. A zero extent divides by zero here; the host must
/// never construct or resize with zero width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportExtent {
    pub width: f64,
    pub height: f64,
    pub adjust_width: f64,
    pub adjust_height: f64,
}

impl ViewportExtent {
    pub fn new(width: f64, height: f64) -> Self {
        let radius = (width * width + height * height).sqrt();
        Self {
            width,
            height,
            adjust_width: 1.0 / radius,
            adjust_height: 1.0 / radius,
        }
    }
}
