use glam::{DVec2, DVec3};

use crate::viewport::ViewportExtent;

/// Map a pixel coordinate onto the unit hemisphere centered on the viewport.
///
/// Coordinates are translated to viewport-centered space (screen Y grows
/// downward, so Y is flipped) and scaled by the extent's adjust factors.
/// Points inside the unit disk land on the front hemisphere; points outside
/// are projected radially onto the unit circle in the XY plane. The result
/// always has unit length and the mapping has no seam at the disk boundary.
pub fn map_to_sphere(point: DVec2, extent: &ViewportExtent) -> DVec3 {
    let x = (point.x - extent.width / 2.0) * extent.adjust_width;
    let y = (extent.height / 2.0 - point.y) * extent.adjust_height;

    let r2 = x * x + y * y;

    if r2 < 1.0 {
        DVec3::new(x, y, (1.0 - r2).sqrt())
    } else {
        let norm = 1.0 / r2.sqrt();
        DVec3::new(x * norm, y * norm, 0.0)
    }
}
