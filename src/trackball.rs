use glam::{DMat4, DVec2, DVec3};

use crate::input::PointerButton;
use crate::math::{map_to_sphere, rotate_about, scale_about};
use crate::viewport::ViewportExtent;

/// Empirical gain applied to the sphere-mapped rotation angle
const ROTATION_GAIN: f64 = 8.0;

/// Default zoom sensitivity (scale factor exponent per pixel of drag)
const DEFAULT_ZOOM_RADIUS: f64 = 0.01;

/// Rotation axes shorter than this are treated as degenerate (no rotation)
const AXIS_EPSILON: f64 = 1e-7;

/// Trackball camera controller.
///
/// Converts 2D pointer drags into incremental rotation, zoom and pan
/// transforms and composes them onto a cumulative model-view matrix. Each
/// gesture builds a fresh elementary transform `E` and stores
/// `matrix = E * matrix`, so increments apply in model space relative to the
/// accumulated orientation. The host owns the window and render loop: it
/// feeds pointer events in, calls [`resize`] when the viewport changes, and
/// uploads [`matrix`] to its renderer once per frame.
///
/// Rotation pivots on `rotate_center` and zoom on `zoom_center`, both
/// supplied by the host's scene picking on pointer press. Zoom and pan
/// re-anchor `rotate_center` so that subsequent rotations keep pivoting on
/// the same scene point.
///
/// [`resize`]: Trackball::resize
/// [`matrix`]: Trackball::matrix
#[derive(Debug, Clone)]
pub struct Trackball {
    matrix: DMat4,
    viewport: ViewportExtent,
    zoom_radius: f64,

    last_point_2d: DVec2,
    last_point_3d: DVec3,
    zoom_center: DVec3,
    rotate_center: DVec3,
}

impl Trackball {
    /// Create a controller with a 1x1 placeholder viewport. The host should
    /// call [`resize`](Trackball::resize) before feeding pointer events.
    pub fn new() -> Self {
        Self::with_viewport(1.0, 1.0)
    }

    /// Create a controller sized to the given viewport, in pixels. Both
    /// dimensions zero is a host error (see [`ViewportExtent::new`]).
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            matrix: DMat4::IDENTITY,
            viewport: ViewportExtent::new(width, height),
            zoom_radius: DEFAULT_ZOOM_RADIUS,
            last_point_2d: DVec2::ZERO,
            last_point_3d: DVec3::ZERO,
            zoom_center: DVec3::ZERO,
            rotate_center: DVec3::ZERO,
        }
    }

    /// Reset the cumulative matrix to identity and the zoom sensitivity to
    /// its default. Idempotent; leaves the viewport extent alone.
    pub fn reset(&mut self) {
        self.matrix = DMat4::IDENTITY;
        self.zoom_radius = DEFAULT_ZOOM_RADIUS;
    }

    /// The cumulative model-view matrix
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// The cumulative matrix as 16 column-major doubles, ready for upload
    pub fn to_cols_array(&self) -> [f64; 16] {
        self.matrix.to_cols_array()
    }

    /// Current viewport extent
    pub fn viewport(&self) -> ViewportExtent {
        self.viewport
    }

    /// Current rotation pivot in model space
    pub fn rotate_center(&self) -> DVec3 {
        self.rotate_center
    }

    /// Current zoom pivot in model space
    pub fn zoom_center(&self) -> DVec3 {
        self.zoom_center
    }

    /// Update the viewport extent after a window resize. The cumulative
    /// matrix is left untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = ViewportExtent::new(width, height);
        log::trace!("trackball viewport resized to {width}x{height}");
    }

    /// Map a screen-space point onto the unit sphere for this viewport
    pub fn map_to_sphere(&self, screen: DVec2) -> DVec3 {
        map_to_sphere(screen, &self.viewport)
    }

    /// Record the reference state for a starting drag.
    ///
    /// `model_point` is the 3D scene point under the cursor, obtained from
    /// the host's picking; `None` leaves the corresponding pivot unchanged.
    /// A primary press adopts it as the rotation pivot when
    /// `update_rotate_center` is set, a secondary press as the zoom pivot.
    pub fn on_pointer_press(
        &mut self,
        button: PointerButton,
        screen: DVec2,
        model_point: Option<DVec3>,
        update_rotate_center: bool,
    ) {
        match button {
            PointerButton::Primary => {
                self.last_point_2d = screen;
                self.last_point_3d = self.map_to_sphere(screen);
                if update_rotate_center {
                    if let Some(point) = model_point {
                        log::debug!("rotate center set to {point:?}");
                        self.rotate_center = point;
                    }
                }
            }
            PointerButton::Secondary => {
                if let Some(point) = model_point {
                    log::debug!("zoom center set to {point:?}");
                    self.zoom_center = point;
                }
                self.last_point_2d = screen;
            }
            PointerButton::Middle => {
                self.last_point_2d = screen;
            }
        }
    }

    /// Apply one incremental gesture step for a pointer moved to `screen`
    /// while `button` is held.
    pub fn on_pointer_move(&mut self, button: PointerButton, screen: DVec2) {
        match button {
            PointerButton::Primary => self.rotate_step(screen),
            PointerButton::Secondary => self.zoom_step(screen),
            PointerButton::Middle => self.pan_step(screen),
        }
    }

    /// Rotate around `rotate_center` by the great-circle step between the
    /// previous and current sphere-mapped pointer positions.
    fn rotate_step(&mut self, screen: DVec2) {
        let new_point_3d = self.map_to_sphere(screen);

        let axis = self.last_point_3d.cross(new_point_3d);
        if axis.length() >= AXIS_EPSILON {
            let axis = axis.normalize();
            // Chord length between two unit vectors is at most 2; min()
            // keeps roundoff from pushing asin past its domain
            let half_chord = (0.5 * (self.last_point_3d - new_point_3d).length()).min(1.0);
            let angle = ROTATION_GAIN * half_chord.asin();
            self.matrix = rotate_about(axis, angle, self.rotate_center) * self.matrix;
        }

        self.last_point_3d = new_point_3d;
        self.last_point_2d = screen;
    }

    /// Uniform scale around `zoom_center`; dragging toward decreasing Y
    /// zooms in. The rotation pivot is re-anchored so it stays glued to the
    /// same scene point under the new scale.
    fn zoom_step(&mut self, screen: DVec2) {
        let s = ((self.last_point_2d.y - screen.y) * self.zoom_radius).exp();

        self.matrix = scale_about(DVec3::splat(s), self.zoom_center) * self.matrix;
        self.rotate_center = (self.rotate_center - self.zoom_center) * s + self.zoom_center;

        self.last_point_2d = screen;
    }

    /// Translate by the screen-space delta, normalized by viewport width
    /// only so aspect ratio is preserved. The rotation pivot moves along.
    fn pan_step(&mut self, screen: DVec2) {
        let delta = screen - self.last_point_2d;
        let shift = DVec3::new(
            2.0 * delta.x / self.viewport.width,
            -2.0 * delta.y / self.viewport.width,
            0.0,
        );

        self.matrix = DMat4::from_translation(shift) * self.matrix;
        self.rotate_center += shift;

        self.last_point_2d = screen;
    }
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new()
    }
}
