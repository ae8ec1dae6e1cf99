//! Damped-pursuit camera with bounds clamp and shake.

use rand::{thread_rng, Rng};
use thiserror::Error;
use tracing::debug;

use crate::geometry::Rect;
use crate::math::Vector;

/// Camera configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    #[error("smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f64),
    #[error("zoom must be greater than 0, got {0}")]
    InvalidZoom(f64),
    #[error("viewport must have a positive size, got {0}x{1}")]
    InvalidViewport(f64, f64),
}

/// Camera configuration.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Width of the visible viewport in world units.
    pub viewport_width: f64,
    /// Height of the visible viewport in world units.
    pub viewport_height: f64,
    /// Pursuit smoothing factor in `(0, 1]`. At `1.0` the camera snaps to
    /// its target; lower values converge with exponential decay.
    pub smoothing: f64,
    /// Render zoom factor, consumed by the host's rendering transform.
    pub zoom: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            smoothing: 1.0,
            zoom: 1.0,
        }
    }
}

impl CameraConfig {
    /// Validate the configuration invariants.
    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(CameraError::InvalidSmoothing(self.smoothing));
        }
        if self.zoom <= 0.0 {
            return Err(CameraError::InvalidZoom(self.zoom));
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(CameraError::InvalidViewport(
                self.viewport_width,
                self.viewport_height,
            ));
        }
        Ok(())
    }
}

/// A camera that follows a target with damped pursuit.
///
/// `position` is the top-left corner of the visible viewport, not its focus
/// point. Create one camera at startup, call [`update`](Self::update) every
/// frame with the frame's time step, and feed
/// [`render_position`](Self::render_position) to the rendering transform.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Top-left corner of the visible viewport.
    pub position: Vector,
    velocity: Vector,
    target: Vector,
    /// Transient random offset produced by an active shake; already part of
    /// [`render_position`](Self::render_position).
    pub shake: Vector,
    bounds: Rect,
    viewport_width: f64,
    viewport_height: f64,
    /// Pursuit smoothing factor in `(0, 1]`.
    pub smoothing: f64,
    /// Render zoom factor, consumed by the host's rendering transform.
    pub zoom: f64,
    /// Remaining shake magnitude; decays every frame.
    pub shake_intensity: f64,
    /// How much shake magnitude is removed per reference-rate frame.
    pub shake_reduction: f64,
    /// Disables the shake offset entirely when `false`.
    pub shake_enabled: bool,
}

impl Camera {
    /// Create a camera from a validated configuration.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;

        Ok(Self {
            position: Vector::zero(),
            velocity: Vector::zero(),
            target: Vector::zero(),
            shake: Vector::zero(),
            bounds: Rect::default(),
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            smoothing: config.smoothing,
            zoom: config.zoom,
            shake_intensity: 0.0,
            shake_reduction: 0.0,
            shake_enabled: true,
        })
    }

    /// Make the camera pursue the point `(target_x, target_y)`, centering
    /// it in the viewport.
    ///
    /// The camera moves toward the target at a speed proportional to the
    /// remaining distance, never overshooting it within one step. With
    /// `smoothing` at `1.0` and the reference time step this snaps straight
    /// to the target. When bounds are set the position is clamped so the
    /// viewport stays inside them, and an active shake decays by
    /// `shake_reduction * delta`.
    pub fn update(&mut self, target_x: f64, target_y: f64, delta: f64) {
        self.target.set(
            target_x - self.viewport_width / 2.0,
            target_y - self.viewport_height / 2.0,
        );

        let distance = self.position.distance(&self.target);

        self.velocity
            .copy_from(&self.target)
            .subtract(&self.position)
            .normalize()
            .scale(distance * self.smoothing * delta)
            .limit(distance);

        self.position.add(&self.velocity);

        self.clamp_to_bounds();
        self.update_shake(delta);
    }

    /// Snap the camera onto `(x, y)` without damping, centering it in the
    /// viewport. The position is still clamped to the bounds.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position.set(
            x - self.viewport_width / 2.0,
            y - self.viewport_height / 2.0,
        );
        self.velocity.reset();
        self.clamp_to_bounds();
    }

    /// Start a camera shake.
    ///
    /// `intensity` is the starting magnitude of the offset; `reduction` is
    /// how much of it decays per reference-rate frame.
    pub fn set_shake(&mut self, intensity: f64, reduction: f64) {
        self.shake_intensity = intensity;
        self.shake_reduction = reduction;
    }

    /// Constrain the camera so the viewport stays inside the given
    /// rectangle. An invalid rectangle removes the constraint.
    pub fn set_bounds(&mut self, bounds: Rect) {
        debug!("camera bounds set to {:?}", bounds);
        self.bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Remove the camera bounds.
    pub fn clear_bounds(&mut self) {
        self.bounds = Rect::default();
    }

    /// The rectangle the camera is constrained to, if any.
    pub fn bounds(&self) -> Option<&Rect> {
        self.bounds.is_valid().then_some(&self.bounds)
    }

    /// The position to render at: `position` plus the current shake offset.
    pub fn render_position(&self) -> Vector {
        let mut p = self.position;
        p.add(&self.shake);
        p
    }

    fn clamp_to_bounds(&mut self) {
        if !self.bounds.is_valid() {
            return;
        }

        // Not f64::clamp: a bounds rectangle smaller than the viewport pins
        // to its far edge instead of panicking on min > max.
        let max_x = self.bounds.x + self.bounds.w - self.viewport_width;
        let max_y = self.bounds.y + self.bounds.h - self.viewport_height;
        self.position.x = self.position.x.max(self.bounds.x).min(max_x);
        self.position.y = self.position.y.max(self.bounds.y).min(max_y);
    }

    fn update_shake(&mut self, delta: f64) {
        if !self.shake_enabled || self.shake_intensity <= 0.0 {
            self.shake.reset();
            return;
        }

        self.shake_intensity = (self.shake_intensity - self.shake_reduction * delta).max(0.0);

        let angle = thread_rng().gen_range(0..360) as f64;
        self.shake
            .set(1.0, 0.0)
            .set_angle(angle)
            .scale(self.shake_intensity * delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn camera(viewport: f64, smoothing: f64) -> Camera {
        Camera::new(CameraConfig {
            viewport_width: viewport,
            viewport_height: viewport,
            smoothing,
            zoom: 1.0,
        })
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(CameraConfig::default().validate().is_ok());

        let config = CameraConfig {
            smoothing: 0.0,
            ..CameraConfig::default()
        };
        assert_eq!(config.validate(), Err(CameraError::InvalidSmoothing(0.0)));

        let config = CameraConfig {
            smoothing: 1.5,
            ..CameraConfig::default()
        };
        assert_eq!(config.validate(), Err(CameraError::InvalidSmoothing(1.5)));

        let config = CameraConfig {
            zoom: 0.0,
            ..CameraConfig::default()
        };
        assert_eq!(config.validate(), Err(CameraError::InvalidZoom(0.0)));

        let config = CameraConfig {
            viewport_width: 0.0,
            ..CameraConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CameraError::InvalidViewport(..))
        ));
    }

    #[test]
    fn test_snap_with_full_smoothing() {
        let mut cam = camera(100.0, 1.0);
        cam.update(500.0, 500.0, 1.0);

        // Target is the point centered in the viewport.
        assert!((cam.position.x - 450.0).abs() < EPS);
        assert!((cam.position.y - 450.0).abs() < EPS);
    }

    #[test]
    fn test_damped_pursuit_converges_monotonically() {
        let mut cam = camera(100.0, 0.25);
        let target = Vector::new(950.0, 950.0);

        let mut last = cam.position.distance(&target);
        for _ in 0..60 {
            cam.update(1000.0, 1000.0, 1.0);
            let distance = cam.position.distance(&target);
            assert!(distance <= last, "distance must not grow: {distance} > {last}");
            last = distance;
        }

        assert!(last < 1e-3, "camera should have converged, still {last} away");
    }

    #[test]
    fn test_pursuit_never_overshoots() {
        let mut cam = camera(100.0, 1.0);
        cam.set_position(0.0, 0.0);

        for _ in 0..10 {
            cam.update(300.0, 0.0, 1.0);
        }

        assert!((cam.position.x - 250.0).abs() < EPS);
        assert!((cam.position.y + 50.0).abs() < EPS);
    }

    #[test]
    fn test_bounds_clamp() {
        let mut cam = camera(100.0, 1.0);
        cam.set_bounds(Rect::new(0.0, 0.0, 1000.0, 1000.0));

        cam.update(5000.0, 5000.0, 1.0);
        assert_eq!(cam.position.x, 900.0);
        assert_eq!(cam.position.y, 900.0);

        cam.update(-5000.0, -5000.0, 1.0);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(cam.position.y, 0.0);
    }

    #[test]
    fn test_bounds_clamp_applies_every_update() {
        let mut cam = camera(100.0, 0.5);
        cam.set_bounds(Rect::new(0.0, 0.0, 1000.0, 1000.0));

        for _ in 0..100 {
            cam.update(5000.0, 200.0, 1.0);
            assert!(cam.position.x >= 0.0 && cam.position.x <= 900.0);
        }
    }

    #[test]
    fn test_invalid_bounds_do_not_clamp() {
        let mut cam = camera(100.0, 1.0);
        cam.set_bounds(Rect::default());

        cam.update(5000.0, 5000.0, 1.0);
        assert!((cam.position.x - 4950.0).abs() < EPS);
        assert!(cam.bounds().is_none());
    }

    #[test]
    fn test_set_position_snaps_and_clamps() {
        let mut cam = camera(100.0, 0.1);
        cam.set_bounds(Rect::new(0.0, 0.0, 1000.0, 1000.0));

        cam.set_position(500.0, 500.0);
        assert_eq!(cam.position, Vector::new(450.0, 450.0));

        cam.set_position(-500.0, -500.0);
        assert_eq!(cam.position, Vector::new(0.0, 0.0));
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut cam = camera(100.0, 1.0);
        cam.set_shake(10.0, 2.0);

        cam.update(0.0, 0.0, 1.0);
        assert!((cam.shake_intensity - 8.0).abs() < EPS);
        assert!(cam.shake.length() <= 8.0 + EPS);
        assert!(cam.shake.length() > 0.0);

        for _ in 0..10 {
            cam.update(0.0, 0.0, 1.0);
        }
        assert_eq!(cam.shake_intensity, 0.0);
        assert_eq!(cam.shake, Vector::zero());
    }

    #[test]
    fn test_shake_magnitude_is_bounded() {
        let mut cam = camera(100.0, 1.0);
        cam.set_shake(10.0, 1.0);

        for _ in 0..5 {
            cam.update(0.0, 0.0, 1.0);
            assert!(cam.shake.length() <= cam.shake_intensity + EPS);
        }
    }

    #[test]
    fn test_shake_disabled() {
        let mut cam = camera(100.0, 1.0);
        cam.shake_enabled = false;
        cam.set_shake(10.0, 1.0);

        cam.update(0.0, 0.0, 1.0);
        assert_eq!(cam.shake, Vector::zero());
        // Intensity is untouched while disabled.
        assert_eq!(cam.shake_intensity, 10.0);
    }

    #[test]
    fn test_render_position_includes_shake() {
        let mut cam = camera(100.0, 1.0);
        cam.set_position(500.0, 500.0);
        cam.shake.set(3.0, -4.0);

        assert_eq!(cam.render_position(), Vector::new(453.0, 446.0));
        // Reading does not mutate the camera position.
        assert_eq!(cam.position, Vector::new(450.0, 450.0));
    }
}
