//! Geometry of the reachable workspace: an ellipse over the X and Z axes, Y pinned to
//! the reference value, and orientation limits of the tool.

use crate::constraints::OrientationConstraints;
use crate::parameter_error::ParameterError;
use crate::pose::RpyPose;
use crate::workspace_error::WorkspaceError;

/// Ellipse in the (x, z) plane, center `(h, k)`, semi-axis `a` along X and `b` along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub h: f64,
    pub k: f64,
    pub a: f64,
    pub b: f64,
}

impl Ellipse {
    /// `((x-h)/a)² + ((z-k)/b)²`, not more than 1 inside the ellipse.
    pub fn value(&self, x: f64, z: f64) -> f64 {
        ((x - self.h) / self.a).powi(2) + ((z - self.k) / self.b).powi(2)
    }

    pub fn contains(&self, x: f64, z: f64) -> bool {
        self.value(x, z) <= 1.0
    }

    /// Point at relative radius `r` (0 is the center, 1 the boundary) and angle `theta`.
    pub fn point_at(&self, r: f64, theta: f64) -> (f64, f64) {
        (self.h + self.a * r * theta.cos(), self.k + self.b * r * theta.sin())
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.a * self.b
    }
}

/// The safety envelope. Constructed once from configuration and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkspaceRegion {
    pub ellipse: Ellipse,

    /// Reference value of the pinned Y axis.
    pub y0: f64,

    /// Y may deviate from `y0` by at most this much (meters).
    pub y_tolerance: f64,

    pub orientation: OrientationConstraints,
}

impl WorkspaceRegion {
    pub fn new(ellipse: Ellipse, y0: f64, y_tolerance: f64, orientation: OrientationConstraints)
               -> Result<Self, ParameterError> {
        for (name, value) in [
            ("ellipse center h", ellipse.h), ("ellipse center k", ellipse.k),
            ("semi-axis a", ellipse.a), ("semi-axis b", ellipse.b),
            ("y0", y0), ("y tolerance", y_tolerance),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::InvalidRegion(format!(
                    "{} must be finite (got {})", name, value
                )));
            }
        }
        if ellipse.a <= 0.0 || ellipse.b <= 0.0 {
            return Err(ParameterError::InvalidRegion(format!(
                "semi-axes must be positive (got a = {}, b = {})", ellipse.a, ellipse.b
            )));
        }
        if y_tolerance < 0.0 {
            return Err(ParameterError::InvalidRegion(format!(
                "y tolerance must not be negative (got {})", y_tolerance
            )));
        }
        Ok(WorkspaceRegion { ellipse, y0, y_tolerance, orientation })
    }

    /// Region centered on the home pose: ellipse around home (x, z), Y pinned to home y,
    /// roll and yaw pinned to the home orientation.
    pub fn around_home(home: &RpyPose, semi_axes: [f64; 2], y_tolerance: f64, pitch_range: [f64; 2])
                       -> Result<Self, ParameterError> {
        let orientation = OrientationConstraints::new(home.roll, home.yaw, pitch_range[0], pitch_range[1])
            .ok_or_else(|| ParameterError::InvalidRegion(format!(
                "pitch range [{}, {}] is empty or not finite, or home orientation is not finite",
                pitch_range[0], pitch_range[1]
            )))?;
        let ellipse = Ellipse {
            h: home.position.x,
            k: home.position.z,
            a: semi_axes[0],
            b: semi_axes[1],
        };
        Self::new(ellipse, home.position.y, y_tolerance, orientation)
    }

    pub fn check_position(&self, x: f64, y: f64, z: f64) -> Result<(), WorkspaceError> {
        let ellipse = self.ellipse.value(x, z);
        // Negated so that NaN fails as well
        if !(ellipse <= 1.0) {
            return Err(WorkspaceError::PositionOutOfRegion { x, z, ellipse });
        }
        if !(y >= self.y0 - self.y_tolerance && y <= self.y0 + self.y_tolerance) {
            return Err(WorkspaceError::FixedAxisViolation {
                y,
                expected: self.y0,
                tolerance: self.y_tolerance,
            });
        }
        Ok(())
    }

    pub fn check_orientation(&self, roll: f64, pitch: f64, yaw: f64) -> Result<(), WorkspaceError> {
        if self.orientation.compliant(roll, pitch, yaw) {
            Ok(())
        } else {
            Err(WorkspaceError::OrientationOutOfRange {
                roll,
                pitch,
                yaw,
                min: self.orientation.min_pitch,
                max: self.orientation.max_pitch,
            })
        }
    }

    pub fn contains(&self, pose: &RpyPose) -> bool {
        let p = &pose.position;
        self.check_position(p.x, p.y, p.z).is_ok()
            && self.check_orientation(pose.roll, pose.pitch, pose.yaw).is_ok()
    }
}
