//! Validation failures of candidate poses against the workspace region

/// A candidate pose violates the workspace region. Each variant carries the values
/// that failed so the caller can see which constraint was hit and by how much.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkspaceError {
    /// The (x, z) point lies outside the ellipse. `ellipse` is the value of
    /// `((x-h)/a)² + ((z-k)/b)²` that exceeded 1.
    PositionOutOfRegion { x: f64, z: f64, ellipse: f64 },

    /// The pinned Y coordinate is outside `expected ± tolerance`.
    FixedAxisViolation { y: f64, expected: f64, tolerance: f64 },

    /// Pitch is outside `[min, max]`, or roll / yaw differ from their reference values.
    OrientationOutOfRange { roll: f64, pitch: f64, yaw: f64, min: f64, max: f64 },
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            WorkspaceError::PositionOutOfRegion { x, z, ellipse } =>
                write!(f, "Point x = {:.4}, z = {:.4} is outside the ellipse (value {:.4} > 1)",
                       x, z, ellipse),
            WorkspaceError::FixedAxisViolation { y, expected, tolerance } =>
                write!(f, "Y axis {:.4} is outside the boundary, should be fixed to {:.4} ± {}",
                       y, expected, tolerance),
            WorkspaceError::OrientationOutOfRange { roll, pitch, yaw, min, max } =>
                write!(f, "Angle is outside the boundaries for rotation: roll {:.2}, pitch {:.2} \
                    (allowed {:.2} ..= {:.2}), yaw {:.2}", roll, pitch, min, max, yaw),
        }
    }
}

impl std::error::Error for WorkspaceError {}
