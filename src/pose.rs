//! Tool center point poses in the two forms used here: roll / pitch / yaw in degrees
//! (how poses are configured and sampled) and rotation vector (how linear moves take them).
//!
//! Both are immutable values, conversions return a new pose.

extern crate nalgebra as na;

use na::{Isometry3, Translation3, UnitQuaternion, Vector3};

use crate::rotation::{rotation_vector_to_rpy, rpy_matrix, rpy_to_rotation_vector};

/// Pose with orientation as roll, pitch and yaw in degrees. Position in meters,
/// relative to the robot base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpyPose {
    pub position: Vector3<f64>,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Pose as taken by linear move commands: position in meters and rotation vector
/// (axis times angle in radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TcpPose {
    pub position: Vector3<f64>,
    pub rotation_vector: Vector3<f64>,
}

impl RpyPose {
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        RpyPose { position: Vector3::new(x, y, z), roll, pitch, yaw }
    }

    /// Build from position `[x, y, z]` and orientation `[roll, pitch, yaw]`.
    pub fn from_parts(position: [f64; 3], orientation: [f64; 3]) -> Self {
        Self::new(position[0], position[1], position[2],
                  orientation[0], orientation[1], orientation[2])
    }

    pub fn orientation(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }

    /// Same orientation, position moved by the given offset.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        RpyPose { position: self.position + Vector3::new(dx, dy, dz), ..*self }
    }

    /// Same position, orientation changed by the given angles in degrees.
    pub fn rotated(&self, droll: f64, dpitch: f64, dyaw: f64) -> Self {
        RpyPose {
            roll: self.roll + droll,
            pitch: self.pitch + dpitch,
            yaw: self.yaw + dyaw,
            ..*self
        }
    }

    /// Convert into the command form with the rotation vector.
    pub fn to_tcp_pose(&self) -> TcpPose {
        TcpPose {
            position: self.position,
            rotation_vector: rpy_to_rotation_vector(self.roll, self.pitch, self.yaw),
        }
    }

    pub fn to_isometry(&self) -> Isometry3<f64> {
        let rotation = na::Rotation3::from_matrix_unchecked(
            rpy_matrix(self.roll, self.pitch, self.yaw));
        Isometry3::from_parts(
            Translation3::from(self.position),
            UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }
}

impl TcpPose {
    pub fn new(position: Vector3<f64>, rotation_vector: Vector3<f64>) -> Self {
        TcpPose { position, rotation_vector }
    }

    /// From `[x, y, z, rx, ry, rz]` as used by UR controllers.
    pub fn from_array(values: [f64; 6]) -> Self {
        TcpPose {
            position: Vector3::new(values[0], values[1], values[2]),
            rotation_vector: Vector3::new(values[3], values[4], values[5]),
        }
    }

    /// To `[x, y, z, rx, ry, rz]` as used by UR controllers.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x, self.position.y, self.position.z,
            self.rotation_vector.x, self.rotation_vector.y, self.rotation_vector.z,
        ]
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.rotation_vector.norm()
    }

    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::from(self.position),
            UnitQuaternion::from_scaled_axis(self.rotation_vector),
        )
    }

    pub fn from_isometry(isometry: &Isometry3<f64>) -> Self {
        TcpPose {
            position: isometry.translation.vector,
            rotation_vector: isometry.rotation.scaled_axis(),
        }
    }

    /// Back to roll / pitch / yaw in degrees.
    pub fn to_rpy_pose(&self) -> RpyPose {
        RpyPose::from_parts(self.position.into(), rotation_vector_to_rpy(&self.rotation_vector))
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<RpyPose> for TcpPose {
    fn from(pose: RpyPose) -> Self {
        pose.to_tcp_pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_home_pose_to_command() {
        let home = RpyPose::new(0.14, -0.50, 0.40, 90.0, 0.0, 0.0);
        let command = home.to_tcp_pose();
        assert_eq!(command.position, home.position);
        let expected = [0.14, -0.50, 0.40, FRAC_PI_2, 0.0, 0.0];
        for (a, e) in command.to_array().iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1E-12, "{:?} != {:?}", command.to_array(), expected);
        }
    }

    #[test]
    fn test_from_rpy_pose() {
        let pose = RpyPose::new(0.2, -0.5, 0.3, 90.0, 15.0, 0.0);
        let command: TcpPose = pose.into();
        assert_eq!(command, pose.to_tcp_pose());
    }

    #[test]
    fn test_conversion_does_not_change_source() {
        let pose = RpyPose::new(0.1, 0.2, 0.3, 90.0, 10.0, 0.0);
        let copy = pose;
        let _ = pose.to_tcp_pose();
        let _ = pose.translated(1.0, 0.0, 0.0).rotated(0.0, 5.0, 0.0);
        assert_eq!(pose, copy);
    }

    #[test]
    fn test_isometry_forms_agree() {
        let pose = RpyPose::new(0.2, -0.5, 0.35, 90.0, -25.0, 0.0);
        let from_rpy = pose.to_isometry();
        let from_vector = pose.to_tcp_pose().to_isometry();
        assert!(from_rpy.rotation.angle_to(&from_vector.rotation) < 1E-9);
        assert!((from_rpy.translation.vector - from_vector.translation.vector).norm() < 1E-12);

        let back = TcpPose::from_isometry(&from_vector);
        assert!((back.rotation_vector - pose.to_tcp_pose().rotation_vector).norm() < 1E-9);
    }

    #[test]
    fn test_array_round_trip_and_rpy() {
        let values = [0.1, -0.5, 0.4, FRAC_PI_2, 0.0, 0.0];
        let pose = TcpPose::from_array(values);
        assert_eq!(pose.to_array(), values);
        assert!((pose.angle() - FRAC_PI_2).abs() < 1E-12);
        let rpy = pose.to_rpy_pose();
        assert!((rpy.roll - 90.0).abs() < 1E-9);
        assert!(rpy.pitch.abs() < 1E-9);
        assert!(rpy.yaw.abs() < 1E-9);
    }
}
