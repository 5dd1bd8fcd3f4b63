//! Interface of the robot driver that executes motion commands.
//!
//! The driver owns the connection to the arm, motion execution and safety interlocks.
//! This crate only prepares validated poses and hands them over through [`RobotDriver`].

extern crate nalgebra as na;

use anyhow::{bail, Result};
use na::{Isometry3, Translation3, UnitQuaternion, Vector3};

use crate::pose::TcpPose;

/// Joint angles of the six axis arm, radians, base to wrist 3.
pub type Joints = [f64; 6];

/// All joints at zero.
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

/// Velocity and acceleration of the move. For joint moves these are rad/s and rad/s²,
/// for linear moves m/s and m/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub velocity: f64,
    pub acceleration: f64,
}

impl Motion {
    pub fn new(velocity: f64, acceleration: f64) -> Self {
        Motion { velocity, acceleration }
    }
}

/// Electrical and thermal readings of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Telemetry {
    pub joint_temperature: [f64; 6],
    pub joint_voltage: [f64; 6],
    pub joint_current: [f64; 6],
    pub main_voltage: f64,
    pub robot_voltage: f64,
    pub robot_current: f64,
}

pub trait RobotDriver {
    /// Set the tool center point as offset from the flange. Done once before moving.
    fn set_tool_center_point(&mut self, offset: &TcpPose) -> Result<()>;

    /// Set payload mass (kg) and its center of mass relative to the flange (m).
    fn set_payload(&mut self, mass: f64, center_of_mass: &Vector3<f64>) -> Result<()>;

    /// Joint space move. If `wait` is true, returns after the move completes.
    fn move_joint(&mut self, joints: &Joints, motion: &Motion, wait: bool) -> Result<()>;

    /// Cartesian move of the tool center point to the given pose.
    fn move_linear(&mut self, pose: &TcpPose, motion: &Motion, wait: bool) -> Result<()>;

    /// Process move: linear in tool space at constant tool speed, with circular blends
    /// when followed by further moves.
    fn move_process(&mut self, pose: &TcpPose, motion: &Motion, wait: bool) -> Result<()>;

    /// Blended move through several waypoints.
    fn move_linear_sequence(&mut self, poses: &[TcpPose], motion: &Motion, blend_radius: f64)
                            -> Result<()>;

    /// Current pose of the tool center point, relative to the base.
    fn get_tool_pose(&self) -> Result<TcpPose>;

    /// Current joint angles.
    fn get_joint_angles(&self) -> Result<Joints>;

    /// Electrical and thermal readings. Not every driver provides them.
    fn read_telemetry(&self) -> Result<Telemetry> {
        bail!("Telemetry is not supported by this driver")
    }

    /// Relative linear move in the base coordinate system, orientation is kept.
    fn translate(&mut self, offset: &Vector3<f64>, motion: &Motion) -> Result<()> {
        let current = self.get_tool_pose()?;
        let target = TcpPose::new(current.position + offset, current.rotation_vector);
        self.move_linear(&target, motion, true)
    }

    /// Rotate the tool about the Z axis of the base by `angle` degrees, the tool center
    /// point stays in place.
    fn rotate_about_base_z(&mut self, angle: f64, motion: &Motion) -> Result<()> {
        let current = self.get_tool_pose()?.to_isometry();
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle.to_radians());
        let target = Isometry3::from_parts(current.translation, rotation * current.rotation);
        self.move_linear(&TcpPose::from_isometry(&target), motion, true)
    }

    /// Relative linear move in the tool coordinate system, orientation is kept.
    fn translate_tool(&mut self, offset: &Vector3<f64>, motion: &Motion) -> Result<()> {
        let current = self.get_tool_pose()?.to_isometry();
        let target = current * Translation3::from(*offset);
        self.move_linear(&TcpPose::from_isometry(&target), motion, true)
    }
}
