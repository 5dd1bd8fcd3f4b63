//! In-process stand-in for the robot driver. Moves complete immediately; the robot is where
//! it was last commanded to be. Every command is recorded, so a session can be replayed
//! or inspected.

extern crate nalgebra as na;

use anyhow::{bail, Result};
use na::Vector3;
use tracing::debug;

use crate::driver_traits::{Joints, Motion, RobotDriver, Telemetry, JOINTS_AT_ZERO};
use crate::pose::TcpPose;
use crate::utils::is_valid;

/// A command as received by the simulated driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetTcp(TcpPose),
    SetPayload { mass: f64, center_of_mass: Vector3<f64> },
    MoveJoint { joints: Joints, motion: Motion, wait: bool },
    MoveLinear { pose: TcpPose, motion: Motion, wait: bool },
    MoveProcess { pose: TcpPose, motion: Motion, wait: bool },
    MoveLinearSequence { poses: Vec<TcpPose>, motion: Motion, blend_radius: f64 },
}

#[derive(Debug, Clone)]
pub struct SimulatedRobot {
    tool_pose: TcpPose,
    joints: Joints,
    commands: Vec<Command>,
}

impl SimulatedRobot {
    /// Robot with all joints at zero and the tool at the given pose.
    pub fn new(tool_pose: TcpPose) -> Self {
        SimulatedRobot { tool_pose, joints: JOINTS_AT_ZERO, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Poses of all linear and process moves, sequences unrolled, in the order received.
    pub fn visited_poses(&self) -> Vec<TcpPose> {
        self.commands.iter().flat_map(|command| match command {
            Command::MoveLinear { pose, .. } | Command::MoveProcess { pose, .. } => vec![*pose],
            Command::MoveLinearSequence { poses, .. } => poses.clone(),
            _ => Vec::new(),
        }).collect()
    }

    fn check_motion(motion: &Motion) -> Result<()> {
        if !(motion.velocity > 0.0 && motion.acceleration > 0.0) {
            bail!("Velocity and acceleration must be positive, got {:?}", motion);
        }
        Ok(())
    }
}

impl Default for SimulatedRobot {
    fn default() -> Self {
        SimulatedRobot::new(TcpPose::from_array([0.0; 6]))
    }
}

impl RobotDriver for SimulatedRobot {
    fn set_tool_center_point(&mut self, offset: &TcpPose) -> Result<()> {
        if !offset.is_finite() {
            bail!("Tool center point offset is not finite: {:?}", offset.to_array());
        }
        self.commands.push(Command::SetTcp(*offset));
        Ok(())
    }

    fn set_payload(&mut self, mass: f64, center_of_mass: &Vector3<f64>) -> Result<()> {
        if !(mass >= 0.0) {
            bail!("Payload mass must not be negative, got {}", mass);
        }
        self.commands.push(Command::SetPayload { mass, center_of_mass: *center_of_mass });
        Ok(())
    }

    fn move_joint(&mut self, joints: &Joints, motion: &Motion, wait: bool) -> Result<()> {
        Self::check_motion(motion)?;
        if !is_valid(joints) {
            bail!("Joint target is not finite: {:?}", joints);
        }
        debug!("movej {:?}", joints);
        self.joints = *joints;
        self.commands.push(Command::MoveJoint { joints: *joints, motion: *motion, wait });
        Ok(())
    }

    fn move_linear(&mut self, pose: &TcpPose, motion: &Motion, wait: bool) -> Result<()> {
        Self::check_motion(motion)?;
        if !pose.is_finite() {
            bail!("Linear target is not finite: {:?}", pose.to_array());
        }
        debug!("movel {:?}", pose.to_array());
        self.tool_pose = *pose;
        self.commands.push(Command::MoveLinear { pose: *pose, motion: *motion, wait });
        Ok(())
    }

    fn move_process(&mut self, pose: &TcpPose, motion: &Motion, wait: bool) -> Result<()> {
        Self::check_motion(motion)?;
        if !pose.is_finite() {
            bail!("Process move target is not finite: {:?}", pose.to_array());
        }
        debug!("movep {:?}", pose.to_array());
        self.tool_pose = *pose;
        self.commands.push(Command::MoveProcess { pose: *pose, motion: *motion, wait });
        Ok(())
    }

    fn move_linear_sequence(&mut self, poses: &[TcpPose], motion: &Motion, blend_radius: f64)
                            -> Result<()> {
        Self::check_motion(motion)?;
        let Some(last) = poses.last() else {
            bail!("Empty waypoint sequence");
        };
        if !(blend_radius >= 0.0) {
            bail!("Blend radius must not be negative, got {}", blend_radius);
        }
        if let Some(bad) = poses.iter().find(|p| !p.is_finite()) {
            bail!("Waypoint is not finite: {:?}", bad.to_array());
        }
        debug!("movels through {} waypoints", poses.len());
        self.tool_pose = *last;
        self.commands.push(Command::MoveLinearSequence {
            poses: poses.to_vec(),
            motion: *motion,
            blend_radius,
        });
        Ok(())
    }

    fn get_tool_pose(&self) -> Result<TcpPose> {
        Ok(self.tool_pose)
    }

    fn get_joint_angles(&self) -> Result<Joints> {
        Ok(self.joints)
    }

    fn read_telemetry(&self) -> Result<Telemetry> {
        Ok(Telemetry {
            joint_temperature: [30.0; 6],
            joint_voltage: [48.0; 6],
            joint_current: [0.0; 6],
            main_voltage: 48.0,
            robot_voltage: 48.0,
            robot_current: 0.0,
        })
    }
}
