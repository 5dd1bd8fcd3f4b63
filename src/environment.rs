//! Working environment of the arm: sets the robot up, keeps it inside the workspace and
//! issues the moves of a session through the [`RobotDriver`].
//!
//! ```
//! use rs_ur_workspace::environment::Environment;
//! use rs_ur_workspace::parameters::ur_workspace::Parameters;
//! use rs_ur_workspace::simulated::SimulatedRobot;
//!
//! let parameters = Parameters::ur5_environment();
//! let mut env = Environment::with_seed(SimulatedRobot::default(), &parameters, 42).unwrap();
//! env.starting_position().unwrap();
//! env.robot_home_position().unwrap();
//! env.tool_move_pose_test().unwrap();
//! ```

use anyhow::{anyhow, ensure, Context, Result};
use tracing::info;

use crate::driver_traits::{Joints, Motion, RobotDriver, Telemetry};
use crate::parameters::ur_workspace::Parameters;
use crate::pose::{RpyPose, TcpPose};
use crate::sampler::WorkspaceSampler;
use crate::utils::is_valid;
use crate::validator::PoseValidator;

/// Sideways offset of the outer waypoints of the scripted demo, meters.
pub const DEMO_LATERAL_OFFSET: f64 = 0.15;
/// How far the middle waypoint dips below home, meters.
pub const DEMO_DIP: f64 = 0.02;
/// Wrist tilt at the outer waypoints, degrees.
pub const DEMO_TILT: f64 = 30.0;
/// Blend radius between the waypoints, meters.
pub const DEMO_BLEND_RADIUS: f64 = 0.01;

pub struct Environment<D: RobotDriver> {
    robot: D,
    validator: PoseValidator,
    sampler: WorkspaceSampler,
    motion: Motion,
    starting_joints: Joints,
    reset_joints: Option<Joints>,
}

impl<D: RobotDriver> Environment<D> {
    /// Set up the robot (tool center point, payload) and the workspace.
    pub fn new(robot: D, parameters: &Parameters) -> Result<Self> {
        let region = parameters.region()?;
        Self::setup(robot, parameters, WorkspaceSampler::new(region))
    }

    /// As [`Environment::new`], with reproducible pose sampling.
    pub fn with_seed(robot: D, parameters: &Parameters, seed: u64) -> Result<Self> {
        let region = parameters.region()?;
        Self::setup(robot, parameters, WorkspaceSampler::with_seed(region, seed))
    }

    fn setup(mut robot: D, parameters: &Parameters, sampler: WorkspaceSampler) -> Result<Self> {
        robot.set_tool_center_point(&parameters.tcp_offset())
            .context("Failed to set the tool center point")?;
        robot.set_payload(parameters.payload_mass, &parameters.payload_center())
            .context("Failed to set the payload")?;
        info!("Robot set up, payload {} kg, failure mode {}",
              parameters.payload_mass, parameters.failure_mode);

        Ok(Environment {
            robot,
            validator: parameters.validator()?,
            sampler,
            motion: parameters.motion(),
            starting_joints: parameters.starting_joints,
            reset_joints: parameters.reset_joints,
        })
    }

    pub fn robot(&self) -> &D {
        &self.robot
    }

    pub fn into_robot(self) -> D {
        self.robot
    }

    pub fn validator(&self) -> &PoseValidator {
        &self.validator
    }

    /// Joint move into the starting configuration, so that later linear moves start from
    /// a known arm posture.
    pub fn starting_position(&mut self) -> Result<()> {
        let joints = self.starting_joints;
        self.move_joints(&joints)?;
        info!("Robot at initial position");
        Ok(())
    }

    /// Joint move into the parking configuration.
    pub fn move_reset_position(&mut self) -> Result<()> {
        let reset = self.reset_joints
            .ok_or_else(|| anyhow!("No reset joint configuration is set up"))?;
        self.move_joints(&reset)?;
        info!("Robot at reset pose");
        Ok(())
    }

    fn move_joints(&mut self, joints: &Joints) -> Result<()> {
        ensure!(is_valid(joints), "Joint configuration is not finite: {:?}", joints);
        self.robot.move_joint(joints, &self.motion, true)
            .context("Joint move failed")
    }

    /// Linear move to the home pose.
    pub fn robot_home_position(&mut self) -> Result<()> {
        let home = self.validator.home_command();
        self.robot.move_linear(&home, &self.motion, true)
            .context("Move to home position failed")?;
        info!("Robot at home position");
        Ok(())
    }

    /// Random pose inside the workspace, ready for a linear move.
    pub fn get_sample_pose(&mut self) -> Result<TcpPose> {
        let candidate = self.sampler.sample_pose();
        Ok(self.validator.check_pose(&candidate)?)
    }

    /// Validate the pose and move there. What happens outside the workspace depends on the
    /// failure mode: either the robot goes home or an error is returned without moving.
    pub fn move_to(&mut self, pose: &RpyPose) -> Result<TcpPose> {
        let target = self.validator.check_pose(pose)?;
        self.robot.move_linear(&target, &self.motion, true)?;
        Ok(target)
    }

    /// Move to a random pose in the workspace.
    pub fn tool_move_pose_test(&mut self) -> Result<TcpPose> {
        let target = self.get_sample_pose()?;
        self.robot.move_linear(&target, &self.motion, true)?;
        info!("Move completed");
        Ok(target)
    }

    /// Waypoints of the scripted demo relative to home: left and tilted, dipped in the
    /// middle, right and tilted the other way.
    pub fn demo_waypoints(&self) -> [RpyPose; 3] {
        let home = self.validator.home_pose();
        [
            home.translated(-DEMO_LATERAL_OFFSET, 0.0, 0.0).rotated(0.0, DEMO_TILT, 0.0),
            home.translated(0.0, 0.0, -DEMO_DIP),
            home.translated(DEMO_LATERAL_OFFSET, 0.0, 0.0).rotated(0.0, -DEMO_TILT, 0.0),
        ]
    }

    /// Swing left, through the dip, right and back through the dip, as one blended
    /// move per repetition. Waypoints are validated before anything moves.
    pub fn hard_code_solution(&mut self, repetitions: usize) -> Result<Vec<TcpPose>> {
        let [left, dip, right] = self.demo_waypoints();
        let left = self.validator.check_pose(&left)?;
        let dip = self.validator.check_pose(&dip)?;
        let right = self.validator.check_pose(&right)?;
        let sequence = vec![left, dip, right, dip];

        for repetition in 0..repetitions {
            self.robot.move_linear_sequence(&sequence, &self.motion, DEMO_BLEND_RADIUS)
                .with_context(|| format!("Waypoint sequence {} failed", repetition + 1))?;
        }
        info!("Demo sequence completed {} times", repetitions);
        Ok(sequence)
    }

    pub fn read_joint_state(&self) -> Result<Joints> {
        self.robot.get_joint_angles()
    }

    pub fn read_tool_pose(&self) -> Result<TcpPose> {
        self.robot.get_tool_pose()
    }

    /// Read the telemetry and write it into the log.
    pub fn log_robot_data(&self) -> Result<Telemetry> {
        let data = self.robot.read_telemetry()?;
        info!("Data From the Robot:");
        info!("Joint Temperature: {:?}, Joint Voltage: {:?}, Joint Current: {:?}, Main Voltage: {}",
              data.joint_temperature, data.joint_voltage, data.joint_current, data.main_voltage);
        info!("Robot Voltage: {}, Robot Current: {}", data.robot_voltage, data.robot_current);
        Ok(data)
    }
}
