//! Validation of candidate poses and the policy applied when they fall outside the region.

use std::str::FromStr;

use tracing::{error, warn};

use crate::pose::{RpyPose, TcpPose};
use crate::workspace::WorkspaceRegion;
use crate::workspace_error::WorkspaceError;

/// What [`PoseValidator::check_pose`] does with a pose outside the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Log the violated constraints and send the robot home instead. Motion continues.
    ClampToHome,
    /// Report the violated constraint as an error, the caller aborts the operation.
    HardFail,
}

impl FromStr for FailureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "clamp_to_home" => Ok(FailureMode::ClampToHome),
            "hard_fail" => Ok(FailureMode::HardFail),
            other => Err(format!(
                "unknown failure mode '{}' (expected clamp_to_home or hard_fail)", other
            )),
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FailureMode::ClampToHome => write!(f, "clamp_to_home"),
            FailureMode::HardFail => write!(f, "hard_fail"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PoseValidator {
    region: WorkspaceRegion,
    home: RpyPose,
    mode: FailureMode,
}

impl PoseValidator {
    pub fn new(region: WorkspaceRegion, home: RpyPose, mode: FailureMode) -> Self {
        PoseValidator { region, home, mode }
    }

    pub fn region(&self) -> &WorkspaceRegion {
        &self.region
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    pub fn home_pose(&self) -> RpyPose {
        self.home
    }

    /// Home pose in the command form, what clamp-to-home substitutes.
    pub fn home_command(&self) -> TcpPose {
        self.home.to_tcp_pose()
    }

    pub fn check_position(&self, x: f64, y: f64, z: f64) -> Result<(), WorkspaceError> {
        self.region.check_position(x, y, z)
    }

    pub fn check_orientation(&self, roll: f64, pitch: f64, yaw: f64) -> Result<(), WorkspaceError> {
        self.region.check_orientation(roll, pitch, yaw)
    }

    /// True if inside the ellipse and on the pinned Y axis. Logs which one failed otherwise.
    pub fn validate_position(&self, x: f64, y: f64, z: f64) -> bool {
        match self.check_position(x, y, z) {
            Ok(()) => true,
            Err(err) => {
                error!("{}", err);
                false
            }
        }
    }

    /// True if pitch is within the range and roll / yaw are at the reference. Logs otherwise.
    pub fn validate_orientation(&self, roll: f64, pitch: f64, yaw: f64) -> bool {
        match self.check_orientation(roll, pitch, yaw) {
            Ok(()) => true,
            Err(err) => {
                error!("{}", err);
                false
            }
        }
    }

    /// All violations of the pose, position first.
    pub fn violations(&self, pose: &RpyPose) -> Vec<WorkspaceError> {
        let p = &pose.position;
        [
            self.check_position(p.x, p.y, p.z),
            self.check_orientation(pose.roll, pose.pitch, pose.yaw),
        ].into_iter().filter_map(Result::err).collect()
    }

    /// Validate the pose and prepare it for a linear move. Outside the region, the
    /// configured [`FailureMode`] decides between the home pose and an error.
    pub fn check_pose(&self, pose: &RpyPose) -> Result<TcpPose, WorkspaceError> {
        let violations = self.violations(pose);
        let Some(first) = violations.first() else {
            return Ok(pose.to_tcp_pose());
        };

        for violation in &violations {
            error!("{}", violation);
        }
        match self.mode {
            FailureMode::ClampToHome => {
                warn!("Not valid pose, sending robot to home position");
                Ok(self.home_command())
            }
            FailureMode::HardFail => Err(*first),
        }
    }
}
