//! Workspace sampling, pose validation and command preparation for UR5 class robot arms
//!
//! The arm works in a bounded safety region: the tool center point (TCP) moves inside an
//! ellipse over the X and Z axes, Y stays pinned to the home value, and only the pitch of
//! the tool (wrist 3) may change within limits while roll and yaw are fixed.
//! This crate owns that region and everything needed to hand a validated pose to the
//! motion driver.
//!
//! # Features
//!
//! - Random poses uniformly distributed over the area of the ellipse, and uniform pitch
//!   within the allowed range.
//! - Validation of arbitrary poses, reporting which constraint was violated and by what values.
//! - Two explicit policies for poses outside the region: substitute the home pose and
//!   continue, or fail with a typed error. The policy must be chosen in the configuration.
//! - Conversion of roll / pitch / yaw in degrees to rotation vectors, also at the identity
//!   and at the half turn, where the textbook formula divides by zero.
//! - The [`driver_traits::RobotDriver`] trait for the motion driver, a simulated driver, and
//!   the [`environment::Environment`] that runs a session through it.
//! - Configuration from YAML files (feature `allow_filesystem`).
//!
//! # Example
//!
//! ```
//! use rs_ur_workspace::parameters::ur_workspace::{FailureMode, Parameters};
//! use rs_ur_workspace::pose::RpyPose;
//! use rs_ur_workspace::sampler::WorkspaceSampler;
//!
//! let parameters = Parameters { failure_mode: FailureMode::HardFail, ..Parameters::ur5_environment() };
//! let validator = parameters.validator().unwrap();
//! let mut sampler = WorkspaceSampler::with_seed(parameters.region().unwrap(), 1);
//!
//! let candidate = sampler.sample_pose();
//! let command = validator.check_pose(&candidate).unwrap();
//! println!("movel {:?}", command.to_array());
//!
//! let too_far = RpyPose::new(0.6, -0.5, 0.4, 90.0, 0.0, 0.0);
//! assert!(validator.check_pose(&too_far).is_err());
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;

pub mod pose;
pub mod rotation;

pub mod constraints;
pub mod workspace;
pub mod workspace_error;

pub mod sampler;
pub mod validator;

pub mod driver_traits;
pub mod simulated;

pub mod environment;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
