//! Defines the workspace and robot setup parameters

pub mod ur_workspace {
    use nalgebra::Vector3;

    use crate::driver_traits::{Joints, Motion};
    use crate::parameter_error::ParameterError;
    use crate::pose::{RpyPose, TcpPose};
    use crate::utils::deg;
    pub use crate::validator::FailureMode;
    use crate::validator::PoseValidator;
    use crate::workspace::WorkspaceRegion;

    /// Parameters of the working environment. See [parameters_robots.rs](parameters_robots.rs)
    /// for the preconfigured setups.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Home position of the tool center point (x, y, z), meters. The ellipse is centered
        /// on home x and z, and y stays pinned to the home y.
        pub home_position: [f64; 3],

        /// Home orientation (roll, pitch, yaw), degrees. Roll and yaw are pinned.
        pub home_orientation: [f64; 3],

        /// Semi-axis lengths of the ellipse along X and along Z, meters.
        pub semi_axes: [f64; 2],

        /// How far Y may drift from the home y, meters.
        pub y_tolerance: f64,

        /// Allowed pitch (wrist 3) range, degrees, inclusive.
        pub pitch_range: [f64; 2],

        /// Default velocity of moves.
        pub velocity: f64,

        /// Default acceleration of moves.
        pub acceleration: f64,

        /// Payload mass, kg.
        pub payload_mass: f64,

        /// Payload center of mass relative to the flange, meters.
        pub payload_center_of_mass: [f64; 3],

        /// Tool center point offset from the flange, `[x, y, z, rx, ry, rz]`.
        pub tcp: [f64; 6],

        /// Joint configuration to start from, radians.
        pub starting_joints: Joints,

        /// Joint configuration to park the robot in, radians. Not all setups have it.
        pub reset_joints: Option<Joints>,

        /// What to do with poses outside the workspace.
        pub failure_mode: FailureMode,
    }

    impl Parameters {
        pub fn home_pose(&self) -> RpyPose {
            RpyPose::from_parts(self.home_position, self.home_orientation)
        }

        pub fn motion(&self) -> Motion {
            Motion::new(self.velocity, self.acceleration)
        }

        pub fn tcp_offset(&self) -> TcpPose {
            TcpPose::from_array(self.tcp)
        }

        pub fn payload_center(&self) -> Vector3<f64> {
            Vector3::from(self.payload_center_of_mass)
        }

        /// Build the workspace region, checking its invariants.
        pub fn region(&self) -> Result<WorkspaceRegion, ParameterError> {
            WorkspaceRegion::around_home(&self.home_pose(), self.semi_axes, self.y_tolerance,
                                         self.pitch_range)
        }

        pub fn validator(&self) -> Result<PoseValidator, ParameterError> {
            Ok(PoseValidator::new(self.region()?, self.home_pose(), self.failure_mode))
        }

        /// Convert to string yaml representation (quick viewing, etc).
        /// Joint values are written in degrees.
        pub fn to_yaml(&self) -> String {
            fn list(values: &[f64]) -> String {
                values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
            }
            fn joints(values: &Joints) -> String {
                values.iter().map(deg).collect::<Vec<_>>().join(", ")
            }

            let mut yaml = format!(
                "home_position: [{}]\n\
                home_orientation: [{}]\n\
                semi_axes: [{}]\n\
                y_tolerance: {}\n\
                pitch_range: [{}]\n\
                velocity: {}\n\
                acceleration: {}\n\
                payload:\n  \
                  mass: {}\n  \
                  center_of_mass: [{}]\n\
                tcp: [{}]\n\
                starting_joints: [{}]\n",
                list(&self.home_position),
                list(&self.home_orientation),
                list(&self.semi_axes),
                self.y_tolerance,
                list(&self.pitch_range),
                self.velocity,
                self.acceleration,
                self.payload_mass,
                list(&self.payload_center_of_mass),
                list(&self.tcp),
                joints(&self.starting_joints),
            );
            if let Some(reset) = &self.reset_joints {
                yaml.push_str(&format!("reset_joints: [{}]\n", joints(reset)));
            }
            yaml.push_str(&format!("failure_mode: {}\n", self.failure_mode));
            yaml
        }
    }
}
