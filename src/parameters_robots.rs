//! Hardcoded parameters for a few working setups

pub mod ur_workspace {
    use crate::parameters::ur_workspace::{FailureMode, Parameters};
    use crate::utils::as_radians;

    impl Parameters {
        /// UR5 reaching task: the tool points sideways (roll 90°) and moves in the vertical
        /// X-Z plane in front of the robot, wrist 3 may turn ±40°. Poses outside the area
        /// are replaced by the home pose.
        pub fn ur5_environment() -> Self {
            Parameters {
                home_position: [0.14, -0.50, 0.40],
                home_orientation: [90.0, 0.0, 0.0],
                semi_axes: [0.30, 0.25],
                y_tolerance: 0.001,
                pitch_range: [-40.0, 40.0],
                velocity: 0.1,
                acceleration: 0.5,
                payload_mass: 0.4,
                payload_center_of_mass: [0.0; 3],
                tcp: [0.0; 6],
                starting_joints: as_radians([90.0, -90.0, 90.0, 0.0, 90.0, 0.0]),
                reset_joints: None,
                failure_mode: FailureMode::ClampToHome,
            }
        }

        /// UR5 on the test bench, heavier gripper and faster joint moves. Has a parking
        /// configuration and stops on any pose outside the area.
        pub fn ur5_test_bench() -> Self {
            Parameters {
                acceleration: 0.8,
                payload_mass: 0.5,
                starting_joints: [1.5956498, -1.47229, 1.4730, -1.60006, 4.688987, 0.07035151],
                reset_joints: Some([1.595745682, -1.5322321, 1.4995, -3.11227, 4.724702, 0.0004789]),
                failure_mode: FailureMode::HardFail,
                ..Self::ur5_environment()
            }
        }

        /// Preset by name, as accepted on the command line.
        pub fn preset(name: &str) -> Option<Self> {
            match name {
                "ur5" | "ur5_environment" => Some(Self::ur5_environment()),
                "bench" | "ur5_test_bench" => Some(Self::ur5_test_bench()),
                _ => None,
            }
        }
    }

}
