#[cfg(test)]
mod tests {
    use crate::parameter_error::ParameterError;
    use crate::parameters::ur_workspace::{FailureMode, Parameters};
    use crate::tests::test_utils::{assert_joints_close, load};

    #[test]
    fn test_environment_file_matches_preset() {
        let loaded = load("ur5_environment.yaml").expect("Failed to load ur5_environment.yaml");
        let preset = Parameters::ur5_environment();
        assert_eq!(loaded.home_position, preset.home_position);
        assert_eq!(loaded.home_orientation, preset.home_orientation);
        assert_eq!(loaded.semi_axes, preset.semi_axes);
        assert_eq!(loaded.pitch_range, preset.pitch_range);
        assert_eq!(loaded.payload_mass, preset.payload_mass);
        assert_eq!(loaded.failure_mode, FailureMode::ClampToHome);
        assert_joints_close(&loaded.starting_joints, &preset.starting_joints, 1E-12);
        assert_eq!(loaded.region().expect("region"), preset.region().expect("region"));
    }

    #[test]
    fn test_bench_file_matches_preset() {
        let loaded = load("ur5_test_bench.yaml").expect("Failed to load ur5_test_bench.yaml");
        let preset = Parameters::ur5_test_bench();
        assert_eq!(loaded.failure_mode, FailureMode::HardFail);
        assert_eq!(loaded.acceleration, preset.acceleration);
        assert_eq!(loaded.payload_mass, preset.payload_mass);
        // Not in the file, defaults apply
        assert_eq!(loaded.y_tolerance, preset.y_tolerance);
        assert_eq!(loaded.tcp, [0.0; 6]);
        assert_eq!(loaded.payload_center_of_mass, [0.0; 3]);

        // Joints are given in degrees with four decimals
        assert_joints_close(&loaded.starting_joints, &preset.starting_joints, 1E-5);
        let reset = loaded.reset_joints.expect("reset joints expected");
        let expected = preset.reset_joints.expect("preset has reset joints");
        assert_joints_close(&reset, &expected, 1E-5);
    }

    #[test]
    fn test_invalid_semi_axes() {
        match load("test/invalid_semi_axes.yaml") {
            Err(ParameterError::InvalidRegion(message)) => {
                assert!(message.contains("semi-axes"), "{}", message)
            }
            other => panic!("Expected InvalidRegion, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pitch_range() {
        assert!(matches!(load("test/invalid_pitch_range.yaml"), Err(ParameterError::InvalidRegion(_))));
    }

    #[test]
    fn test_missing_failure_mode() {
        assert!(matches!(load("test/missing_failure_mode.yaml"), Err(ParameterError::ParseError(_))));
    }

    #[test]
    fn test_short_joints() {
        match load("test/short_joints.yaml") {
            Err(ParameterError::InvalidLength { field, expected, found }) => {
                assert_eq!(field, "starting_joints");
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("Expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_velocity() {
        let err = load("test/negative_velocity.yaml").unwrap_err();
        assert!(err.to_string().contains("velocity"), "{}", err);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load("test/no_such_file.yaml"), Err(ParameterError::IoError(_))));
    }
}
