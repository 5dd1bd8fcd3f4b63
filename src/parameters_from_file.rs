//! Supports reading the workspace parameters from YAML file (optional)

use std::path::Path;
use serde::Deserialize;

use crate::parameter_error::ParameterError;
use crate::parameters::ur_workspace::{FailureMode, Parameters};
use crate::utils::as_radians;

fn default_y_tolerance() -> f64 { 0.001 }
fn default_tcp() -> Vec<f64> { vec![0.0; 6] }
fn default_center_of_mass() -> Vec<f64> { vec![0.0; 3] }

#[derive(Deserialize)]
struct Payload {
    pub mass: f64,
    #[serde(default = "default_center_of_mass")]
    pub center_of_mass: Vec<f64>,
}

#[derive(Deserialize)]
struct Root {
    pub home_position: Vec<f64>,
    pub home_orientation: Vec<f64>,
    pub semi_axes: Vec<f64>,
    #[serde(default = "default_y_tolerance")]
    pub y_tolerance: f64,
    pub pitch_range: Vec<f64>,
    pub velocity: f64,
    pub acceleration: f64,
    #[serde(default)]
    pub payload: Option<Payload>,
    #[serde(default = "default_tcp")]
    pub tcp: Vec<f64>,
    /// Degrees
    pub starting_joints: Vec<f64>,
    /// Degrees
    #[serde(default)]
    pub reset_joints: Option<Vec<f64>>,
    /// Required, no default: the policy for poses outside the workspace must be chosen.
    pub failure_mode: String,
}

impl Parameters {
    /// Read the working environment from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # UR5 reaching task
    /// home_position: [0.14, -0.50, 0.40]
    /// home_orientation: [90, 0, 0]     # roll, pitch, yaw in degrees
    /// semi_axes: [0.30, 0.25]          # along X and along Z
    /// y_tolerance: 0.001
    /// pitch_range: [-40, 40]
    /// velocity: 0.1
    /// acceleration: 0.5
    /// payload:
    ///   mass: 0.4
    ///   center_of_mass: [0, 0, 0]
    /// tcp: [0, 0, 0, 0, 0, 0]
    /// starting_joints: [90, -90, 90, 0, 90, 0]   # degrees
    /// reset_joints: [91.43, -87.79, 85.92, -178.32, 270.71, 0.03]
    /// failure_mode: clamp_to_home      # or hard_fail
    /// ```
    /// `y_tolerance`, `payload`, `tcp` and `reset_joints` are optional, `failure_mode` is not.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [`Parameters::from_yaml_file`], from the YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let failure_mode: FailureMode = root.failure_mode.parse()
            .map_err(ParameterError::ParseError)?;

        let (payload_mass, payload_center_of_mass) = match root.payload {
            Some(payload) => (payload.mass, to_array(payload.center_of_mass, "payload.center_of_mass")?),
            None => (0.0, [0.0; 3]),
        };

        let reset_joints = match root.reset_joints {
            Some(joints) => Some(as_radians(to_array(joints, "reset_joints")?)),
            None => None,
        };

        let parameters = Parameters {
            home_position: to_array(root.home_position, "home_position")?,
            home_orientation: to_array(root.home_orientation, "home_orientation")?,
            semi_axes: to_array(root.semi_axes, "semi_axes")?,
            y_tolerance: root.y_tolerance,
            pitch_range: to_array(root.pitch_range, "pitch_range")?,
            velocity: root.velocity,
            acceleration: root.acceleration,
            payload_mass,
            payload_center_of_mass,
            tcp: to_array(root.tcp, "tcp")?,
            starting_joints: as_radians(to_array(root.starting_joints, "starting_joints")?),
            reset_joints,
            failure_mode,
        };

        check_motion(&parameters)?;

        // Workspace invariants (positive semi-axes, ordered pitch range, ...)
        parameters.region()?;
        Ok(parameters)
    }
}

fn check_motion(parameters: &Parameters) -> Result<(), ParameterError> {
    for (name, value) in [
        ("velocity", parameters.velocity),
        ("acceleration", parameters.acceleration),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ParameterError::ParseError(format!(
                "{} must be finite and positive (got {})", name, value
            )));
        }
    }
    if !(parameters.payload_mass.is_finite() && parameters.payload_mass >= 0.0) {
        return Err(ParameterError::ParseError(format!(
            "payload mass must be finite and not negative (got {})", parameters.payload_mass
        )));
    }
    let vectors = parameters.payload_center_of_mass.iter()
        .chain(parameters.tcp.iter())
        .chain(parameters.starting_joints.iter())
        .chain(parameters.reset_joints.iter().flatten());
    for value in vectors {
        if !value.is_finite() {
            return Err(ParameterError::ParseError(format!(
                "payload, tcp and joint values must be finite (got {})", value
            )));
        }
    }
    Ok(())
}

/// Convert a vector to N-element array, error with the field label if the length differs.
fn to_array<const N: usize>(v: Vec<f64>, label: &str) -> Result<[f64; N], ParameterError> {
    v.try_into().map_err(|v: Vec<f64>| ParameterError::InvalidLength {
        field: label.to_string(),
        expected: N,
        found: v.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
home_position: [0.14, -0.50, 0.40]
home_orientation: [90, 0, 0]
semi_axes: [0.30, 0.25]
pitch_range: [-40, 40]
velocity: 0.1
acceleration: 0.5
starting_joints: [90, -90, 90, 0, 90, 0]
failure_mode: hard_fail
";

    #[test]
    fn test_minimal_yaml_defaults() {
        let parameters = Parameters::from_yaml_str(MINIMAL).expect("minimal YAML must load");
        assert_eq!(parameters.y_tolerance, 0.001);
        assert_eq!(parameters.tcp, [0.0; 6]);
        assert_eq!(parameters.payload_mass, 0.0);
        assert_eq!(parameters.reset_joints, None);
        assert_eq!(parameters.failure_mode, FailureMode::HardFail);
        assert!((parameters.starting_joints[1] + 90.0_f64.to_radians()).abs() < 1E-12);
    }

    #[test]
    fn test_wrong_length_names_field() {
        let yaml = MINIMAL.replace("semi_axes: [0.30, 0.25]", "semi_axes: [0.30]");
        match Parameters::from_yaml_str(&yaml) {
            Err(ParameterError::InvalidLength { field, expected, found }) => {
                assert_eq!(field, "semi_axes");
                assert_eq!((expected, found), (2, 1));
            }
            _ => panic!("Expected InvalidLength"),
        }
    }

    #[test]
    fn test_failure_mode_is_required() {
        let yaml = MINIMAL.replace("failure_mode: hard_fail\n", "");
        assert!(matches!(Parameters::from_yaml_str(&yaml), Err(ParameterError::ParseError(_))));
    }

    #[test]
    fn test_unknown_failure_mode() {
        let yaml = MINIMAL.replace("hard_fail", "keep_going");
        let err = Parameters::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("unknown failure mode"), "{err}");
    }

    #[test]
    fn test_to_yaml_reads_back() {
        let original = Parameters::ur5_test_bench();
        let loaded = Parameters::from_yaml_str(&original.to_yaml()).expect("to_yaml output must load");
        assert_eq!(loaded.home_position, original.home_position);
        assert_eq!(loaded.semi_axes, original.semi_axes);
        assert_eq!(loaded.failure_mode, original.failure_mode);
        for (a, b) in loaded.starting_joints.iter().zip(original.starting_joints.iter()) {
            assert!((a - b).abs() < 1E-6);
        }
        assert!(loaded.reset_joints.is_some());
    }
}
