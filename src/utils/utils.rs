//! Helper functions

use crate::driver_traits::Joints;
use crate::pose::{RpyPose, TcpPose};

/// Checks if all joint values are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [f64; 6]) -> Joints {
    std::array::from_fn(|i| degrees[i].to_radians())
}

/// Convert joints in radians to degrees
pub fn to_degrees(joints: &Joints) -> [f64; 6] {
    std::array::from_fn(|i| joints[i].to_degrees())
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..6 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print the command pose, position and rotation vector.
pub fn dump_pose(pose: &TcpPose) {
    let p = pose.position;
    let r = pose.rotation_vector;
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  rv: {:.5},{:.5},{:.5}",
        p.x, p.y, p.z, r.x, r.y, r.z
    );
}

/// Print the pose with roll, pitch and yaw in degrees.
pub fn dump_rpy_pose(pose: &RpyPose) {
    let p = pose.position;
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  rpy: {:.3},{:.3},{:.3}",
        p.x, p.y, p.z, pose.roll, pose.pitch, pose.yaw
    );
}

/// formatting of radians as degrees for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    let degrees = x.to_degrees();
    if (degrees - degrees.round()).abs() < 1E-9 {
        format!("{}", degrees.round())
    } else {
        format!("{:.6}", degrees)
    }
}
