//! Conversion of roll / pitch / yaw angles into the rotation vector (axis-angle) form
//! expected by linear move commands.
//!
//! Angles are in degrees and follow the ZYX convention: yaw about Z, then pitch about Y,
//! then roll about X, composed as `R = Rz(yaw) · Ry(pitch) · Rx(roll)`. The rotation vector
//! points along the rotation axis and its length is the rotation angle in radians.
//!
//! ```
//! use rs_ur_workspace::rotation::rpy_to_rotation_vector;
//! let rv = rpy_to_rotation_vector(90.0, 0.0, 0.0);
//! assert!((rv.x - std::f64::consts::FRAC_PI_2).abs() < 1E-12);
//! ```

extern crate nalgebra as na;

use na::{Matrix3, Rotation3, Vector3};
use std::f64::consts::PI;

/// Below this angle (radians) the rotation is treated as identity.
const IDENTITY_EPSILON: f64 = 1E-9;

/// Closer than this to π (radians) the axis is taken from the symmetric part of the matrix,
/// as the antisymmetric part vanishes together with sin(θ). Outside this band the error
/// of dividing by `2 sin θ` stays below 1e-10.
const HALF_TURN_EPSILON: f64 = 1E-3;

/// Composite rotation matrix `Rz(yaw) · Ry(pitch) · Rx(roll)`, angles in degrees.
pub fn rpy_matrix(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sr, cr) = roll.to_radians().sin_cos();
    let (sp, cp) = pitch.to_radians().sin_cos();
    let (sy, cy) = yaw.to_radians().sin_cos();

    let yaw_matrix = Matrix3::new(
        cy, -sy, 0.0,
        sy, cy, 0.0,
        0.0, 0.0, 1.0);
    let pitch_matrix = Matrix3::new(
        cp, 0.0, sp,
        0.0, 1.0, 0.0,
        -sp, 0.0, cp);
    let roll_matrix = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, cr, -sr,
        0.0, sr, cr);

    yaw_matrix * pitch_matrix * roll_matrix
}

/// Roll / pitch / yaw in degrees to rotation vector (radians).
pub fn rpy_to_rotation_vector(roll: f64, pitch: f64, yaw: f64) -> Vector3<f64> {
    matrix_to_rotation_vector(&rpy_matrix(roll, pitch, yaw))
}

/// Rotation vector of the rotation matrix. Total for any proper rotation matrix:
/// returns zero vector for identity and uses the symmetric part near the half turn.
pub fn matrix_to_rotation_vector(r: &Matrix3<f64>) -> Vector3<f64> {
    let antisymmetric = Vector3::new(
        r[(2, 1)] - r[(1, 2)],
        r[(0, 2)] - r[(2, 0)],
        r[(1, 0)] - r[(0, 1)],
    );
    // |antisymmetric| = 2 sin θ and tr R - 1 = 2 cos θ; atan2 keeps θ accurate near 0
    // and π where acos of the trace loses precision.
    let theta = antisymmetric.norm().atan2(r.trace() - 1.0);

    if theta < IDENTITY_EPSILON {
        return Vector3::zeros();
    }

    if PI - theta < HALF_TURN_EPSILON {
        return half_turn_axis(r, theta.cos(), &antisymmetric) * theta;
    }

    let k = 1.0 / (2.0 * theta.sin());
    antisymmetric * (k * theta)
}

/// Unit rotation axis when θ is close to π. The symmetric part of R is
/// `cos θ · I + (1 - cos θ) · n nᵀ`, so `n nᵀ` is recovered from it and the
/// column with the largest diagonal entry gives the best conditioned axis.
fn half_turn_axis(r: &Matrix3<f64>, cos_theta: f64, antisymmetric: &Vector3<f64>) -> Vector3<f64> {
    let symmetric = (r + r.transpose()) * 0.5;
    let outer = (symmetric - Matrix3::identity() * cos_theta) / (1.0 - cos_theta);

    let mut best = 0;
    for i in 1..3 {
        if outer[(i, i)] > outer[(best, best)] {
            best = i;
        }
    }

    // Column `best` is n * n[best]; n[best] is taken positive.
    let mut axis: Vector3<f64> = outer.column(best).into_owned();
    axis /= axis.norm();

    // Not exactly at π, the antisymmetric part still tells the true direction.
    if antisymmetric.norm() > 1E-12 && axis.dot(antisymmetric) < 0.0 {
        axis = -axis;
    }
    axis
}

/// Rotation matrix of the rotation vector (Rodrigues formula).
pub fn rotation_vector_to_matrix(rotation_vector: &Vector3<f64>) -> Matrix3<f64> {
    Rotation3::new(*rotation_vector).into_inner()
}

/// Roll / pitch / yaw in degrees of the rotation matrix. In the gimbal lock (pitch ±90°)
/// roll is reported as 0 and the whole rotation about the vertical goes to yaw.
pub fn matrix_to_rpy(r: &Matrix3<f64>) -> [f64; 3] {
    let pitch = (-r[(2, 0)]).clamp(-1.0, 1.0).asin();
    let (roll, yaw) = if pitch.cos().abs() < 1E-9 {
        (0.0, (-r[(0, 1)]).atan2(r[(1, 1)]))
    } else {
        (r[(2, 1)].atan2(r[(2, 2)]), r[(1, 0)].atan2(r[(0, 0)]))
    };
    [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
}

/// Rotation vector back to roll / pitch / yaw in degrees.
pub fn rotation_vector_to_rpy(rotation_vector: &Vector3<f64>) -> [f64; 3] {
    matrix_to_rpy(&rotation_vector_to_matrix(rotation_vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1E-9;

    fn assert_vec_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, tolerance: f64) {
        assert!(
            (actual - expected).norm() <= tolerance,
            "Rotation vector differs: actual = {:?}, expected = {:?}",
            actual.as_slice(), expected.as_slice()
        );
    }

    fn assert_matrix_eq(actual: &Matrix3<f64>, expected: &Matrix3<f64>, tolerance: f64) {
        assert!(
            (actual - expected).abs().max() <= tolerance,
            "Matrices differ:\n{}\n{}", actual, expected
        );
    }

    #[test]
    fn test_identity_is_zero_vector() {
        let rv = rpy_to_rotation_vector(0.0, 0.0, 0.0);
        assert_eq!(rv, Vector3::zeros());
        assert!(rv.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_roll_quarter_turn() {
        let rv = rpy_to_rotation_vector(90.0, 0.0, 0.0);
        assert_vec_eq(&rv, &Vector3::new(FRAC_PI_2, 0.0, 0.0), TOLERANCE);
        assert!((rv.norm() - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn test_single_axis_rotations() {
        assert_vec_eq(&rpy_to_rotation_vector(0.0, 30.0, 0.0),
                      &Vector3::new(0.0, 30.0_f64.to_radians(), 0.0), TOLERANCE);
        assert_vec_eq(&rpy_to_rotation_vector(0.0, 0.0, -45.0),
                      &Vector3::new(0.0, 0.0, -45.0_f64.to_radians()), TOLERANCE);
    }

    #[test]
    fn test_matches_nalgebra_convention() {
        // nalgebra composes from_euler_angles(roll, pitch, yaw) as Rz * Ry * Rx
        let cases = [
            (90.0, 0.0, 0.0),
            (90.0, 30.0, 0.0),
            (90.0, -40.0, 0.0),
            (10.0, 20.0, 30.0),
            (-120.0, 15.0, 75.0),
            (45.0, -60.0, -135.0),
        ];
        for (roll, pitch, yaw) in cases {
            let expected = Rotation3::from_euler_angles(
                f64::to_radians(roll), f64::to_radians(pitch), f64::to_radians(yaw));
            assert_matrix_eq(&rpy_matrix(roll, pitch, yaw), expected.matrix(), TOLERANCE);
            assert_vec_eq(&rpy_to_rotation_vector(roll, pitch, yaw), &expected.scaled_axis(), 1E-8);
        }
    }

    #[test]
    fn test_round_trip_rpy() {
        let cases = [
            [90.0, 0.0, 0.0],
            [90.0, 25.0, 0.0],
            [90.0, -40.0, 0.0],
            [12.5, -33.0, 71.0],
            [-150.0, 60.0, -20.0],
            [0.0, 0.0, 120.0],
        ];
        for rpy in cases {
            let rv = rpy_to_rotation_vector(rpy[0], rpy[1], rpy[2]);
            let back = rotation_vector_to_rpy(&rv);
            for i in 0..3 {
                assert!((back[i] - rpy[i]).abs() < 1E-7,
                        "Round trip of {:?} produced {:?}", rpy, back);
            }
        }
    }

    #[test]
    fn test_half_turn_pitch_uses_symmetric_part() {
        let rv = rpy_to_rotation_vector(0.0, 180.0, 0.0);
        assert!(rv.iter().all(|v| v.is_finite()));
        assert_vec_eq(&rv, &Vector3::new(0.0, PI, 0.0), TOLERANCE);
    }

    #[test]
    fn test_half_turn_about_each_axis() {
        assert_vec_eq(&rpy_to_rotation_vector(180.0, 0.0, 0.0), &Vector3::new(PI, 0.0, 0.0), TOLERANCE);
        assert_vec_eq(&rpy_to_rotation_vector(0.0, 0.0, 180.0), &Vector3::new(0.0, 0.0, PI), TOLERANCE);
        assert_vec_eq(&rpy_to_rotation_vector(-180.0, 0.0, 0.0), &Vector3::new(PI, 0.0, 0.0), TOLERANCE);
    }

    #[test]
    fn test_half_turn_about_diagonal_axis() {
        // Roll 180 followed by yaw 90 is a half turn around (1, 1, 0) / sqrt(2)
        let rv = rpy_to_rotation_vector(180.0, 0.0, 90.0);
        assert!((rv.norm() - PI).abs() < 1E-6);
        let reconstructed = rotation_vector_to_matrix(&rv);
        assert_matrix_eq(&reconstructed, &rpy_matrix(180.0, 0.0, 90.0), 1E-9);
    }

    #[test]
    fn test_close_to_half_turn_keeps_direction() {
        let rv = rpy_to_rotation_vector(0.0, 0.0, 179.9999999);
        assert!(rv.z > 0.0);
        assert_matrix_eq(&rotation_vector_to_matrix(&rv), &rpy_matrix(0.0, 0.0, 179.9999999), 1E-8);

        let rv = rpy_to_rotation_vector(0.0, 0.0, -179.9999999);
        assert!(rv.z < 0.0);
        assert_matrix_eq(&rotation_vector_to_matrix(&rv), &rpy_matrix(0.0, 0.0, -179.9999999), 1E-8);
    }

    #[test]
    fn test_approaching_half_turn_from_mixed_axes() {
        // Angles from 1e-2 to 1e-9 degrees off a half turn, crossing between the two branches
        let offsets: Vec<f64> = (2..=9).flat_map(|e| {
            let d = 10f64.powi(-e);
            [d, 3.0 * d, -d, -3.0 * d]
        }).collect();
        for d in offsets {
            for (roll, pitch, yaw) in [
                (180.0 + d, 0.0, 90.0),
                (180.0, d, 90.0),
                (180.0 - d, 0.0, 45.0),
                (0.0, 180.0 + d, -30.0),
                (d, 180.0, 120.0),
            ] {
                let matrix = rpy_matrix(roll, pitch, yaw);
                let rv = matrix_to_rotation_vector(&matrix);
                assert!(rv.iter().all(|v| v.is_finite()));
                assert!((rv.norm() - PI).abs() < 1E-3, "{:?}: |rv| = {}", (roll, pitch, yaw), rv.norm());
                let rebuilt = rotation_vector_to_matrix(&rv);
                assert!((rebuilt - matrix).abs().max() < 1E-9,
                        "{:?}: rebuilt matrix off by {}", (roll, pitch, yaw), (rebuilt - matrix).abs().max());
            }
        }
    }

    #[test]
    fn test_random_angles_reconstruct_matrix() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let roll = rng.gen_range(-180.0..180.0);
            let pitch = rng.gen_range(-90.0..90.0);
            let yaw = rng.gen_range(-180.0..180.0);
            let rv = rpy_to_rotation_vector(roll, pitch, yaw);
            assert!(rv.iter().all(|v| v.is_finite()));
            assert!(rv.norm() <= PI + 1E-12);
            assert_matrix_eq(&rotation_vector_to_matrix(&rv), &rpy_matrix(roll, pitch, yaw), 1E-6);
        }
    }

    #[test]
    fn test_gimbal_lock_keeps_rotation() {
        let rpy = matrix_to_rpy(&rpy_matrix(20.0, 90.0, 50.0));
        assert!((rpy[1] - 90.0).abs() < 1E-6);
        assert_matrix_eq(&rpy_matrix(rpy[0], rpy[1], rpy[2]), &rpy_matrix(20.0, 90.0, 50.0), 1E-6);
    }
}
