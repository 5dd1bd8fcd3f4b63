/// Roll and yaw closer than this (degrees) to the reference count as equal.
pub const PINNED_ANGLE_TOLERANCE: f64 = 1E-9;

/// Limits of the tool orientation, degrees. Pitch (the wrist rotation) may move within
/// the range, roll and yaw are pinned to the reference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationConstraints {
    /// Reference roll, pitch is only allowed to vary
    pub roll: f64,

    /// Inclusive lower pitch limit
    pub min_pitch: f64,

    /// Inclusive upper pitch limit, not less than the lower limit
    pub max_pitch: f64,

    /// Reference yaw
    pub yaw: f64,
}

impl OrientationConstraints {
    /// Returns None if `min_pitch > max_pitch` or any value is not finite.
    pub fn new(roll: f64, yaw: f64, min_pitch: f64, max_pitch: f64) -> Option<Self> {
        let all_finite = [roll, yaw, min_pitch, max_pitch].iter().all(|v| v.is_finite());
        if !all_finite || min_pitch > max_pitch {
            return None;
        }
        Some(OrientationConstraints { roll, min_pitch, max_pitch, yaw })
    }

    pub fn pitch_compliant(&self, pitch: f64) -> bool {
        pitch >= self.min_pitch && pitch <= self.max_pitch
    }

    pub fn compliant(&self, roll: f64, pitch: f64, yaw: f64) -> bool {
        (roll - self.roll).abs() <= PINNED_ANGLE_TOLERANCE
            && (yaw - self.yaw).abs() <= PINNED_ANGLE_TOLERANCE
            && self.pitch_compliant(pitch)
    }

    /// Keep only compliant orientations, given as `[roll, pitch, yaw]`.
    pub fn filter(&self, orientations: &[[f64; 3]]) -> Vec<[f64; 3]> {
        orientations.iter()
            .filter(|o| self.compliant(o[0], o[1], o[2]))
            .cloned()
            .collect()
    }

    /// Center of the pitch range.
    pub fn centered(&self) -> [f64; 3] {
        [self.roll, (self.min_pitch + self.max_pitch) / 2.0, self.yaw]
    }
}
