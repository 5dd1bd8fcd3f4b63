//! Random poses inside the workspace region.
//!
//! Positions are uniform over the area of the ellipse: the relative radius is drawn as
//! `sqrt(U(0, 1))`, as plain `U(0, 1)` would crowd samples around the center.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pose::RpyPose;
use crate::workspace::WorkspaceRegion;

pub struct WorkspaceSampler<R: Rng = StdRng> {
    region: WorkspaceRegion,
    rng: R,
}

impl WorkspaceSampler<StdRng> {
    /// Sampler seeded from the operating system.
    pub fn new(region: WorkspaceRegion) -> Self {
        WorkspaceSampler { region, rng: StdRng::from_entropy() }
    }

    /// Reproducible sampler.
    pub fn with_seed(region: WorkspaceRegion, seed: u64) -> Self {
        WorkspaceSampler { region, rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> WorkspaceSampler<R> {
    pub fn with_rng(region: WorkspaceRegion, rng: R) -> Self {
        WorkspaceSampler { region, rng }
    }

    pub fn region(&self) -> &WorkspaceRegion {
        &self.region
    }

    /// Random `[x, y, z]` inside the ellipse, Y at the reference value.
    pub fn sample_position(&mut self) -> [f64; 3] {
        let theta = self.rng.gen_range(0.0..2.0 * PI);
        let r = self.rng.gen_range(0.0..=1.0_f64).sqrt();
        let (x, z) = self.region.ellipse.point_at(r, theta);
        [x, self.region.y0, z]
    }

    /// Random `[roll, pitch, yaw]` in degrees. Pitch is uniform over the allowed range,
    /// roll and yaw are the reference values.
    pub fn sample_orientation(&mut self) -> [f64; 3] {
        let limits = &self.region.orientation;
        let pitch = self.rng.gen_range(limits.min_pitch..=limits.max_pitch);
        [limits.roll, pitch, limits.yaw]
    }

    pub fn sample_pose(&mut self) -> RpyPose {
        let position = self.sample_position();
        let orientation = self.sample_orientation();
        RpyPose::from_parts(position, orientation)
    }
}
