//! Animated sphere set feeding the field kernel.
//!
//! Each sphere wanders toward a random target inside the grid, picks a new
//! target on arrival, and never leaves the padded interior of the volume.

use glam::Vec3;
use rand::Rng;

use crate::{grid::BlobGrid, layout::ColorSphere};

/// Spheres closer than this to their target pick a new one without moving.
const ARRIVAL_EPSILON: f32 = 1e-5;

/// Per-sphere speed multiplier range.
const SPEED_RANGE: (f32, f32) = (0.5, 1.5);

/// Fraction of the volume radius kept free at each wall, before blending.
const BASE_PADDING: f32 = 0.3;

/// Movement per second at unit speed, as a fraction of the volume radius.
const TRAVEL_RATE: f32 = 1.5;

/// Region spheres are confined to, derived from the grid and blend radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereBounds {
    /// Minimum corner of the padded region.
    pub min: Vec3,
    /// Maximum corner of the padded region.
    pub max: Vec3,
    /// Half the edge length of the volume; scales travel speed.
    pub volume_radius: f32,
}

impl SphereBounds {
    /// Padded interior of `grid`.
    ///
    /// Blending inflates the visible surface, so the wall padding grows
    /// with `smooth_k`.
    #[must_use]
    pub fn new(grid: &BlobGrid, volume_radius: f32, smooth_k: f32) -> Self {
        let padding = volume_radius * (BASE_PADDING + smooth_k * 3.0);
        Self {
            min: grid.origin() + padding,
            max: grid.max_corner() - padding,
            volume_radius,
        }
    }

    /// Uniform random point inside the region. Axes whose padded interval
    /// has collapsed, inverted or overflowed to an infinite width yield
    /// their midpoint.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            sample_axis(rng, self.min.x, self.max.x),
            sample_axis(rng, self.min.y, self.max.y),
            sample_axis(rng, self.min.z, self.max.z),
        )
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi && (hi - lo).is_finite() {
        rng.random_range(lo..=hi)
    } else {
        (lo + hi) * 0.5
    }
}

/// Radius spread for one reseed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSpec {
    /// Mean radius.
    pub target: f32,
    /// Relative spread, 0.3 = ±30%.
    pub variance: f32,
}

impl RadiusSpec {
    fn range(self) -> (f32, f32) {
        let spread = self.target * self.variance;
        (self.target - spread, self.target + spread)
    }
}

/// Positions, targets and appearance of every active sphere.
#[derive(Debug, Clone, Default)]
pub struct SphereField {
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    radii: Vec<f32>,
    colors: Vec<Vec3>,
    speeds: Vec<f32>,
}

impl SphereField {
    /// Field with no spheres.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spheres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when there are no spheres.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current sphere centers.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current movement targets.
    #[must_use]
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    /// Sphere radii.
    #[must_use]
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    /// Replace every sphere with `count` fresh ones.
    ///
    /// Colors alternate white and black by index.
    pub fn reseed<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        radius: RadiusSpec,
        bounds: &SphereBounds,
        rng: &mut R,
    ) {
        let (min_r, max_r) = radius.range();
        self.positions = (0..count).map(|_| bounds.sample(rng)).collect();
        self.targets = (0..count).map(|_| bounds.sample(rng)).collect();
        self.radii = (0..count)
            .map(|_| sample_axis(rng, min_r, max_r))
            .collect();
        self.speeds = (0..count)
            .map(|_| rng.random_range(SPEED_RANGE.0..=SPEED_RANGE.1))
            .collect();
        self.colors = (0..count)
            .map(|i| if i % 2 == 0 { Vec3::ONE } else { Vec3::ZERO })
            .collect();
        log::debug!(
            "reseeded {count} spheres, radius {min_r:.4}..{max_r:.4}"
        );
    }

    /// Advance every sphere toward its target by `dt` seconds.
    ///
    /// Negative `dt` is treated as zero.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        speed: f32,
        bounds: &SphereBounds,
        rng: &mut R,
    ) {
        let dt = dt.max(0.0);
        for i in 0..self.positions.len() {
            let current = self.positions[i];
            let target = self.targets[i];
            let offset = target - current;
            let distance = offset.length();

            if distance < ARRIVAL_EPSILON {
                self.targets[i] = bounds.sample(rng);
                continue;
            }

            let step = speed
                * self.speeds[i]
                * dt
                * bounds.volume_radius
                * TRAVEL_RATE;
            if step >= distance {
                self.positions[i] = target;
                self.targets[i] = bounds.sample(rng);
            } else {
                self.positions[i] = current + offset / distance * step;
            }
        }
    }

    /// Kernel-ready records for every sphere.
    #[must_use]
    pub fn color_spheres(&self) -> Vec<ColorSphere> {
        let mut out = vec![ColorSphere::default(); self.len()];
        let _ = self.write_color_spheres(&mut out);
        out
    }

    /// Fill `out` with as many sphere records as fit, returning how many
    /// were written.
    pub fn write_color_spheres(&self, out: &mut [ColorSphere]) -> usize {
        let written = out.len().min(self.len());
        for (i, slot) in out.iter_mut().take(written).enumerate() {
            *slot = ColorSphere::new(
                self.positions[i],
                self.radii[i],
                self.colors[i],
            );
        }
        written
    }
}
