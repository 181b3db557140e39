//! Per-frame driver for the blob volume.
//!
//! [`BlobScene`] owns the options, the grid and the animated spheres, and
//! produces the params block and sphere array the kernel consumes each
//! frame. It also turns the kernel's vertex counter back into a drawable
//! mesh range.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::BlobError,
    grid::{Aabb, BlobGrid},
    layout::{ColorSphere, MarchingCubesColorBlobParams},
    options::Options,
    spheres::{RadiusSpec, SphereBounds, SphereField},
};

/// Everything uploaded for one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobFrame {
    /// Uniform block; `sphere_count == spheres.len()`.
    pub params: MarchingCubesColorBlobParams,
    /// Active spheres.
    pub spheres: Vec<ColorSphere>,
}

/// Draw range of the extracted mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPart {
    /// Indices to draw as a triangle list.
    pub index_count: u32,
    /// Bounds of the whole grid.
    pub bounds: Aabb,
}

/// Animated sphere scene over a fixed voxel grid.
pub struct BlobScene<R = StdRng> {
    options: Options,
    grid: BlobGrid,
    field: SphereField,
    rng: R,
}

impl BlobScene<StdRng> {
    /// Scene seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Same as [`BlobScene::with_rng`].
    pub fn new(options: Options) -> Result<Self, BlobError> {
        Self::with_rng(options, StdRng::from_os_rng())
    }
}

impl<R: Rng> BlobScene<R> {
    /// Scene driven by the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::SphereCountExceedsCapacity`] if the configured
    /// sphere count exceeds `max_spheres`, and [`BlobError::InvalidParams`]
    /// if the grid is too large to mesh with 32-bit indices.
    pub fn with_rng(options: Options, rng: R) -> Result<Self, BlobError> {
        check_capacity(options.spheres.count, options.spheres.max_spheres)?;
        let grid = options.grid.grid();
        grid.check_size()?;
        if grid.is_empty() {
            log::warn!("blob grid has no cells; kernel output will be empty");
        }
        let mut scene = Self {
            options,
            grid,
            field: SphereField::new(),
            rng,
        };
        scene.reseed();
        log::info!(
            "blob scene: {} cells per axis, {} spheres",
            scene.options.grid.cells_per_axis,
            scene.options.spheres.count
        );
        Ok(scene)
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Voxel grid.
    #[must_use]
    pub fn grid(&self) -> &BlobGrid {
        &self.grid
    }

    /// Animated spheres.
    #[must_use]
    pub fn field(&self) -> &SphereField {
        &self.field
    }

    /// Change the number of spheres and reseed all of them.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::SphereCountExceedsCapacity`] if `count` exceeds
    /// `max_spheres`; the scene is left unchanged.
    pub fn set_sphere_count(&mut self, count: usize) -> Result<(), BlobError> {
        check_capacity(count, self.options.spheres.max_spheres)?;
        self.options.spheres.count = count;
        self.reseed();
        Ok(())
    }

    /// Change the mean radius and reseed.
    pub fn set_target_radius(&mut self, radius: f32) {
        self.options.spheres.target_radius = radius;
        self.reseed();
    }

    /// Change the radius spread and reseed.
    pub fn set_radius_variance(&mut self, variance: f32) {
        self.options.spheres.radius_variance = variance;
        self.reseed();
    }

    /// Change the blend coefficient. Existing spheres keep moving; the new
    /// padding applies to targets picked from now on.
    pub fn set_smooth_k(&mut self, smooth_k: f32) {
        self.options.blend.smooth_k = smooth_k;
    }

    /// Change the global movement speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.options.spheres.speed = speed;
    }

    /// Advance the animation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let bounds = self.bounds();
        self.field.update(
            dt,
            self.options.spheres.speed,
            &bounds,
            &mut self.rng,
        );
    }

    /// Params block for the current state.
    #[must_use]
    pub fn params(&self) -> MarchingCubesColorBlobParams {
        MarchingCubesColorBlobParams::new(
            self.grid.cells,
            self.grid.origin(),
            self.grid.cell_size,
            self.options.grid.iso_level,
            self.field.len() as u32,
            self.options.blend.smooth_k,
        )
    }

    /// Params and spheres for one dispatch, checked against each other.
    ///
    /// # Errors
    ///
    /// Propagates [`MarchingCubesColorBlobParams::validate`] failures, e.g.
    /// a negative `smooth_k` or radius set through the options.
    pub fn frame(&self) -> Result<BlobFrame, BlobError> {
        let params = self.params();
        let spheres = self.field.color_spheres();
        params.validate(&spheres)?;
        log::debug!(
            "frame: {} spheres, smooth_k {:.3}",
            params.sphere_count,
            params.smooth_k
        );
        Ok(BlobFrame { params, spheres })
    }

    /// Mesh range for the vertex count the kernel reported.
    ///
    /// A count past the grid's capacity means the counter overran the
    /// buffer; it is clamped so the draw stays in bounds.
    #[must_use]
    pub fn mesh_part(&self, vertex_count: u32) -> MeshPart {
        let capacity = self.grid.mesh_capacity().index_capacity;
        let index_count = if u64::from(vertex_count) > capacity {
            log::warn!(
                "kernel reported {vertex_count} vertices, capacity is \
                 {capacity}; clamping"
            );
            u32::try_from(capacity).unwrap_or(u32::MAX)
        } else {
            vertex_count
        };
        MeshPart {
            index_count,
            bounds: self.grid.bounds(),
        }
    }

    fn bounds(&self) -> SphereBounds {
        SphereBounds::new(
            &self.grid,
            self.options.grid.volume_radius,
            self.options.blend.smooth_k,
        )
    }

    fn reseed(&mut self) {
        let bounds = self.bounds();
        let radius = RadiusSpec {
            target: self.options.spheres.target_radius,
            variance: self.options.spheres.radius_variance,
        };
        self.field.reseed(
            self.options.spheres.count,
            radius,
            &bounds,
            &mut self.rng,
        );
    }
}

fn check_capacity(count: usize, capacity: usize) -> Result<(), BlobError> {
    if count > capacity {
        return Err(BlobError::SphereCountExceedsCapacity {
            sphere_count: count,
            capacity,
        });
    }
    Ok(())
}
