use glam::{UVec3, Vec3};

use super::sphere::ColorSphere;
use crate::error::BlobError;

/// Uniform block configuring one field-evaluation / triangulation dispatch.
/// Must match the WGSL `MarchingCubesColorBlobParams` layout (64 bytes).
///
/// WGSL layout (auto-padded):
///   cells:        vec3<u32>   (offset 0,  align 16)
///   _pad0:        u32         (offset 12)
///   origin:       vec3<f32>   (offset 16, align 16)
///   _pad1:        u32         (offset 28)
///   cell_size:    vec3<f32>   (offset 32, align 16)
///   iso_level:    f32         (offset 44)
///   sphere_count: u32         (offset 48)
///   smooth_k:     f32         (offset 52)
///   _pad2:        [u32; 2]    (offset 56)
///   Total: 64 bytes
///
/// Metal's `simd_float3` members are 16 bytes wide, so a Metal kernel sees
/// `iso_level` at 48 and shifts the scalars after it. Only WGSL offsets are
/// matched here.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarchingCubesColorBlobParams {
    /// Voxel cells along each axis.
    pub cells: [u32; 3],
    /// Tail padding of `cells`.
    pub _pad0: u32,
    /// World-space minimum corner of the grid.
    pub origin: [f32; 3],
    /// Tail padding of `origin`.
    pub _pad1: u32,
    /// Physical size of one cell along each axis.
    pub cell_size: [f32; 3],
    /// Field value at which the surface is extracted.
    pub iso_level: f32,
    /// Number of valid entries in the accompanying sphere buffer.
    pub sphere_count: u32,
    /// Blend coefficient for merging neighbouring sphere fields.
    pub smooth_k: f32,
    /// Rounds the block up to a 16-byte multiple.
    pub _pad2: [u32; 2],
}

impl MarchingCubesColorBlobParams {
    /// Size of the uniform block in bytes.
    pub const SIZE: usize = size_of::<Self>();

    /// Params with zeroed padding.
    #[must_use]
    pub fn new(
        cells: UVec3,
        origin: Vec3,
        cell_size: Vec3,
        iso_level: f32,
        sphere_count: u32,
        smooth_k: f32,
    ) -> Self {
        Self {
            cells: cells.to_array(),
            _pad0: 0,
            origin: origin.to_array(),
            _pad1: 0,
            cell_size: cell_size.to_array(),
            iso_level,
            sphere_count,
            smooth_k,
            _pad2: [0; 2],
        }
    }

    /// Grid resolution as a glam vector.
    #[must_use]
    pub fn cells(&self) -> UVec3 {
        UVec3::from_array(self.cells)
    }

    /// Grid origin as a glam vector.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    /// Cell size as a glam vector.
    #[must_use]
    pub fn cell_size(&self) -> Vec3 {
        Vec3::from_array(self.cell_size)
    }

    /// Check these params against the sphere array they will be bound with.
    ///
    /// Zero cells and zero spheres are accepted: the dispatch is simply
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::SphereCountExceedsArray`] when `sphere_count` is
    /// larger than `spheres.len()`, [`BlobError::InvalidSphere`] for a bad
    /// sphere inside the active range, and [`BlobError::InvalidParams`] for
    /// non-finite grid values or a negative `smooth_k`.
    pub fn validate(&self, spheres: &[ColorSphere]) -> Result<(), BlobError> {
        let active = self.sphere_count as usize;
        if active > spheres.len() {
            return Err(BlobError::SphereCountExceedsArray {
                sphere_count: self.sphere_count,
                len: spheres.len(),
            });
        }

        if !self.origin().is_finite() {
            return Err(BlobError::InvalidParams(
                "origin is not finite".to_owned(),
            ));
        }
        if !self.cell_size().is_finite() {
            return Err(BlobError::InvalidParams(
                "cell size is not finite".to_owned(),
            ));
        }
        if !self.iso_level.is_finite() {
            return Err(BlobError::InvalidParams(
                "iso level is not finite".to_owned(),
            ));
        }
        if !self.smooth_k.is_finite() || self.smooth_k < 0.0 {
            return Err(BlobError::InvalidParams(format!(
                "smooth_k must be finite and non-negative, got {}",
                self.smooth_k
            )));
        }

        for (index, sphere) in spheres[..active].iter().enumerate() {
            if let Some(reason) = sphere.defect() {
                return Err(BlobError::InvalidSphere { index, reason });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    fn params(sphere_count: u32) -> MarchingCubesColorBlobParams {
        MarchingCubesColorBlobParams::new(
            UVec3::splat(4),
            Vec3::splat(-1.0),
            Vec3::splat(0.5),
            0.0,
            sphere_count,
            0.05,
        )
    }

    #[test]
    fn offsets_follow_wgsl_vec3_alignment() {
        type P = MarchingCubesColorBlobParams;
        assert_eq!(P::SIZE, 64);
        assert_eq!(P::SIZE % 16, 0);
        assert_eq!(offset_of!(P, cells), 0);
        assert_eq!(offset_of!(P, origin), 16);
        assert_eq!(offset_of!(P, cell_size), 32);
        assert_eq!(offset_of!(P, iso_level), 44);
        assert_eq!(offset_of!(P, sphere_count), 48);
        assert_eq!(offset_of!(P, smooth_k), 52);
    }

    #[test]
    fn sphere_count_within_array_is_accepted() {
        let spheres = vec![ColorSphere::new(Vec3::ZERO, 0.1, Vec3::ONE); 3];
        assert!(params(3).validate(&spheres).is_ok());
        assert!(params(2).validate(&spheres).is_ok());
    }

    #[test]
    fn sphere_count_past_array_is_rejected() {
        let spheres = vec![ColorSphere::new(Vec3::ZERO, 0.1, Vec3::ONE); 2];
        let err = params(3).validate(&spheres).unwrap_err();
        assert!(matches!(
            err,
            BlobError::SphereCountExceedsArray {
                sphere_count: 3,
                len: 2
            }
        ));
    }

    #[test]
    fn degenerate_grid_and_no_spheres_are_legal() {
        let p = MarchingCubesColorBlobParams::new(
            UVec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            0.0,
            0,
            0.0,
        );
        assert!(p.validate(&[]).is_ok());
    }

    #[test]
    fn spheres_beyond_count_are_not_inspected() {
        let spheres = [
            ColorSphere::new(Vec3::ZERO, 0.1, Vec3::ONE),
            ColorSphere::new(Vec3::ZERO, -1.0, Vec3::ONE),
        ];
        assert!(params(1).validate(&spheres).is_ok());
        assert!(matches!(
            params(2).validate(&spheres),
            Err(BlobError::InvalidSphere { index: 1, .. })
        ));
    }

    #[test]
    fn negative_smooth_k_is_rejected() {
        let mut p = params(0);
        p.smooth_k = -0.01;
        assert!(matches!(p.validate(&[]), Err(BlobError::InvalidParams(_))));
    }
}
