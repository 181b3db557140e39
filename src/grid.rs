//! Voxel grid sizing for the blob volume.
//!
//! The grid is a box of `cells` voxels centered on the world origin. It
//! also fixes the worst-case mesh size the kernel may emit.

use glam::{UVec3, Vec3};

use crate::error::BlobError;

/// Upper bound on triangles marching cubes emits for a single cell.
pub const MAX_TRIANGLES_PER_CELL: u64 = 5;

/// Largest index count a draw can address with 32-bit indices.
pub const MAX_INDEX_CAPACITY: u64 = u32::MAX as u64;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Worst-case vertex and index buffer sizes for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshCapacity {
    /// Maximum vertices: three per triangle, five triangles per cell.
    pub vertex_capacity: u64,
    /// Maximum indices. The kernel emits one index per vertex.
    pub index_capacity: u64,
}

impl MeshCapacity {
    /// Indices are always 32-bit.
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;
}

/// Resolution and physical size of the voxel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobGrid {
    /// Cells along each axis.
    pub cells: UVec3,
    /// Size of one cell along each axis.
    pub cell_size: Vec3,
}

impl BlobGrid {
    /// Cube of `cells_per_axis`^3 cells spanning `2 * volume_radius`.
    ///
    /// A zero cell count yields an empty grid with zero cell size.
    #[must_use]
    pub fn cubic(cells_per_axis: u32, volume_radius: f32) -> Self {
        let size = if cells_per_axis == 0 {
            0.0
        } else {
            volume_radius / cells_per_axis as f32 * 2.0
        };
        Self {
            cells: UVec3::splat(cells_per_axis),
            cell_size: Vec3::splat(size),
        }
    }

    /// World-space size of the whole grid.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.cells.as_vec3() * self.cell_size
    }

    /// Minimum corner; the grid is centered on the origin.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        -0.5 * self.extent()
    }

    /// Maximum corner.
    #[must_use]
    pub fn max_corner(&self) -> Vec3 {
        self.origin() + self.extent()
    }

    /// Bounds of the whole grid, used as the mesh bounds.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.origin(),
            max: self.max_corner(),
        }
    }

    /// Total number of cells, saturating at `u64::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.cells.x)
            .saturating_mul(u64::from(self.cells.y))
            .saturating_mul(u64::from(self.cells.z))
    }

    /// True when any axis has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Worst-case buffer sizes for a mesh extracted from this grid.
    ///
    /// Saturates for grids too large to mesh; [`BlobGrid::check_size`]
    /// rejects those.
    #[must_use]
    pub fn mesh_capacity(&self) -> MeshCapacity {
        let vertex_capacity = (3 * MAX_TRIANGLES_PER_CELL)
            .saturating_mul(self.cell_count());
        MeshCapacity {
            vertex_capacity,
            index_capacity: vertex_capacity,
        }
    }

    /// Check that the worst-case mesh fits 32-bit indices.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::InvalidParams`] if the grid's index capacity
    /// exceeds [`MAX_INDEX_CAPACITY`].
    pub fn check_size(&self) -> Result<(), BlobError> {
        let capacity = self.mesh_capacity().index_capacity;
        if capacity > MAX_INDEX_CAPACITY {
            return Err(BlobError::InvalidParams(format!(
                "grid of {}x{}x{} cells needs {capacity} indices, limit is \
                 {MAX_INDEX_CAPACITY}",
                self.cells.x, self.cells.y, self.cells.z
            )));
        }
        Ok(())
    }
}
