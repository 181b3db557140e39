use super::bindings;
use crate::{
    error::BlobError,
    grid::{BlobGrid, MeshCapacity},
    layout::{
        ColorSphere, MarchingCubesColorBlobParams, VertexPositionNormalColor,
    },
    scene::BlobFrame,
};

/// Byte sizes of every blob buffer for one grid and sphere budget.
///
/// Empty grids and zero sphere budgets still get one record, so every
/// buffer satisfies its binding's minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSizes {
    /// Params uniform block.
    pub params: u64,
    /// Sphere storage array.
    pub spheres: u64,
    /// Vertex counter.
    pub vertex_count: u64,
    /// Output vertices.
    pub vertices: u64,
    /// Output indices.
    pub indices: u64,
}

impl BufferSizes {
    /// Sizes for `capacity` and `max_spheres`.
    #[must_use]
    pub fn new(capacity: MeshCapacity, max_spheres: usize) -> Self {
        Self {
            params: MarchingCubesColorBlobParams::SIZE as u64,
            spheres: (max_spheres.max(1) as u64)
                .saturating_mul(ColorSphere::SIZE as u64),
            vertex_count: size_of::<u32>() as u64,
            vertices: capacity
                .vertex_capacity
                .max(1)
                .saturating_mul(VertexPositionNormalColor::STRIDE as u64),
            indices: capacity
                .index_capacity
                .max(1)
                .saturating_mul(size_of::<u32>() as u64),
        }
    }
}

/// GPU buffers bound to the blob kernel, sized for one grid.
pub struct BlobBuffers {
    params: wgpu::Buffer,
    spheres: wgpu::Buffer,
    vertex_count: wgpu::Buffer,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    capacity: MeshCapacity,
    max_spheres: usize,
}

impl BlobBuffers {
    /// Allocate every buffer for `grid`, with room for `max_spheres`.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        grid: &BlobGrid,
        max_spheres: usize,
    ) -> Self {
        let capacity = grid.mesh_capacity();
        let sizes = BufferSizes::new(capacity, max_spheres);
        log::debug!(
            "allocating blob buffers: {} vertices, {} spheres",
            capacity.vertex_capacity,
            max_spheres
        );

        let create = |label: &str, size: u64, usage: wgpu::BufferUsages| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size,
                usage,
                mapped_at_creation: false,
            })
        };

        Self {
            params: create(
                "Blob Params",
                sizes.params,
                wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            ),
            spheres: create(
                "Blob Spheres",
                sizes.spheres,
                wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            ),
            vertex_count: create(
                "Blob Vertex Count",
                sizes.vertex_count,
                wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_DST
                    | wgpu::BufferUsages::COPY_SRC,
            ),
            vertices: create(
                "Blob Vertices",
                sizes.vertices,
                wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::STORAGE,
            ),
            indices: create(
                "Blob Indices",
                sizes.indices,
                wgpu::BufferUsages::INDEX | wgpu::BufferUsages::STORAGE,
            ),
            capacity,
            max_spheres,
        }
    }

    /// Write one frame's params and spheres and zero the vertex counter.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::SphereCountExceedsCapacity`] if the frame holds
    /// more spheres than were allocated, or any
    /// [`MarchingCubesColorBlobParams::validate`] failure. Nothing is
    /// written on error.
    pub fn upload(
        &self,
        queue: &wgpu::Queue,
        frame: &BlobFrame,
    ) -> Result<(), BlobError> {
        check_frame(frame, self.max_spheres)?;

        queue.write_buffer(&self.params, 0, bytemuck::bytes_of(&frame.params));
        if !frame.spheres.is_empty() {
            queue.write_buffer(
                &self.spheres,
                0,
                bytemuck::cast_slice(&frame.spheres),
            );
        }
        self.reset_vertex_count(queue);
        Ok(())
    }

    /// Zero the kernel's vertex counter before a dispatch.
    pub fn reset_vertex_count(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.vertex_count, 0, bytemuck::bytes_of(&0u32));
    }

    /// Bind group wiring every buffer to its kernel slot.
    #[must_use]
    pub fn bind_group(
        &self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Blob Kernel Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: bindings::VERTICES,
                    resource: self.vertices.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::INDICES,
                    resource: self.indices.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::VERTEX_COUNT,
                    resource: self.vertex_count.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::PARAMS,
                    resource: self.params.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::SPHERES,
                    resource: self.spheres.as_entire_binding(),
                },
            ],
        })
    }

    /// Output vertex buffer, drawable with [`VertexPositionNormalColor::desc`].
    #[must_use]
    pub fn vertices(&self) -> &wgpu::Buffer {
        &self.vertices
    }

    /// Output index buffer, [`MeshCapacity::INDEX_FORMAT`] indices.
    #[must_use]
    pub fn indices(&self) -> &wgpu::Buffer {
        &self.indices
    }

    /// Vertex counter the kernel increments; copy it out to read back.
    #[must_use]
    pub fn vertex_count(&self) -> &wgpu::Buffer {
        &self.vertex_count
    }

    /// Worst-case mesh size these buffers hold.
    #[must_use]
    pub fn capacity(&self) -> MeshCapacity {
        self.capacity
    }

    /// Sphere slots allocated.
    #[must_use]
    pub fn max_spheres(&self) -> usize {
        self.max_spheres
    }
}

/// Check that `frame` fits `max_spheres` sphere slots and that its params
/// agree with its spheres.
///
/// # Errors
///
/// Returns [`BlobError::SphereCountExceedsCapacity`] for too many spheres,
/// otherwise any [`MarchingCubesColorBlobParams::validate`] failure.
pub fn check_frame(
    frame: &BlobFrame,
    max_spheres: usize,
) -> Result<(), BlobError> {
    if frame.spheres.len() > max_spheres {
        return Err(BlobError::SphereCountExceedsCapacity {
            sphere_count: frame.spheres.len(),
            capacity: max_spheres,
        });
    }
    frame.params.validate(&frame.spheres)
}
