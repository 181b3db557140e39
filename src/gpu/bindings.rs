//! Binding slots shared with the blob kernel.
//!
//! Slot numbers follow the kernel's argument table: outputs first, then the
//! counter, then the inputs.

use std::num::NonZeroU64;

use crate::layout::{
    ColorSphere, MarchingCubesColorBlobParams, VertexPositionNormalColor,
};

/// Output vertex buffer (storage, read-write).
pub const VERTICES: u32 = 0;
/// Output index buffer (storage, read-write).
pub const INDICES: u32 = 1;
/// Atomic vertex counter (storage, read-write, one `u32`).
pub const VERTEX_COUNT: u32 = 2;
/// Params uniform block.
pub const PARAMS: u32 = 3;
/// Sphere array (storage, read-only).
pub const SPHERES: u32 = 4;

const INDEX_SIZE: u64 = size_of::<u32>() as u64;

fn entry(
    binding: u32,
    ty: wgpu::BufferBindingType,
    min_size: u64,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty,
            has_dynamic_offset: false,
            min_binding_size: NonZeroU64::new(min_size),
        },
        count: None,
    }
}

fn storage(read_only: bool) -> wgpu::BufferBindingType {
    wgpu::BufferBindingType::Storage { read_only }
}

/// Layout entries for all five slots, ordered by binding.
#[must_use]
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 5] {
    [
        entry(
            VERTICES,
            storage(false),
            VertexPositionNormalColor::STRIDE as u64,
        ),
        entry(INDICES, storage(false), INDEX_SIZE),
        entry(VERTEX_COUNT, storage(false), INDEX_SIZE),
        entry(
            PARAMS,
            wgpu::BufferBindingType::Uniform,
            MarchingCubesColorBlobParams::SIZE as u64,
        ),
        entry(SPHERES, storage(true), ColorSphere::SIZE as u64),
    ]
}

/// Bind group layout for the blob kernel.
#[must_use]
pub fn create_bind_group_layout(
    device: &wgpu::Device,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Blob Kernel Layout"),
        entries: &bind_group_layout_entries(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_ty(
        e: &wgpu::BindGroupLayoutEntry,
    ) -> (wgpu::BufferBindingType, u64) {
        match e.ty {
            wgpu::BindingType::Buffer {
                ty,
                min_binding_size,
                ..
            } => (ty, min_binding_size.map_or(0, NonZeroU64::get)),
            other => panic!("unexpected binding type {other:?}"),
        }
    }

    #[test]
    fn slots_are_contiguous_and_compute_only() {
        let entries = bind_group_layout_entries();
        for (i, e) in entries.iter().enumerate() {
            assert_eq!(e.binding as usize, i);
            assert_eq!(e.visibility, wgpu::ShaderStages::COMPUTE);
        }
    }

    #[test]
    fn params_are_uniform_and_spheres_read_only() {
        let entries = bind_group_layout_entries();
        assert_eq!(
            buffer_ty(&entries[PARAMS as usize]),
            (wgpu::BufferBindingType::Uniform, 64)
        );
        assert_eq!(
            buffer_ty(&entries[SPHERES as usize]),
            (wgpu::BufferBindingType::Storage { read_only: true }, 32)
        );
        assert_eq!(
            buffer_ty(&entries[VERTICES as usize]),
            (wgpu::BufferBindingType::Storage { read_only: false }, 36)
        );
        assert_eq!(buffer_ty(&entries[VERTEX_COUNT as usize]).1, 4);
    }
}
