use glam::Vec3;

/// One output vertex written by the triangulation kernel.
///
/// Tightly packed, 36 bytes. The WGSL side declares the members as
/// `array<f32, 3>` so a storage-buffer writer sees the same stride as the
/// vertex fetch.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexPositionNormalColor {
    /// Position in grid (world) space.
    pub position: [f32; 3],
    /// Unit or near-unit surface normal.
    pub normal: [f32; 3],
    /// RGB color sampled at the vertex.
    pub color: [f32; 3],
}

impl VertexPositionNormalColor {
    /// Byte stride between consecutive vertices.
    pub const STRIDE: usize = size_of::<Self>();

    /// Position, normal and color at shader locations 0, 1 and 2.
    pub const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
    ];

    /// Vertex-buffer layout for a render pipeline drawing the kernel output.
    #[must_use]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    /// Vertex from glam vectors.
    #[inline]
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}
