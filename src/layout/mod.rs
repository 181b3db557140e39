//! Fixed-layout records shared with the GPU kernels.
//!
//! Every record is `#[repr(C)]` + `bytemuck::Pod` and mirrors a WGSL struct
//! in [`BLOB_TYPES_WGSL`]. Kernels bind to these by byte offset, so field
//! order, vector widths and padding are part of the contract.

/// Byte encoding and decoding of params and sphere buffers.
pub mod codec;
mod params;
mod sphere;
mod vertex;

pub use codec::{decode_params, decode_spheres, encode_params, encode_spheres};
pub use params::MarchingCubesColorBlobParams;
pub use sphere::ColorSphere;
pub use vertex::VertexPositionNormalColor;

/// WGSL declarations of the three records, for prepending to kernel source.
pub const BLOB_TYPES_WGSL: &str = include_str!("blob_types.wgsl");
