//! GPU resource management for the blob kernel.
//!
//! Provides headless device acquisition, the kernel's binding table, and
//! the buffers the CPU side fills each frame.

/// Kernel binding slots and bind group layout.
pub mod bindings;
/// Params, sphere, counter and mesh buffers.
pub mod buffers;
/// wgpu device and queue acquisition.
pub mod context;
