//! Crate-level error types.

use std::fmt;

use crate::gpu::context::GpuContextError;

/// Errors produced by the colorblob crate.
#[derive(Debug)]
pub enum BlobError {
    /// The params claim more spheres than the supplied array holds.
    SphereCountExceedsArray {
        /// `sphere_count` carried by the params.
        sphere_count: u32,
        /// Number of sphere records actually supplied.
        len: usize,
    },
    /// More spheres than the GPU sphere buffer was allocated for.
    SphereCountExceedsCapacity {
        /// Requested sphere count.
        sphere_count: usize,
        /// Allocated sphere slots.
        capacity: usize,
    },
    /// A sphere within the active range carries unusable values.
    InvalidSphere {
        /// Index of the offending sphere.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Grid or blend parameters are not finite or out of range.
    InvalidParams(String),
    /// A byte buffer had the wrong length for the record being decoded.
    BufferSize {
        /// Byte length required.
        expected: usize,
        /// Byte length supplied.
        actual: usize,
    },
    /// GPU context initialization failure.
    Gpu(GpuContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SphereCountExceedsArray { sphere_count, len } => write!(
                f,
                "sphere count {sphere_count} exceeds sphere array length {len}"
            ),
            Self::SphereCountExceedsCapacity {
                sphere_count,
                capacity,
            } => write!(
                f,
                "sphere count {sphere_count} exceeds sphere buffer capacity \
                 {capacity}"
            ),
            Self::InvalidSphere { index, reason } => {
                write!(f, "invalid sphere {index}: {reason}")
            }
            Self::InvalidParams(msg) => write!(f, "invalid blob params: {msg}"),
            Self::BufferSize { expected, actual } => write!(
                f,
                "buffer size mismatch: expected {expected} bytes, got {actual}"
            ),
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BlobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GpuContextError> for BlobError {
    fn from(e: GpuContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for BlobError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_counts() {
        let err = BlobError::SphereCountExceedsArray {
            sphere_count: 5,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "sphere count 5 exceeds sphere array length 3"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = BlobError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&BlobError::InvalidParams(
            String::new()
        ))
        .is_none());
    }
}
