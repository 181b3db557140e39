//! Byte-level encoding of the blob records.
//!
//! Encoding is a straight `bytemuck` cast, so padding words are written
//! exactly as stored. Decoding copies out of possibly unaligned input.

use super::{params::MarchingCubesColorBlobParams, sphere::ColorSphere};
use crate::error::BlobError;

/// Bytes of a params uniform block.
#[must_use]
pub fn encode_params(params: &MarchingCubesColorBlobParams) -> Vec<u8> {
    bytemuck::bytes_of(params).to_vec()
}

/// Read a params block from exactly [`MarchingCubesColorBlobParams::SIZE`]
/// bytes.
///
/// # Errors
///
/// Returns [`BlobError::BufferSize`] when `bytes` has any other length.
pub fn decode_params(
    bytes: &[u8],
) -> Result<MarchingCubesColorBlobParams, BlobError> {
    if bytes.len() != MarchingCubesColorBlobParams::SIZE {
        return Err(BlobError::BufferSize {
            expected: MarchingCubesColorBlobParams::SIZE,
            actual: bytes.len(),
        });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
}

/// Bytes of a sphere array, [`ColorSphere::SIZE`] per record.
#[must_use]
pub fn encode_spheres(spheres: &[ColorSphere]) -> Vec<u8> {
    bytemuck::cast_slice(spheres).to_vec()
}

/// Read the first `sphere_count` spheres from a sphere buffer.
///
/// The buffer may hold more records than are active (a GPU buffer is
/// allocated for the maximum sphere count), but never fewer.
///
/// # Errors
///
/// Returns [`BlobError::BufferSize`] when the length is not a whole number
/// of records, and [`BlobError::SphereCountExceedsArray`] when fewer than
/// `sphere_count` records are present.
pub fn decode_spheres(
    bytes: &[u8],
    sphere_count: u32,
) -> Result<Vec<ColorSphere>, BlobError> {
    if bytes.len() % ColorSphere::SIZE != 0 {
        let whole = bytes.len() / ColorSphere::SIZE;
        return Err(BlobError::BufferSize {
            expected: whole * ColorSphere::SIZE,
            actual: bytes.len(),
        });
    }

    let available = bytes.len() / ColorSphere::SIZE;
    if sphere_count as usize > available {
        return Err(BlobError::SphereCountExceedsArray {
            sphere_count,
            len: available,
        });
    }

    Ok(bytes
        .chunks_exact(ColorSphere::SIZE)
        .take(sphere_count as usize)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

#[cfg(test)]
mod tests {
    use glam::{UVec3, Vec3};

    use super::*;

    fn sample_params(sphere_count: u32) -> MarchingCubesColorBlobParams {
        MarchingCubesColorBlobParams::new(
            UVec3::new(40, 32, 16),
            Vec3::splat(-0.175),
            Vec3::splat(0.00875),
            0.0,
            sphere_count,
            0.055,
        )
    }

    fn sample_spheres() -> Vec<ColorSphere> {
        let mut spheres = vec![
            ColorSphere::new(Vec3::new(0.01, -0.02, 0.03), 0.0125, Vec3::ONE),
            ColorSphere::new(Vec3::new(-0.05, 0.0, 0.1), 0.009, Vec3::ZERO),
            ColorSphere::new(Vec3::ZERO, 0.0, Vec3::new(0.2, 0.4, 0.6)),
        ];
        // Odd pad values must survive the trip untouched.
        spheres[1]._pad = f32::from_bits(0x7fc0_1234);
        spheres[2]._pad = -0.0;
        spheres
    }

    #[test]
    fn params_and_spheres_survive_bit_exact() {
        let mut params = sample_params(3);
        params._pad0 = 0xdead_beef;
        params._pad2 = [1, 2];
        let spheres = sample_spheres();

        let params_bytes = encode_params(&params);
        let sphere_bytes = encode_spheres(&spheres);
        assert_eq!(params_bytes.len(), 64);
        assert_eq!(sphere_bytes.len(), 3 * 32);

        let decoded_params = decode_params(&params_bytes).unwrap();
        assert_eq!(bytemuck::bytes_of(&decoded_params), &params_bytes[..]);
        assert_eq!(decoded_params.sphere_count, 3);

        let decoded =
            decode_spheres(&sphere_bytes, decoded_params.sphere_count).unwrap();
        assert_eq!(decoded.len(), spheres.len());
        for (a, b) in decoded.iter().zip(&spheres) {
            assert_eq!(bytemuck::bytes_of(a), bytemuck::bytes_of(b));
        }
        assert_eq!(decoded[1]._pad.to_bits(), 0x7fc0_1234);
        assert!(decoded[2]._pad.is_sign_negative());
    }

    #[test]
    fn decode_reads_from_unaligned_input() {
        let params = sample_params(0);
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&encode_params(&params));
        assert_eq!(decode_params(&shifted[1..]).unwrap(), params);
    }

    #[test]
    fn params_length_must_match() {
        let bytes = encode_params(&sample_params(0));
        assert!(matches!(
            decode_params(&bytes[..60]),
            Err(BlobError::BufferSize {
                expected: 64,
                actual: 60
            })
        ));
    }

    #[test]
    fn only_active_spheres_are_returned() {
        let bytes = encode_spheres(&sample_spheres());
        let decoded = decode_spheres(&bytes, 1).unwrap();
        assert_eq!(decoded, vec![sample_spheres()[0]]);
    }

    #[test]
    fn count_past_buffer_is_rejected() {
        let bytes = encode_spheres(&sample_spheres());
        assert!(matches!(
            decode_spheres(&bytes, 4),
            Err(BlobError::SphereCountExceedsArray {
                sphere_count: 4,
                len: 3
            })
        ));
    }

    #[test]
    fn partial_record_is_rejected() {
        let bytes = encode_spheres(&sample_spheres());
        assert!(matches!(
            decode_spheres(&bytes[..40], 1),
            Err(BlobError::BufferSize {
                expected: 32,
                actual: 40
            })
        ));
    }

    #[test]
    fn empty_inputs_do_not_panic() {
        let params = MarchingCubesColorBlobParams::new(
            UVec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            0.0,
            0,
            0.0,
        );
        let decoded = decode_params(&encode_params(&params)).unwrap();
        assert_eq!(decoded.cells(), UVec3::ZERO);
        assert!(decode_spheres(&[], 0).unwrap().is_empty());
        assert!(decoded.validate(&[]).is_ok());
    }
}
