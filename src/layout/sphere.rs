use glam::Vec3;

/// One influence sphere read by the field kernel.
/// Must match the WGSL `ColorSphere` struct layout (32 bytes).
///
/// WGSL layout:
///   center: vec3<f32>   (offset 0,  align 16)
///   radius: f32         (offset 12)
///   color:  vec3<f32>   (offset 16, align 16)
///   _pad:   f32         (offset 28)
///   Total: 32 bytes
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct ColorSphere {
    /// World-space center.
    pub center: [f32; 3],
    /// Influence radius, non-negative.
    pub radius: f32,
    /// RGB color, conventionally in `0..=1`.
    pub color: [f32; 3],
    /// Tail padding to a 16-byte boundary. Carried through untouched.
    pub _pad: f32,
}

impl ColorSphere {
    /// Size of one record in a sphere buffer.
    pub const SIZE: usize = size_of::<Self>();

    /// Sphere with zeroed padding.
    #[must_use]
    pub fn new(center: Vec3, radius: f32, color: Vec3) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color: color.to_array(),
            _pad: 0.0,
        }
    }

    /// Center as a glam vector.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    /// Color as a glam vector.
    #[must_use]
    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    /// Reason this sphere cannot be fed to the kernel, if any.
    pub(crate) fn defect(&self) -> Option<&'static str> {
        if !self.radius.is_finite() {
            Some("radius is not finite")
        } else if self.radius < 0.0 {
            Some("radius is negative")
        } else if !self.center().is_finite() {
            Some("center is not finite")
        } else if !self.color().is_finite() {
            Some("color is not finite")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn eight_floats_with_trailing_pad() {
        assert_eq!(ColorSphere::SIZE, 32);
        assert_eq!(align_of::<ColorSphere>(), 4);
        assert_eq!(offset_of!(ColorSphere, center), 0);
        assert_eq!(offset_of!(ColorSphere, radius), 12);
        assert_eq!(offset_of!(ColorSphere, color), 16);
        assert_eq!(offset_of!(ColorSphere, _pad), 28);
    }

    #[test]
    fn new_zeroes_padding() {
        let s = ColorSphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5, Vec3::ONE);
        assert_eq!(s._pad, 0.0);
        assert_eq!(s.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.color(), Vec3::ONE);
    }

    #[test]
    fn defects_are_reported() {
        let ok = ColorSphere::new(Vec3::ZERO, 0.0, Vec3::ZERO);
        assert_eq!(ok.defect(), None);

        let negative = ColorSphere::new(Vec3::ZERO, -0.1, Vec3::ZERO);
        assert_eq!(negative.defect(), Some("radius is negative"));

        let nan_center =
            ColorSphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, Vec3::ZERO);
        assert_eq!(nan_center.defect(), Some("center is not finite"));
    }
}
