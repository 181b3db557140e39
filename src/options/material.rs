use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Surface shading handed to the renderer that draws the extracted mesh.
/// The blob kernel itself never reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Material", inline)]
#[serde(default)]
pub struct MaterialOptions {
    /// Microfacet roughness. 0 = mirror, 1 = fully diffuse.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Metalness.
    #[schemars(title = "Metallic", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metallic: f32,
    /// Specular reflectance of the dielectric part.
    #[schemars(title = "Specular", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub specular: f32,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            roughness: 0.5,
            metallic: 0.0,
            specular: 0.5,
        }
    }
}

impl MaterialOptions {
    /// Copy with every parameter clamped to `[0, 1]`; NaN becomes 0.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let unit = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            roughness: unit(self.roughness),
            metallic: unit(self.metallic),
            specular: unit(self.specular),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_values_in_unit_range() {
        let wild = MaterialOptions {
            roughness: 1.5,
            metallic: -0.2,
            specular: f32::NAN,
        };
        assert_eq!(
            wild.clamped(),
            MaterialOptions {
                roughness: 1.0,
                metallic: 0.0,
                specular: 0.0,
            }
        );
        let defaults = MaterialOptions::default();
        assert_eq!(defaults.clamped(), defaults);
    }
}
