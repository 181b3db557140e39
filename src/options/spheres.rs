use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spheres", inline)]
#[serde(default)]
/// Size, count and motion of the animated spheres.
pub struct SphereOptions {
    /// Number of active spheres.
    #[schemars(title = "Spheres", range(min = 1, max = 64), extend("step" = 1))]
    pub count: usize,
    /// Slots allocated in the GPU sphere buffer.
    #[schemars(skip)]
    pub max_spheres: usize,
    /// Mean sphere radius.
    #[schemars(title = "Target Radius", range(min = 0.005, max = 0.05), extend("step" = 0.0005))]
    pub target_radius: f32,
    /// Relative spread of radii around `target_radius` (0.3 = ±30%).
    #[schemars(title = "Radius Variance", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub radius_variance: f32,
    /// Global movement speed multiplier.
    #[schemars(title = "Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub speed: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            count: 24,
            max_spheres: 64,
            target_radius: 0.0125,
            radius_variance: 0.3,
            speed: 0.25,
        }
    }
}
