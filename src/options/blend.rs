use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How neighbouring sphere fields merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Blend", inline)]
#[serde(default)]
pub struct BlendOptions {
    /// Smoothing coefficient handed to the kernel. 0 = hard union.
    #[schemars(title = "Smooth K", range(min = 0.0, max = 0.12), extend("step" = 0.001))]
    pub smooth_k: f32,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self { smooth_k: 0.055 }
    }
}
