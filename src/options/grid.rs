use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grid::BlobGrid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
/// Voxel grid resolution and extraction threshold.
pub struct GridOptions {
    /// Half the edge length of the cubic volume, in world units.
    #[schemars(skip)]
    pub volume_radius: f32,
    /// Cells along each axis. Memory grows with the cube of this value.
    #[schemars(title = "Cells Per Axis", range(min = 8, max = 80), extend("step" = 1))]
    pub cells_per_axis: u32,
    /// Field value the surface is extracted at.
    #[schemars(skip)]
    pub iso_level: f32,
}

impl GridOptions {
    /// Grid described by these options.
    #[must_use]
    pub fn grid(&self) -> BlobGrid {
        BlobGrid::cubic(self.cells_per_axis, self.volume_radius)
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            volume_radius: 0.175,
            cells_per_axis: 40,
            iso_level: 0.0,
        }
    }
}
