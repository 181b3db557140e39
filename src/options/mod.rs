//! Blob scene options with TOML preset support.
//!
//! Grid, sphere, blend and material settings are consolidated here. Options serialize
//! to/from TOML so a tuned scene can be saved as a preset and reloaded.

mod blend;
mod grid;
mod material;
mod spheres;

use std::path::Path;

pub use blend::BlendOptions;
pub use grid::GridOptions;
pub use material::MaterialOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use spheres::SphereOptions;

use crate::error::BlobError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[blend]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Voxel grid resolution and iso level.
    pub grid: GridOptions,
    /// Sphere count, size and motion.
    pub spheres: SphereOptions,
    /// Field blending.
    pub blend: BlendOptions,
    /// Shading of the extracted surface.
    pub material: MaterialOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::Io`] if the file cannot be read and
    /// [`BlobError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, BlobError> {
        let content = std::fs::read_to_string(path).map_err(BlobError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BlobError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::OptionsParse`] on serialization failure and
    /// [`BlobError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), BlobError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BlobError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BlobError::Io)?;
        }
        std::fs::write(path, content).map_err(BlobError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("colorblob-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[blend]
smooth_k = 0.1
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.blend.smooth_k, 0.1);
        // Everything else should be default
        assert_eq!(opts.grid.cells_per_axis, 40);
        assert_eq!(opts.spheres.count, 24);
        assert_eq!(opts.spheres.max_spheres, 64);
        assert_eq!(opts.material, MaterialOptions::default());
    }

    #[test]
    fn material_section_overrides_shading_only() {
        let toml_str = r"
[material]
roughness = 0.2
metallic = 1.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.material.roughness, 0.2);
        assert_eq!(opts.material.metallic, 1.0);
        assert_eq!(opts.material.specular, 0.5);
        assert_eq!(opts.blend, BlendOptions::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[grid\ncells_per_axis = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(BlobError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("absent.toml")),
            Err(BlobError::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn saved_presets_are_listed_and_reload() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.spheres.count = 7;
        opts.save(&dir.join("seven.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), ["default", "seven"]);
        let loaded = Options::load(&dir.join("seven.toml")).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        assert!(Options::list_presets(&scratch_dir("absent")).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("grid"));
        assert!(props.contains_key("spheres"));
        assert!(props.contains_key("blend"));
        assert!(props.contains_key("material"));

        // Exposed fields present, skipped ones absent
        let spheres = &props["spheres"]["properties"];
        assert!(spheres.get("count").is_some());
        assert!(spheres.get("target_radius").is_some());
        assert!(spheres.get("max_spheres").is_none());
        let grid = &props["grid"]["properties"];
        assert!(grid.get("cells_per_axis").is_some());
        assert!(grid.get("volume_radius").is_none());
    }
}
