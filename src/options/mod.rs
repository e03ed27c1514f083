//! Marker and scene options with TOML preset support.
//!
//! Every tunable of the pipeline (distance bands, anchor colors, fade curve,
//! shading variant, mark store sizing) lives here rather than as shader
//! literals. Options serialize to/from TOML presets.

mod marker;
mod scene;

use std::path::Path;

pub use marker::MarkerOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScanmarkError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[marker]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Marker pipeline parameters.
    pub marker: MarkerOptions,
    /// Mark store parameters.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ScanmarkError> {
        let content = std::fs::read_to_string(path).map_err(ScanmarkError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ScanmarkError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ScanmarkError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScanmarkError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ScanmarkError::Io)?;
        }
        std::fs::write(path, content).map_err(ScanmarkError::Io)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
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
    use crate::marker::{RampPolicy, ShadingVariant};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[marker]
far = 450.0
ramp_policy = "banded"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.marker.far, 450.0);
        assert_eq!(opts.marker.ramp_policy, RampPolicy::Banded);
        // Everything else should be default
        assert_eq!(opts.marker.near, 100.0);
        assert_eq!(opts.marker.shading, ShadingVariant::Faded);
        assert_eq!(opts.scene, SceneOptions::default());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().marker.validate().is_ok());
    }

    #[test]
    fn non_increasing_bands_are_rejected() {
        let marker = MarkerOptions {
            mid: 50.0,
            ..MarkerOptions::default()
        };
        let err = marker.validate().unwrap_err();
        assert!(matches!(err, ScanmarkError::InvalidOptions(_)));
    }

    #[test]
    fn fade_strength_out_of_range_is_rejected() {
        let marker = MarkerOptions {
            fade_strength: 1.5,
            ..MarkerOptions::default()
        };
        assert!(marker.validate().is_err());
    }

    #[test]
    fn default_fade_matches_documented_constants() {
        let style = MarkerOptions::default().style();
        assert_eq!(style.fade.rate, 0.02);
        assert_eq!(style.fade.offset, 10.0);
        assert_eq!(style.fade.strength, 0.9);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("scanmark-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.marker.shading = ShadingVariant::Tinted;
        opts.save(&dir.join("tinted.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::load(&dir.join("tinted.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "tinted"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("scanmark-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[marker]\nnear = \"close\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, ScanmarkError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bundled_presets_load_and_validate() {
        let dir =
            Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/presets"));
        let names = Options::list_presets(dir);
        assert!(names.contains(&"default".to_owned()));
        for name in names {
            let opts =
                Options::load(&dir.join(format!("{name}.toml"))).unwrap();
            opts.marker.validate().unwrap();
        }
        let stock = Options::load(&dir.join("default.toml")).unwrap();
        assert_eq!(stock, Options::default());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("marker"));
        assert!(props.contains_key("scene"));

        let marker = &props["marker"]["properties"];
        assert!(marker.get("near").is_some());
        assert!(marker.get("fade_strength").is_some());
        assert!(marker.get("shading").is_some());
        // Colors are not exposed in the UI schema
        assert!(marker.get("near_color").is_none());

        let scene = &props["scene"]["properties"];
        assert!(scene.get("bucket_size").is_some());
        assert!(scene.get("max_visible").is_none());
    }
}
