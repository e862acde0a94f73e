//! # Recolor configuration
//!
//! Palettes, the classification table, the variants to build and the layer
//! elision rules, loaded from a RON file. Every field has a default, so an
//! empty `()` file reproduces the built-in behaviour.

use crate::elide::ElisionRule;
use crate::error::{RecolorError, Result};
use crate::rules::RuleTable;
use crate::scheme::{builtin_schemes, ColorScheme, SchemeKind, Thresholds};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

/// One output file of the variant build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTarget {
    /// Name of a scheme in [`RecolorConfig::schemes`].
    pub scheme: String,
    /// File name, relative to the output directory.
    pub file: String,
}

impl VariantTarget {
    pub fn new(scheme: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            file: file.into(),
        }
    }

    /// Rejects file names that would escape the output directory.
    pub(crate) fn check_file(&self) -> Result<()> {
        let path = Path::new(&self.file);
        let contained = !self.file.is_empty()
            && path
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if contained {
            Ok(())
        } else {
            Err(RecolorError::InvalidVariantFile {
                file: self.file.clone(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecolorConfig {
    pub schemes: Vec<ColorScheme>,
    pub rules: RuleTable,
    pub variants: Vec<VariantTarget>,
    pub elide: Vec<ElisionRule>,
    pub thresholds: Thresholds,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            schemes: builtin_schemes(),
            rules: RuleTable::default(),
            variants: vec![
                VariantTarget::new("thriving", "Animation-Thriving.json"),
                VariantTarget::new("moderate", "Animation-Moderate.json"),
                VariantTarget::new("burnout", "Animation-Burnout.json"),
            ],
            elide: ElisionRule::sparkles(),
            thresholds: Thresholds::default(),
        }
    }
}

impl RecolorConfig {
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: RecolorConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| RecolorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Checks what serde cannot: variant scheme names, variant file names
    /// and threshold ordering. Colors are already validated by deserialization.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        for variant in &self.variants {
            self.scheme(&variant.scheme)?;
            variant.check_file()?;
        }
        Ok(())
    }

    /// Case-insensitive lookup by scheme name.
    pub fn scheme(&self, name: &str) -> Result<&ColorScheme> {
        self.schemes
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RecolorError::UnknownScheme {
                name: name.to_string(),
            })
    }

    pub fn scheme_for_burnout(&self, percent: f64) -> Result<&ColorScheme> {
        self.scheme(SchemeKind::from_burnout(percent, &self.thresholds).name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elide::LayerMatch;
    use crate::scheme::Role;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = RecolorConfig::from_ron_str("()").unwrap();
        assert_eq!(config, RecolorConfig::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let config = RecolorConfig::default();
        let text = config.to_ron_string().unwrap();
        assert_eq!(RecolorConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let text = r##"(
            schemes: [
                (
                    name: "ocean",
                    primary: "#0A84FF",
                    secondary: "#64D2FF",
                    accent: "#5E5CE6",
                    gradient1: "#30B0C7",
                ),
            ],
            rules: (
                rules: [ (when: (b: Above(0.5)), role: accent) ],
                fallback: gradient2,
            ),
            variants: [ (scheme: "Ocean", file: "Animation-Ocean.json") ],
            elide: [ (asset_id: "comp_1", drop: AnyOf([Name("Glow"), RefId("comp_4")])) ],
        )"##;
        let config = RecolorConfig::from_ron_str(text).unwrap();

        let ocean = config.scheme("ocean").unwrap();
        assert_eq!(ocean.role(Role::Gradient2).to_hex(), "#30B0C7");
        assert_eq!(config.rules.classify([0.1, 0.1, 0.9]), Role::Accent);
        assert_eq!(config.rules.classify([0.1, 0.1, 0.1]), Role::Gradient2);
        assert_eq!(
            config.elide[0].drop,
            LayerMatch::AnyOf(vec![
                LayerMatch::Name("Glow".to_string()),
                LayerMatch::RefId("comp_4".to_string()),
            ])
        );
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_invalid_hex_in_config_fails() {
        let text = r##"(schemes: [(name: "x", primary: "#GG0000", secondary: "#000000",
            accent: "#000000", gradient1: "#000000")])"##;
        let err = RecolorConfig::from_ron_str(text).unwrap_err();
        assert!(matches!(err, RecolorError::Config(_)));
        assert!(err.to_string().contains("#GG0000"));
    }

    #[test]
    fn test_variant_with_unknown_scheme_fails() {
        let text = r#"(variants: [(scheme: "sepia", file: "a.json")])"#;
        let err = RecolorConfig::from_ron_str(text).unwrap_err();
        assert!(matches!(err, RecolorError::UnknownScheme { ref name } if name == "sepia"));
    }

    #[test]
    fn test_variant_files_stay_inside_out_dir() {
        for file in ["../escape.json", "/tmp/abs.json", "nested/../../up.json", ""] {
            let text = format!(r#"(variants: [(scheme: "thriving", file: {file:?})])"#);
            let err = RecolorConfig::from_ron_str(&text).unwrap_err();
            assert!(
                matches!(err, RecolorError::InvalidVariantFile { file: ref f } if f == file),
                "{file:?} accepted: {err:?}"
            );
        }

        let text = r#"(variants: [(scheme: "thriving", file: "dark/Animation-Thriving.json")])"#;
        assert!(RecolorConfig::from_ron_str(text).is_ok());
    }

    #[test]
    fn test_scheme_for_burnout() {
        let config = RecolorConfig::default();
        assert_eq!(config.scheme_for_burnout(10.0).unwrap().name, "thriving");
        assert_eq!(config.scheme_for_burnout(50.0).unwrap().name, "moderate");
        assert_eq!(config.scheme_for_burnout(90.0).unwrap().name, "burnout");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recolor.ron");
        fs::write(&path, "(thresholds: (moderate: 20.0, burnout: 80.0))").unwrap();

        let config = RecolorConfig::load(&path).unwrap();
        assert_eq!(config.scheme_for_burnout(50.0).unwrap().name, "moderate");
        assert_eq!(config.scheme_for_burnout(19.0).unwrap().name, "thriving");

        let missing = RecolorConfig::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(missing, RecolorError::Io { .. }));
    }
}
