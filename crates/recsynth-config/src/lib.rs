//! Synthesis configuration: method naming and which method families are
//! generated. Loaded from TOML; every key is optional.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::path::Path;

///
/// SynthConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    pub naming: NamingConfig,
    pub methods: MethodToggles,
}

impl SynthConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        toml::from_str(src).map_err(ConfigError::from)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&src)
    }
}

///
/// NamingConfig
///
/// Output names for synthesized methods plus the reserved-word handling
/// applied to field and parameter identifiers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Component accessors are named `<prefix><ordinal + 1>`.
    pub component_prefix: String,
    pub copy: String,
    pub to_string: String,
    pub hash_code: String,
    pub equals: String,

    /// Appended (repeatedly) to identifiers that collide with a reserved
    /// word or an identifier already taken.
    pub mangle_suffix: String,

    /// Extra reserved words on top of the built-in list.
    pub reserved: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            component_prefix: "component".to_string(),
            copy: "copy".to_string(),
            to_string: "toString".to_string(),
            hash_code: "hashCode".to_string(),
            equals: "equals".to_string(),
            mangle_suffix: "$".to_string(),
            reserved: Vec::new(),
        }
    }
}

///
/// MethodToggles
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
#[expect(clippy::struct_excessive_bools)]
pub struct MethodToggles {
    pub component: bool,
    pub copy: bool,
    pub to_string: bool,
    pub hash_code: bool,
    pub equals: bool,
}

impl Default for MethodToggles {
    fn default() -> Self {
        Self {
            component: true,
            copy: true,
            to_string: true,
            hash_code: true,
            equals: true,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config = SynthConfig::from_toml_str("").unwrap();

        assert_eq!(config, SynthConfig::default());
        assert_eq!(config.naming.hash_code, "hashCode");
        assert!(config.methods.equals);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = SynthConfig::from_toml_str(
            r#"
            [naming]
            to_string = "describe"
            reserved = ["value"]

            [methods]
            copy = false
            "#,
        )
        .unwrap();

        assert_eq!(config.naming.to_string, "describe");
        assert_eq!(config.naming.equals, "equals");
        assert_eq!(config.naming.reserved, vec!["value".to_string()]);
        assert!(!config.methods.copy);
        assert!(config.methods.component);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SynthConfig::from_toml_str("[methods]\nclone = true\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SynthConfig::load("/nonexistent/recsynth.toml").unwrap_err();

        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("/nonexistent/recsynth.toml"));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
