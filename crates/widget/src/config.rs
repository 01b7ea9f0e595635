use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Base URL used when the embed declaration names none.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Launcher/header accent color. Cosmetic only; forwarded to the sink.
pub const DEFAULT_THEME_COLOR: &str = "#0F172A";

pub const EMBED_DIRECTORY_NAME: &str = "atrium";
pub const EMBED_FILE_NAME: &str = "embed.json";
/// Environment variables like `ATRIUM_PROPERTY_ID` override the file.
pub const EMBED_ENV_PREFIX: &str = "ATRIUM_";

/// Initialization options read once at mount from the hosting embed
/// declaration. Never hot-reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Required. Identifies the property whose concierge answers.
    #[serde(default)]
    pub property_id: String,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            property_id: String::new(),
            theme_color: default_theme_color(),
        }
    }
}

impl EmbedOptions {
    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            ..Self::default()
        }
    }

    pub fn default_embed_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(EMBED_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".atrium"))
    }

    pub fn default_embed_path() -> PathBuf {
        Self::default_embed_dir().join(EMBED_FILE_NAME)
    }

    /// Loads options from the default declaration file and environment.
    pub fn load() -> Self {
        Self::load_from(&Self::default_embed_path())
    }

    /// Loads options by layering: built-in defaults, then the JSON embed
    /// file (when present), then `ATRIUM_*` environment variables.
    /// A malformed declaration degrades to defaults with a warning; the
    /// required-field check happens later at mount.
    pub fn load_from(path: &Path) -> Self {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if path.exists() {
            figment = figment.merge(Json::file(path));
        } else {
            tracing::info!("embed declaration not found at {:?}, using defaults", path);
        }
        figment = figment.merge(Env::prefixed(EMBED_ENV_PREFIX));

        match figment.extract::<Self>() {
            Ok(options) => options.normalized(),
            Err(error) => {
                tracing::warn!(
                    "failed to parse embed declaration from {:?}: {}. using defaults",
                    path,
                    error
                );
                Self::default()
            }
        }
    }

    /// Trims every field and back-fills blanks with the built-in defaults.
    /// The property identifier stays blank when absent; `validate` turns
    /// that into the fatal configuration error.
    pub fn normalized(mut self) -> Self {
        self.api_url = if self.api_url.trim().is_empty() {
            default_api_url()
        } else {
            self.api_url.trim().to_string()
        };
        self.property_id = self.property_id.trim().to_string();
        self.theme_color = if self.theme_color.trim().is_empty() {
            default_theme_color()
        } else {
            self.theme_color.trim().to_string()
        };
        self
    }

    /// A widget without a property identifier must not mount.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.property_id.is_empty() {
            return MissingPropertyIdSnafu {
                stage: "validate-embed-options",
            }
            .fail();
        }
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display(
        "embed declaration is missing the required property identifier; widget will not mount"
    ))]
    MissingPropertyId { stage: &'static str },
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_embed_contract() {
        let options = EmbedOptions::default();
        assert_eq!(options.api_url, "http://localhost:8000");
        assert_eq!(options.theme_color, "#0F172A");
        assert!(options.property_id.is_empty());
    }

    #[test]
    fn missing_property_id_is_a_fatal_configuration_error() {
        let options = EmbedOptions::default();
        assert!(matches!(
            options.validate(),
            Err(ConfigError::MissingPropertyId { .. })
        ));

        let whitespace_only = EmbedOptions::new("   ").normalized();
        assert!(whitespace_only.validate().is_err());

        assert!(EmbedOptions::new("p1").validate().is_ok());
    }

    #[test]
    fn normalization_trims_and_backfills_defaults() {
        let options = EmbedOptions {
            api_url: "  https://concierge.example.com/  ".to_string(),
            property_id: "  p1  ".to_string(),
            theme_color: "   ".to_string(),
        }
        .normalized();

        assert_eq!(options.api_url, "https://concierge.example.com/");
        assert_eq!(options.property_id, "p1");
        assert_eq!(options.theme_color, DEFAULT_THEME_COLOR);
    }

    #[test]
    fn declaration_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EMBED_FILE_NAME);
        std::fs::write(
            &path,
            serde_json::json!({
                "api_url": "https://api.example.com",
                "property_id": "grand-hotel",
            })
            .to_string(),
        )
        .unwrap();

        let options = EmbedOptions::load_from(&path);
        assert_eq!(options.api_url, "https://api.example.com");
        assert_eq!(options.property_id, "grand-hotel");
        assert_eq!(options.theme_color, DEFAULT_THEME_COLOR);
    }

    #[test]
    fn malformed_declaration_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EMBED_FILE_NAME);
        std::fs::write(&path, "{ this is not json").unwrap();

        let options = EmbedOptions::load_from(&path);
        assert_eq!(options, EmbedOptions::default());
    }
}
