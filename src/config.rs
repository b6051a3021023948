use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::caller::CallerStyle;
use crate::errors::{ConfigError, ConfigResult};
use crate::stack::DEFAULT_SEPARATOR;

/// Environment variable overriding [`RenderConfig::separator`].
pub const SEPARATOR_ENV: &str = "ERRSTACK_SEPARATOR";

/// Environment variable overriding [`RenderConfig::caller_style`].
pub const CALLER_STYLE_ENV: &str = "ERRSTACK_CALLER_STYLE";

/// How annotated errors are rendered for display.
///
/// Every field has a default, so a TOML document only needs the keys it
/// changes:
///
/// ```toml
/// separator = " <- "
/// caller_style = "short"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Placed between trace entries by [`ErrorStack::render`](crate::ErrorStack::render).
    pub separator: String,
    /// Applied to caller names by [`push_caller_with!`](crate::push_caller_with).
    pub caller_style: CallerStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            separator: DEFAULT_SEPARATOR.to_string(),
            caller_style: CallerStyle::Full,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        debug!("Loading render config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)?.with_env_overrides()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(
            std::env::var(SEPARATOR_ENV).ok(),
            std::env::var(CALLER_STYLE_ENV).ok(),
        )
    }

    fn with_overrides(
        mut self,
        separator: Option<String>,
        caller_style: Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(separator) = separator {
            debug!("{} overrides separator", SEPARATOR_ENV);
            self.separator = separator;
        }
        if let Some(value) = caller_style {
            debug!("{} overrides caller style", CALLER_STYLE_ENV);
            self.caller_style = value
                .parse()
                .map_err(|value| ConfigError::InvalidCallerStyle { value })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.separator.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidSeparator {
                separator: self.separator.clone(),
            });
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}
