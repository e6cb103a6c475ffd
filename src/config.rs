use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{FaviconError, FaviconResult};

/// Default favicon edge length in pixels.
pub const DEFAULT_SIZE: u32 = 64;
/// Default minimum interval between icon publications.
pub const DEFAULT_UPDATE_INTERVAL_MS: f64 = 90.0;
/// Default id of the icon link element.
pub const DEFAULT_LINK_ID: &str = "dynamic-favicon";
/// Default `rel` of a created icon link.
pub const DEFAULT_LINK_REL: &str = "icon";

/// Animator settings.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconConfig {
    /// Edge length of the square drawing surface in pixels.
    pub size: u32,
    /// Publications are at least this many milliseconds apart.
    pub update_interval_ms: f64,
    /// Element id of the icon link to find or create.
    pub link_id: String,
    /// `rel` attribute used when the link has to be created.
    pub link_rel: String,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            link_id: DEFAULT_LINK_ID.to_owned(),
            link_rel: DEFAULT_LINK_REL.to_owned(),
        }
    }
}

impl FaviconConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> FaviconResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FaviconError::serde(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> FaviconResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            FaviconError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Check invariants the animator relies on.
    pub fn validate(&self) -> FaviconResult<()> {
        Canvas::square(self.size)?;
        if !self.update_interval_ms.is_finite() || self.update_interval_ms < 0.0 {
            return Err(FaviconError::validation(
                "update_interval_ms must be finite and >= 0",
            ));
        }
        if self.link_id.trim().is_empty() {
            return Err(FaviconError::validation("link_id must not be empty"));
        }
        if self.link_rel.trim().is_empty() {
            return Err(FaviconError::validation("link_rel must not be empty"));
        }
        Ok(())
    }

    /// Drawing surface dimensions.
    pub fn canvas(&self) -> FaviconResult<Canvas> {
        Canvas::square(self.size)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
