//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a tocsync.toml, and if present we load settings from there.
//! This provides the lifecycle timings, the activation threshold, panel placement and the file
//! extensions scanned for documents.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::lifecycle::{normalize_threshold, Settings};
use facet::Facet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "tocsync.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from tocsync.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 5000)]
    /// How long to wait for headings to appear before giving up, in milliseconds.
    pub ready_timeout_ms: u64,
    #[facet(default = 500)]
    /// Interval of the location poll, in milliseconds.
    pub path_poll_ms: u64,
    #[facet(default = 0.5)]
    /// Visible fraction of a heading at which it becomes the active section.
    pub visibility_threshold: f64,
    #[facet(default = "Contents".to_string())]
    /// Panel title used when the document has no rank 1 heading.
    pub fallback_title: String,
    #[facet(default = "📜".to_string())]
    /// Glyph shown in front of the panel title.
    pub title_glyph: String,
    #[facet(default = 36)]
    /// Panel width in terminal cells.
    pub panel_width: u16,
    #[facet(default = 1)]
    /// Initial distance of the panel from the top edge.
    pub panel_top: u16,
    #[facet(default = 1)]
    /// Initial distance of the panel from the right edge.
    pub panel_right: u16,
    #[facet(default = default_extensions())]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

/// Suffixes of the formats that can be parsed.
fn default_extensions() -> Vec<String> {
    vec![MarkdownFormat.file_extension().to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ready_timeout_ms: 5000,
            path_poll_ms: 500,
            visibility_threshold: 0.5,
            fallback_title: "Contents".to_string(),
            title_glyph: "📜".to_string(),
            panel_width: 36,
            panel_top: 1,
            panel_right: 1,
            file_extensions: default_extensions(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from tocsync.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    #[must_use]
    /// Lifecycle settings derived from this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            ready_timeout: Duration::from_millis(self.ready_timeout_ms),
            path_poll: Duration::from_millis(self.path_poll_ms),
            threshold: normalize_threshold(self.visibility_threshold),
            fallback_title: self.fallback_title.clone(),
            panel_top: f64::from(self.panel_top),
            panel_right: f64::from(self.panel_right),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
