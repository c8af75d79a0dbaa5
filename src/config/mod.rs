// SPDX-License-Identifier: MPL-2.0
//! This module handles the interaction layer's configuration: every threshold,
//! duration and policy the widgets use, loadable from TOML.
//!
//! Every section and field is optional in the file; missing values fall back
//! to [`defaults`].
//!
//! # Examples
//!
//! ```
//! use site_interactions::config::{self, AdvancePolicy};
//!
//! let config = config::from_toml_str(
//!     r#"
//!     [slider]
//!     interval_ms = 6000
//!     advance = "reset_on_manual"
//!     "#,
//! )
//! .expect("valid toml");
//!
//! assert_eq!(config.slider.interval_ms, 6000);
//! assert_eq!(config.slider.advance, AdvancePolicy::ResetOnManual);
//! assert_eq!(config.scroll_top.visible_after, 500.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{Opacity, VisibilityThreshold};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub scroll_top: ScrollTopConfig,
    pub anchor: AnchorConfig,
    pub header: HeaderConfig,
    pub counter: CounterConfig,
    pub slider: SliderConfig,
    pub indicator: IndicatorConfig,
    pub lazy_images: LazyImageConfig,
    pub notifications: NotificationConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub narrow_viewport_max_width: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            narrow_viewport_max_width: NARROW_VIEWPORT_MAX_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: VisibilityThreshold,
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: VisibilityThreshold::new(REVEAL_THRESHOLD),
            bottom_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    pub visible_after: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self {
            visible_after: SCROLL_TOP_VISIBLE_AFTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub header_gap: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            header_gap: ANCHOR_HEADER_GAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub scrolled_after: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after: HEADER_SCROLLED_AFTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub frame_ms: u64,
    pub threshold: VisibilityThreshold,
}

impl CounterConfig {
    /// Number of nominal frames a ramp is split into, at least one.
    #[must_use]
    pub fn frame_count(&self) -> f64 {
        let frames = self.duration_ms as f64 / self.frame_ms.max(1) as f64;
        frames.max(1.0)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            frame_ms: COUNTER_FRAME_MS,
            threshold: VisibilityThreshold::new(COUNTER_THRESHOLD),
        }
    }
}

/// How the testimonial timer reacts to manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// The timer keeps its fixed schedule; manual and automatic advances
    /// interleave freely.
    #[default]
    Free,
    /// Every manual transition restarts the full interval.
    ResetOnManual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub interval_ms: u64,
    pub advance: AdvancePolicy,
}

impl SliderConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: SLIDER_INTERVAL_MS,
            advance: AdvancePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub hide_after: f64,
    pub visible_opacity: Opacity,
    pub hidden_opacity: Opacity,
    pub target_section: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            hide_after: INDICATOR_HIDE_AFTER,
            visible_opacity: Opacity::new(INDICATOR_VISIBLE_OPACITY),
            hidden_opacity: Opacity::new(INDICATOR_HIDDEN_OPACITY),
            target_section: INDICATOR_TARGET_SECTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub threshold: VisibilityThreshold,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            threshold: VisibilityThreshold::new(LAZY_IMAGE_THRESHOLD),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub display_ms: u64,
    pub exit_ms: u64,
    pub max_visible: usize,
}

impl NotificationConfig {
    #[must_use]
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: NOTIFICATION_DISPLAY_MS,
            exit_ms: NOTIFICATION_EXIT_MS,
            max_visible: NOTIFICATION_MAX_VISIBLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub tick_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tick_ms: PAGE_TICK_MS,
        }
    }
}

/// Parses a configuration from TOML text.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::error::Error::Config) if the text is not
/// valid TOML or a value has the wrong type.
pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads a configuration file, falling back to defaults when it is malformed.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match from_toml_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
            Ok(Config::default())
        }
    }
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
