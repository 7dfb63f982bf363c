//! Enhancer configuration.
//!
//! Defaults match the blog's stylesheet and markup. A page may override any
//! subset of fields with an inline JSON block:
//!
//! ```html
//! <script id="insight-config" type="application/json">
//!   { "search_debounce_ms": 150, "storage_key": "my-dark" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::Deserialize;

use crate::error::EnhanceError;

/// Element id of the optional inline override block.
pub const CONFIG_ELEMENT_ID: &str = "insight-config";

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 350.0;
pub const DEFAULT_TOAST_DISPLAY_MS: u32 = 4000;
pub const DEFAULT_TOAST_EXIT_MS: u32 = 400;
pub const DEFAULT_SUBSCRIBE_DELAY_MS: u32 = 1500;
pub const DEFAULT_STORAGE_KEY: &str = "yhz-dark";
pub const DEFAULT_CATEGORY_PARAM: &str = "category";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub search_debounce_ms: u32,
    pub header_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub subscribe_delay_ms: u32,
    /// `localStorage` key holding `"1"` / `"0"`.
    pub storage_key: String,
    /// Query-string parameter mirroring the tag filter.
    pub category_param: String,
    pub reveal: RevealConfig,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            header_scroll_threshold: DEFAULT_HEADER_SCROLL_THRESHOLD,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            toast_display_ms: DEFAULT_TOAST_DISPLAY_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            subscribe_delay_ms: DEFAULT_SUBSCRIBE_DELAY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            category_param: DEFAULT_CATEGORY_PARAM.to_owned(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Intersection options for the one-shot fade-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.08, root_margin: "0px 0px -40px 0px".to_owned() }
    }
}

impl EnhanceConfig {
    /// Parse an override blob. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_str(raw).map_err(|e| EnhanceError::Config(e.to_string()))?;
        cfg.validated()
    }

    /// Parse an optional override blob, logging and falling back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("ignoring inline config: {err}");
                Self::default()
            }
        }
    }

    fn validated(self) -> Result<Self, EnhanceError> {
        if self.storage_key.trim().is_empty() {
            return Err(EnhanceError::Config("storage_key must not be empty".into()));
        }
        if self.category_param.trim().is_empty() {
            return Err(EnhanceError::Config("category_param must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(EnhanceError::Config(format!(
                "reveal.threshold {} outside 0..=1",
                self.reveal.threshold
            )));
        }
        Ok(self)
    }

    /// Read the inline override block from the live document.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }
}
