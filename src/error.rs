//! Error types for page enhancement.
//!
//! DESIGN
//! ======
//! Every feature degrades on its own: initializers return these errors to the
//! enhancer, which logs them and moves on to the next feature. Nothing here is
//! ever surfaced to the reader of the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while wiring or running a page feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnhanceError {
    /// An optional markup collaborator is absent; the feature is skipped.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// Durable storage is unavailable, denied, or over quota.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The inline config blob could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The runtime lacks a browser capability the feature needs.
    #[error("unsupported capability: {0}")]
    Unsupported(&'static str),

    /// A DOM call returned an exception.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl EnhanceError {
    /// Expected absences are routine on pages that omit a widget.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::Unsupported(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
