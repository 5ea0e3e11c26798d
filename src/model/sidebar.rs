//! Sidebar geometry as persisted: CSS-like width strings and the expanded flag

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SidebarLimits, WidthRange};

/// Why a persisted width could not be read as pixels
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    #[error("width is empty")]
    Empty,
    #[error("width {0:?} is not a number")]
    NotANumber(String),
    #[error("width {0} is not finite")]
    NonFinite(f32),
    #[error("width {0} is negative")]
    Negative(f32),
}

/// A width as stored by the layout store, e.g. `"400px"`
///
/// Stored as text because other components persist and exchange it that way.
/// A bare number without the unit is accepted on read; writes always carry `px`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(String);

impl Dimension {
    /// Format a pixel width, rounded to whole pixels
    pub fn px(value: f32) -> Self {
        Dimension(format!("{}px", value.round() as i64))
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Dimension(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse_px(&self) -> Result<f32, DimensionError> {
        let text = self.0.trim();
        if text.is_empty() {
            return Err(DimensionError::Empty);
        }
        let number = text.strip_suffix("px").unwrap_or(text).trim();
        let value: f32 = number
            .parse()
            .map_err(|_| DimensionError::NotANumber(self.0.clone()))?;
        if !value.is_finite() {
            return Err(DimensionError::NonFinite(value));
        }
        if value < 0.0 {
            return Err(DimensionError::Negative(value));
        }
        Ok(value)
    }

    /// Pixels, or `fallback` when the stored text is unreadable
    pub fn resolve(&self, fallback: f32) -> f32 {
        match self.parse_px() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(target: "store", width = %self.0, fallback, "{e}, using fallback");
                fallback
            }
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Panel geometry shared by every component that touches the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    pub left_width: Dimension,
    pub right_width: Dimension,
    #[serde(default)]
    pub right_expanded: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self::from_limits(&SidebarLimits::default())
    }
}

impl SidebarConfig {
    pub fn from_limits(limits: &SidebarLimits) -> Self {
        Self {
            left_width: Dimension::px(limits.left.default),
            right_width: Dimension::px(limits.right.default),
            right_expanded: false,
        }
    }

    pub fn left_px(&self, limits: &SidebarLimits) -> f32 {
        self.left_width.resolve(limits.left.default)
    }

    pub fn right_px(&self, limits: &SidebarLimits) -> f32 {
        self.right_width.resolve(limits.right.default)
    }

    /// Merge a partial update. Returns true if anything changed.
    pub fn apply(&mut self, patch: SidebarPatch) -> bool {
        let before = self.clone();
        if let Some(width) = patch.left_width {
            self.left_width = width;
        }
        if let Some(width) = patch.right_width {
            self.right_width = width;
        }
        if let Some(expanded) = patch.right_expanded {
            self.right_expanded = expanded;
        }
        *self != before
    }
}

/// Partial write to a `SidebarConfig`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarPatch {
    pub left_width: Option<Dimension>,
    pub right_width: Option<Dimension>,
    pub right_expanded: Option<bool>,
}

impl SidebarPatch {
    pub fn left_width(px: f32) -> Self {
        Self {
            left_width: Some(Dimension::px(px)),
            ..Self::default()
        }
    }

    pub fn right_width(px: f32) -> Self {
        Self {
            right_width: Some(Dimension::px(px)),
            ..Self::default()
        }
    }

    pub fn right_expanded(expanded: bool) -> Self {
        Self {
            right_expanded: Some(expanded),
            ..Self::default()
        }
    }
}

/// Width clamping for the two resize edges
///
/// Ranges come from configuration; the controller never hardcodes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampPolicy {
    pub left: WidthRange,
    pub right: WidthRange,
}

impl ClampPolicy {
    pub fn new(limits: &SidebarLimits) -> Self {
        Self {
            left: limits.left,
            right: limits.right,
        }
    }

    pub fn clamp_left_width(&self, px: f32) -> f32 {
        self.left.clamp(px)
    }

    pub fn clamp_right_width(&self, px: f32) -> f32 {
        self.right.clamp(px)
    }
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self::new(&SidebarLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_accepts_unit_and_bare_numbers() {
        assert_eq!(Dimension::raw("400px").parse_px(), Ok(400.0));
        assert_eq!(Dimension::raw(" 312.5px ").parse_px(), Ok(312.5));
        assert_eq!(Dimension::raw("280").parse_px(), Ok(280.0));
    }

    #[test]
    fn test_parse_px_rejects_garbage() {
        assert_eq!(Dimension::raw("").parse_px(), Err(DimensionError::Empty));
        assert!(matches!(
            Dimension::raw("wide").parse_px(),
            Err(DimensionError::NotANumber(_))
        ));
        assert!(matches!(
            Dimension::raw("12em").parse_px(),
            Err(DimensionError::NotANumber(_))
        ));
        assert_eq!(
            Dimension::raw("-20px").parse_px(),
            Err(DimensionError::Negative(-20.0))
        );
        assert!(matches!(
            Dimension::raw("NaNpx").parse_px(),
            Err(DimensionError::NonFinite(_))
        ));
    }

    #[test]
    fn test_malformed_width_falls_back_to_default() {
        let limits = SidebarLimits::default();
        let config = SidebarConfig {
            left_width: Dimension::raw("auto"),
            right_width: Dimension::raw("abcpx"),
            right_expanded: true,
        };
        assert_eq!(config.left_px(&limits), limits.left.default);
        assert_eq!(config.right_px(&limits), limits.right.default);
    }

    #[test]
    fn test_px_rounds_to_whole_pixels() {
        assert_eq!(Dimension::px(233.6).as_str(), "234px");
        assert_eq!(Dimension::px(250.0).as_str(), "250px");
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut config = SidebarConfig::default();
        assert!(!config.apply(SidebarPatch::default()));
        assert!(config.apply(SidebarPatch::right_expanded(true)));
        assert!(!config.apply(SidebarPatch::right_expanded(true)));
        assert!(config.apply(SidebarPatch::left_width(200.0)));
        assert_eq!(config.left_width.as_str(), "200px");
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let config: SidebarConfig = serde_json::from_str(
            r#"{"leftWidth":"300px","rightWidth":"oops","rightExpanded":true}"#,
        )
        .unwrap();
        assert_eq!(config.left_width.as_str(), "300px");
        assert!(config.right_expanded);
        assert_eq!(config.right_px(&SidebarLimits::default()), 400.0);
    }
}
