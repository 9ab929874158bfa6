use std::path::Path;

use crate::{
    animation::{dissolve::DissolvePattern, state::TransitionStyle},
    foundation::error::{ClockError, ClockResult},
    glyph::resolve::HourFormat,
    slot::layout::ScreenProfile,
    theme::ThemeConfig,
};

/// Everything a [`ClockFace`](crate::ClockFace) needs to know up front.
///
/// Every field has a default, so `{}` is a valid configuration:
///
/// ```json
/// {
///   "hour_format": "h12",
///   "transition": "dissolve",
///   "dissolve_pattern": "noise",
///   "theme": "light",
///   "screen": { "color": false }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    /// 24-hour or 12-hour display.
    pub hour_format: HourFormat,
    /// Transition used for clock-driven updates.
    pub transition: TransitionStyle,
    /// Threshold pattern of the dissolve transition.
    pub dissolve_pattern: DissolvePattern,
    /// Preset name or explicit colors.
    pub theme: ThemeConfig,
    /// Screen geometry and panel capabilities.
    pub screen: ScreenProfile,
}

impl FaceConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ClockResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ClockError::config(format!("invalid face config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ClockResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClockError::config(format!("read face config '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Check the screen layout.
    pub fn validate(&self) -> ClockResult<()> {
        self.screen.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/face_config.rs"]
mod tests;
