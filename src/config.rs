//! Handler configuration
//!
//! Defaults match the short URL result page: a `copy-btn` button, a
//! `short-url` element holding the link, and a `toast` element styled
//! with Tailwind translate/opacity utilities.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TRIGGER_ID: &str = "copy-btn";
pub const DEFAULT_SOURCE_ID: &str = "short-url";
pub const DEFAULT_NOTIFICATION_ID: &str = "toast";
pub const DEFAULT_HIDE_AFTER_MS: u32 = 3000;

/// How overlapping hide timers interact
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HidePolicy {
    /// Every successful copy schedules its own hide; the first one to fire wins
    #[default]
    Independent,
    /// A new successful copy restarts the window; only the latest hide applies
    Restart,
}

impl HidePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HidePolicy::Independent => "independent",
            HidePolicy::Restart => "restart",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlerConfig {
    pub trigger_id: String,
    pub source_id: String,
    pub notification_id: String,
    /// Classes present while the toast is off-screen
    pub hidden_classes: Vec<String>,
    /// Classes present while the toast is on-screen
    pub visible_classes: Vec<String>,
    pub hide_after_ms: u32,
    pub hide_policy: HidePolicy,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            source_id: DEFAULT_SOURCE_ID.to_string(),
            notification_id: DEFAULT_NOTIFICATION_ID.to_string(),
            hidden_classes: vec!["translate-y-10".to_string(), "opacity-0".to_string()],
            visible_classes: vec!["translate-y-0".to_string(), "opacity-100".to_string()],
            hide_after_ms: DEFAULT_HIDE_AFTER_MS,
            hide_policy: HidePolicy::default(),
        }
    }
}

impl HandlerConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(u64::from(self.hide_after_ms))
    }
}
