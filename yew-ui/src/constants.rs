// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Height of the fixed header; anchor scrolling lands this far below the top.
pub const NAV_OFFSET_PX: f64 = 80.0;
/// Lookahead added to the scroll position when picking the active section.
pub const SCROLL_SPY_OFFSET_PX: f64 = scroll_spy::DEFAULT_OFFSET_PX;
pub const SCROLL_SPY_THROTTLE_MS: u32 = scroll_spy::DEFAULT_THROTTLE_MS;
/// The header switches to its compact look past this offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const CONTACT_RESET_DELAY_MS: u32 = 3_000;

/// Optional overrides read from `window.__APP_CONFIG`. Every key may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(rename = "navOffsetPx")]
    pub nav_offset_px: f64,
    #[serde(rename = "scrollSpyOffsetPx")]
    pub scroll_spy_offset_px: f64,
    #[serde(rename = "scrollSpyThrottleMs")]
    pub scroll_spy_throttle_ms: u32,
    #[serde(rename = "scrolledThresholdPx")]
    pub scrolled_threshold_px: f64,
    #[serde(rename = "contactSubmitDelayMs")]
    pub contact_submit_delay_ms: u32,
    #[serde(rename = "contactResetDelayMs")]
    pub contact_reset_delay_ms: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            nav_offset_px: NAV_OFFSET_PX,
            scroll_spy_offset_px: SCROLL_SPY_OFFSET_PX,
            scroll_spy_throttle_ms: SCROLL_SPY_THROTTLE_MS,
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            contact_submit_delay_ms: CONTACT_SUBMIT_DELAY_MS,
            contact_reset_delay_ms: CONTACT_RESET_DELAY_MS,
        }
    }
}

impl RuntimeConfig {
    pub fn scroll_spy_options(&self) -> scroll_spy::ScrollSpyOptions {
        scroll_spy::ScrollSpyOptions {
            offset: self.scroll_spy_offset_px,
            throttle_ms: self.scroll_spy_throttle_ms,
        }
    }

    fn validate(self) -> Result<Self, String> {
        let offsets = [
            ("navOffsetPx", self.nav_offset_px),
            ("scrollSpyOffsetPx", self.scroll_spy_offset_px),
            ("scrolledThresholdPx", self.scrolled_threshold_px),
        ];
        for (key, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Invalid __APP_CONFIG: {key} must be a non-negative number, got {value}"
                ));
            }
        }
        Ok(self)
    }
}

/// Reads the runtime configuration. A missing `__APP_CONFIG` yields the
/// built-in defaults; a malformed one is an error.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Ok(RuntimeConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
        .and_then(RuntimeConfig::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_layout() {
        let config = RuntimeConfig::default();
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.scroll_spy_offset_px, 100.0);
        assert_eq!(config.scroll_spy_throttle_ms, 100);
        assert_eq!(config.scrolled_threshold_px, 50.0);
        assert_eq!(config.contact_submit_delay_ms, 2000);
        assert_eq!(config.contact_reset_delay_ms, 3000);
    }

    #[test]
    fn negative_offsets_are_rejected() {
        let config = RuntimeConfig {
            nav_offset_px: -1.0,
            ..RuntimeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("navOffsetPx"), "{err}");
    }

    #[test]
    fn scroll_spy_options_follow_config() {
        let config = RuntimeConfig {
            scroll_spy_offset_px: 64.0,
            scroll_spy_throttle_ms: 16,
            ..RuntimeConfig::default()
        };
        let options = config.scroll_spy_options();
        assert_eq!(options.offset, 64.0);
        assert_eq!(options.throttle_ms, 16);
    }
}
