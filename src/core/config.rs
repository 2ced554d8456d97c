use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::core::console;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// Global object the hosting page may define before the wasm bundle loads:
// window.__AGENT_ORCHESTRA_CONFIG__ = { apiBaseUrl: "...", debug: true }
const CONFIG_GLOBAL: &str = "__AGENT_ORCHESTRA_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Reads the page-provided config object, falling back to defaults when it
    /// is missing or malformed.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => {
                match serde_wasm_bindgen::from_value::<AppConfig>(value) {
                    Ok(config) => config.normalized(),
                    Err(e) => {
                        console::warn(&format!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e));
                        Self::default()
                    }
                }
            }
            _ => Self::default(),
        }
    }

    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}
