//! Build-time API configuration with an optional runtime override.
//!
//! The base URL comes from `PORTAL_API_BASE_URL` at compile time and can be
//! replaced without rebuilding by defining `window.PORTAL_CONFIG.api_base_url`
//! before the bundle loads. Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base path used when nothing is configured. The backend mounts every
/// controller under `/api`.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Frontend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(value) = option_env!("PORTAL_API_BASE_URL").and_then(normalize_value) {
            config.api_base_url = value;
        }
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let api_base_url = Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
        .as_deref()
        .and_then(normalize_value);

    Some(RuntimeConfig { api_base_url })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
