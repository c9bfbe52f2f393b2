//! Backend endpoint configuration.

/// Where the journaling backend lives.
///
/// The default is platform-aware: in the browser the app talks to the origin
/// it was served from, on native targets `DAYBOOK_API_URL` wins over the
/// localhost fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    std::env::var("DAYBOOK_API_URL").unwrap_or_else(|_| FALLBACK_URL.to_string())
}

const FALLBACK_URL: &str = "http://localhost:8080";
