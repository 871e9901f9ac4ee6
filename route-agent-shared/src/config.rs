//! Compiled-in settings and backend endpoint resolution.
//!
//! The backend base is picked from, in order: the `api` query parameter of the page, the page's
//! own origin when it was served over http(s), and finally [`DEFAULT_API_BASE`].

pub const DEFAULT_API_BASE: &str = "http://localhost:8001";
pub const ROUTE_PATH: &str = "/api/route";
pub const HEALTH_PATH: &str = "/health";
pub const API_OVERRIDE_PARAM: &str = "api";

/// How long an error stays on screen before hiding itself.
pub const ERROR_HIDE_MS: u32 = 8000;
/// Delay between rendering results and scrolling them into view.
pub const SCROLL_DELAY_MS: u32 = 100;

pub const SUBMIT_LABEL: &str = "🗺️ Calcular Ruta Óptima";
pub const SUBMIT_LOADING_LABEL: &str = "Calculando...";
pub const MAP_LINK_LABEL: &str = "🗺️ Ver ruta en Google Maps";

/// Snapshot of the bits of `window.location` that matter for endpoint resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, as reported by `location.protocol` (`"https:"`).
    pub protocol: String,
    pub origin: String,
    /// Raw value of the `api` query parameter, if any.
    pub api_override: Option<String>,
}

impl PageLocation {
    fn is_http(&self) -> bool {
        self.protocol.starts_with("http")
    }
}

/// Fully resolved backend URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base: String,
    pub route: String,
    pub health: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().strip_suffix('/').unwrap_or(base.trim()).to_string();
        Endpoints {
            route: format!("{}{}", base, ROUTE_PATH),
            health: format!("{}{}", base, HEALTH_PATH),
            base,
        }
    }

    pub fn resolve(location: &PageLocation) -> Self {
        Self::from_base(&resolve_api_base(location))
    }
}

/// Picks the backend base URL for a page location. No validation of the result is done.
pub fn resolve_api_base(location: &PageLocation) -> String {
    if let Some(api) = location.api_override.as_deref() {
        if !api.trim().is_empty() {
            return api.trim().to_string();
        }
    }

    if location.is_http() && !location.origin.is_empty() {
        location.origin.clone()
    } else {
        DEFAULT_API_BASE.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub error_hide_ms: u32,
    pub scroll_delay_ms: u32,
}

impl AppConfig {
    pub fn new(location: &PageLocation) -> Self {
        AppConfig {
            endpoints: Endpoints::resolve(location),
            error_hide_ms: ERROR_HIDE_MS,
            scroll_delay_ms: SCROLL_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(protocol: &str, origin: &str, api: Option<&str>) -> PageLocation {
        PageLocation {
            protocol: protocol.to_string(),
            origin: origin.to_string(),
            api_override: api.map(str::to_string),
        }
    }

    #[test]
    fn test_override_wins() {
        let loc = location("https:", "https://rutas.example.com", Some("http://10.0.0.5:9000"));
        assert_eq!(resolve_api_base(&loc), "http://10.0.0.5:9000");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let loc = location("https:", "https://rutas.example.com", Some("   "));
        assert_eq!(resolve_api_base(&loc), "https://rutas.example.com");
    }

    #[test]
    fn test_file_protocol_uses_default() {
        let loc = location("file:", "null", None);
        assert_eq!(resolve_api_base(&loc), DEFAULT_API_BASE);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let loc = location("file:", "null", Some("http://localhost:9000/"));
        let endpoints = Endpoints::resolve(&loc);

        assert_eq!(endpoints.base, "http://localhost:9000");
        assert_eq!(endpoints.route, "http://localhost:9000/api/route");
        assert_eq!(endpoints.health, "http://localhost:9000/health");
    }

    #[test]
    fn test_same_origin_endpoint() {
        let config = AppConfig::new(&location("http:", "http://127.0.0.1:8001", None));

        assert_eq!(config.endpoints.route, "http://127.0.0.1:8001/api/route");
        assert_eq!(config.error_hide_ms, 8000);
        assert_eq!(config.scroll_delay_ms, 100);
    }
}
