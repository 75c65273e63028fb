//! Build-time settings, read with `option_env!` so the wasm bundle needs no
//! runtime environment.

use std::time::Duration;

const DEFAULT_PUBLIC_URL: &str = "https://koji.cph";
const DEFAULT_LOAD_DELAY_MS: u64 = 500;
const DEFAULT_PARTNER_CONTACT: &str = "partners@kojicopenhagen.com";
const DEFAULT_SCANNER_SCRIPT: &str = "https://unpkg.com/html5-qrcode@2.3.8/html5-qrcode.min.js";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin printed in batch QR codes and used for share links.
    pub public_url: &'static str,
    /// Simulated lookup latency on the batch page.
    pub load_delay: Duration,
    pub partner_contact: &'static str,
    /// Script that provides the `Html5Qrcode` global.
    pub scanner_script: &'static str,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("KOJI_PUBLIC_URL"),
            option_env!("KOJI_LOAD_DELAY_MS"),
            option_env!("KOJI_PARTNER_CONTACT"),
            option_env!("KOJI_SCANNER_SCRIPT"),
        )
    }

    fn from_values(
        public_url: Option<&'static str>,
        load_delay_ms: Option<&'static str>,
        partner_contact: Option<&'static str>,
        scanner_script: Option<&'static str>,
    ) -> Self {
        let delay_ms = load_delay_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_LOAD_DELAY_MS);
        Self {
            public_url: public_url.unwrap_or(DEFAULT_PUBLIC_URL),
            load_delay: Duration::from_millis(delay_ms),
            partner_contact: partner_contact.unwrap_or(DEFAULT_PARTNER_CONTACT),
            scanner_script: scanner_script.unwrap_or(DEFAULT_SCANNER_SCRIPT),
        }
    }

    pub fn partner_mailto(&self) -> String {
        format!("mailto:{}", self.partner_contact)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.public_url, "https://koji.cph");
        assert_eq!(config.load_delay, Duration::from_millis(500));
        assert_eq!(config.partner_mailto(), "mailto:partners@kojicopenhagen.com");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:8080"), Some(" 0 "), None, None);
        assert_eq!(config.public_url, "http://localhost:8080");
        assert_eq!(config.load_delay, Duration::ZERO);
    }

    #[test]
    fn test_bad_delay_falls_back() {
        let config = AppConfig::from_values(None, Some("soon"), None, None);
        assert_eq!(config.load_delay, Duration::from_millis(DEFAULT_LOAD_DELAY_MS));
    }
}
