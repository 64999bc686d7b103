use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub layout: LayoutConfig,
    pub timings: TimingConfig,
    pub meter: MeterConfig,
    pub autosave: AutosaveConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewports at or below this width (logical px) use the slide-in menu
    pub mobile_breakpoint_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub resize_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_exit_ms: u32,
    pub alert_exit_ms: u32,
    pub submit_delay_ms: u32,
    pub chart_period_delay_ms: u32,
    pub download_delay_ms: u32,
    pub welcome_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterConfig {
    pub previous_electricity: f64,
    pub previous_water: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutosaveConfig {
    pub forms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub currency: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[layout]
mobile_breakpoint_px = 768.0

[timings]
resize_debounce_ms = 250
toast_duration_ms = 3000
toast_exit_ms = 300
alert_exit_ms = 300
submit_delay_ms = 1500
chart_period_delay_ms = 500
download_delay_ms = 1000
welcome_delay_ms = 500

[meter]
previous_electricity = 12450.0
previous_water = 1250.0

[autosave]
forms = ["serviceRequestForm", "meterReadingForm"]

[billing]
currency = "OMR"
"#;

impl PortalConfig {
    /// Parse the embedded default configuration
    pub fn load_default() -> anyhow::Result<Self> {
        let config: PortalConfig = toml::from_str(DEFAULT_CONFIG)?;
        Ok(config)
    }

    /// Parse a JSON override document (as kept in browser storage)
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: PortalConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Embedded defaults, or an override when one is given and parses.
    ///
    /// A broken override is logged and dropped.
    pub fn resolve(override_json: Option<&str>) -> anyhow::Result<Self> {
        if let Some(raw) = override_json {
            match Self::from_json(raw) {
                Ok(config) => {
                    log::info!("Using portal config override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid portal config override: {}", e),
            }
        }
        Self::load_default()
    }

    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width <= self.layout.mobile_breakpoint_px
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig {
                mobile_breakpoint_px: 768.0,
            },
            timings: TimingConfig {
                resize_debounce_ms: 250,
                toast_duration_ms: 3000,
                toast_exit_ms: 300,
                alert_exit_ms: 300,
                submit_delay_ms: 1500,
                chart_period_delay_ms: 500,
                download_delay_ms: 1000,
                welcome_delay_ms: 500,
            },
            meter: MeterConfig {
                previous_electricity: 12450.0,
                previous_water: 1250.0,
            },
            autosave: AutosaveConfig {
                forms: vec![
                    "serviceRequestForm".to_string(),
                    "meterReadingForm".to_string(),
                ],
            },
            billing: BillingConfig {
                currency: "OMR".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = PortalConfig::load_default().unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.timings.resize_debounce_ms, 250);
        assert_eq!(config.autosave.forms.len(), 2);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = PortalConfig::resolve(Some("{ not json")).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_valid_override_wins() {
        let mut custom = PortalConfig::default();
        custom.layout.mobile_breakpoint_px = 1024.0;
        let raw = serde_json::to_string(&custom).unwrap();
        let config = PortalConfig::resolve(Some(&raw)).unwrap();
        assert!(config.is_narrow(1000.0));
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let config = PortalConfig::default();
        assert!(config.is_narrow(768.0));
        assert!(!config.is_narrow(768.5));
    }
}
