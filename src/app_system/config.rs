use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::Deserialize;
use tracing::{info, warn};
use crate::gesture::SwipeConfig;

pub const SETTINGS_FILE: &str = "shop.toml";
const ENV_PREFIX: &str = "SHOP__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Mailbox size of every store actor.
    pub buffer_size: usize,
    /// Flat shipping fee in whole pesos.
    pub shipping_fee: u64,
    pub estimated_delivery: String,
    pub receipt_redirect_ms: u64,
    pub swipe: SwipeSettings,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            shipping_fee: 300,
            estimated_delivery: "3-5 business days".into(),
            receipt_redirect_ms: 4000,
            swipe: SwipeSettings::default(),
        }
    }
}

impl ShopSettings {
    pub fn receipt_redirect(&self) -> Duration {
        Duration::from_millis(self.receipt_redirect_ms)
    }

    /// Thresholds for cart and wishlist rows.
    pub fn list_row_swipe(&self) -> SwipeConfig {
        self.swipe.apply(SwipeConfig::list_row())
    }

    /// Notification rows keep their stricter capture gate.
    pub fn notification_swipe(&self) -> SwipeConfig {
        let base = SwipeConfig::notification();
        SwipeConfig {
            commit_threshold: self.swipe.commit_threshold,
            dismiss_duration: Duration::from_millis(self.swipe.dismiss_duration_ms),
            ..base
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub commit_threshold: f32,
    pub noise_threshold: f32,
    pub dismiss_duration_ms: u64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        let row = SwipeConfig::list_row();
        Self {
            commit_threshold: row.commit_threshold,
            noise_threshold: row.noise_threshold,
            dismiss_duration_ms: row.dismiss_duration.as_millis() as u64,
        }
    }
}

impl SwipeSettings {
    fn apply(&self, base: SwipeConfig) -> SwipeConfig {
        SwipeConfig {
            commit_threshold: self.commit_threshold,
            noise_threshold: self.noise_threshold,
            dismiss_duration: Duration::from_millis(self.dismiss_duration_ms),
            ..base
        }
    }
}

/// Defaults, then `shop.toml` from the working directory, then `SHOP__*`
/// environment variables.
pub fn load_settings() -> ShopSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> ShopSettings {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<ShopSettings>(&raw) {
            Ok(file_cfg) => {
                info!(path = %path.display(), "Loaded settings file");
                file_cfg
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed settings file; using defaults");
                ShopSettings::default()
            }
        },
        Err(_) => ShopSettings::default(),
    };

    override_from(&env, "BUFFER_SIZE", &mut settings.buffer_size);
    override_from(&env, "SHIPPING_FEE", &mut settings.shipping_fee);
    override_from(&env, "RECEIPT_REDIRECT_MS", &mut settings.receipt_redirect_ms);
    override_from(&env, "SWIPE__COMMIT_THRESHOLD", &mut settings.swipe.commit_threshold);
    override_from(&env, "SWIPE__NOISE_THRESHOLD", &mut settings.swipe.noise_threshold);
    override_from(&env, "SWIPE__DISMISS_DURATION_MS", &mut settings.swipe.dismiss_duration_ms);
    if let Some(v) = env(&format!("{ENV_PREFIX}ESTIMATED_DELIVERY")) {
        settings.estimated_delivery = v;
    }

    if settings.buffer_size == 0 {
        warn!("Buffer size must be positive; using 1");
        settings.buffer_size = 1;
    }
    settings
}

fn override_from<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, name: &str, slot: &mut T) {
    let key = format!("{ENV_PREFIX}{name}");
    if let Some(v) = env(&key) {
        match v.trim().parse() {
            Ok(parsed) => *slot = parsed,
            Err(_) => warn!(key, value = %v, "Ignoring malformed setting"),
        }
    }
}
