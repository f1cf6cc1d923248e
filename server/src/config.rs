use std::{env, fmt::Display, fs::read_to_string, str::FromStr, time::Duration};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub sheet_csv_url: String,
    pub menu_revalidate: Duration,
    pub rate_limit_window: Duration,
    pub rate_limit_max: u32,
    pub smtp_host: String,
    pub smtp_user: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub mail_recipients: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "1111"),
            sheet_csv_url: require("SHEET_CSV_URL"),
            menu_revalidate: Duration::from_secs(try_load("MENU_REVALIDATE_SECS", "60")),
            rate_limit_window: Duration::from_secs(try_load("RATE_LIMIT_WINDOW_SECS", "60")),
            rate_limit_max: try_load("RATE_LIMIT_MAX", "5"),
            smtp_host: require("SMTP_HOST"),
            smtp_user: require("SMTP_USER"),
            smtp_password: read_secret("SMTP_PASSWORD"),
            mail_from: require("MAIL_FROM"),
            mail_recipients: require("MAIL_RECIPIENTS"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn require(key: &str) -> String {
    env::var(key)
        .map_err(|_| {
            warn!("Required environment variable {key} not set");
        })
        .expect("Environment misconfigured!")
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .expect("Secrets misconfigured!")
}
