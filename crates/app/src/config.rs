use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

const EMBEDDED: &str = include_str!("../../../config.toml");

/// Load the client configuration once at startup.
///
/// The file is embedded at build time. `API_BASE_URL` overrides the base
/// URL: the web bundle reads it while compiling, native builds read it
/// (and `.env`) when the process starts.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let (config, parse_error) = AppConfig::parse(EMBEDDED);
        if let Some(e) = parse_error {
            eprintln!("Invalid config.toml, using defaults: {e}");
        }
        config.with_base_url_override(base_url_override().as_deref())
    })
}

/// The loaded configuration, or defaults if [`load`] has not run.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(target_arch = "wasm32")]
fn base_url_override() -> Option<String> {
    option_env!("API_BASE_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_override() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("API_BASE_URL").ok()
}

/// Logger level from `[logging].level`; unknown names fall back to INFO.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}
