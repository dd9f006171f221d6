use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "VESTIBULE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "VESTIBULE_PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Secret key for session token signing; startup fails when unset
    #[arg(long, env = "VESTIBULE_TOKEN_SECRET")]
    pub token_secret: String,

    /// Session token time-to-live in seconds
    #[arg(long, env = "VESTIBULE_TOKEN_TTL_SECS", default_value_t = 3600)]
    pub token_ttl_secs: u64,

    /// Issuer claim embedded in session tokens
    #[arg(long, env = "VESTIBULE_TOKEN_ISSUER", default_value = "vestibule")]
    pub token_issuer: String,

    /// Mark the session cookie Secure (HTTPS-only deployments)
    #[arg(long, env = "VESTIBULE_COOKIE_SECURE", default_value_t = false)]
    pub cookie_secure: bool,

    /// Minimum accepted password length
    #[arg(long, env = "VESTIBULE_PASSWORD_MIN_LENGTH", default_value_t = 8)]
    pub password_min_length: usize,

    /// Maximum accepted password length
    #[arg(long, env = "VESTIBULE_PASSWORD_MAX_LENGTH", default_value_t = 32)]
    pub password_max_length: usize,

    /// Minimum accepted username length
    #[arg(long, env = "VESTIBULE_USERNAME_MIN_LENGTH", default_value_t = 3)]
    pub username_min_length: usize,

    /// Maximum accepted username length
    #[arg(long, env = "VESTIBULE_USERNAME_MAX_LENGTH", default_value_t = 32)]
    pub username_max_length: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "VESTIBULE_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
