use crate::auth::jwt::JwtConfig;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// HTTP server settings, read once at startup.
///
/// Everything has a local-development default except the JWT secret, which
/// [`JwtConfig::from_env`] insists on. Deployments override via environment:
/// `HOST`, `PORT`, `CORS_ORIGINS` (comma-separated), `REQUEST_TIMEOUT_SECS`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer. Empty entries are dropped.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read settings from the environment, panicking on unparseable values.
    /// Defaults: `0.0.0.0:3000`, a 30s timeout, and the Vite dev origin
    /// `http://localhost:5173`.
    pub fn from_env() -> Self {
        let port = env_or("PORT", "3000")
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
