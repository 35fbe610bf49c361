use newsroom_core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Records per listing page (default: `10`).
    pub page_size: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PAGE_SIZE`            | `10` (1 to 100)            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let page_size = parse_page_size(std::env::var("PAGE_SIZE").ok().as_deref());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            page_size,
        }
    }
}

/// `PAGE_SIZE` as records per page. Panics at startup on values outside
/// `1..=MAX_PAGE_SIZE`.
fn parse_page_size(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE_SIZE;
    };
    let page_size: i64 = raw.trim().parse().expect("PAGE_SIZE must be a valid i64");
    assert!(
        (1..=MAX_PAGE_SIZE).contains(&page_size),
        "PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
    );
    page_size
}
