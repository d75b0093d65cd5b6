use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub seed_on_start: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let sqlite_path = env::var("SQLITE_PATH").unwrap_or_else(|_| "/tmp/test.db".to_string());
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let seed_on_start = env::var("SEED_ON_START")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            server_port,
            sqlite_path,
            database_url,
            seed_on_start,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return normalize_database_url(url);
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }

    pub fn is_sqlite(&self) -> bool {
        self.database_url().starts_with("sqlite:")
    }
}

/// Hosting platforms hand out `postgres://` URLs; rewrite them to the
/// `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    let url = url.trim();
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
