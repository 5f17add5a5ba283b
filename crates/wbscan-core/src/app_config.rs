/// Where the relational store lives.
///
/// `Url` comes from `DATABASE_URL`; `Parts` from the individual `DB_*`
/// variables. The password is never printed by the `Debug` impls.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        name: String,
        user: String,
        password: String,
    },
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseConfig::Url(_) => f.debug_tuple("Url").field(&"[redacted]").finish(),
            DatabaseConfig::Parts {
                host,
                port,
                name,
                user,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("name", name)
                .field("user", user)
                .field("password", &"[redacted]")
                .finish(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub catalog_url: String,
    pub search_base_url: String,
    pub site_origin: String,
    pub max_pages: u32,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub scraper_max_attempts: u32,
    pub scraper_retry_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database", &self.database)
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("catalog_url", &self.catalog_url)
            .field("search_base_url", &self.search_base_url)
            .field("site_origin", &self.site_origin)
            .field("max_pages", &self.max_pages)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field("scraper_max_attempts", &self.scraper_max_attempts)
            .field("scraper_retry_delay_ms", &self.scraper_retry_delay_ms)
            .finish()
    }
}
