use anyhow::Context;

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub host: String,
    pub port: u16,
}

impl RegistryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("REGISTRY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("REGISTRY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("REGISTRY_PORT must be a valid number")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReportingConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the registry service this façade proxies to.
    pub registry_url: String,
}

impl ReportingConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("REPORTING_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("REPORTING_PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("REPORTING_PORT must be a valid number")?,
            registry_url: std::env::var("REGISTRY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
        })
    }
}
