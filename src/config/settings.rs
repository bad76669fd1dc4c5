use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_host: String,
    pub server_port: u16,
    /// Optional JSON seed replacing the built-in activity list.
    pub activities_file: Option<PathBuf>,
    pub metrics_enabled: bool,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok(); // loads `.env` file automatically

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| "SERVER_PORT must be a valid u16")?,
            None => 8000,
        };

        let activities_file = lookup("ACTIVITIES_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let metrics_enabled = match lookup("METRICS_ENABLED") {
            Some(raw) => parse_flag(&raw).ok_or("METRICS_ENABLED must be true or false")?,
            None => true,
        };

        Ok(Self {
            server_host,
            server_port,
            activities_file,
            metrics_enabled,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
