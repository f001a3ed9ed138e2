use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub bind_addr: String,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // Comma-separated list of frontend origins allowed by CORS
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| Self::default_origins()),
        })
    }

    /// Dev-server origins of the frontend.
    pub fn default_origins() -> Vec<String> {
        vec![
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("ALLOWED_ORIGINS");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.allowed_origins, Config::default_origins());
    }

    #[test]
    #[serial]
    fn test_port_override() {
        clear_env();
        std::env::set_var("PORT", "9090");
        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 9090);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 8000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_allowed_origins_parsed_and_trimmed() {
        clear_env();
        std::env::set_var(
            "ALLOWED_ORIGINS",
            "https://nco.example.com, http://localhost:4000 ,",
        );
        let config = Config::from_env().expect("config");
        assert_eq!(
            config.allowed_origins,
            vec![
                "https://nco.example.com".to_string(),
                "http://localhost:4000".to_string(),
            ]
        );
        clear_env();
    }
}
