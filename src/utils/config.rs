use std::str::FromStr;

/// Server configuration - immutable after load
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub cors_origin: String,
    pub command_capacity: usize,
    pub log_level: log::LevelFilter,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8181".to_string(),
            cors_origin: "*".to_string(),
            command_capacity: 1024,
            log_level: log::LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `ARENA_*` environment variables.
    /// Unparseable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("ARENA_ADDR").filter(|v| !v.is_empty()) {
            config.addr = addr;
        }
        if let Some(origin) = lookup("ARENA_CORS_ORIGIN").filter(|v| !v.is_empty()) {
            config.cors_origin = origin;
        }
        if let Some(cap) = lookup("ARENA_COMMAND_CAPACITY").and_then(|v| v.parse::<usize>().ok()) {
            if cap > 0 {
                config.command_capacity = cap;
            }
        }
        if let Some(level) = lookup("ARENA_LOG_LEVEL").and_then(|v| log::LevelFilter::from_str(&v).ok()) {
            config.log_level = level;
        }
        if let Some(file) = lookup("ARENA_LOG_FILE").filter(|v| !v.is_empty()) {
            config.log_file = Some(file);
        }

        config
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origin == "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.addr, "0.0.0.0:8181");
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.command_capacity, 1024);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_config_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ARENA_ADDR", "127.0.0.1:9000"),
            ("ARENA_CORS_ORIGIN", "http://localhost:4000"),
            ("ARENA_COMMAND_CAPACITY", "16"),
            ("ARENA_LOG_LEVEL", "debug"),
            ("ARENA_LOG_FILE", "arena.log"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.cors_origin, "http://localhost:4000");
        assert_eq!(config.command_capacity, 16);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
        assert_eq!(config.log_file.as_deref(), Some("arena.log"));
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_config_invalid_values_keep_defaults() {
        let config = Config::from_lookup(|k| match k {
            "ARENA_COMMAND_CAPACITY" => Some("zero".to_string()),
            "ARENA_LOG_LEVEL" => Some("loud".to_string()),
            _ => None,
        });
        assert_eq!(config.command_capacity, 1024);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }
}
