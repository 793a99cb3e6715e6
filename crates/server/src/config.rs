use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub region: String,
    pub table_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:5000".into(),
            region: "ap-northeast-1".into(),
            table_name: "messages".into(),
        }
    }
}

/// Defaults, then an optional flat `server.toml`, then environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("region") {
                settings.region = v.clone();
            }
            if let Some(v) = file_cfg.get("table_name") {
                settings.table_name = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("AWS_DEFAULT_REGION") {
        settings.region = v;
    }
    if let Ok(v) = std::env::var("APP__REGION") {
        settings.region = v;
    }

    if let Ok(v) = std::env::var("DYNAMODB_TABLE_NAME") {
        settings.table_name = v;
    }
    if let Ok(v) = std::env::var("APP__TABLE_NAME") {
        settings.table_name = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_managed_table_setup() {
        let settings = Settings::default();
        assert_eq!(settings.server_bind, "0.0.0.0:5000");
        assert_eq!(settings.region, "ap-northeast-1");
        assert_eq!(settings.table_name, "messages");
    }

    #[test]
    fn env_vars_override_defaults() {
        std::env::set_var("APP__REGION", "eu-west-1");
        std::env::set_var("APP__TABLE_NAME", "guestbook-test");

        let settings = load_settings();
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.table_name, "guestbook-test");

        std::env::remove_var("APP__REGION");
        std::env::remove_var("APP__TABLE_NAME");
    }
}
