use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUOTE_API_BASE: &str = "https://veff-2026-quotes.netlify.app/api/v1";
pub const DEFAULT_LOCAL_API_BASE: &str = "http://localhost:3000/api/v1";

/// 設定読み込み時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub environment: String,
    pub quote_api_base: String,
    pub local_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            environment: "dev".to_string(),
            quote_api_base: DEFAULT_QUOTE_API_BASE.to_string(),
            local_api_base: DEFAULT_LOCAL_API_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てます（テストでは環境変数の代わりに使用）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: raw,
            })?,
            None => defaults.bind_addr,
        };

        Ok(Config {
            port,
            bind_addr,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            quote_api_base: lookup("QUOTE_API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.quote_api_base),
            local_api_base: lookup("LOCAL_API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.local_api_base),
        })
    }

    /// テスト環境ではサーバを自動起動しない
    pub fn is_test(&self) -> bool {
        self.environment.eq_ignore_ascii_case("test")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
