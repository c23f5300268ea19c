use std::{net::SocketAddr, time::Duration};

use niftyboard_market_data::NseConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub upstream_url: String,
    pub index: String,
    pub handshake_delay: Duration,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("NB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid NB_LISTEN_ADDR");
        let upstream_url = std::env::var("NB_UPSTREAM_URL")
            .unwrap_or_else(|_| "https://www.nseindia.com".into());
        let index = std::env::var("NB_INDEX").unwrap_or_else(|_| "NIFTY 500".into());
        let handshake_delay_ms: u64 = std::env::var("NB_HANDSHAKE_DELAY_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .unwrap_or(1000);
        let upstream_timeout_ms: u64 = std::env::var("NB_UPSTREAM_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let request_timeout_ms: u64 = std::env::var("NB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "60000".into())
            .parse()
            .unwrap_or(60000);
        let cors_allow = std::env::var("NB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            listen_addr,
            upstream_url,
            index,
            handshake_delay: Duration::from_millis(handshake_delay_ms),
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            cors_allow,
        }
    }

    pub fn feed_config(&self) -> NseConfig {
        NseConfig {
            base_url: self.upstream_url.clone(),
            index: self.index.clone(),
            handshake_delay: self.handshake_delay,
            request_timeout: self.upstream_timeout,
        }
    }
}
