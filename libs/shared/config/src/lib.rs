use std::env;
use std::net::SocketAddr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Directory holding providers.json / insurance_plans.json / cpt_codes.json.
    /// When unset the built-in sample dataset is served.
    pub data_dir: Option<String>,
    pub match_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_address = env::var("CAREFIND_BIND")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    warn!("CAREFIND_BIND is not a valid socket address, using default");
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let data_dir = env::var("CAREFIND_DATA_DIR").ok().filter(|dir| {
            if dir.is_empty() {
                warn!("CAREFIND_DATA_DIR is empty, using built-in sample data");
                false
            } else {
                true
            }
        });

        let match_limit = env::var("CAREFIND_MATCH_LIMIT")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(limit) => Some(limit),
                Err(_) => {
                    warn!("CAREFIND_MATCH_LIMIT is not a number, using default");
                    None
                }
            })
            .unwrap_or(3);

        Self {
            bind_address,
            data_dir,
            match_limit,
        }
    }

    pub fn uses_sample_data(&self) -> bool {
        self.data_dir.is_none()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            data_dir: None,
            match_limit: 3,
        }
    }
}
