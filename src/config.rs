use std::env;

use crate::passcode::DEFAULT_TIME_COST;

#[derive(Clone, Debug)]
pub struct Config {
    pub store_backend: String,
    pub database_url: Option<String>,
    pub store_path: String,
    pub server_host: String,
    pub server_port: u16,
    pub passcode_time_cost: u32,
    pub claim_rate_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let store_backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".to_string());
        // The postgres backend cannot start without a connection string;
        // the file and memory backends ignore it.
        let database_url = if store_backend == "postgres" {
            Some(env::var("DATABASE_URL")?)
        } else {
            env::var("DATABASE_URL").ok()
        };

        Ok(Config {
            store_backend,
            database_url,
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "shares.json".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "50051".to_string())
                .parse()
                .unwrap_or(50051),
            passcode_time_cost: env::var("PASSCODE_TIME_COST")
                .unwrap_or_else(|_| DEFAULT_TIME_COST.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIME_COST),
            claim_rate_per_minute: env::var("CLAIM_RATE_PER_MINUTE")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
