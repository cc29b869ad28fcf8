use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,

    /// Shared secret expected in the `Authorization: Bearer` header of admin requests.
    pub admin_token: String,

    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let host = match std::env::var("HOST") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value,
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_token: std::env::var("ADMIN_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_TOKEN".to_string()))?,
            host,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
