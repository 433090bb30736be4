use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Gets the address the development server listens on from the env vars HOST and PORT.
/// Uses defaults `127.0.0.1:3000` for unset variables.
pub fn get_server_addr() -> Result<SocketAddr, ServerAddrError> {
    server_addr(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
}

/// Builds the listen address from optional host and port values.
pub fn server_addr(host: Option<&str>, port: Option<&str>) -> Result<SocketAddr, ServerAddrError> {
    let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.parse::<u16>()?,
        None => DEFAULT_PORT,
    };
    Ok(format!("{}:{}", host, port).parse::<SocketAddr>()?)
}

#[derive(Debug, Error)]
pub enum ServerAddrError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] AddrParseError),
}
