//! Command-line and environment configuration for the server binary.
//!
//! Every flag has an environment variable fallback:
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--host` | `USER_DIRECTORY_HOST` | `127.0.0.1` |
//! | `--port` | `USER_DIRECTORY_PORT` | `8080` |
//! | `--buffer-size` | `USER_DIRECTORY_BUFFER` | `32` |

use crate::user_actor::DEFAULT_BUFFER_SIZE;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "user-directory", version, about = "In-memory user directory over HTTP")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "USER_DIRECTORY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(short, long, env = "USER_DIRECTORY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Capacity of the user actor's request channel.
    #[arg(
        long,
        env = "USER_DIRECTORY_BUFFER",
        default_value_t = DEFAULT_BUFFER_SIZE,
        value_parser = parse_buffer_size
    )]
    pub buffer_size: usize,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// tokio's mpsc::channel panics on a zero capacity.
fn parse_buffer_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost() {
        let config = Config::try_parse_from(["user-directory"]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "user-directory",
            "--host",
            "0.0.0.0",
            "-p",
            "3000",
            "--buffer-size",
            "4",
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.buffer_size, 4);
    }

    #[test]
    fn zero_buffer_is_rejected() {
        assert!(Config::try_parse_from(["user-directory", "--buffer-size", "0"]).is_err());
        assert!(Config::try_parse_from(["user-directory", "--port", "http"]).is_err());
    }
}
