use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_STORE_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    /// Capacity of the store actor's request queue.
    pub store_buffer: usize,
    pub seed_sample_data: bool,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            bind,
            store_buffer,
            no_seed,
        } = args;

        let bind_address = match bind {
            Some(addr) => addr,
            None => DEFAULT_BIND
                .parse()
                .context("default bind address is not a socket address")?,
        };

        let store_buffer = store_buffer.unwrap_or(DEFAULT_STORE_BUFFER);
        anyhow::ensure!(store_buffer >= 1, "store buffer must be at least 1");

        Ok(Self {
            bind_address,
            store_buffer,
            seed_sample_data: !no_seed,
        })
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "product-catalog", about = "Product catalog REST service", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "PRODUCT_CATALOG_BIND",
        value_name = "HOST:PORT",
        help = "HTTP bind address (default 127.0.0.1:8080)"
    )]
    pub bind: Option<SocketAddr>,

    #[arg(
        long,
        env = "PRODUCT_CATALOG_STORE_BUFFER",
        value_name = "N",
        help = "Capacity of the store's request queue",
        value_parser = clap::value_parser!(usize)
    )]
    pub store_buffer: Option<usize>,

    #[arg(
        long,
        env = "PRODUCT_CATALOG_NO_SEED",
        help = "Start with an empty catalog instead of the sample products"
    )]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_args(CliArgs::default()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.store_buffer, 32);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from([
            "product-catalog",
            "--bind",
            "0.0.0.0:9000",
            "--store-buffer",
            "8",
            "--no-seed",
        ])
        .unwrap();
        let config = ServerConfig::from_args(args).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.store_buffer, 8);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let args = CliArgs {
            store_buffer: Some(0),
            ..Default::default()
        };
        assert!(ServerConfig::from_args(args).is_err());
    }
}
